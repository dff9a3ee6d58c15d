//! Pointer sampling
//!
//! Host input handlers write the latest vertical pointer position into a
//! [`Pointer`]; the simulation reads it once per frame.

use std::cell::Cell;
use std::rc::Rc;

/// On-screen placement of the drawing surface, in client coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceBounds {
    pub top: f32,
    pub rendered_height: f32,
}

impl SurfaceBounds {
    pub fn new(top: f32, rendered_height: f32) -> Self {
        Self {
            top,
            rendered_height,
        }
    }
}

/// Map a client-space y coordinate into playfield space, clamped to `[0, playfield_height]`
pub fn to_playfield_y(client_y: f32, bounds: SurfaceBounds, playfield_height: f32) -> f32 {
    let offset = client_y - bounds.top;
    let y = if bounds.rendered_height > 0.0 {
        offset / bounds.rendered_height * playfield_height
    } else {
        offset
    };
    y.clamp(0.0, playfield_height.max(0.0))
}

/// Shared last-known pointer position; most recent write wins
#[derive(Debug, Clone)]
pub struct Pointer(Rc<Cell<f32>>);

impl Pointer {
    pub fn new(y: f32) -> Self {
        Self(Rc::new(Cell::new(y)))
    }

    pub fn y(&self) -> f32 {
        self.0.get()
    }

    pub fn set(&self, y: f32) {
        self.0.set(y);
    }

    /// Record a pointer or touch move event. Non-finite coordinates are ignored.
    pub fn sample(&self, client_y: f32, bounds: SurfaceBounds, playfield_height: f32) {
        if !client_y.is_finite() || !bounds.top.is_finite() || !bounds.rendered_height.is_finite()
        {
            return;
        }
        self.set(to_playfield_y(client_y, bounds, playfield_height));
    }
}
