//! Backend-agnostic frame drawing
//!
//! [`render`] turns a [`Snapshot`] into a short list of 2D drawing calls on a
//! [`Canvas`]. It only reads the snapshot.

use glam::Vec2;

use crate::simulation::{Rect, Snapshot};

/// Minimal 2D raster surface
pub trait Canvas {
    fn fill_rect(&mut self, rect: Rect, color: &str) -> Result<(), String>;

    /// Stroke a line with an on/off dash pattern
    fn dashed_line(
        &mut self,
        from: Vec2,
        to: Vec2,
        dash: [f32; 2],
        width: f32,
        color: &str,
    ) -> Result<(), String>;

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: &str) -> Result<(), String>;
}

/// Colors and centerline styling
#[derive(Debug, Clone)]
pub struct Palette {
    pub background: String,
    pub centerline: String,
    pub foreground: String,
    pub dash: [f32; 2],
    pub line_width: f32,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: "#000".to_string(),
            centerline: "#333".to_string(),
            foreground: "#fff".to_string(),
            dash: [10.0, 5.0],
            line_width: 2.0,
        }
    }
}

/// Draw one frame: clear, centerline, paddles, ball
pub fn render<C: Canvas + ?Sized>(
    snapshot: &Snapshot,
    palette: &Palette,
    canvas: &mut C,
) -> Result<(), String> {
    canvas.fill_rect(
        Rect {
            x: 0.0,
            y: 0.0,
            width: snapshot.width,
            height: snapshot.height,
        },
        &palette.background,
    )?;

    let mid = snapshot.width / 2.0;
    canvas.dashed_line(
        Vec2::new(mid, 0.0),
        Vec2::new(mid, snapshot.height),
        palette.dash,
        palette.line_width,
        &palette.centerline,
    )?;

    canvas.fill_rect(snapshot.player_paddle, &palette.foreground)?;
    canvas.fill_rect(snapshot.ai_paddle, &palette.foreground)?;

    canvas.fill_circle(snapshot.ball_pos, snapshot.ball_radius, &palette.foreground)
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::{Config, Simulation};

    #[derive(Debug, Clone, PartialEq)]
    pub enum DrawCall {
        Rect(Rect, String),
        Line(Vec2, Vec2, [f32; 2]),
        Circle(Vec2, f32, String),
    }

    /// Canvas double that records calls and can be told to fail
    #[derive(Default)]
    pub struct RecordingCanvas {
        pub calls: Vec<DrawCall>,
        pub fail: bool,
    }

    impl Canvas for RecordingCanvas {
        fn fill_rect(&mut self, rect: Rect, color: &str) -> Result<(), String> {
            if self.fail {
                return Err("surface lost".to_string());
            }
            self.calls.push(DrawCall::Rect(rect, color.to_string()));
            Ok(())
        }

        fn dashed_line(
            &mut self,
            from: Vec2,
            to: Vec2,
            dash: [f32; 2],
            _width: f32,
            _color: &str,
        ) -> Result<(), String> {
            self.calls.push(DrawCall::Line(from, to, dash));
            Ok(())
        }

        fn fill_circle(&mut self, center: Vec2, radius: f32, color: &str) -> Result<(), String> {
            self.calls.push(DrawCall::Circle(center, radius, color.to_string()));
            Ok(())
        }
    }

    #[test]
    fn test_render_draw_order() {
        let sim = Simulation::with_seed(Config::new(), 1);
        let mut canvas = RecordingCanvas::default();

        render(&sim.snapshot(), &Palette::default(), &mut canvas).unwrap();

        assert_eq!(canvas.calls.len(), 5);
        assert_eq!(
            canvas.calls[0],
            DrawCall::Rect(
                Rect {
                    x: 0.0,
                    y: 0.0,
                    width: 800.0,
                    height: 400.0
                },
                "#000".to_string()
            )
        );
        assert_eq!(
            canvas.calls[1],
            DrawCall::Line(Vec2::new(400.0, 0.0), Vec2::new(400.0, 400.0), [10.0, 5.0])
        );
        assert!(matches!(&canvas.calls[2], DrawCall::Rect(r, _) if r.x == 20.0));
        assert!(matches!(&canvas.calls[3], DrawCall::Rect(r, _) if r.x == 768.0));
        assert_eq!(
            canvas.calls[4],
            DrawCall::Circle(Vec2::new(400.0, 200.0), 8.0, "#fff".to_string())
        );
    }

    #[test]
    fn test_render_does_not_touch_state() {
        let mut sim = Simulation::with_seed(Config::new(), 1);
        sim.step();
        let before = sim.snapshot();
        let mut canvas = RecordingCanvas::default();

        render(&before, &Palette::default(), &mut canvas).unwrap();
        render(&before, &Palette::default(), &mut canvas).unwrap();

        assert_eq!(sim.snapshot(), before);
        assert_eq!(sim.frame(), 1);
    }

    #[test]
    fn test_render_stops_on_canvas_error() {
        let sim = Simulation::with_seed(Config::new(), 1);
        let mut canvas = RecordingCanvas {
            fail: true,
            ..Default::default()
        };

        let result = render(&sim.snapshot(), &Palette::default(), &mut canvas);

        assert_eq!(result, Err("surface lost".to_string()));
        assert!(canvas.calls.is_empty());
    }
}
