use glam::Vec2;

use crate::config::Config;

/// Which side of the playfield a paddle defends
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Side {
    Player, // left
    Ai,     // right
}

/// Paddle component
#[derive(Debug, Clone, Copy)]
pub struct Paddle {
    pub side: Side,
    pub y: f32, // top edge, clamped to the playfield
}

impl Paddle {
    pub fn new(side: Side, y: f32) -> Self {
        Self { side, y }
    }
}

/// Marks a paddle driven by the sampled pointer
#[derive(Debug, Clone, Copy, Default)]
pub struct PointerControlled;

/// Fixed-lag tracking law for an autonomous paddle
#[derive(Debug, Clone, Copy)]
pub struct AiTracker {
    pub speed: f32,
    pub dead_zone: f32,
}

impl AiTracker {
    pub fn new(speed: f32, dead_zone: f32) -> Self {
        Self { speed, dead_zone }
    }

    /// Vertical displacement for a paddle whose center is at `paddle_center`
    pub fn displacement(&self, paddle_center: f32, ball_y: f32) -> f32 {
        if paddle_center < ball_y - self.dead_zone {
            self.speed
        } else if paddle_center > ball_y + self.dead_zone {
            -self.speed
        } else {
            0.0
        }
    }
}

/// Ball component; velocity is displacement per frame
#[derive(Debug, Clone, Copy)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
}

impl Ball {
    pub fn new(pos: Vec2, vel: Vec2) -> Self {
        Self { pos, vel }
    }

    /// Serve from the playfield center in a random direction
    pub fn reset(&mut self, config: &Config, rng: &mut crate::GameRng) {
        use rand::Rng;

        self.pos = config.center();

        let dx = if rng.0.gen_bool(0.5) {
            config.ball_speed
        } else {
            -config.ball_speed
        };
        let dy = (rng.0.gen::<f32>() - 0.5) * 2.0 * config.serve_spread;

        self.vel = Vec2::new(dx, dy);
    }
}
