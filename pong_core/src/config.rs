use crate::components::Side;
use crate::params::Params;

/// What a boundary exit does beyond resetting the ball
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScoringMode {
    /// Increment the scoring side's counter
    #[default]
    Tally,
    /// Only reset the ball (decorative instances)
    ResetOnly,
}

/// Per-instance simulation configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub playfield_width: f32,
    pub playfield_height: f32,
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub paddle_inset: f32,
    pub ai_speed: f32,
    pub dead_zone: f32,
    pub ball_radius: f32,
    pub ball_speed: f32,
    pub serve_spread: f32,
    pub initial_dy: f32,
    pub deflection: f32,
    pub scoring: ScoringMode,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            playfield_width: Params::PLAYFIELD_WIDTH,
            playfield_height: Params::PLAYFIELD_HEIGHT,
            paddle_width: Params::PADDLE_WIDTH,
            paddle_height: Params::PADDLE_HEIGHT,
            paddle_inset: Params::PADDLE_INSET,
            ai_speed: Params::AI_SPEED,
            dead_zone: Params::AI_DEAD_ZONE,
            ball_radius: Params::BALL_RADIUS,
            ball_speed: Params::BALL_SPEED,
            serve_spread: Params::BALL_SERVE_SPREAD,
            initial_dy: Params::BALL_INITIAL_DY,
            deflection: Params::DEFLECTION,
            scoring: ScoringMode::Tally,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Default tuning on a playfield of the given logical size
    pub fn with_playfield(width: f32, height: f32) -> Self {
        Self {
            playfield_width: width,
            playfield_height: height,
            ..Self::default()
        }
    }

    pub fn with_scoring(mut self, scoring: ScoringMode) -> Self {
        self.scoring = scoring;
        self
    }

    /// Left edge of the paddle on the given side
    pub fn paddle_x(&self, side: Side) -> f32 {
        match side {
            Side::Player => self.paddle_inset,
            Side::Ai => self.playfield_width - self.paddle_inset - self.paddle_width,
        }
    }

    /// Clamp a paddle's top edge to `[0, height - paddle_height]`
    pub fn clamp_paddle_y(&self, y: f32) -> f32 {
        let max = (self.playfield_height - self.paddle_height).max(0.0);
        y.clamp(0.0, max)
    }

    /// Paddle top edge that centers it vertically
    pub fn paddle_spawn_y(&self) -> f32 {
        self.clamp_paddle_y(self.playfield_height / 2.0 - self.paddle_height / 2.0)
    }

    pub fn center(&self) -> glam::Vec2 {
        glam::Vec2::new(self.playfield_width / 2.0, self.playfield_height / 2.0)
    }
}
