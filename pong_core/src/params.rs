/// Tuning constants for the paddle simulation
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Playfield
    pub const PLAYFIELD_WIDTH: f32 = 800.0;
    pub const PLAYFIELD_HEIGHT: f32 = 400.0;

    // Paddle
    pub const PADDLE_WIDTH: f32 = 12.0;
    pub const PADDLE_HEIGHT: f32 = 80.0;
    pub const PADDLE_INSET: f32 = 20.0; // gap between wall and paddle

    // AI
    pub const AI_SPEED: f32 = 3.0; // units per frame
    pub const AI_DEAD_ZONE: f32 = 10.0;

    // Ball
    pub const BALL_RADIUS: f32 = 8.0;
    pub const BALL_SPEED: f32 = 5.0; // horizontal units per frame on serve
    pub const BALL_SERVE_SPREAD: f32 = 3.0; // serve dy in [-spread, spread]
    pub const BALL_INITIAL_DY: f32 = 3.0; // first rally only
    pub const DEFLECTION: f32 = 8.0; // dy = (hit - 0.5) * DEFLECTION
}
