pub mod components;
pub mod config;
pub mod driver;
pub mod input;
pub mod params;
pub mod render;
pub mod resources;
pub mod simulation;
pub mod systems;

pub use components::*;
pub use config::*;
pub use driver::*;
pub use input::*;
pub use params::*;
pub use render::*;
pub use resources::*;
pub use simulation::*;

use hecs::World;
use systems::*;

/// Advance the paddle simulation by one frame
///
/// Stages run in a fixed order; each relies on the one before it.
/// Scoring policy is not applied here, see [`Score::apply`].
pub fn step(
    world: &mut World,
    config: &Config,
    pointer_y: f32,
    events: &mut Events,
    rng: &mut GameRng,
) {
    // Clear events at start of frame
    events.clear();

    // 1. Player paddle follows the pointer
    place_pointer_paddles(world, pointer_y, config);

    // 2. AI paddle tracks the ball
    drive_ai_paddles(world, config);

    // 3. Euler step, no sub-stepping
    move_ball(world);

    // 4. Top and bottom walls
    reflect_off_walls(world, config, events);

    // 5-6. Player paddle, then AI paddle
    check_paddle_collisions(world, config, events);

    // 7-8. Boundary exit and serve
    check_boundary_exit(world, config, events, rng);
}

/// Spawn the pointer-driven paddle on the left
pub fn create_player_paddle(world: &mut World, config: &Config) -> hecs::Entity {
    world.spawn((
        Paddle::new(Side::Player, config.paddle_spawn_y()),
        PointerControlled,
    ))
}

/// Spawn the autonomous paddle on the right
pub fn create_ai_paddle(world: &mut World, config: &Config) -> hecs::Entity {
    world.spawn((
        Paddle::new(Side::Ai, config.paddle_spawn_y()),
        AiTracker::new(config.ai_speed, config.dead_zone),
    ))
}

/// Spawn the ball
pub fn create_ball(world: &mut World, pos: glam::Vec2, vel: glam::Vec2) -> hecs::Entity {
    world.spawn((Ball::new(pos, vel),))
}
