use crate::{AiTracker, Ball, Config, Paddle, PointerControlled};
use hecs::World;

/// Center pointer-controlled paddles on the sampled pointer position
pub fn place_pointer_paddles(world: &mut World, pointer_y: f32, config: &Config) {
    for (_entity, (paddle, _)) in world.query_mut::<(&mut Paddle, &PointerControlled)>() {
        paddle.y = config.clamp_paddle_y(pointer_y - config.paddle_height / 2.0);
    }
}

/// Step AI paddles toward the ball's current height
pub fn drive_ai_paddles(world: &mut World, config: &Config) {
    let ball_y = {
        let mut ball_query = world.query::<&Ball>();
        match ball_query.iter().next() {
            Some((_e, ball)) => ball.pos.y,
            None => return,
        }
    };

    for (_entity, (paddle, tracker)) in world.query_mut::<(&mut Paddle, &AiTracker)>() {
        let center = paddle.y + config.paddle_height / 2.0;
        paddle.y = config.clamp_paddle_y(paddle.y + tracker.displacement(center, ball_y));
    }
}

/// Advance the ball by one frame's displacement
pub fn move_ball(world: &mut World) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        ball.pos += ball.vel;
    }
}
