use crate::{Ball, Config, Events, Paddle, Side};
use hecs::World;

/// Reflect the ball off the top and bottom walls
pub fn reflect_off_walls(world: &mut World, config: &Config, events: &mut Events) {
    let radius = config.ball_radius;
    let height = config.playfield_height;

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        if ball.pos.y <= radius || ball.pos.y >= height - radius {
            // Position is left alone; the ball may overlap the wall for a frame
            ball.vel.y = -ball.vel.y;
            events.ball_hit_wall = true;
        }
    }
}

/// Vertical contact point on a paddle: 0 at the top edge, 1 at the bottom
pub fn hit_fraction(ball_y: f32, paddle_y: f32, paddle_height: f32) -> f32 {
    (ball_y - paddle_y) / paddle_height
}

/// Check the ball against both paddles, player side first
pub fn check_paddle_collisions(world: &mut World, config: &Config, events: &mut Events) {
    let mut paddles: Vec<(Side, f32)> = world
        .query::<&Paddle>()
        .iter()
        .map(|(_e, p)| (p.side, p.y))
        .collect();
    paddles.sort_by_key(|(side, _)| *side);

    let radius = config.ball_radius;

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        for &(side, paddle_y) in &paddles {
            let left = config.paddle_x(side);
            let right = left + config.paddle_width;
            let bottom = paddle_y + config.paddle_height;

            let overlaps_x = ball.pos.x - radius <= right && ball.pos.x + radius >= left;
            let overlaps_y = ball.pos.y >= paddle_y && ball.pos.y <= bottom;
            // Only a ball moving toward the paddle can bounce off it
            let approaching = match side {
                Side::Player => ball.vel.x < 0.0,
                Side::Ai => ball.vel.x > 0.0,
            };

            if overlaps_x && overlaps_y && approaching {
                let hit = hit_fraction(ball.pos.y, paddle_y, config.paddle_height);
                ball.vel.x = -ball.vel.x;
                ball.vel.y = (hit - 0.5) * config.deflection;
                events.ball_hit_paddle = true;
            }
        }
    }
}
