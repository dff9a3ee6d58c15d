use crate::{Ball, Config, Events, GameRng};
use hecs::World;

/// Detect the ball leaving through a vertical boundary and serve again
pub fn check_boundary_exit(world: &mut World, config: &Config, events: &mut Events, rng: &mut GameRng) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        if ball.pos.x < 0.0 {
            events.ai_scored = true;
            ball.reset(config, rng);
        } else if ball.pos.x > config.playfield_width {
            events.player_scored = true;
            ball.reset(config, rng);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{create_ball, Ball, Config, Events, GameRng};
    use glam::Vec2;

    fn setup_world() -> (World, Config, Events, GameRng) {
        let world = World::new();
        let config = Config::new();
        let events = Events::new();
        let rng = GameRng::new(12345); // Fixed seed for deterministic tests
        (world, config, events, rng)
    }

    #[test]
    fn test_ai_scores_when_ball_exits_left() {
        let (mut world, config, mut events, mut rng) = setup_world();
        create_ball(&mut world, Vec2::new(-0.1, 200.0), Vec2::new(-5.0, 0.0));

        check_boundary_exit(&mut world, &config, &mut events, &mut rng);

        assert!(events.ai_scored, "Should trigger ai_scored event");
        assert!(!events.player_scored);
    }

    #[test]
    fn test_player_scores_when_ball_exits_right() {
        let (mut world, config, mut events, mut rng) = setup_world();
        create_ball(&mut world, Vec2::new(800.1, 200.0), Vec2::new(5.0, 0.0));

        check_boundary_exit(&mut world, &config, &mut events, &mut rng);

        assert!(events.player_scored, "Should trigger player_scored event");
        assert!(!events.ai_scored);
    }

    #[test]
    fn test_ball_resets_after_exit() {
        let (mut world, config, mut events, mut rng) = setup_world();
        let entity = create_ball(&mut world, Vec2::new(-2.0, 37.0), Vec2::new(-5.0, -1.0));

        check_boundary_exit(&mut world, &config, &mut events, &mut rng);

        let ball = *world.get::<&Ball>(entity).unwrap();
        assert_eq!(ball.pos, Vec2::new(400.0, 200.0));
        assert_eq!(ball.vel.x.abs(), 5.0);
        assert!(ball.vel.y.abs() <= 3.0);
    }

    #[test]
    fn test_boundary_itself_is_in_play() {
        let (mut world, config, mut events, mut rng) = setup_world();
        let left = create_ball(&mut world, Vec2::new(0.0, 200.0), Vec2::new(-5.0, 0.0));

        check_boundary_exit(&mut world, &config, &mut events, &mut rng);
        assert_eq!(world.get::<&Ball>(left).unwrap().pos.x, 0.0);

        world.despawn(left).unwrap();
        let right = create_ball(&mut world, Vec2::new(800.0, 200.0), Vec2::new(5.0, 0.0));

        check_boundary_exit(&mut world, &config, &mut events, &mut rng);
        assert_eq!(world.get::<&Ball>(right).unwrap().pos.x, 800.0);
        assert_eq!(events, Events::new(), "No scoring events");
    }
}
