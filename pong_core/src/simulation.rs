use glam::Vec2;
use hecs::{Entity, World};

use crate::{
    create_ai_paddle, create_ball, create_player_paddle, Ball, Config, Events, GameRng, Paddle,
    Pointer, Score, Side,
};

/// Axis-aligned rectangle in playfield units
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

/// Read-only copy of everything needed to draw a frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Snapshot {
    pub width: f32,
    pub height: f32,
    pub ball_pos: Vec2,
    pub ball_radius: f32,
    pub player_paddle: Rect,
    pub ai_paddle: Rect,
    pub score: Score,
}

/// One self-contained paddle game
///
/// Owns its world, RNG and pointer state; any number can run side by side.
pub struct Simulation {
    world: World,
    config: Config,
    score: Score,
    events: Events,
    rng: GameRng,
    pointer: Pointer,
    ball: Entity,
    player: Entity,
    ai: Entity,
    frame: u64,
}

impl Simulation {
    pub fn new(config: Config, rng: GameRng) -> Self {
        let mut world = World::new();

        let player = create_player_paddle(&mut world, &config);
        let ai = create_ai_paddle(&mut world, &config);

        // The first rally always starts the same way
        let ball = create_ball(
            &mut world,
            config.center(),
            Vec2::new(config.ball_speed, config.initial_dy),
        );

        let pointer = Pointer::new(config.playfield_height / 2.0);

        Self {
            world,
            config,
            score: Score::new(),
            events: Events::new(),
            rng,
            pointer,
            ball,
            player,
            ai,
            frame: 0,
        }
    }

    pub fn with_seed(config: Config, seed: u64) -> Self {
        Self::new(config, GameRng::new(seed))
    }

    /// Handle for host input handlers to write pointer positions into
    pub fn pointer(&self) -> Pointer {
        self.pointer.clone()
    }

    pub fn step(&mut self) {
        crate::step(
            &mut self.world,
            &self.config,
            self.pointer.y(),
            &mut self.events,
            &mut self.rng,
        );
        self.score.apply(&self.events, self.config.scoring);
        self.frame += 1;
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn score(&self) -> Score {
        self.score
    }

    /// Events raised by the most recent step
    pub fn events(&self) -> &Events {
        &self.events
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn ball(&self) -> Ball {
        self.world
            .get::<&Ball>(self.ball)
            .map(|ball| *ball)
            .unwrap_or_else(|_| Ball::new(self.config.center(), Vec2::ZERO))
    }

    /// Overwrite the ball's position and velocity
    pub fn set_ball(&mut self, ball: Ball) {
        if let Ok(mut current) = self.world.get::<&mut Ball>(self.ball) {
            *current = ball;
        }
    }

    pub fn paddle(&self, side: Side) -> Paddle {
        let entity = self.paddle_entity(side);
        self.world
            .get::<&Paddle>(entity)
            .map(|paddle| *paddle)
            .unwrap_or_else(|_| Paddle::new(side, self.config.paddle_spawn_y()))
    }

    /// Move a paddle's top edge, clamped to the playfield
    pub fn set_paddle_y(&mut self, side: Side, y: f32) {
        let entity = self.paddle_entity(side);
        let y = self.config.clamp_paddle_y(y);
        if let Ok(mut paddle) = self.world.get::<&mut Paddle>(entity) {
            paddle.y = y;
        }
    }

    pub fn snapshot(&self) -> Snapshot {
        let paddle_rect = |side: Side| Rect {
            x: self.config.paddle_x(side),
            y: self.paddle(side).y,
            width: self.config.paddle_width,
            height: self.config.paddle_height,
        };

        Snapshot {
            width: self.config.playfield_width,
            height: self.config.playfield_height,
            ball_pos: self.ball().pos,
            ball_radius: self.config.ball_radius,
            player_paddle: paddle_rect(Side::Player),
            ai_paddle: paddle_rect(Side::Ai),
            score: self.score,
        }
    }

    fn paddle_entity(&self, side: Side) -> Entity {
        match side {
            Side::Player => self.player,
            Side::Ai => self.ai,
        }
    }
}
