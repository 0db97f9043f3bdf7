use crate::{
    create_ball, create_paddle, Ball, Config, MatchConfig, Paddle, PaddleIntent, PaddleMotion,
    Phase, Score, Side, TickError,
};
use glam::Vec2;
use hecs::{Entity, World};

/// Computer-controlled side and its per-tick reaction probability
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Opponent {
    pub side: Side,
    pub difficulty: f32, // 0..=1
}

/// Paddle position and velocity
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaddleState {
    pub y: f32,
    pub vy: f32,
}

/// Copy of every mutable value in a match, used for rendering and rollback
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Snapshot {
    pub left: PaddleState,
    pub right: PaddleState,
    pub ball: Ball,
    pub score: Score,
    pub phase: Phase,
}

impl Snapshot {
    pub fn paddle(&self, side: Side) -> PaddleState {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    pub fn check_finite(&self) -> Result<(), TickError> {
        if !self.ball.is_finite() {
            return Err(TickError::NonFinite { what: "ball" });
        }
        if !(self.left.y.is_finite() && self.left.vy.is_finite()) {
            return Err(TickError::NonFinite {
                what: "left paddle",
            });
        }
        if !(self.right.y.is_finite() && self.right.vy.is_finite()) {
            return Err(TickError::NonFinite {
                what: "right paddle",
            });
        }
        Ok(())
    }
}

/// All simulation state for one match. Built fresh at match start and
/// discarded when the match ends.
pub struct MatchState {
    pub world: World,
    pub score: Score,
    pub phase: Phase,
    opponent: Option<Opponent>,
    left: Entity,
    right: Entity,
    ball: Entity,
}

impl MatchState {
    /// Paddles and ball centered, scores zeroed, phase `Idle`
    pub fn new(config: &Config, match_config: MatchConfig) -> Self {
        let mut world = World::new();
        let paddle_y = config.paddle_spawn_y();
        let left = create_paddle(&mut world, Side::Left, paddle_y);
        let right = create_paddle(&mut world, Side::Right, paddle_y);
        let ball = create_ball(
            &mut world,
            config.center(),
            Vec2::splat(config.ball_speed),
        );

        let opponent = match_config
            .mode
            .has_computer_opponent()
            .then(|| Opponent {
                side: config.ai_side,
                difficulty: match_config.difficulty.probability(),
            });

        Self {
            world,
            score: Score::new(),
            phase: Phase::Idle,
            opponent,
            left,
            right,
            ball,
        }
    }

    pub fn opponent(&self) -> Option<Opponent> {
        self.opponent
    }

    pub fn opponent_is_computer(&self) -> bool {
        self.opponent.is_some()
    }

    pub fn paddle_entity(&self, side: Side) -> Entity {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    pub fn ball_entity(&self) -> Entity {
        self.ball
    }

    pub fn paddle(&self, side: Side) -> Result<Paddle, TickError> {
        Ok(*self.world.get::<&Paddle>(self.paddle_entity(side))?)
    }

    pub fn paddle_velocity(&self, side: Side) -> Result<f32, TickError> {
        Ok(self
            .world
            .get::<&PaddleMotion>(self.paddle_entity(side))?
            .vy)
    }

    pub fn ball(&self) -> Result<Ball, TickError> {
        Ok(*self.world.get::<&Ball>(self.ball)?)
    }

    pub fn set_paddle_velocity(&mut self, side: Side, vy: f32) -> Result<(), TickError> {
        let entity = self.paddle_entity(side);
        self.world.get::<&mut PaddleMotion>(entity)?.vy = vy;
        Ok(())
    }

    pub fn apply_intent(
        &mut self,
        side: Side,
        intent: PaddleIntent,
        config: &Config,
    ) -> Result<(), TickError> {
        self.set_paddle_velocity(side, intent.velocity(config.paddle_speed))
    }

    pub fn snapshot(&self) -> Result<Snapshot, TickError> {
        let paddle_state = |side: Side| -> Result<PaddleState, TickError> {
            Ok(PaddleState {
                y: self.paddle(side)?.y,
                vy: self.paddle_velocity(side)?,
            })
        };

        Ok(Snapshot {
            left: paddle_state(Side::Left)?,
            right: paddle_state(Side::Right)?,
            ball: self.ball()?,
            score: self.score,
            phase: self.phase,
        })
    }

    /// Overwrite all mutable values with `snapshot`
    pub fn restore(&mut self, snapshot: &Snapshot) -> Result<(), TickError> {
        for side in [Side::Left, Side::Right] {
            let saved = snapshot.paddle(side);
            let entity = self.paddle_entity(side);
            self.world.get::<&mut Paddle>(entity)?.y = saved.y;
            self.world.get::<&mut PaddleMotion>(entity)?.vy = saved.vy;
        }
        *self.world.get::<&mut Ball>(self.ball)? = snapshot.ball;
        self.score = snapshot.score;
        self.phase = snapshot.phase;
        Ok(())
    }
}
