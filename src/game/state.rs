use rand::Rng;
use tracing::trace;

use crate::ai::Bot;
use crate::config::PhysicsConfig;

use super::ball::Ball;
use super::events::GameEvent;
use super::input::Direction;
use super::paddle::Paddle;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    /// Human-controlled paddle
    Left,
    /// Computer-controlled paddle
    Right,
}

impl Side {
    pub const ALL: [Side; 2] = [Side::Left, Side::Right];

    pub fn index(self) -> usize {
        match self {
            Side::Left => 0,
            Side::Right => 1,
        }
    }

    pub fn opponent(self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

/// Score tally for a session.
///
/// Indexed by the side that *lost* each round: `points()[0]` counts rounds the
/// left paddle failed to return, which are points for the right player.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchState {
    points: [u32; 2],
}

impl MatchState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_loss(&mut self, side: Side) {
        self.points[side.index()] += 1;
    }

    pub fn points(&self) -> [u32; 2] {
        self.points
    }

    /// Points won by `side`
    pub fn points_for(&self, side: Side) -> u32 {
        self.points[side.opponent().index()]
    }

    /// Scoreboard text, left player first
    pub fn scoreboard(&self) -> String {
        format!(
            "{} : {}",
            self.points_for(Side::Left),
            self.points_for(Side::Right)
        )
    }
}

#[derive(Debug, Clone)]
pub struct GameState {
    pub ball: Ball,
    /// Left (human) then right (computer)
    pub paddles: [Paddle; 2],
    pub score: MatchState,
    pub field_width: f32,
    pub field_height: f32,
}

impl GameState {
    /// Build the field and serve the first ball
    pub fn new<R: Rng + ?Sized>(
        field_width: f32,
        field_height: f32,
        physics: &PhysicsConfig,
        rng: &mut R,
    ) -> Self {
        let paddle_y = field_height / 2.0 - physics.paddle_height / 2.0;
        let paddle = |x: f32| {
            Paddle::new(
                x,
                paddle_y,
                physics.paddle_width,
                physics.paddle_height,
                physics.paddle_speed,
            )
        };

        let mut ball = Ball::new(
            field_width / 2.0 - physics.ball_radius,
            field_height / 2.0 - physics.ball_radius,
            physics.ball_radius,
            physics.ball_speed,
        );
        ball.launch(rng);

        Self {
            ball,
            paddles: [
                paddle(physics.left_paddle_x),
                paddle(field_width - physics.right_paddle_inset),
            ],
            score: MatchState::new(),
            field_width,
            field_height,
        }
    }

    pub fn paddle(&self, side: Side) -> &Paddle {
        &self.paddles[side.index()]
    }

    pub fn move_paddle(&mut self, side: Side, direction: Direction) {
        let field_height = self.field_height;
        self.paddles[side.index()].move_paddle(direction, field_height);
    }

    /// Advance one frame.
    ///
    /// The left paddle follows `intent`, `bot` drives its own side, then the
    /// ball resolves collisions and moves.
    pub fn step<R: Rng>(
        &mut self,
        intent: Option<Direction>,
        bot: &mut dyn Bot,
        rng: &mut R,
    ) -> Vec<GameEvent> {
        if let Some(direction) = intent {
            self.move_paddle(Side::Left, direction);
        }

        let bot_side = bot.side();
        if let Some(direction) = bot.get_action(self, &mut *rng) {
            trace!(bot = bot.name(), ?direction, "bot move");
            self.move_paddle(bot_side, direction);
        }

        self.ball
            .update(&self.paddles, self.field_height, &mut self.score, rng)
    }
}
