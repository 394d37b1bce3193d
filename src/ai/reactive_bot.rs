// Reactive bot - tracks the ball with difficulty-scaled jitter

use rand::RngCore;
use rand_distr::{Distribution, Uniform};

use super::Bot;
use crate::game::{Direction, GameState, Side};

/// Raw jitter samples are drawn from `[-JITTER_SPAN, JITTER_SPAN)` before scaling
const JITTER_SPAN: i32 = 10_000;

fn jitter_divisor(difficulty: u32) -> f32 {
    ((difficulty / 2 + 50) as f32) * 1.5
}

/// Largest aiming error at `difficulty`; shrinks as difficulty grows
pub fn jitter_bound(difficulty: u32) -> f32 {
    JITTER_SPAN as f32 / jitter_divisor(difficulty)
}

/// A memoryless opponent:
/// - Ball coming toward it: aims at the ball, with a random error per frame
/// - Ball moving away: drifts back to the middle of the field
///
/// Two independent error samples are taken each frame, one for "is the ball
/// below me?" and one for "is it above me?". Near the target both can hold or
/// neither can, and the bot stays put.
pub struct ReactiveBot {
    name: String,
    side: Side,
    divisor: f32,
    jitter: Uniform<i32>,
}

impl ReactiveBot {
    pub fn new(side: Side, difficulty: u32) -> Self {
        Self {
            name: format!("Reactive (difficulty {})", difficulty),
            side,
            divisor: jitter_divisor(difficulty),
            jitter: Uniform::new(-JITTER_SPAN, JITTER_SPAN),
        }
    }

    fn sample_jitter(&self, rng: &mut dyn RngCore) -> f32 {
        self.jitter.sample(rng) as f32 / self.divisor
    }
}

impl Bot for ReactiveBot {
    fn get_action(&mut self, game_state: &GameState, rng: &mut dyn RngCore) -> Option<Direction> {
        let paddle = game_state.paddle(self.side);
        let paddle_center_y = paddle.center_y();
        let ball = &game_state.ball;

        if ball.moving_toward(self.side) {
            let target_y = ball.y + ball.radius;
            let below = target_y + self.sample_jitter(rng) > paddle_center_y;
            let above = target_y + self.sample_jitter(rng) < paddle_center_y;

            match (below, above) {
                (true, false) => Some(Direction::Down),
                (false, true) => Some(Direction::Up),
                _ => None,
            }
        } else {
            let diff = game_state.field_height / 2.0 - paddle_center_y;

            // Centred to within half a step
            if diff.abs() <= paddle.max_speed / 2.0 {
                None
            } else if diff > 0.0 {
                Some(Direction::Down)
            } else {
                Some(Direction::Up)
            }
        }
    }

    fn reset(&mut self) {
        // No state carried between frames
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn side(&self) -> Side {
        self.side
    }
}
