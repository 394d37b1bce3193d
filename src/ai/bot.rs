// Bot trait for AI opponents

use rand::RngCore;

use crate::game::{Direction, GameState, Side};

/// Trait for AI bot implementations
///
/// A bot looks at the game state once per frame and decides whether to move
/// the paddle on its side.
pub trait Bot {
    /// Decide what the bot does this frame
    ///
    /// # Returns
    /// * `Some(Direction)` - Move the bot's paddle one step
    /// * `None` - Stay put this frame
    fn get_action(&mut self, game_state: &GameState, rng: &mut dyn RngCore) -> Option<Direction>;

    /// Reset bot internal state (called when a new round starts)
    fn reset(&mut self);

    /// Bot name for debugging/display
    fn name(&self) -> &str;

    /// Paddle this bot controls
    fn side(&self) -> Side;
}
