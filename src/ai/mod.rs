// AI module for bot opponents

mod bot;
mod reactive_bot;

pub use bot::Bot;
pub use reactive_bot::{jitter_bound, ReactiveBot};

use crate::config::AIConfig;
use crate::game::Side;

/// Create the computer opponent for the right paddle
pub fn create_bot(config: &AIConfig) -> Box<dyn Bot> {
    Box::new(ReactiveBot::new(Side::Right, config.difficulty))
}
