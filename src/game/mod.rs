pub mod ball;
pub mod events;
pub mod input;
pub mod paddle;
pub mod state;
pub mod vector;

pub use ball::{Ball, Collision};
pub use events::GameEvent;
pub use input::{poll_input, Controls, Direction, InputEvent, Intent};
pub use paddle::Paddle;
pub use state::{GameState, MatchState, Side};
pub use vector::{normalize, DomainError};
