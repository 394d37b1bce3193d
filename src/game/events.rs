use super::state::Side;

/// Side effects produced by a simulation step.
///
/// The simulation never plays sounds or draws; the game loop hands these to
/// the audio and rendering collaborators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// Ball bounced off a paddle or a wall
    HitSound,
    /// The computer-controlled side lost a round
    WinSound,
    /// The human side lost a round
    LoseSound,
    /// A round ended; the side is the one that failed to return the ball
    PointScored(Side),
}
