//! Frame pacing for the game loop

use std::time::{Duration, Instant};

/// Duration of one frame at `target_fps`
pub fn frame_duration(target_fps: u64) -> Duration {
    Duration::from_nanos(1_000_000_000 / target_fps.max(1))
}

/// Apply frame rate limiting to maintain consistent game speed.
///
/// Call at the end of each loop iteration. Sleeps for whatever is left of
/// `frame_duration` and returns how long the frame's own work took, so the
/// caller can notice overruns. Motion is per frame, so a slow terminal slows
/// the game down rather than making the ball skip.
///
/// # Example
/// ```rust,no_run
/// use std::time::Instant;
/// # use vspong::game_modes::common::{frame_duration, limit_frame_rate};
/// let frame_start = Instant::now();
/// // ... game loop logic ...
/// limit_frame_rate(frame_start, frame_duration(60));
/// ```
pub fn limit_frame_rate(frame_start: Instant, frame_duration: Duration) -> Duration {
    let elapsed = frame_start.elapsed();
    if elapsed < frame_duration {
        std::thread::sleep(frame_duration - elapsed);
    }
    elapsed
}
