use std::io;
use std::time::Instant;

use rand::Rng;
use ratatui::Terminal;
use tracing::{debug, info};

use crate::ai;
use crate::audio::{AudioSink, Cue};
use crate::config::Config;
use crate::game::{poll_input, Controls, GameEvent, GameState, InputEvent, Intent};
use crate::ui;

use super::common::{frame_duration, limit_frame_rate};

/// Run a game of the human (left paddle) against the computer (right paddle)
/// until the player quits.
///
/// `releases_reported` says whether the terminal delivers key-up events; see
/// [`Intent`].
pub fn run_game_vs_ai<B: ratatui::backend::Backend, R: Rng>(
    terminal: &mut Terminal<B>,
    config: &Config,
    audio: &mut dyn AudioSink,
    rng: &mut R,
    releases_reported: bool,
) -> Result<(), io::Error> {
    let mut game_state = GameState::new(
        config.display.width,
        config.display.height,
        &config.physics,
        rng,
    );
    let mut bot = ai::create_bot(&config.ai);
    let controls = Controls::from_bindings(&config.keybindings);
    let mut intent = Intent::new(releases_reported);
    let frame_duration = frame_duration(config.display.target_fps);

    info!(
        bot = bot.name(),
        releases_reported,
        fps = config.display.target_fps,
        "game started"
    );

    let mut running = true;
    while running {
        let frame_start = Instant::now();

        // Handle player input (left paddle); quitting still finishes the frame
        for event in poll_input(&controls)? {
            match event {
                InputEvent::Quit => running = false,
                other => intent.apply(other),
            }
        }

        let events = game_state.step(intent.direction(), bot.as_mut(), rng);
        intent.end_frame();

        for event in &events {
            if let Some(cue) = Cue::for_event(event) {
                audio.play(cue);
            }
            if let GameEvent::PointScored(side) = event {
                info!(
                    missed = ?side,
                    score = %game_state.score.scoreboard(),
                    "point scored"
                );
                bot.reset();
            }
        }

        terminal.draw(|f| ui::render(f, &game_state, &config.display))?;

        let work = limit_frame_rate(frame_start, frame_duration);
        if work > frame_duration {
            debug!(?work, budget = ?frame_duration, "frame overran");
        }
    }

    info!(score = %game_state.score.scoreboard(), "game ended");
    Ok(())
}
