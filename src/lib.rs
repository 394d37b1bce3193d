//! vspong: terminal Pong against a reactive computer opponent.
//!
//! The simulation core lives in [`game`] and [`ai`] and has no terminal
//! dependency; it reports side effects as [`game::GameEvent`] values which the
//! loop in [`game_modes`] forwards to the [`audio`] and [`ui`] collaborators.

pub mod ai;
pub mod audio;
pub mod config;
pub mod debug;
pub mod game;
pub mod game_modes;
pub mod ui;
