// vspong configuration types
// All settings with defaults matching the classic layout

use serde::{Deserialize, Serialize};

use super::ConfigError;
use crate::ui::Anchor;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub keybindings: KeyBindings,
    #[serde(default)]
    pub physics: PhysicsConfig,
    #[serde(default)]
    pub ai: AIConfig,
    #[serde(default)]
    pub display: DisplayConfig,
}

impl Config {
    /// Reject values the simulation cannot run with
    pub fn validate(&self) -> Result<(), ConfigError> {
        let d = &self.display;
        let p = &self.physics;

        if !(d.width > 0.0 && d.height > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "field size must be positive, got {}x{}",
                d.width, d.height
            )));
        }
        if d.target_fps == 0 {
            return Err(ConfigError::Invalid("target_fps must be at least 1".into()));
        }
        if !(p.paddle_height > 0.0 && p.paddle_height <= d.height) {
            return Err(ConfigError::Invalid(format!(
                "paddle_height must be in (0, {}], got {}",
                d.height, p.paddle_height
            )));
        }
        if !(p.ball_speed > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "ball_speed must be positive, got {}",
                p.ball_speed
            )));
        }
        if !(p.ball_radius > 0.0 && p.paddle_width > 0.0 && p.paddle_speed > 0.0) {
            return Err(ConfigError::Invalid(
                "ball_radius, paddle_width and paddle_speed must be positive".into(),
            ));
        }
        // One frame's travel must not skip the paddle's hit window
        let hit_window = p.paddle_width + p.ball_radius / 2.0;
        if p.ball_speed >= hit_window {
            return Err(ConfigError::Invalid(format!(
                "ball_speed must be below paddle_width + ball_radius / 2 ({}), got {}",
                hit_window, p.ball_speed
            )));
        }

        Ok(())
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct KeyBindings {
    pub paddle_up: String,
    pub paddle_down: String,
    // Esc and Ctrl-C always quit as well
    pub quit: String,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            paddle_up: "Up".to_string(),
            paddle_down: "Down".to_string(),
            quit: "Q".to_string(),
        }
    }
}

/// Sizes and speeds in field units; speeds are per frame
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct PhysicsConfig {
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub paddle_speed: f32,

    // Left paddle's x; the right paddle sits at field width minus the inset
    pub left_paddle_x: f32,
    pub right_paddle_inset: f32,

    pub ball_radius: f32,
    pub ball_speed: f32,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            paddle_width: 20.0,
            paddle_height: 200.0,
            paddle_speed: 5.0,
            left_paddle_x: 50.0,
            right_paddle_inset: 60.0,
            ball_radius: 10.0,
            ball_speed: 6.0,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct AIConfig {
    // Higher = steadier aim (0 is the sloppiest)
    pub difficulty: u32,
}

impl Default for AIConfig {
    fn default() -> Self {
        Self { difficulty: 100 }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct DisplayConfig {
    // Field resolution in virtual units, scaled to the terminal
    pub width: f32,
    pub height: f32,

    // Alternate screen when true, inline viewport otherwise
    pub fullscreen: bool,
    pub title: String,
    pub target_fps: u64,

    // Ring the terminal bell on hits and points
    pub sound: bool,

    // Colors (RGB values 0-255)
    pub background_color: [u8; 3],
    pub paddle_color: [u8; 3],
    pub ball_color: [u8; 3],
    pub score_color: [u8; 3],
    pub center_line_color: [u8; 3],

    pub score_anchor: Anchor,
    // Field coordinates of the anchor point; defaults to (width / 2, 100)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score_position: Option<[f32; 2]>,
}

impl DisplayConfig {
    pub fn score_position(&self) -> (f32, f32) {
        match self.score_position {
            Some([x, y]) => (x, y),
            None => (self.width / 2.0, 100.0),
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
            fullscreen: true,
            title: "Pong".to_string(),
            target_fps: 60,
            sound: true,
            background_color: [0, 0, 0],
            paddle_color: [255, 255, 255],
            ball_color: [255, 255, 255],
            score_color: [255, 255, 255],
            center_line_color: [100, 100, 100],
            score_anchor: Anchor::Center,
            score_position: None,
        }
    }
}
