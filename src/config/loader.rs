// Configuration file loading and creation

use super::types::Config;
use super::ConfigError;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Get the path to the configuration file
pub fn get_config_path() -> PathBuf {
    let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("vspong");
    path.push("config.toml");
    path
}

/// Load configuration from the default location, creating it if missing
pub fn load_config() -> Result<Config, ConfigError> {
    load_config_from(&get_config_path())
}

/// Load configuration from `path`, or create a default file there if it doesn't exist.
///
/// A file that fails to parse is reported and the defaults are used instead.
pub fn load_config_from(path: &Path) -> Result<Config, ConfigError> {
    if !path.exists() {
        create_default_config(path)?;
        return Ok(Config::default());
    }

    let contents = fs::read_to_string(path)?;
    match toml::from_str(&contents) {
        Ok(config) => {
            info!(path = %path.display(), "loaded config");
            Ok(config)
        }
        Err(e) => {
            warn!(path = %path.display(), error = %e, "failed to parse config, using defaults");
            eprintln!("Warning: Failed to parse config file: {}", e);
            eprintln!("Using default configuration");
            Ok(Config::default())
        }
    }
}

/// Create a default configuration file with helpful comments
pub fn create_default_config(path: &Path) -> Result<(), ConfigError> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)?;
    }

    let config = Config::default();
    let toml_string = toml::to_string_pretty(&config)?;

    // Add helpful header comments
    let commented_toml = format!(
        "# vspong configuration file\n\
         # Edit this file to customize the game, then restart it\n\
         #\n\
         # Key binding format: \"Up\", \"Down\", \"Left\", \"Right\", \"Enter\", \"Esc\", \"Space\"\n\
         #                     or single characters like \"W\", \"S\", \"Q\"\n\
         #\n\
         # Colors: RGB values from 0-255\n\
         # Speeds are in field units per frame\n\
         #\n\
         # ai.difficulty: 0 or more, higher aims more accurately\n\
         # display.score_anchor: center, top, bottom, left, right, top_left, top_right,\n\
         #                       bottom_left, bottom_right, mid_top, mid_bottom, mid_left, mid_right\n\n\
         {}",
        toml_string
    );

    fs::write(path, commented_toml)?;
    info!(path = %path.display(), "created default config");
    Ok(())
}
