// Configuration module for vspong
// Handles loading and managing game configuration from TOML file

pub mod error;
pub mod loader;
pub mod types;

pub use error::ConfigError;
pub use loader::{create_default_config, get_config_path, load_config, load_config_from};
pub use types::{AIConfig, Config, DisplayConfig, KeyBindings, PhysicsConfig};
