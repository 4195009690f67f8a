// Configuration management module
// Handles the TOML config file and its interactive editor

pub mod interactive;
pub mod settings;

pub use interactive::{run_interactive_config, show_config};
pub use settings::{BrowserConfig, Config, ConfigError, DatasetConfig};
