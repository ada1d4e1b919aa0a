//! Utility modules: configuration and logging

pub mod config;
pub mod logging;

pub use config::{load_config, save_config, AppConfig, ConfigError, DataSettings, DisplaySettings, LoggingSettings};
pub use logging::setup_logging;
