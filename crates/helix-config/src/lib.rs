mod auth_config;
mod config;
mod error;
mod log_level;
mod logging_config;
mod storage_config;

#[cfg(test)]
mod tests;

pub use auth_config::AuthConfig;
pub use config::Config;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use storage_config::StorageConfig;

use helix_core::{DEFAULT_HR_EMAIL, DEFAULT_SESSION_KEY as DEFAULT_STORAGE_KEY};

pub const CONFIG_DIR_ENV: &str = "HELIX_CONFIG_DIR";
pub const CONFIG_FILENAME: &str = "config.toml";

const DEFAULT_CONFIG_DIR: &str = ".helix";
const DEFAULT_STORAGE_DIR: &str = "storage";
const DEFAULT_LOG_LEVEL_STRING: &str = "warn";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Warn;
const DEFAULT_LOG_DIRECTORY: &str = "log";
const DEFAULT_LOG_COLORED: bool = true;
