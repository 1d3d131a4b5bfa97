use std::panic::Location;
use std::path::PathBuf;
use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error as ThisError;

/// Configuration failures. Value errors name the offending section.
#[derive(ThisError, Debug)]
pub enum ConfigError {
    #[error("Invalid [{section}] setting: {message} {location}")]
    InvalidValue {
        section: &'static str,
        message: String,
        location: ErrorLocation,
    },

    #[error("Cannot resolve the config directory: {source} {location}")]
    ConfigDir {
        #[source]
        source: std::io::Error,
        location: ErrorLocation,
    },

    #[error("Failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed {path}: {source}")]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

impl ConfigError {
    #[track_caller]
    fn invalid(section: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidValue {
            section,
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Invalid `[auth]` value.
    #[track_caller]
    pub fn auth(message: impl Into<String>) -> Self {
        Self::invalid("auth", message)
    }

    /// Invalid `[logging]` value.
    #[track_caller]
    pub fn logging(message: impl Into<String>) -> Self {
        Self::invalid("logging", message)
    }

    /// Invalid `[storage]` value.
    #[track_caller]
    pub fn storage(message: impl Into<String>) -> Self {
        Self::invalid("storage", message)
    }

    #[track_caller]
    pub fn config_dir(source: std::io::Error) -> Self {
        Self::ConfigDir {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// The config section a value error belongs to, if any.
    pub fn section(&self) -> Option<&'static str> {
        match self {
            Self::InvalidValue { section, .. } => Some(*section),
            _ => None,
        }
    }
}

pub type ConfigErrorResult<T> = StdResult<T, ConfigError>;
