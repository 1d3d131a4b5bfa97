use helix_config::ConfigError;
use helix_core::{CoreError, UserRole};
use helix_session::{SessionError, StorageError};

use std::panic::Location;
use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Configuration error: {source}")]
    Config {
        #[from]
        source: ConfigError,
    },

    #[error("{source}")]
    Session {
        #[from]
        source: SessionError,
    },

    #[error("{source}")]
    Storage {
        #[from]
        source: StorageError,
    },

    #[error("{source}")]
    Core {
        #[from]
        source: CoreError,
    },

    #[error("This command requires the {expected} role, signed in as {actual} {location}")]
    WrongRole {
        expected: UserRole,
        actual: UserRole,
        location: ErrorLocation,
    },

    #[error("Tab '{tab}' does not exist on the {dashboard} {location}")]
    UnknownTab {
        tab: String,
        dashboard: &'static str,
        location: ErrorLocation,
    },

    #[error("Failed to serialize output: {source} {location}")]
    Serialization {
        #[source]
        source: serde_json::Error,
        location: ErrorLocation,
    },

    #[error("Logger error: {message} {location}")]
    Logger {
        message: String,
        location: ErrorLocation,
    },
}

impl CliError {
    /// Creates WrongRole error at caller location.
    #[track_caller]
    pub fn wrong_role(expected: UserRole, actual: UserRole) -> Self {
        Self::WrongRole {
            expected,
            actual,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Creates UnknownTab error at caller location.
    #[track_caller]
    pub fn tab(tab: impl Into<String>, dashboard: &'static str) -> Self {
        Self::UnknownTab {
            tab: tab.into(),
            dashboard,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Creates Logger error at caller location.
    #[track_caller]
    pub fn logger(message: impl Into<String>) -> Self {
        Self::Logger {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<serde_json::Error> for CliError {
    #[track_caller]
    fn from(source: serde_json::Error) -> Self {
        Self::Serialization {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type CliResult<T> = StdResult<T, CliError>;
