use std::panic::Location;
use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Config error: {0}")]
    Config(#[from] ollm_config::ConfigError),

    #[error("{message}: {source} {location}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
        location: ErrorLocation,
    },

    #[error("Failed to initialize logger: {message} {location}")]
    Logger {
        message: String,
        location: ErrorLocation,
    },

    #[error("Failed to serialize output: {source} {location}")]
    Serialize {
        #[source]
        source: serde_json::Error,
        location: ErrorLocation,
    },

    #[error("{message}")]
    Usage { message: String },
}

impl CliError {
    /// Wrap an IO error with context
    #[track_caller]
    pub fn io<S: Into<String>>(message: S, source: std::io::Error) -> Self {
        CliError::Io {
            message: message.into(),
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    pub fn usage<S: Into<String>>(message: S) -> Self {
        CliError::Usage {
            message: message.into(),
        }
    }
}

pub type CliErrorResult<T> = StdResult<T, CliError>;
