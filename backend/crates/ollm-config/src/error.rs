use std::panic::Location;
use std::path::PathBuf;
use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error as ThisError;

#[derive(ThisError, Debug)]
pub enum ConfigError {
    /// A loaded value that fails validation, tagged with its config section
    #[error("Invalid [{section}] setting: {message} {location}")]
    Invalid {
        section: &'static str,
        message: String,
        location: ErrorLocation,
    },

    #[error("Failed to access config path {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed TOML in {path}: {source}")]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Malformed .env file {path}: {source}")]
    DotEnv {
        path: PathBuf,
        #[source]
        source: dotenvy::Error,
    },
}

impl ConfigError {
    /// Problem with the config location or the file set as a whole
    #[track_caller]
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::invalid("config", message.into(), Location::caller())
    }

    /// Problem with the `[logging]` section
    #[track_caller]
    pub fn logging<S: Into<String>>(message: S) -> Self {
        Self::invalid("logging", message.into(), Location::caller())
    }

    fn invalid(
        section: &'static str,
        message: String,
        caller: &'static Location<'static>,
    ) -> Self {
        ConfigError::Invalid {
            section,
            message,
            location: ErrorLocation::from(caller),
        }
    }

    /// Config section the error belongs to, when it came from validation
    pub fn section(&self) -> Option<&'static str> {
        match self {
            ConfigError::Invalid { section, .. } => Some(*section),
            _ => None,
        }
    }
}

pub type ConfigErrorResult<T> = StdResult<T, ConfigError>;
