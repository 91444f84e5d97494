use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SessionError {
    #[error("Invalid identity field '{field}': {message} {location}")]
    InvalidIdentity {
        field: &'static str,
        message: String,
        location: ErrorLocation,
    },
}

impl SessionError {
    /// Name of the offending identity field
    pub fn field(&self) -> &'static str {
        match self {
            Self::InvalidIdentity { field, .. } => field,
        }
    }
}

pub type Result<T> = std::result::Result<T, SessionError>;
