use crate::{MAX_EMAIL_LENGTH, MAX_NICKNAME_LENGTH, Result as SessionErrorResult, SessionError};

use std::fmt;
use std::panic::Location;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// The signed-in principal.
///
/// Both fields are always populated; a partially filled identity cannot be
/// constructed or deserialized.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawIdentity")]
pub struct Identity {
    email: String,
    nickname: String,
}

/// Unvalidated wire shape, only used as the deserialization source
#[derive(Deserialize)]
struct RawIdentity {
    #[serde(default)]
    email: String,
    #[serde(default)]
    nickname: String,
}

impl TryFrom<RawIdentity> for Identity {
    type Error = SessionError;

    fn try_from(raw: RawIdentity) -> SessionErrorResult<Self> {
        Identity::new(raw.email, raw.nickname)
    }
}

impl Identity {
    /// Validate and build an identity from a login flow's output.
    ///
    /// Surrounding whitespace is trimmed from both fields.
    #[track_caller]
    pub fn new(email: impl Into<String>, nickname: impl Into<String>) -> SessionErrorResult<Self> {
        let caller = Location::caller();
        let email = email.into().trim().to_string();
        let nickname = nickname.into().trim().to_string();

        validate_email(&email).map_err(|message| SessionError::InvalidIdentity {
            field: "email",
            message,
            location: ErrorLocation::from(caller),
        })?;

        if nickname.is_empty() {
            return Err(SessionError::InvalidIdentity {
                field: "nickname",
                message: "nickname cannot be empty".to_string(),
                location: ErrorLocation::from(caller),
            });
        }
        if nickname.chars().count() > MAX_NICKNAME_LENGTH {
            return Err(SessionError::InvalidIdentity {
                field: "nickname",
                message: format!("nickname exceeds {MAX_NICKNAME_LENGTH} characters"),
                location: ErrorLocation::from(caller),
            });
        }

        Ok(Self { email, nickname })
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn nickname(&self) -> &str {
        &self.nickname
    }
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} <{}>", self.nickname, self.email)
    }
}

fn validate_email(email: &str) -> Result<(), String> {
    if email.is_empty() {
        return Err("email cannot be empty".to_string());
    }
    if email.chars().count() > MAX_EMAIL_LENGTH {
        return Err(format!("email exceeds {MAX_EMAIL_LENGTH} characters"));
    }
    if email.chars().any(char::is_whitespace) {
        return Err("email cannot contain whitespace".to_string());
    }

    match email.split_once('@') {
        Some((local, domain)) if !local.is_empty() && !domain.is_empty() && !domain.contains('@') => {
            Ok(())
        }
        _ => Err(format!("'{email}' is not a valid email address")),
    }
}
