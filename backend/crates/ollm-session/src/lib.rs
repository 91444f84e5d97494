//! ollm-session
//!
//! In-memory holder of the currently signed-in identity. Observers are
//! notified synchronously whenever the identity changes.

pub mod error;
pub mod identity;
pub mod session_store;
pub mod subscription;

pub use error::{Result, SessionError};
pub use identity::Identity;
pub use session_store::{Observer, SessionStore};
pub use subscription::{Subscription, SubscriptionId};

const MAX_EMAIL_LENGTH: usize = 254;
const MAX_NICKNAME_LENGTH: usize = 64;

#[cfg(test)]
mod tests;
