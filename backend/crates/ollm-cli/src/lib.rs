//! ollm-cli library
//!
//! Exposes the session console and its helpers for the `ollm` binary and tests.

pub mod config_view;
pub mod console;
pub mod error;
pub mod logger;
pub mod render;


pub use console::{Console, ConsoleCommand};
pub use error::{CliError, CliErrorResult};
