use crate::{ALL_INTERFACES_HOST, DEFAULT_HOST_ALL_INTERFACES, DEFAULT_USE_POLLING, LOOPBACK_HOST};

use serde::{Deserialize, Serialize};

/// Toggles handed to the frontend build tool's dev server.
///
/// Nothing in this workspace binds or watches anything with these; they are
/// loaded, validated and reported so the host build tool can consume them.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct DevServerConfig {
    /// Listen on every interface (needed when the dev server runs in a container)
    pub host_all_interfaces: bool,
    /// Force polling-based file change detection (bind mounts often miss fs events)
    pub use_polling: bool,
}

impl Default for DevServerConfig {
    fn default() -> Self {
        Self {
            host_all_interfaces: DEFAULT_HOST_ALL_INTERFACES,
            use_polling: DEFAULT_USE_POLLING,
        }
    }
}

impl DevServerConfig {
    pub fn bind_host(&self) -> &'static str {
        if self.host_all_interfaces {
            ALL_INTERFACES_HOST
        } else {
            LOOPBACK_HOST
        }
    }
}
