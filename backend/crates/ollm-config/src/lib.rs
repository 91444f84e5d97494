mod config;
mod dev_server_config;
mod error;
mod log_level;
mod logging_config;
mod profile;

pub use config::Config;
pub use dev_server_config::DevServerConfig;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use profile::Profile;

const CONFIG_DIR_ENV: &str = "OLLM_CONFIG_DIR";
const DEFAULT_CONFIG_DIR: &str = ".ollm";
const CONFIG_FILE_NAME: &str = "config.toml";
const DOTENV_FILE_NAME: &str = ".env";

const DEFAULT_HOST_ALL_INTERFACES: bool = true;
const DEFAULT_USE_POLLING: bool = true;
const ALL_INTERFACES_HOST: &str = "0.0.0.0";
const LOOPBACK_HOST: &str = "127.0.0.1";

const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";
const DEFAULT_LOG_COLORED: bool = true;

#[cfg(test)]
mod tests;
