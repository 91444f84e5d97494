use crate::{
    CONFIG_DIR_ENV, CONFIG_FILE_NAME, ConfigError, ConfigErrorResult, DEFAULT_CONFIG_DIR,
    DOTENV_FILE_NAME, DevServerConfig, LoggingConfig, Profile,
};

use std::path::{Path, PathBuf};

use log::{info, warn};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct Config {
    /// Set by the loader, never read from TOML
    #[serde(skip_deserializing)]
    pub profile: Profile,
    pub dev_server: DevServerConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Load the `dev` profile. See [`Config::load_profile`].
    pub fn load() -> ConfigErrorResult<Self> {
        Self::load_profile(Profile::Dev)
    }

    /// Load config for a profile.
    ///
    /// Loading order:
    /// 1. Check for OLLM_CONFIG_DIR env var, else use ./.ollm/
    /// 2. Auto-create config directory if it doesn't exist
    /// 3. Load <config_dir>/.env into the process environment (existing vars win)
    /// 4. Load config.<profile>.toml, else config.toml, else use defaults
    /// 5. Apply OLLM_* environment variable overrides
    ///
    /// Does NOT validate - call validate() after load_profile().
    pub fn load_profile(profile: Profile) -> ConfigErrorResult<Self> {
        let config_dir = Self::config_dir()?;

        if !config_dir.exists() {
            std::fs::create_dir_all(&config_dir).map_err(|e| ConfigError::Io {
                path: config_dir.clone(),
                source: e,
            })?;
        }

        Self::load_dotenv(&config_dir)?;

        let profile_path = config_dir.join(profile.file_name());
        let default_path = config_dir.join(CONFIG_FILE_NAME);

        let mut config = if profile_path.exists() {
            Self::load_toml(&profile_path)?
        } else if default_path.exists() {
            warn!(
                "{} not found, falling back to {}",
                profile_path.display(),
                default_path.display()
            );
            Self::load_toml(&default_path)?
        } else {
            Config::default()
        };

        config.profile = profile;
        config.apply_env_overrides();

        Ok(config)
    }

    /// Load and parse TOML file with detailed error context.
    fn load_toml(path: &Path) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.to_path_buf(),
            source: e,
        })
    }

    fn load_dotenv(config_dir: &Path) -> ConfigErrorResult<()> {
        let path = config_dir.join(DOTENV_FILE_NAME);
        if !path.exists() {
            return Ok(());
        }

        dotenvy::from_path(&path).map_err(|e| ConfigError::DotEnv {
            path: path.clone(),
            source: e,
        })
    }

    /// Get the config directory.
    /// Priority: OLLM_CONFIG_DIR env var > ./.ollm/ (relative to cwd)
    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(DEFAULT_CONFIG_DIR))
    }

    /// Validate all configuration.
    /// Call after load() to catch all errors at startup.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.logging.validate()?;
        Ok(())
    }

    /// Absolute path of the log file, or None when logging to stderr.
    pub fn log_file_path(&self) -> ConfigErrorResult<Option<PathBuf>> {
        match self.logging.file {
            Some(ref file) => {
                let config_dir = Self::config_dir()?;
                Ok(Some(config_dir.join(&self.logging.dir).join(file)))
            }
            None => Ok(None),
        }
    }

    /// Log configuration summary.
    pub fn log_summary(&self) {
        info!("Configuration loaded ({} profile):", self.profile);
        info!(
            "  dev_server: host={} ({}), polling={}",
            self.dev_server.bind_host(),
            if self.dev_server.host_all_interfaces {
                "all interfaces"
            } else {
                "loopback only"
            },
            if self.dev_server.use_polling {
                "enabled"
            } else {
                "disabled"
            }
        );
        info!(
            "  logging: {} (colored: {}, output: {})",
            *self.logging.level,
            self.logging.colored,
            self.logging.file.as_deref().unwrap_or("stderr")
        );
    }

    fn apply_env_overrides(&mut self) {
        // Dev server
        Self::apply_env_bool(
            "OLLM_DEV_SERVER_HOST_ALL_INTERFACES",
            &mut self.dev_server.host_all_interfaces,
        );
        Self::apply_env_bool(
            "OLLM_DEV_SERVER_USE_POLLING",
            &mut self.dev_server.use_polling,
        );

        // Logging
        Self::apply_env_parse("OLLM_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_string("OLLM_LOG_DIR", &mut self.logging.dir);
        Self::apply_env_option_string("OLLM_LOG_FILE", &mut self.logging.file);
        Self::apply_env_bool("OLLM_LOG_COLORED", &mut self.logging.colored);
    }

    /// Helper: Apply environment variable override for String values
    fn apply_env_string(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val;
        }
    }

    /// Helper: Apply environment variable override for bool values (accepts "true"/"1")
    fn apply_env_bool(var_name: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val == "true" || val == "1";
        }
    }

    /// Helper: Apply environment variable override for parseable values
    fn apply_env_parse<T: std::str::FromStr>(var_name: &str, target: &mut T) {
        if let Ok(val) = std::env::var(var_name)
            && let Ok(parsed) = val.parse()
        {
            *target = parsed;
        }
    }

    /// Helper: Apply environment variable override for Option<String> values
    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = Some(val);
        }
    }
}
