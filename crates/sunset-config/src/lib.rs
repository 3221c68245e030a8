//! # sunset-config
//!
//! Layered configuration loading for sunset using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`SUNSET_*` prefix, `__` as separator)
//! 2. Legacy credential variables (`TS_USERNAME`, `TS_PASSWORD`, `TS_SERVER_URL`,
//!    `TS_LOGICAL_TABLE_ID`, `TS_SAMPLE_GUID`)
//! 3. Project-level `.sunset/config.toml`
//! 4. User-level `~/.config/sunset/config.toml`
//! 5. Built-in defaults
//!
//! CLI flags are applied by the binary on top of the extracted config.
//!
//! # Environment Variable Mapping
//!
//! Figment maps `SUNSET_PLATFORM__SERVER_URL` -> `platform.server_url`,
//! `SUNSET_SCAN__MIN_AGE_DAYS` -> `scan.min_age_days`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use sunset_config::SunsetConfig;
//!
//! let config = SunsetConfig::load_with_env_file(None).expect("config");
//! if config.platform.is_configured() {
//!     println!("server: {}", config.platform.base_url());
//! }
//! ```

mod error;
mod platform;
mod scan;

pub use error::ConfigError;
pub use platform::PlatformConfig;
pub use scan::ScanConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Keys accepted from the legacy `TS_*` variables, after the prefix is stripped.
const LEGACY_PLATFORM_KEYS: &[&str] = &[
    "username",
    "password",
    "server_url",
    "logical_table_id",
    "sample_guid",
];

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SunsetConfig {
    #[serde(default)]
    pub platform: PlatformConfig,
    #[serde(default)]
    pub scan: ScanConfig,
}

impl SunsetConfig {
    /// Load configuration from TOML files and environment variables.
    ///
    /// Does NOT read a credentials file; use [`Self::load_with_env_file`] for that.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Figment`] if a source cannot be parsed or a value
    /// has the wrong type.
    pub fn load() -> Result<Self, ConfigError> {
        Self::figment().extract().map_err(ConfigError::from)
    }

    /// Load a credentials file into the process environment, then [`Self::load`].
    ///
    /// With `None` the `.env` in the current directory is used when present. An
    /// explicit path that cannot be read is an error. Variables already set in
    /// the environment are never overwritten.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EnvFile`] for an unreadable explicit file, or any
    /// error from [`Self::load`].
    pub fn load_with_env_file(env_file: Option<&Path>) -> Result<Self, ConfigError> {
        Self::load_env_file(env_file)?;
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment directly or add providers on top.
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(global_path));
        }

        // Layer 2: Project-local config
        let local_path = PathBuf::from(".sunset/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Legacy TS_* credentials
        figment = figment.merge(
            Env::prefixed("TS_")
                .only(LEGACY_PLATFORM_KEYS)
                .map(|key| format!("platform.{}", key.as_str().to_ascii_lowercase()).into()),
        );

        // Layer 4: Environment variables (highest priority)
        figment.merge(Env::prefixed("SUNSET_").split("__"))
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("sunset").join("config.toml"))
    }

    fn load_env_file(env_file: Option<&Path>) -> Result<(), ConfigError> {
        match env_file {
            Some(path) => dotenvy::from_path(path)
                .map(|_| ())
                .map_err(|error| ConfigError::EnvFile {
                    path: path.to_path_buf(),
                    reason: error.to_string(),
                }),
            None => match dotenvy::dotenv() {
                Ok(_) => Ok(()),
                // The environment may already hold the credentials.
                Err(error) if error.not_found() => Ok(()),
                Err(error) => Err(ConfigError::EnvFile {
                    path: PathBuf::from(".env"),
                    reason: error.to_string(),
                }),
            },
        }
    }
}
