//! Analytics platform connection settings.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Default bearer token lifetime requested at login, in seconds.
const fn default_token_validity_secs() -> u64 {
    3600
}

/// Default per-request timeout in seconds.
const fn default_timeout_secs() -> u64 {
    30
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PlatformConfig {
    /// Base URL of the instance (e.g., `https://acme.thoughtspot.cloud`).
    #[serde(default)]
    pub server_url: String,

    #[serde(default)]
    pub username: String,

    #[serde(default)]
    pub password: String,

    /// GUID of the usage-statistics worksheet that impression queries run against.
    #[serde(default)]
    pub logical_table_id: String,

    /// Object used by the `permissions`/`export` previews when no GUID is given.
    #[serde(default)]
    pub sample_guid: Option<String>,

    #[serde(default = "default_token_validity_secs")]
    pub token_validity_secs: u64,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for PlatformConfig {
    fn default() -> Self {
        Self {
            server_url: String::new(),
            username: String::new(),
            password: String::new(),
            logical_table_id: String::new(),
            sample_guid: None,
            token_validity_secs: default_token_validity_secs(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl PlatformConfig {
    /// Check if the minimum fields for logging in are present.
    pub fn is_configured(&self) -> bool {
        !self.server_url.is_empty() && !self.username.is_empty() && !self.password.is_empty()
    }

    /// Check if impression queries can be issued.
    pub fn has_usage_worksheet(&self) -> bool {
        !self.logical_table_id.is_empty()
    }

    /// Fail with [`ConfigError::NotConfigured`] unless login fields are set.
    ///
    /// # Errors
    ///
    /// Returns an error naming the `platform` section when it is incomplete.
    pub fn require_configured(&self) -> Result<(), ConfigError> {
        if self.is_configured() {
            Ok(())
        } else {
            Err(ConfigError::NotConfigured {
                section: "platform".into(),
            })
        }
    }

    /// Server URL without a trailing slash.
    pub fn base_url(&self) -> &str {
        self.server_url.trim_end_matches('/')
    }
}
