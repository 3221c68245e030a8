use std::time::Duration;

use anyhow::Context;
use sunset_client::ThoughtSpotClient;
use sunset_config::SunsetConfig;

/// Shared application resources initialized once at startup.
pub struct AppContext {
    pub config: SunsetConfig,
    pub client: ThoughtSpotClient,
}

impl AppContext {
    /// Build the platform client and log in with the configured credentials.
    ///
    /// Nothing that touches the platform runs before this succeeds.
    pub async fn init(config: SunsetConfig) -> anyhow::Result<Self> {
        let platform = &config.platform;
        platform.require_configured().context(
            "set SUNSET_PLATFORM__SERVER_URL, SUNSET_PLATFORM__USERNAME and SUNSET_PLATFORM__PASSWORD (or TS_SERVER_URL, TS_USERNAME, TS_PASSWORD)",
        )?;

        let mut client = ThoughtSpotClient::new(
            platform.base_url(),
            Duration::from_secs(platform.timeout_secs),
        )
        .context("failed to build HTTP client")?
        .with_usage_worksheet(platform.logical_table_id.clone());

        client
            .authenticate(
                &platform.username,
                &platform.password,
                platform.token_validity_secs,
            )
            .await
            .with_context(|| format!("authentication to {} failed", platform.base_url()))?;
        tracing::debug!(server = %platform.base_url(), user = %platform.username, "authenticated");

        Ok(Self { config, client })
    }

    /// Object GUID from the command line, else `platform.sample_guid`.
    pub fn object_guid(&self, explicit: Option<&str>) -> anyhow::Result<String> {
        resolve_guid(explicit, self.config.platform.sample_guid.as_deref())
    }
}

fn resolve_guid(explicit: Option<&str>, sample: Option<&str>) -> anyhow::Result<String> {
    explicit
        .or(sample)
        .filter(|guid| !guid.trim().is_empty())
        .map(str::to_string)
        .context("no object GUID given and platform.sample_guid is not set")
}

#[cfg(test)]
mod tests {
    use super::resolve_guid;

    #[test]
    fn explicit_guid_wins() {
        let guid = resolve_guid(Some("abc"), Some("sample")).expect("guid");
        assert_eq!(guid, "abc");
    }

    #[test]
    fn falls_back_to_sample_guid() {
        let guid = resolve_guid(None, Some("sample")).expect("guid");
        assert_eq!(guid, "sample");
    }

    #[test]
    fn missing_guid_is_an_error() {
        assert!(resolve_guid(None, None).is_err());
        assert!(resolve_guid(Some("  "), None).is_err());
    }
}
