use anyhow::Context;
use sunset_config::SunsetConfig;

use crate::cli::GlobalFlags;
use crate::context::{self, AppContext};

/// Load the credentials file and layered configuration.
pub fn load_config(flags: &GlobalFlags) -> anyhow::Result<SunsetConfig> {
    let config = SunsetConfig::load_with_env_file(flags.env_file.as_deref())
        .context("failed to load sunset configuration")?;
    context::warn_unconfigured(&config);
    Ok(config)
}

/// Log in to the platform; every command except `schema` goes through here.
pub async fn connect(config: SunsetConfig) -> anyhow::Result<AppContext> {
    AppContext::init(config).await
}
