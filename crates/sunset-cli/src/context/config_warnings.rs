use sunset_config::SunsetConfig;

/// Emit warnings for settings that will silently weaken a scan.
pub fn warn_unconfigured(config: &SunsetConfig) {
    for warning in collect_unconfigured_warnings(config, std::env::vars()) {
        tracing::warn!("{warning}");
    }
}

fn collect_unconfigured_warnings<I>(config: &SunsetConfig, env: I) -> Vec<String>
where
    I: IntoIterator<Item = (String, String)>,
{
    let env_keys = env.into_iter().map(|(key, _)| key).collect::<Vec<_>>();

    let mut warnings = Vec::new();

    if !config.platform.is_configured() && has_env_prefix(&env_keys, "SUNSET_PLATFORM") {
        warnings.push(
            "Platform config appears default while SUNSET_PLATFORM* env vars exist. Use double underscores (example: SUNSET_PLATFORM__SERVER_URL)."
                .to_string(),
        );
    }

    if has_env_prefix(&env_keys, "SUNSET_SCAN") && !has_env_prefix(&env_keys, "SUNSET_SCAN__") {
        warnings.push(
            "SUNSET_SCAN* env vars were ignored. Use double underscores (example: SUNSET_SCAN__MIN_AGE_DAYS)."
                .to_string(),
        );
    }

    if !config.platform.has_usage_worksheet() {
        warnings.push(
            "platform.logical_table_id is not set: every impression query will fail and no model will qualify for archiving."
                .to_string(),
        );
    }

    warnings
}

fn has_env_prefix(keys: &[String], prefix: &str) -> bool {
    keys.iter().any(|key| key.starts_with(prefix))
}
