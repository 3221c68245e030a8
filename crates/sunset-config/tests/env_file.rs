//! Credentials-file loading. Kept in its own test binary because `dotenvy`
//! writes into the real process environment.

use std::path::Path;

use figment::Jail;
use sunset_config::{ConfigError, SunsetConfig};

#[test]
fn env_file_values_reach_the_config() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "creds.env",
            "SUNSET_PLATFORM__SERVER_URL=https://file.thoughtspot.cloud\n\
             SUNSET_PLATFORM__USERNAME=file-user\n\
             SUNSET_PLATFORM__PASSWORD=file-secret\n",
        )?;

        let config = SunsetConfig::load_with_env_file(Some(Path::new("creds.env")))
            .expect("config loads");
        assert!(config.platform.is_configured());
        assert_eq!(config.platform.server_url, "https://file.thoughtspot.cloud");
        assert_eq!(config.platform.username, "file-user");
        Ok(())
    });
}

#[test]
fn malformed_default_env_file_is_an_error() {
    Jail::expect_with(|jail| {
        jail.create_file(".env", "TS_USERNAME='unterminated\n")?;

        let err = SunsetConfig::load_with_env_file(None).unwrap_err();
        assert!(matches!(err, ConfigError::EnvFile { .. }), "got {err}");
        Ok(())
    });
}

#[test]
fn missing_default_env_file_is_fine() {
    Jail::expect_with(|_jail| {
        let config = SunsetConfig::load_with_env_file(None).expect("config loads");
        assert_eq!(config.scan.min_age_days, 90);
        Ok(())
    });
}
