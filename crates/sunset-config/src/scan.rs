//! Scan thresholds.

use serde::{Deserialize, Serialize};
use sunset_core::params::ScanParameters;

use crate::error::ConfigError;

const fn default_min_age_days() -> u32 {
    90
}

const fn default_lookback_days() -> u32 {
    90
}

const fn default_impression_threshold() -> u64 {
    1
}

const fn default_max_dependents() -> u32 {
    1000
}

const fn default_concurrency() -> usize {
    4
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ScanConfig {
    /// Minimum model age in days.
    #[serde(default = "default_min_age_days")]
    pub min_age_days: u32,

    /// How far back to count impressions.
    #[serde(default = "default_lookback_days")]
    pub lookback_days: u32,

    /// Impressions must stay strictly below this value.
    #[serde(default = "default_impression_threshold")]
    pub impression_threshold: u64,

    /// Dependent objects fetched per model.
    #[serde(default = "default_max_dependents")]
    pub max_dependents: u32,

    /// Models evaluated concurrently.
    #[serde(default = "default_concurrency")]
    pub concurrency: usize,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            min_age_days: default_min_age_days(),
            lookback_days: default_lookback_days(),
            impression_threshold: default_impression_threshold(),
            max_dependents: default_max_dependents(),
            concurrency: default_concurrency(),
        }
    }
}

impl ScanConfig {
    /// Convert into validated pipeline parameters.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] when a value is out of range.
    pub fn to_parameters(&self) -> Result<ScanParameters, ConfigError> {
        let params = ScanParameters {
            min_age_days: self.min_age_days,
            lookback_days: self.lookback_days,
            impression_threshold: self.impression_threshold,
            max_dependents: self.max_dependents,
            concurrency: self.concurrency,
        };
        params
            .validate()
            .map_err(|error| ConfigError::InvalidValue {
                field: "scan".into(),
                reason: error.to_string(),
            })?;
        Ok(params)
    }
}
