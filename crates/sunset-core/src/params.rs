//! Scan parameters shared by the pipeline, the config layer and the audit report.

use chrono::TimeDelta;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

/// Thresholds and bounds for one scan.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ScanParameters {
    /// Models must be strictly older than this many days to be evaluated.
    pub min_age_days: u32,
    /// Impression lookback window in days.
    pub lookback_days: u32,
    /// Totals must stay strictly below this value. Also the amount charged for
    /// every dependent whose usage query fails.
    pub impression_threshold: u64,
    /// Cap on dependents fetched per model.
    pub max_dependents: u32,
    /// Models evaluated concurrently against the platform.
    pub concurrency: usize,
}

impl Default for ScanParameters {
    fn default() -> Self {
        Self {
            min_age_days: 90,
            lookback_days: 90,
            impression_threshold: 1,
            max_dependents: 1000,
            concurrency: 4,
        }
    }
}

impl ScanParameters {
    /// The minimum age as a duration.
    #[must_use]
    pub fn min_age(&self) -> TimeDelta {
        TimeDelta::days(i64::from(self.min_age_days))
    }

    /// Reject parameter combinations that would make the scan meaningless.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Validation`] when the impression threshold, the
    /// concurrency, or the dependent cap is zero.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.impression_threshold == 0 {
            return Err(CoreError::Validation(
                "impression threshold must be at least 1".into(),
            ));
        }
        if self.concurrency == 0 {
            return Err(CoreError::Validation("concurrency must be at least 1".into()));
        }
        if self.max_dependents == 0 {
            return Err(CoreError::Validation(
                "max dependents must be at least 1".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_cli_defaults() {
        let params = ScanParameters::default();
        assert_eq!(params.min_age_days, 90);
        assert_eq!(params.lookback_days, 90);
        assert_eq!(params.impression_threshold, 1);
        assert_eq!(params.max_dependents, 1000);
        assert!(params.validate().is_ok());
    }

    #[test]
    fn zero_threshold_is_rejected() {
        let params = ScanParameters {
            impression_threshold: 0,
            ..ScanParameters::default()
        };
        assert!(matches!(params.validate(), Err(CoreError::Validation(_))));
    }

    #[test]
    fn zero_concurrency_is_rejected() {
        let params = ScanParameters {
            concurrency: 0,
            ..ScanParameters::default()
        };
        assert!(params.validate().is_err());
    }
}
