use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Impressions summed over a model's dependents within a lookback window.
///
/// Only ever grows: a successful query adds its count, a failed query adds the
/// impression threshold so that uncertainty pushes the model toward "in use".
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct UsageTotal {
    pub model_id: String,
    pub window_days: u32,
    pub impression_count: u64,
    pub per_dependent_failures: u32,
}

impl UsageTotal {
    /// A zero total for `model_id`.
    #[must_use]
    pub fn empty(model_id: impl Into<String>, window_days: u32) -> Self {
        Self {
            model_id: model_id.into(),
            window_days,
            impression_count: 0,
            per_dependent_failures: 0,
        }
    }

    /// Add the impressions reported for one dependent.
    pub fn record_count(&mut self, impressions: u64) {
        self.impression_count = self.impression_count.saturating_add(impressions);
    }

    /// Account for a dependent whose query failed by adding `threshold`.
    pub fn record_failure(&mut self, threshold: u64) {
        self.impression_count = self.impression_count.saturating_add(threshold);
        self.per_dependent_failures = self.per_dependent_failures.saturating_add(1);
    }

    /// Whether the total stays strictly below `threshold`.
    #[must_use]
    pub const fn is_below(&self, threshold: u64) -> bool {
        self.impression_count < threshold
    }
}
