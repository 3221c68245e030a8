use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::{DependentAsset, ModelAsset, UsageTotal};
use crate::enums::AlertStatus;

/// Audit record for one evaluated model.
///
/// Built once by [`crate::selector::select`]. `decision` is true only when the
/// model is old enough, under the impression threshold, and free of alerts.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ArchiveCandidate {
    pub model: ModelAsset,
    /// Dependents in resolver order.
    pub dependents: Vec<DependentAsset>,
    pub total_impressions: UsageTotal,
    pub alert_status: AlertStatus,
    /// Whole days since creation at evaluation time.
    pub age_days: Option<i64>,
    pub decision: bool,
}

impl ArchiveCandidate {
    #[must_use]
    pub fn dependent_count(&self) -> usize {
        self.dependents.len()
    }
}
