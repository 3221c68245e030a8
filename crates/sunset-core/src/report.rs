//! Scan report: the auditable output handed to the archive/export step.

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::{ArchiveCandidate, ModelAsset};
use crate::params::ScanParameters;

/// A model dropped mid-scan because its dependents could not be resolved.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ModelFailure {
    pub model: ModelAsset,
    pub reason: String,
}

/// Everything one scan decided, in catalog order.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ScanReport {
    pub parameters: ScanParameters,
    pub generated_at: DateTime<Utc>,
    /// Models returned by the catalog.
    pub catalog_size: usize,
    /// Models dropped by the age filter (including undated ones).
    pub too_recent: usize,
    /// One audit record per model that made it through dependency resolution.
    pub evaluated: Vec<ArchiveCandidate>,
    pub failures: Vec<ModelFailure>,
}

impl ScanReport {
    /// Records whose decision is "archive".
    pub fn ready(&self) -> impl Iterator<Item = &ArchiveCandidate> {
        self.evaluated.iter().filter(|candidate| candidate.decision)
    }

    #[must_use]
    pub fn ready_count(&self) -> usize {
        self.ready().count()
    }
}
