use chrono::{DateTime, TimeDelta, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A model (logical table) header from the platform catalog.
///
/// Immutable once built by the catalog loader.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ModelAsset {
    pub id: String,
    pub name: String,
    pub author_name: Option<String>,
    /// `None` when the platform omitted the timestamp or sent something unparseable.
    pub created_at: Option<DateTime<Utc>>,
}

impl ModelAsset {
    /// Age of the model at `now`, or `None` without a creation timestamp.
    #[must_use]
    pub fn age_at(&self, now: DateTime<Utc>) -> Option<TimeDelta> {
        self.created_at.map(|created| now - created)
    }

    /// Whole days elapsed since creation at `now`.
    #[must_use]
    pub fn age_days_at(&self, now: DateTime<Utc>) -> Option<i64> {
        self.age_at(now).map(|age| age.num_days())
    }
}
