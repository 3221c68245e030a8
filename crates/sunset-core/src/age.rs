//! Age filter: keeps models strictly older than the threshold.
//!
//! A model created exactly `min_age` before `now` is not old enough. Models
//! without a usable creation timestamp are dropped, never guessed.

use chrono::{DateTime, TimeDelta, Utc};

use crate::entities::ModelAsset;

/// Whether `model` is strictly older than `min_age` at `now`.
#[must_use]
pub fn is_old_enough(model: &ModelAsset, min_age: TimeDelta, now: DateTime<Utc>) -> bool {
    match model.age_at(now) {
        Some(age) => age > min_age,
        None => {
            tracing::debug!(model = %model.id, "created_at missing; treated as not old enough");
            false
        }
    }
}

/// Keep the models strictly older than `min_age`, preserving catalog order.
#[must_use]
pub fn filter_by_age(
    models: Vec<ModelAsset>,
    min_age: TimeDelta,
    now: DateTime<Utc>,
) -> Vec<ModelAsset> {
    models
        .into_iter()
        .filter(|model| is_old_enough(model, min_age, now))
        .collect()
}
