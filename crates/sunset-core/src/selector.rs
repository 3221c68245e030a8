//! Candidate selector: the final, side-effect free archive decision.

use chrono::{DateTime, Utc};

use crate::entities::{ArchiveCandidate, DependentAsset, ModelAsset, UsageTotal};
use crate::enums::AlertStatus;
use crate::params::ScanParameters;

/// Combine one model's stage outputs into its audit record.
///
/// `decision` holds iff the model's age is at least `min_age_days`, the
/// impression total is strictly below the threshold, and the alert status is
/// [`AlertStatus::NoAlertsFound`].
#[must_use]
pub fn select(
    model: ModelAsset,
    dependents: Vec<DependentAsset>,
    total_impressions: UsageTotal,
    alert_status: AlertStatus,
    params: &ScanParameters,
    now: DateTime<Utc>,
) -> ArchiveCandidate {
    let old_enough = model
        .age_at(now)
        .is_some_and(|age| age >= params.min_age());
    let unused = total_impressions.is_below(params.impression_threshold);
    let decision = old_enough && unused && alert_status.permits_archive();

    tracing::info!(
        model = %model.id,
        decision,
        impressions = total_impressions.impression_count,
        failures = total_impressions.per_dependent_failures,
        alert_status = %alert_status,
        "model evaluated"
    );

    ArchiveCandidate {
        age_days: model.age_days_at(now),
        model,
        dependents,
        total_impressions,
        alert_status,
        decision,
    }
}
