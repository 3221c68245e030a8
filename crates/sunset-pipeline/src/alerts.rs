//! Alert inspector.
//!
//! Walks every dependent until one carries an alert artifact (veto), one
//! cannot be inspected (unknown), or the list runs out (clear).

use sunset_client::{Platform, TmlArtifact};
use sunset_core::entities::DependentAsset;
use sunset_core::enums::AlertStatus;

/// Whether an exported artifact is an alert definition.
#[must_use]
pub fn is_alert_artifact(name: &str) -> bool {
    let name = name.trim();
    name.eq_ignore_ascii_case("alerts.tml") || name.eq_ignore_ascii_case("alerts")
}

/// Whether any artifact in an export is an alert definition.
#[must_use]
pub fn contains_alert(artifacts: &[TmlArtifact]) -> bool {
    artifacts
        .iter()
        .any(|artifact| is_alert_artifact(&artifact.artifact_name))
}

/// Inspect `dependents` in order for alert definitions.
///
/// An empty list is alert-free by definition.
pub async fn inspect_alerts<P: Platform>(platform: &P, dependents: &[DependentAsset]) -> AlertStatus {
    for dependent in dependents {
        match platform.export_definition(&dependent.id).await {
            Ok(artifacts) if contains_alert(&artifacts) => {
                tracing::debug!(dependent = %dependent.id, "alert found");
                return AlertStatus::AlertFound;
            }
            Ok(_) => {}
            Err(error) => {
                tracing::warn!(dependent = %dependent.id, %error, "alert inspection failed");
                return AlertStatus::Unknown;
            }
        }
    }
    AlertStatus::NoAlertsFound
}
