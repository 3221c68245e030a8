//! Usage aggregator.
//!
//! Sums impressions over a model's dependents. A dependent whose query fails
//! contributes the impression threshold instead of its (unknown) count, so one
//! failure alone is enough to keep the model out of the archive set. A failure
//! never stops the remaining dependents from being queried.

use std::fmt::Display;
use std::future::Future;

use serde::Serialize;
use sunset_client::Platform;
use sunset_core::entities::{DependentAsset, UsageTotal};

/// Fold per-dependent query results into a [`UsageTotal`], in resolver order.
///
/// `query` receives each dependent id and resolves to its impression count.
pub async fn aggregate_usage<F, Fut, E>(
    model_id: &str,
    dependents: &[DependentAsset],
    window_days: u32,
    impression_threshold: u64,
    mut query: F,
) -> UsageTotal
where
    F: FnMut(String) -> Fut,
    Fut: Future<Output = Result<u64, E>>,
    E: Display,
{
    let mut total = UsageTotal::empty(model_id, window_days);
    for dependent in dependents {
        match query(dependent.id.clone()).await {
            Ok(count) => total.record_count(count),
            Err(error) => {
                tracing::warn!(
                    model = model_id,
                    dependent = %dependent.id,
                    %error,
                    "impression query failed; counting threshold"
                );
                total.record_failure(impression_threshold);
            }
        }
    }
    total
}

/// [`aggregate_usage`] against a platform.
pub async fn platform_usage<P: Platform>(
    platform: &P,
    model_id: &str,
    dependents: &[DependentAsset],
    window_days: u32,
    impression_threshold: u64,
) -> UsageTotal {
    aggregate_usage(
        model_id,
        dependents,
        window_days,
        impression_threshold,
        move |id| async move { platform.query_usage(&id, window_days).await },
    )
    .await
}

/// Impressions of a single dependent, with the failure kept visible.
#[derive(Debug, Clone, Serialize)]
pub struct DependentUsage {
    pub dependent: DependentAsset,
    pub window_days: u32,
    pub impressions: Option<u64>,
    pub error: Option<String>,
}

/// Query every dependent and report each result as-is, without folding.
pub async fn usage_breakdown<P: Platform>(
    platform: &P,
    dependents: Vec<DependentAsset>,
    window_days: u32,
) -> Vec<DependentUsage> {
    let mut rows = Vec::with_capacity(dependents.len());
    for dependent in dependents {
        let (impressions, error) = match platform.query_usage(&dependent.id, window_days).await {
            Ok(count) => (Some(count), None),
            Err(error) => (None, Some(error.to_string())),
        };
        rows.push(DependentUsage {
            dependent,
            window_days,
            impressions,
            error,
        });
    }
    rows
}
