//! Scan orchestrator.
//!
//! Runs the full pipeline for every model that survives the age filter.
//! Models are independent, so up to `concurrency` of them are evaluated at
//! once; results are collected in catalog order regardless of which model
//! finishes first.

use chrono::{DateTime, Utc};
use futures::StreamExt;
use sunset_client::Platform;
use sunset_core::age::filter_by_age;
use sunset_core::entities::{ArchiveCandidate, ModelAsset};
use sunset_core::enums::AlertStatus;
use sunset_core::params::ScanParameters;
use sunset_core::report::{ModelFailure, ScanReport};
use sunset_core::selector::select;

use crate::alerts::inspect_alerts;
use crate::catalog::load_catalog;
use crate::dependents::resolve_dependents;
use crate::error::ScanError;
use crate::usage::platform_usage;

/// Result of evaluating one model.
#[derive(Debug, Clone)]
pub enum ModelOutcome {
    Evaluated(ArchiveCandidate),
    Failed(ModelFailure),
}

type Observer<'a> = Box<dyn Fn(&ModelOutcome) + Send + Sync + 'a>;

/// Runs scans against one platform with fixed parameters.
pub struct Scanner<'a, P> {
    platform: &'a P,
    params: ScanParameters,
    observer: Option<Observer<'a>>,
}

impl<'a, P: Platform> Scanner<'a, P> {
    #[must_use]
    pub fn new(platform: &'a P, params: ScanParameters) -> Self {
        Self {
            platform,
            params,
            observer: None,
        }
    }

    /// Call `observer` after each model is evaluated (in catalog order).
    #[must_use]
    pub fn with_observer(mut self, observer: impl Fn(&ModelOutcome) + Send + Sync + 'a) -> Self {
        self.observer = Some(Box::new(observer));
        self
    }

    /// Run the whole pipeline with `now` as the age reference.
    ///
    /// # Errors
    ///
    /// Returns [`ScanError::InvalidParameters`] before any request when the
    /// parameters are unusable, or [`ScanError::Catalog`] when the catalog
    /// cannot be loaded. Every other failure is recorded in the report.
    pub async fn run(&self, now: DateTime<Utc>) -> Result<ScanReport, ScanError> {
        self.params.validate()?;

        let catalog = load_catalog(self.platform).await?;
        let catalog_size = catalog.len();
        let eligible = filter_by_age(catalog, self.params.min_age(), now);
        let too_recent = catalog_size - eligible.len();
        tracing::info!(
            catalog_size,
            eligible = eligible.len(),
            min_age_days = self.params.min_age_days,
            "age filter applied"
        );

        let outcomes: Vec<ModelOutcome> = futures::stream::iter(eligible)
            .map(|model| self.evaluate(model, now))
            .buffered(self.params.concurrency)
            .inspect(|outcome| {
                if let Some(observer) = &self.observer {
                    observer(outcome);
                }
            })
            .collect()
            .await;

        let mut evaluated = Vec::new();
        let mut failures = Vec::new();
        for outcome in outcomes {
            match outcome {
                ModelOutcome::Evaluated(candidate) => evaluated.push(candidate),
                ModelOutcome::Failed(failure) => failures.push(failure),
            }
        }

        Ok(ScanReport {
            parameters: self.params,
            generated_at: now,
            catalog_size,
            too_recent,
            evaluated,
            failures,
        })
    }

    /// Evaluate one model that already passed the age filter.
    pub async fn evaluate(&self, model: ModelAsset, now: DateTime<Utc>) -> ModelOutcome {
        let params = &self.params;
        let dependents =
            match resolve_dependents(self.platform, &model.id, params.max_dependents).await {
                Ok(dependents) => dependents,
                Err(error) => {
                    tracing::warn!(model = %model.id, %error, "dependency resolution failed; model excluded");
                    return ModelOutcome::Failed(ModelFailure {
                        model,
                        reason: error.to_string(),
                    });
                }
            };

        let usage = platform_usage(
            self.platform,
            &model.id,
            &dependents,
            params.lookback_days,
            params.impression_threshold,
        )
        .await;

        let alert_status = if usage.is_below(params.impression_threshold) {
            inspect_alerts(self.platform, &dependents).await
        } else {
            AlertStatus::NotChecked
        };

        ModelOutcome::Evaluated(select(model, dependents, usage, alert_status, params, now))
    }
}
