//! The collaborator contract the pipeline stages run against.

use std::future::Future;

use sunset_core::entities::ModelAsset;

use crate::{ClientError, DependentGroup, ThoughtSpotClient, TmlArtifact};

/// Platform operations the archive pipeline consumes.
///
/// [`ThoughtSpotClient`] is the production implementation; tests drive the
/// stages with in-memory fakes.
pub trait Platform {
    /// Every model in the catalog, in response order.
    fn search_models(&self) -> impl Future<Output = Result<Vec<ModelAsset>, ClientError>> + Send;

    /// Dependents of one model, grouped by platform type.
    fn fetch_dependents(
        &self,
        model_id: &str,
        max_count: u32,
    ) -> impl Future<Output = Result<Vec<DependentGroup>, ClientError>> + Send;

    /// Impressions of one dependent over the last `window_days` days.
    fn query_usage(
        &self,
        dependent_id: &str,
        window_days: u32,
    ) -> impl Future<Output = Result<u64, ClientError>> + Send;

    /// Definition of one object together with its associated artifacts.
    fn export_definition(
        &self,
        id: &str,
    ) -> impl Future<Output = Result<Vec<TmlArtifact>, ClientError>> + Send;
}

impl Platform for ThoughtSpotClient {
    async fn search_models(&self) -> Result<Vec<ModelAsset>, ClientError> {
        Self::search_models(self).await
    }

    async fn fetch_dependents(
        &self,
        model_id: &str,
        max_count: u32,
    ) -> Result<Vec<DependentGroup>, ClientError> {
        Self::fetch_dependents(self, model_id, max_count).await
    }

    async fn query_usage(&self, dependent_id: &str, window_days: u32) -> Result<u64, ClientError> {
        Self::query_usage(self, dependent_id, window_days).await
    }

    async fn export_definition(&self, id: &str) -> Result<Vec<TmlArtifact>, ClientError> {
        Self::export_definition(self, id, true).await
    }
}
