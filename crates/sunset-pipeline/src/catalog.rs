//! Catalog loader.

use sunset_client::Platform;
use sunset_core::entities::ModelAsset;

use crate::error::ScanError;

/// Load every model header, in platform response order.
///
/// # Errors
///
/// Any platform error is fatal and returned as [`ScanError::Catalog`].
pub async fn load_catalog<P: Platform>(platform: &P) -> Result<Vec<ModelAsset>, ScanError> {
    let models = platform
        .search_models()
        .await
        .map_err(ScanError::Catalog)?;
    tracing::debug!(count = models.len(), "catalog loaded");
    Ok(models)
}
