//! Scan-level error types.

use sunset_client::ClientError;
use sunset_core::CoreError;
use thiserror::Error;

/// Errors that abort a whole scan. Per-model and per-dependent failures are
/// recorded in the report instead.
#[derive(Debug, Error)]
pub enum ScanError {
    /// The catalog could not be loaded; there is no partial catalog.
    #[error("catalog load failed")]
    Catalog(#[source] ClientError),

    /// Scan parameters were rejected before any request was made.
    #[error("invalid scan parameters")]
    InvalidParameters(#[from] CoreError),
}
