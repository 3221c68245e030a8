//! Cross-cutting error types for sunset.
//!
//! Transport errors live in `sunset-client` and scan-level errors in
//! `sunset-pipeline`. The binary converges everything into `anyhow`.

use thiserror::Error;

/// Errors raised by the pure stages and parameter checks.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Data failed validation (parameter ranges, identifiers).
    #[error("Validation error: {0}")]
    Validation(String),
}
