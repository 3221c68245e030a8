//! # sunset-pipeline
//!
//! Archive-candidate pipeline: catalog → age filter → dependents → usage →
//! alerts → selection.
//!
//! The I/O stages live here and run against any [`Platform`]; the pure stages
//! (age filter, candidate selector) live in `sunset-core`. Failure policy per
//! stage:
//! - Catalog load errors abort the scan ([`ScanError::Catalog`]).
//! - Dependency resolution errors drop only that model (recorded as a
//!   [`ModelFailure`](sunset_core::report::ModelFailure)).
//! - A failed usage query charges the impression threshold and moves on.
//! - A failed alert inspection yields [`AlertStatus::Unknown`](sunset_core::enums::AlertStatus).

pub mod alerts;
pub mod catalog;
pub mod dependents;
mod error;
pub mod scanner;
pub mod usage;

pub use error::ScanError;
pub use scanner::Scanner;
pub use sunset_client::Platform;
