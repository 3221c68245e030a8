//! # sunset-core
//!
//! Core types and pure decision stages for sunset.
//!
//! This crate holds everything in the archive pipeline that does not touch the
//! network:
//! - Entity structs for catalog models, dependents, usage totals and audit records
//! - The [`AlertStatus`](enums::AlertStatus) and dependent-kind enums
//! - The age filter (strict "older than" predicate over creation timestamps)
//! - The candidate selector that turns stage outputs into an [`ArchiveCandidate`](entities::ArchiveCandidate)
//! - Scan parameters and the scan report consumed by the export step
//! - Cross-cutting error types

pub mod age;
pub mod entities;
pub mod enums;
pub mod errors;
pub mod params;
pub mod report;
pub mod selector;

pub use errors::CoreError;
