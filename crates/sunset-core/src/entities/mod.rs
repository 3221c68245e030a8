//! Entity structs for the archive pipeline.
//!
//! All structs derive `Serialize`, `Deserialize`, and `JsonSchema` so the audit
//! record handed to the export step can be validated against its schema.

mod candidate;
mod dependent;
mod model;
mod usage;

pub use candidate::ArchiveCandidate;
pub use dependent::DependentAsset;
pub use model::ModelAsset;
pub use usage::UsageTotal;
