use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::DependentKind;

/// A downstream object (liveboard, answer, ...) that consumes a model.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct DependentAsset {
    pub id: String,
    pub name: String,
    pub kind: DependentKind,
    /// Type name exactly as the platform grouped it, e.g. `PINBOARD_ANSWER_BOOK`.
    pub platform_type: String,
    /// Back-reference to the model this dependent was resolved from.
    pub owner_model_id: String,
}
