//! Alert status and dependent kinds.
//!
//! All enums use `snake_case` serialization via `#[serde(rename_all = "snake_case")]`.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// AlertStatus
// ---------------------------------------------------------------------------

/// Outcome of inspecting a model's dependents for alert definitions.
///
/// `Unknown` means inspection failed, not that no alert exists. Only
/// `NoAlertsFound` lets a model through to archiving.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum AlertStatus {
    NoAlertsFound,
    AlertFound,
    Unknown,
    /// The usage stage already vetoed the model so no inspection was issued.
    ///
    /// Readers of the audit record must treat this like `Unknown`: it says
    /// nothing about whether an alert exists and never permits archiving.
    NotChecked,
}

impl AlertStatus {
    /// Whether this status allows the model to be archived.
    #[must_use]
    pub const fn permits_archive(self) -> bool {
        matches!(self, Self::NoAlertsFound)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NoAlertsFound => "no_alerts_found",
            Self::AlertFound => "alert_found",
            Self::Unknown => "unknown",
            Self::NotChecked => "not_checked",
        }
    }
}

impl fmt::Display for AlertStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// DependentKind
// ---------------------------------------------------------------------------

/// Kind of a downstream object, normalized from the platform's type names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum DependentKind {
    /// Dashboard (`PINBOARD_ANSWER_BOOK` on the wire).
    Liveboard,
    /// Saved query (`QUESTION_ANSWER_BOOK` on the wire).
    Answer,
    /// Another model or view built on top of this one.
    LogicalTable,
    Other,
}

impl DependentKind {
    /// Map a platform metadata type name onto a kind.
    #[must_use]
    pub fn from_platform_type(raw: &str) -> Self {
        match raw.to_ascii_uppercase().as_str() {
            "PINBOARD_ANSWER_BOOK" | "LIVEBOARD" => Self::Liveboard,
            "QUESTION_ANSWER_BOOK" | "ANSWER" => Self::Answer,
            "LOGICAL_TABLE" => Self::LogicalTable,
            _ => Self::Other,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Liveboard => "liveboard",
            Self::Answer => "answer",
            Self::LogicalTable => "logical_table",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for DependentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_no_alerts_found_permits_archive() {
        assert!(AlertStatus::NoAlertsFound.permits_archive());
        assert!(!AlertStatus::AlertFound.permits_archive());
        assert!(!AlertStatus::Unknown.permits_archive());
        assert!(!AlertStatus::NotChecked.permits_archive());
    }

    #[test]
    fn alert_status_serializes_snake_case() {
        let json = serde_json::to_string(&AlertStatus::NoAlertsFound).unwrap();
        assert_eq!(json, "\"no_alerts_found\"");
        assert_eq!(AlertStatus::AlertFound.to_string(), "alert_found");
    }

    #[test]
    fn dependent_kind_maps_platform_names() {
        assert_eq!(
            DependentKind::from_platform_type("PINBOARD_ANSWER_BOOK"),
            DependentKind::Liveboard
        );
        assert_eq!(
            DependentKind::from_platform_type("question_answer_book"),
            DependentKind::Answer
        );
        assert_eq!(
            DependentKind::from_platform_type("LOGICAL_TABLE"),
            DependentKind::LogicalTable
        );
        assert_eq!(
            DependentKind::from_platform_type("MONITOR_ALERT"),
            DependentKind::Other
        );
    }
}
