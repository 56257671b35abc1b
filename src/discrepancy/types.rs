use std::fmt;

use serde::{Deserialize, Serialize};

/// Value of a compared field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum FieldValue {
    Absent,
    Text(String),
    Flag(bool),
    List(Vec<String>),
}

impl FieldValue {
    /// Blank strings are treated as absent.
    pub fn text(value: &Option<String>) -> Self {
        match value.as_deref().map(str::trim) {
            Some(v) if !v.is_empty() => FieldValue::Text(v.to_string()),
            _ => FieldValue::Absent,
        }
    }

    pub fn flag(value: Option<bool>) -> Self {
        value.map(FieldValue::Flag).unwrap_or(FieldValue::Absent)
    }

    /// Keeps non-blank entries, trimmed.
    pub fn list(values: &[String]) -> Self {
        FieldValue::List(
            values
                .iter()
                .map(|v| v.trim())
                .filter(|v| !v.is_empty())
                .map(str::to_string)
                .collect(),
        )
    }

    /// `Absent` and empty lists carry no data.
    pub fn is_absent(&self) -> bool {
        match self {
            FieldValue::Absent => true,
            FieldValue::List(items) => items.is_empty(),
            FieldValue::Text(_) | FieldValue::Flag(_) => false,
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Absent => write!(f, "(none)"),
            FieldValue::Text(value) => write!(f, "'{}'", value),
            FieldValue::Flag(value) => write!(f, "{}", if *value { "yes" } else { "no" }),
            FieldValue::List(items) if items.is_empty() => write!(f, "(none)"),
            FieldValue::List(items) => write!(f, "[{}]", items.join(", ")),
        }
    }
}

/// How much a field matters for authentication. Ordered most to least important.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Importance {
    Critical,
    High,
    Medium,
    Low,
    Optional,
}

/// Outcome of comparing one field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    ExactMatch,
    MinorDiff,
    MajorDiff,
    Critical,
    MissingData,
}

impl Severity {
    /// `true` for exact matches and minor differences.
    pub fn is_match(&self) -> bool {
        matches!(self, Severity::ExactMatch | Severity::MinorDiff)
    }
}

/// Field-level comparison between a description and a reference.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldDiscrepancy {
    /// Logical locator, e.g. `identity.brand`.
    pub field_path: String,
    pub field_label: String,
    pub importance: Importance,
    pub severity: Severity,
    pub description_value: FieldValue,
    pub reference_value: FieldValue,
    /// Similarity on `[0, 100]`, when one was computed.
    pub similarity_score: Option<f64>,
    pub explanation: String,
}

impl FieldDiscrepancy {
    pub fn is_critical(&self) -> bool {
        self.severity == Severity::Critical
    }
}
