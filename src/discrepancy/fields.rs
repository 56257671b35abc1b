//! Table of comparable fields.
//!
//! Entries are declared in importance order (critical first); analysis output follows the
//! same order. Each entry reads its value from both record types through a typed accessor.

use super::types::{FieldValue, Importance};
use crate::model::{ReferenceWatch, WatchDescription};

/// One comparable field.
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    pub path: &'static str,
    pub label: &'static str,
    pub importance: Importance,
    /// Similarity (on `[0, 1]`) at or above which a difference counts as minor.
    pub min_similarity: f64,
    pub description: fn(&WatchDescription) -> FieldValue,
    pub reference: fn(&ReferenceWatch) -> FieldValue,
}

impl FieldSpec {
    pub fn description_value(&self, description: &WatchDescription) -> FieldValue {
        (self.description)(description)
    }

    pub fn reference_value(&self, reference: &ReferenceWatch) -> FieldValue {
        (self.reference)(reference)
    }
}

pub const POSITIVE_SIGNS_PATH: &str = "authenticity.positive_signs";
pub const POSITIVE_SIGNS_LABEL: &str = "Authenticity Markers";
/// Missing markers weaken an identification but do not on their own contradict it.
pub const POSITIVE_SIGNS_IMPORTANCE: Importance = Importance::High;
pub const RED_FLAGS_PATH: &str = "authenticity.red_flags";
pub const RED_FLAGS_LABEL: &str = "Red Flags";
pub const RED_FLAGS_IMPORTANCE: Importance = Importance::Critical;

pub static COMPARABLE_FIELDS: &[FieldSpec] = &[
    // critical
    FieldSpec {
        path: "identity.brand",
        label: "Brand",
        importance: Importance::Critical,
        min_similarity: 0.95,
        description: |d| FieldValue::text(&d.identity.brand),
        reference: |r| FieldValue::text(&r.identity.brand),
    },
    FieldSpec {
        path: "identity.model",
        label: "Model",
        importance: Importance::Critical,
        min_similarity: 0.90,
        description: |d| FieldValue::text(&d.identity.model),
        reference: |r| FieldValue::text(&r.identity.model),
    },
    FieldSpec {
        path: "identity.reference_number",
        label: "Reference Number",
        importance: Importance::Critical,
        min_similarity: 0.85,
        description: |d| FieldValue::text(&d.identity.reference_number),
        reference: |r| FieldValue::text(&r.identity.reference_number),
    },
    // high
    FieldSpec {
        path: "physical.case_material",
        label: "Case Material",
        importance: Importance::High,
        min_similarity: 0.85,
        description: |d| FieldValue::text(&d.physical.case_material),
        reference: |r| FieldValue::text(&r.physical.case_material),
    },
    FieldSpec {
        path: "physical.dial_color",
        label: "Dial Color",
        importance: Importance::High,
        min_similarity: 0.80,
        description: |d| FieldValue::text(&d.physical.dial_color),
        reference: |r| FieldValue::text(&r.physical.dial_color),
    },
    FieldSpec {
        path: "identity.dial_variant",
        label: "Dial Variant",
        importance: Importance::High,
        min_similarity: 0.80,
        description: |d| FieldValue::text(&d.identity.dial_variant),
        reference: |r| FieldValue::text(&r.identity.dial_variant),
    },
    // medium
    FieldSpec {
        path: "physical.bezel_type",
        label: "Bezel Type",
        importance: Importance::Medium,
        min_similarity: 0.75,
        description: |d| FieldValue::text(&d.physical.bezel_type),
        reference: |r| FieldValue::text(&r.physical.bezel_type),
    },
    FieldSpec {
        path: "physical.bracelet_type",
        label: "Bracelet Type",
        importance: Importance::Medium,
        min_similarity: 0.70,
        description: |d| FieldValue::text(&d.physical.bracelet_type),
        reference: |r| FieldValue::text(&r.physical.bracelet_type),
    },
    FieldSpec {
        path: "physical.crystal_type",
        label: "Crystal",
        importance: Importance::Medium,
        min_similarity: 0.80,
        description: |d| FieldValue::text(&d.physical.crystal_type),
        reference: |r| FieldValue::text(&r.physical.crystal_type),
    },
    FieldSpec {
        path: "physical.case_shape",
        label: "Case Shape",
        importance: Importance::Medium,
        min_similarity: 0.75,
        description: |d| FieldValue::text(&d.physical.case_shape),
        reference: |r| FieldValue::text(&r.physical.case_shape),
    },
    // low
    FieldSpec {
        path: "physical.clasp_type",
        label: "Clasp Type",
        importance: Importance::Low,
        min_similarity: 0.60,
        description: |d| FieldValue::text(&d.physical.clasp_type),
        reference: |r| FieldValue::text(&r.physical.clasp_type),
    },
    FieldSpec {
        path: "physical.crown_type",
        label: "Crown Type",
        importance: Importance::Low,
        min_similarity: 0.60,
        description: |d| FieldValue::text(&d.physical.crown_type),
        reference: |r| FieldValue::text(&r.physical.crown_type),
    },
    FieldSpec {
        path: "physical.case_finish",
        label: "Case Finish",
        importance: Importance::Low,
        min_similarity: 0.65,
        description: |d| FieldValue::text(&d.physical.case_finish),
        reference: |r| FieldValue::text(&r.physical.case_finish),
    },
    // optional
    FieldSpec {
        path: "identity.serial_number",
        label: "Serial Number",
        importance: Importance::Optional,
        min_similarity: 0.90,
        description: |d| FieldValue::text(&d.identity.serial_number),
        reference: |r| FieldValue::text(&r.identity.serial_number),
    },
    FieldSpec {
        path: "identity.estimated_year",
        label: "Estimated Year",
        importance: Importance::Optional,
        min_similarity: 0.80,
        description: |d| FieldValue::text(&d.identity.estimated_year),
        reference: |r| FieldValue::text(&r.identity.estimated_year),
    },
    FieldSpec {
        path: "condition.grade",
        label: "Condition Grade",
        importance: Importance::Optional,
        min_similarity: 0.70,
        description: |d| FieldValue::text(&d.condition.grade),
        reference: |r| FieldValue::text(&r.condition_grade),
    },
];

/// Looks up a table entry by path.
pub fn field_spec(path: &str) -> Option<&'static FieldSpec> {
    COMPARABLE_FIELDS.iter().find(|spec| spec.path == path)
}
