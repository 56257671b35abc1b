//! Aggregate similarity over physical descriptors.

use crate::constants::PHYSICAL_FULL_CREDIT_SIMILARITY;
use crate::discrepancy::FieldValue;
use crate::model::PhysicalAttributes;
use crate::similarity::{SimilarityMode, calculate_string_score};

/// One physical descriptor included in the aggregate.
#[derive(Debug, Clone, Copy)]
pub struct PhysicalField {
    pub name: &'static str,
    pub value: fn(&PhysicalAttributes) -> FieldValue,
}

pub static PHYSICAL_FIELDS: &[PhysicalField] = &[
    PhysicalField {
        name: "case_material",
        value: |p| FieldValue::text(&p.case_material),
    },
    PhysicalField {
        name: "case_finish",
        value: |p| FieldValue::text(&p.case_finish),
    },
    PhysicalField {
        name: "case_shape",
        value: |p| FieldValue::text(&p.case_shape),
    },
    PhysicalField {
        name: "bezel_type",
        value: |p| FieldValue::text(&p.bezel_type),
    },
    PhysicalField {
        name: "crystal_type",
        value: |p| FieldValue::text(&p.crystal_type),
    },
    PhysicalField {
        name: "bracelet_type",
        value: |p| FieldValue::text(&p.bracelet_type),
    },
    PhysicalField {
        name: "hand_style",
        value: |p| FieldValue::text(&p.hand_style),
    },
    PhysicalField {
        name: "index_style",
        value: |p| FieldValue::text(&p.index_style),
    },
    PhysicalField {
        name: "dial_color",
        value: |p| FieldValue::text(&p.dial_color),
    },
    PhysicalField {
        name: "has_date",
        value: |p| FieldValue::flag(p.has_date),
    },
];

/// Result of comparing physical descriptors.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhysicalComparison {
    /// Mean credit over compared fields, on `[0, 1]`.
    pub similarity: f64,
    /// Number of fields present on both sides.
    pub fields_compared: usize,
}

/// Compares the descriptors present on both sides.
///
/// Missing fields are left out of both numerator and denominator. Text similarity above 0.8
/// earns full credit; below that the raw similarity is the credit. Flags earn 1 or 0.
pub fn compare_physical_attributes(
    observed: &PhysicalAttributes,
    expected: &PhysicalAttributes,
) -> PhysicalComparison {
    let mut credit = 0.0;
    let mut fields_compared = 0usize;

    for field in PHYSICAL_FIELDS {
        let field_credit = match ((field.value)(observed), (field.value)(expected)) {
            (FieldValue::Text(a), FieldValue::Text(b)) => {
                let similarity = calculate_string_score(&a, &b, SimilarityMode::Auto);
                if similarity > PHYSICAL_FULL_CREDIT_SIMILARITY {
                    1.0
                } else {
                    similarity
                }
            }
            (FieldValue::Flag(a), FieldValue::Flag(b)) => {
                if a == b {
                    1.0
                } else {
                    0.0
                }
            }
            _ => continue,
        };

        credit += field_credit;
        fields_compared += 1;
    }

    let similarity = if fields_compared == 0 {
        0.0
    } else {
        credit / fields_compared as f64
    };

    PhysicalComparison {
        similarity,
        fields_compared,
    }
}
