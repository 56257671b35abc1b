//! Field-by-field explanation of how a description agrees with a reference.
//!
//! Scalar fields come from a declarative table ([`COMPARABLE_FIELDS`]) grouped by
//! [`Importance`]; each entry carries its own minimum similarity. Text fields are scored with
//! [`calculate_string_score`](crate::similarity::calculate_string_score) in `auto` mode and
//! mapped to a [`Severity`]:
//!
//! | Similarity | Severity |
//! |---|---|
//! | `>= 0.95` | `exact_match` |
//! | `>= field minimum` | `minor_diff` |
//! | below, critical field | `critical` |
//! | below, other field | `major_diff` |
//!
//! A value present on only one side is `missing_data`, never `critical`. The two authenticity
//! marker lists are handled separately: expected positive signs are matched fuzzily against
//! observed ones, and observed red flags are reported only when the reference expects none.

pub mod analyzer;
pub mod fields;
pub mod summary;
pub mod types;


pub use analyzer::{
    analyze_discrepancies, compare_field, compare_positive_signs, compare_red_flags,
    explain_similarity, text_severity,
};
pub use fields::{COMPARABLE_FIELDS, FieldSpec, field_spec};
pub use summary::{DiscrepancySummary, summarize_discrepancies};
pub use types::{FieldDiscrepancy, FieldValue, Importance, Severity};
