use tracing::debug;

use super::fields::{
    COMPARABLE_FIELDS, FieldSpec, POSITIVE_SIGNS_IMPORTANCE, POSITIVE_SIGNS_LABEL,
    POSITIVE_SIGNS_PATH, RED_FLAGS_IMPORTANCE, RED_FLAGS_LABEL, RED_FLAGS_PATH,
};
use super::types::{FieldDiscrepancy, FieldValue, Importance, Severity};
use crate::constants::{
    EXACT_MATCH_SIMILARITY, MARKER_MATCH_SIMILARITY, MINOR_VARIATION_SIMILARITY,
    MODERATE_DIFFERENCE_SIMILARITY,
};
use crate::model::{ReferenceWatch, WatchDescription};
use crate::similarity::{SimilarityMode, calculate_string_score};

/// Compares every table field, then the authenticity marker lists.
///
/// The result is flat and keeps declaration order. Fields absent on both sides produce no
/// entry; fields whose two values are of incompatible kinds are skipped.
pub fn analyze_discrepancies(
    description: &WatchDescription,
    reference: &ReferenceWatch,
) -> Vec<FieldDiscrepancy> {
    let mut discrepancies: Vec<FieldDiscrepancy> = COMPARABLE_FIELDS
        .iter()
        .filter_map(|spec| {
            compare_field(
                spec,
                spec.description_value(description),
                spec.reference_value(reference),
            )
        })
        .collect();

    discrepancies.extend(compare_positive_signs(
        &description.authenticity.positive_signs,
        &reference.authenticity.positive_signs,
    ));
    discrepancies.extend(compare_red_flags(
        &description.authenticity.red_flags,
        &reference.authenticity.red_flags,
    ));

    discrepancies
}

/// Compares one scalar field.
pub fn compare_field(
    spec: &FieldSpec,
    description_value: FieldValue,
    reference_value: FieldValue,
) -> Option<FieldDiscrepancy> {
    let discrepancy = |severity, similarity_score, explanation, dv, rv| FieldDiscrepancy {
        field_path: spec.path.to_string(),
        field_label: spec.label.to_string(),
        importance: spec.importance,
        severity,
        description_value: dv,
        reference_value: rv,
        similarity_score,
        explanation,
    };

    match (description_value.is_absent(), reference_value.is_absent()) {
        (true, true) => return None,
        (true, false) => {
            let explanation = format!("{} not reported in the description", spec.label);
            return Some(discrepancy(
                Severity::MissingData,
                None,
                explanation,
                description_value,
                reference_value,
            ));
        }
        (false, true) => {
            let explanation = format!("{} not recorded on the reference", spec.label);
            return Some(discrepancy(
                Severity::MissingData,
                None,
                explanation,
                description_value,
                reference_value,
            ));
        }
        (false, false) => {}
    }

    match (&description_value, &reference_value) {
        (FieldValue::Flag(observed), FieldValue::Flag(expected)) => {
            let (severity, similarity, explanation) = if observed == expected {
                (Severity::ExactMatch, 100.0, format!("{} matches", spec.label))
            } else {
                (
                    Severity::MajorDiff,
                    0.0,
                    format!(
                        "{} differs ({} vs {})",
                        spec.label, description_value, reference_value
                    ),
                )
            };
            Some(discrepancy(
                severity,
                Some(similarity),
                explanation,
                description_value,
                reference_value,
            ))
        }
        (FieldValue::Text(observed), FieldValue::Text(expected)) => {
            let similarity = calculate_string_score(observed, expected, SimilarityMode::Auto);
            let severity = text_severity(similarity, spec.min_similarity, spec.importance);
            let explanation =
                explain_similarity(spec.label, similarity, &description_value, &reference_value);
            Some(discrepancy(
                severity,
                Some(similarity * 100.0),
                explanation,
                description_value,
                reference_value,
            ))
        }
        _ => {
            debug!(
                field = spec.path,
                description_value = %description_value,
                reference_value = %reference_value,
                "Skipping field with incompatible value kinds"
            );
            None
        }
    }
}

/// Severity of a string comparison.
pub fn text_severity(similarity: f64, min_similarity: f64, importance: Importance) -> Severity {
    if similarity >= EXACT_MATCH_SIMILARITY {
        Severity::ExactMatch
    } else if similarity >= min_similarity {
        Severity::MinorDiff
    } else if importance == Importance::Critical {
        Severity::Critical
    } else {
        Severity::MajorDiff
    }
}

/// Human-readable explanation banded by similarity.
pub fn explain_similarity(
    label: &str,
    similarity: f64,
    observed: &FieldValue,
    expected: &FieldValue,
) -> String {
    if similarity >= EXACT_MATCH_SIMILARITY {
        format!("{} matches", label)
    } else if similarity >= MINOR_VARIATION_SIMILARITY {
        format!("Minor variation in {} ({} vs {})", label, observed, expected)
    } else if similarity >= MODERATE_DIFFERENCE_SIMILARITY {
        format!(
            "Moderate difference in {} ({} vs {}), verify manually",
            label, observed, expected
        )
    } else {
        format!(
            "Significant mismatch in {} ({} vs {}), possible red flag",
            label, observed, expected
        )
    }
}

/// Checks how many markers expected on the reference were observed.
///
/// Returns `None` when the reference declares no expected markers.
pub fn compare_positive_signs(observed: &[String], expected: &[String]) -> Option<FieldDiscrepancy> {
    let observed_value = FieldValue::list(observed);
    let expected_value = FieldValue::list(expected);

    let (FieldValue::List(observed_signs), FieldValue::List(expected_signs)) =
        (&observed_value, &expected_value)
    else {
        return None;
    };
    if expected_signs.is_empty() {
        return None;
    }

    let missing: Vec<&str> = expected_signs
        .iter()
        .filter(|sign| {
            !observed_signs.iter().any(|seen| {
                calculate_string_score(sign, seen, SimilarityMode::Auto) > MARKER_MATCH_SIMILARITY
            })
        })
        .map(String::as_str)
        .collect();

    let total = expected_signs.len();
    let found = total - missing.len();
    let rate = found as f64 / total as f64;

    let severity = if rate >= 0.9 {
        Severity::ExactMatch
    } else if rate >= 0.7 {
        Severity::MinorDiff
    } else if rate >= 0.5 {
        Severity::MajorDiff
    } else {
        Severity::Critical
    };

    let mut explanation = format!(
        "{} of {} expected authenticity markers observed",
        found, total
    );
    if !missing.is_empty() {
        explanation.push_str(&format!("; not observed: {}", missing.join(", ")));
    }

    Some(FieldDiscrepancy {
        field_path: POSITIVE_SIGNS_PATH.to_string(),
        field_label: POSITIVE_SIGNS_LABEL.to_string(),
        importance: POSITIVE_SIGNS_IMPORTANCE,
        severity,
        description_value: observed_value,
        reference_value: expected_value,
        similarity_score: Some(rate * 100.0),
        explanation,
    })
}

/// Flags red flags reported against a reference that expects none.
///
/// The converse (flags expected on the reference but not reported) is not checked.
pub fn compare_red_flags(observed: &[String], expected: &[String]) -> Option<FieldDiscrepancy> {
    let observed_value = FieldValue::list(observed);
    let expected_value = FieldValue::list(expected);

    if observed_value.is_absent() || !expected_value.is_absent() {
        return None;
    }

    let count = match &observed_value {
        FieldValue::List(flags) => flags.len(),
        _ => 0,
    };

    Some(FieldDiscrepancy {
        field_path: RED_FLAGS_PATH.to_string(),
        field_label: RED_FLAGS_LABEL.to_string(),
        importance: RED_FLAGS_IMPORTANCE,
        severity: Severity::Critical,
        explanation: format!(
            "Description reports {} red flag(s) not expected on a genuine reference: {}",
            count, observed_value
        ),
        description_value: observed_value,
        reference_value: expected_value,
        similarity_score: None,
    })
}
