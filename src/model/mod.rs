//! Watch records compared by the engine.
//!
//! [`WatchDescription`] is produced per request by the vision-analysis collaborator;
//! [`ReferenceWatch`] is a curated library record. Both share the [`Identity`],
//! [`PhysicalAttributes`] and [`AuthenticityIndicators`] shapes so fields can be compared
//! one-to-one. Every field is optional: records are partially populated in practice and
//! deserialize with `#[serde(default)]`. A field holding a value of the wrong type is read as
//! absent (see [`lenient`]) so one bad entry does not reject its record.

pub mod error;
pub mod lenient;


pub use error::ModelError;

use serde::{Deserialize, Serialize};

/// Identity fields of a watch.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Identity {
    #[serde(deserialize_with = "lenient::default_on_error")]
    pub brand: Option<String>,
    #[serde(deserialize_with = "lenient::default_on_error")]
    pub model: Option<String>,
    /// Collection or family, e.g. "Oyster Perpetual".
    #[serde(deserialize_with = "lenient::default_on_error")]
    pub collection: Option<String>,
    #[serde(deserialize_with = "lenient::default_on_error")]
    pub reference_number: Option<String>,
    #[serde(deserialize_with = "lenient::default_on_error")]
    pub dial_variant: Option<String>,
    #[serde(deserialize_with = "lenient::default_on_error")]
    pub bezel_variant: Option<String>,
    #[serde(deserialize_with = "lenient::default_on_error")]
    pub bracelet_variant: Option<String>,
    #[serde(deserialize_with = "lenient::default_on_error")]
    pub limited_edition: Option<bool>,
    #[serde(deserialize_with = "lenient::default_on_error")]
    pub serial_number: Option<String>,
    #[serde(deserialize_with = "lenient::default_on_error")]
    pub estimated_year: Option<String>,
}

/// Observable physical descriptors.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicalAttributes {
    #[serde(deserialize_with = "lenient::default_on_error")]
    pub case_material: Option<String>,
    #[serde(deserialize_with = "lenient::default_on_error")]
    pub case_finish: Option<String>,
    #[serde(deserialize_with = "lenient::default_on_error")]
    pub case_diameter_mm: Option<f64>,
    #[serde(deserialize_with = "lenient::default_on_error")]
    pub case_shape: Option<String>,
    #[serde(deserialize_with = "lenient::default_on_error")]
    pub bezel_type: Option<String>,
    #[serde(deserialize_with = "lenient::default_on_error")]
    pub crystal_type: Option<String>,
    #[serde(deserialize_with = "lenient::default_on_error")]
    pub crown_type: Option<String>,
    #[serde(deserialize_with = "lenient::default_on_error")]
    pub dial_color: Option<String>,
    #[serde(deserialize_with = "lenient::default_on_error")]
    pub hand_style: Option<String>,
    #[serde(deserialize_with = "lenient::default_on_error")]
    pub index_style: Option<String>,
    #[serde(deserialize_with = "lenient::default_on_error")]
    pub bracelet_type: Option<String>,
    #[serde(deserialize_with = "lenient::default_on_error")]
    pub clasp_type: Option<String>,
    #[serde(deserialize_with = "lenient::default_on_error")]
    pub has_date: Option<bool>,
    #[serde(deserialize_with = "lenient::default_on_error")]
    pub date_position: Option<String>,
}

/// Observed wear and condition.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConditionReport {
    #[serde(deserialize_with = "lenient::default_on_error")]
    pub grade: Option<String>,
    #[serde(deserialize_with = "lenient::default_on_error")]
    pub notes: Vec<String>,
}

/// Authenticity markers.
///
/// On a description these are what the analysis observed; on a reference they are what a
/// genuine example is expected to show.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthenticityIndicators {
    #[serde(deserialize_with = "lenient::default_on_error")]
    pub positive_signs: Vec<String>,
    #[serde(deserialize_with = "lenient::default_on_error")]
    pub concerns: Vec<String>,
    #[serde(deserialize_with = "lenient::default_on_error")]
    pub red_flags: Vec<String>,
    #[serde(deserialize_with = "lenient::default_on_error")]
    pub confidence: Option<String>,
    #[serde(deserialize_with = "lenient::default_on_error")]
    pub reasoning: Option<String>,
}

/// Structured description of a photographed watch.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WatchDescription {
    #[serde(deserialize_with = "lenient::default_on_error")]
    pub identity: Identity,
    #[serde(deserialize_with = "lenient::default_on_error")]
    pub physical: PhysicalAttributes,
    #[serde(deserialize_with = "lenient::default_on_error")]
    pub condition: ConditionReport,
    #[serde(deserialize_with = "lenient::default_on_error")]
    pub authenticity: AuthenticityIndicators,
    #[serde(deserialize_with = "lenient::default_on_error")]
    pub recommended_photos: Vec<String>,
    #[serde(deserialize_with = "lenient::default_on_error")]
    pub preliminary_assessment: Option<String>,
}

impl WatchDescription {
    pub fn new(brand: &str, model: &str) -> Self {
        Self {
            identity: Identity {
                brand: Some(brand.to_string()),
                model: Some(model.to_string()),
                ..Default::default()
            },
            ..Default::default()
        }
    }

    /// Brand as reported, if present and not blank.
    pub fn brand(&self) -> Option<&str> {
        non_blank(&self.identity.brand)
    }

    pub fn model(&self) -> Option<&str> {
        non_blank(&self.identity.model)
    }

    /// A description needs at least a brand to retrieve candidates for.
    pub fn validate(&self) -> Result<(), ModelError> {
        if self.brand().is_none() {
            return Err(ModelError::MissingBrand);
        }
        Ok(())
    }
}

/// Curation state of a library record.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VerificationStatus {
    #[default]
    Pending,
    Verified,
    Disputed,
}

/// Library record used as ground truth.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReferenceWatch {
    pub id: String,
    #[serde(deserialize_with = "lenient::default_on_error")]
    pub identity: Identity,
    #[serde(deserialize_with = "lenient::default_on_error")]
    pub physical: PhysicalAttributes,
    #[serde(deserialize_with = "lenient::default_on_error")]
    pub condition_grade: Option<String>,
    #[serde(deserialize_with = "lenient::default_on_error")]
    pub authenticity: AuthenticityIndicators,
    #[serde(deserialize_with = "lenient::default_on_error")]
    pub verification_status: VerificationStatus,
}

impl ReferenceWatch {
    pub fn new(id: &str, brand: &str, model: &str) -> Self {
        Self {
            id: id.to_string(),
            identity: Identity {
                brand: Some(brand.to_string()),
                model: Some(model.to_string()),
                ..Default::default()
            },
            ..Default::default()
        }
    }

    pub fn brand(&self) -> Option<&str> {
        non_blank(&self.identity.brand)
    }

    pub fn model(&self) -> Option<&str> {
        non_blank(&self.identity.model)
    }

    pub fn is_verified(&self) -> bool {
        self.verification_status == VerificationStatus::Verified
    }
}

/// Returns the value if it contains anything besides whitespace.
#[inline]
pub fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.trim().is_empty())
}
