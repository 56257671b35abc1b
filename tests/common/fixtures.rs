//! Test fixtures for integration tests.

use loupe::model::{ReferenceWatch, VerificationStatus, WatchDescription};

pub const DEFAULT_BRAND: &str = "Rolex";

pub const DEFAULT_MODEL: &str = "Submariner";

#[derive(Default)]
pub struct DescriptionBuilder {
    description: WatchDescription,
}

impl DescriptionBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn brand(mut self, brand: &str) -> Self {
        self.description.identity.brand = Some(brand.to_string());
        self
    }

    pub fn model(mut self, model: &str) -> Self {
        self.description.identity.model = Some(model.to_string());
        self
    }

    pub fn reference_number(mut self, reference_number: &str) -> Self {
        self.description.identity.reference_number = Some(reference_number.to_string());
        self
    }

    pub fn serial_number(mut self, serial_number: &str) -> Self {
        self.description.identity.serial_number = Some(serial_number.to_string());
        self
    }

    pub fn dial_color(mut self, color: &str) -> Self {
        self.description.physical.dial_color = Some(color.to_string());
        self
    }

    pub fn case_material(mut self, material: &str) -> Self {
        self.description.physical.case_material = Some(material.to_string());
        self
    }

    pub fn has_date(mut self, has_date: bool) -> Self {
        self.description.physical.has_date = Some(has_date);
        self
    }

    pub fn positive_signs(mut self, signs: &[&str]) -> Self {
        self.description.authenticity.positive_signs = to_strings(signs);
        self
    }

    pub fn red_flags(mut self, flags: &[&str]) -> Self {
        self.description.authenticity.red_flags = to_strings(flags);
        self
    }

    pub fn build(self) -> WatchDescription {
        self.description
    }
}

pub struct ReferenceBuilder {
    reference: ReferenceWatch,
}

impl ReferenceBuilder {
    pub fn new(id: &str) -> Self {
        Self {
            reference: ReferenceWatch::new(id, DEFAULT_BRAND, DEFAULT_MODEL),
        }
    }

    pub fn brand(mut self, brand: &str) -> Self {
        self.reference.identity.brand = Some(brand.to_string());
        self
    }

    pub fn model(mut self, model: &str) -> Self {
        self.reference.identity.model = Some(model.to_string());
        self
    }

    pub fn reference_number(mut self, reference_number: &str) -> Self {
        self.reference.identity.reference_number = Some(reference_number.to_string());
        self
    }

    pub fn dial_color(mut self, color: &str) -> Self {
        self.reference.physical.dial_color = Some(color.to_string());
        self
    }

    pub fn case_material(mut self, material: &str) -> Self {
        self.reference.physical.case_material = Some(material.to_string());
        self
    }

    pub fn has_date(mut self, has_date: bool) -> Self {
        self.reference.physical.has_date = Some(has_date);
        self
    }

    pub fn positive_signs(mut self, signs: &[&str]) -> Self {
        self.reference.authenticity.positive_signs = to_strings(signs);
        self
    }

    pub fn verified(mut self) -> Self {
        self.reference.verification_status = VerificationStatus::Verified;
        self
    }

    pub fn build(self) -> ReferenceWatch {
        self.reference
    }
}

pub fn to_strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

/// Six same-brand, same-model references whose physical overlap with
/// [`graded_description`] decreases with the index.
pub fn graded_references() -> Vec<ReferenceWatch> {
    let colors = ["black", "black", "black", "white", "white", "white"];
    let materials = ["Oystersteel", "Oystersteel", "gold", "Oystersteel", "gold", "gold"];
    let dates = [true, false, true, true, true, false];

    (0..6)
        .map(|i| {
            ReferenceBuilder::new(&format!("ref-{}", i))
                .dial_color(colors[i])
                .case_material(materials[i])
                .has_date(dates[i])
                .build()
        })
        .collect()
}

pub fn graded_description() -> WatchDescription {
    DescriptionBuilder::new()
        .brand(DEFAULT_BRAND)
        .model(DEFAULT_MODEL)
        .dial_color("black")
        .case_material("Oystersteel")
        .has_date(true)
        .build()
}
