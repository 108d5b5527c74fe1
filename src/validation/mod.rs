//! Contact/identity form validation.
//!
//! Every field gets an explicit verdict; the email/phone pair additionally
//! carries a group rule. Validation always runs over the whole form so that an
//! edit to one of the pair re-checks the other.

pub mod form;
pub mod rules;

pub use form::*;
pub use rules::*;

use std::collections::BTreeMap;

use thiserror::Error;

use crate::models::{Field, FormValues};

/// Why a field (or the contact group) failed. `Display` is the user message.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    #[error("Field is required")]
    Required,

    #[error("Please use only letters")]
    LettersOnly,

    #[error("Please select Male or Female")]
    InvalidSex,

    #[error("Please enter valid email (format: example@mail.com)")]
    InvalidEmail,

    #[error("Please enter valid phone number (format: +38XXXXXXXXXX)")]
    InvalidPhone,

    #[error("Please provide an email or a phone number")]
    ContactMissing,
}

/// Outcome of validating a complete form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    pub field_errors: BTreeMap<Field, Option<FieldError>>,
    /// Email/phone group rule, independent of the per-field verdicts.
    pub group_error: Option<FieldError>,
    pub is_valid: bool,
}

impl ValidationReport {
    pub fn error(&self, field: Field) -> Option<FieldError> {
        self.field_errors.get(&field).copied().flatten()
    }

    pub fn message(&self, field: Field) -> Option<String> {
        self.error(field).map(|e| e.to_string())
    }

    /// Field name → message (or `None` when the field passes).
    pub fn messages(&self) -> BTreeMap<&'static str, Option<String>> {
        self.field_errors
            .iter()
            .map(|(field, err)| (field.as_str(), err.map(|e| e.to_string())))
            .collect()
    }
}

/// Validates every field plus the contact group. Never fails; problems are data.
pub fn validate(values: &FormValues) -> ValidationReport {
    let field_errors: BTreeMap<Field, Option<FieldError>> = Field::ALL
        .iter()
        .map(|&field| (field, check_field(field, values)))
        .collect();
    let group_error = check_contact_group(values);
    let is_valid = group_error.is_none() && field_errors.values().all(Option::is_none);

    ValidationReport {
        field_errors,
        group_error,
        is_valid,
    }
}

/// Email input label; the asterisk marks it mandatory while phone is empty.
pub fn email_label(values: &FormValues) -> &'static str {
    if values.has_phone() {
        "Email"
    } else {
        "Email *"
    }
}

/// Phone input label; the asterisk marks it mandatory while email is empty.
pub fn phone_label(values: &FormValues) -> &'static str {
    if values.has_email() {
        "Phone number"
    } else {
        "Phone number *"
    }
}
