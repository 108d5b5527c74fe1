//! Per-field format and requiredness rules.

use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;

use super::FieldError;
use crate::models::{Field, FormValues, Sex};

/// Letters and whitespace only.
static NAME_PATTERN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[A-Za-z\s]+$").unwrap());

/// `local@domain.tld` (TLD of two or more letters) or `local@[a.b.c.d]`.
/// The local part is either dot-separated atoms or a quoted string.
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r#"^(([^<>()\[\]\\.,;:\s@"]+(\.[^<>()\[\]\\.,;:\s@"]+)*)|(".+"))"#,
        r"@((\[[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\])|(([a-zA-Z\-0-9]+\.)+[a-zA-Z]{2,}))$",
    ))
    .unwrap()
});

/// Optional `+`, optional `3`/`8` country-code digits, then `0` and nine digits.
static PHONE_PATTERN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\+?3?8?(0[0-9]{9})$").unwrap());

pub fn is_valid_name(value: &str) -> bool {
    NAME_PATTERN.is_match(value)
}

pub fn is_valid_email(value: &str) -> bool {
    EMAIL_PATTERN.is_match(value)
}

pub fn is_valid_phone(value: &str) -> bool {
    PHONE_PATTERN.is_match(value)
}

/// Verdict for one field given the whole form. `None` means the field passes.
///
/// Email and phone read each other: each is required only while the other is
/// empty, and is format-checked whenever it is non-empty.
pub fn check_field(field: Field, values: &FormValues) -> Option<FieldError> {
    let value = values.get(field);
    match field {
        Field::Name => required(value).or_else(|| (!is_valid_name(value)).then_some(FieldError::LettersOnly)),
        Field::Birthdate | Field::City | Field::Doctor => required(value),
        Field::Sex => required(value).or_else(|| Sex::from_str(value).err().map(|_| FieldError::InvalidSex)),
        Field::Specialty => None,
        Field::Email => contact(value, values.has_phone(), is_valid_email, FieldError::InvalidEmail),
        Field::Phone => contact(value, values.has_email(), is_valid_phone, FieldError::InvalidPhone),
    }
}

/// The (email, phone) pair must not both be empty.
pub fn check_contact_group(values: &FormValues) -> Option<FieldError> {
    (!values.has_email() && !values.has_phone()).then_some(FieldError::ContactMissing)
}

/// Whether `field` is currently mandatory.
pub fn is_required(field: Field, values: &FormValues) -> bool {
    match field {
        Field::Specialty => false,
        Field::Email => !values.has_phone(),
        Field::Phone => !values.has_email(),
        _ => true,
    }
}

fn required(value: &str) -> Option<FieldError> {
    value.is_empty().then_some(FieldError::Required)
}

fn contact(
    value: &str,
    other_present: bool,
    is_valid: fn(&str) -> bool,
    invalid: FieldError,
) -> Option<FieldError> {
    if value.is_empty() {
        return (!other_present).then_some(FieldError::Required);
    }
    (!is_valid(value)).then_some(invalid)
}
