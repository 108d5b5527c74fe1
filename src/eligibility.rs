//! Eligibility predicates — which specialties a patient's sex admits and which
//! doctors a patient's age admits.
//!
//! All functions here are pure. The only clock read happens in
//! [`age_from_birth_date`]; everything else takes "today" explicitly.

use chrono::{Datelike, Local, NaiveDate};

use crate::config::{ADULT_AGE, BIRTHDATE_FORMAT};
use crate::models::{Doctor, ModelError, Sex, Specialty};

/// Whether `specialty` may be offered to a patient of `sex`.
///
/// A male patient loses specialties restricted to `"Female"`, a female patient
/// loses those restricted to `"Male"`. With no sex chosen nothing is excluded.
pub fn specialty_allowed_for_sex(specialty: &Specialty, sex: Option<Sex>) -> bool {
    match sex {
        Some(sex) => specialty.gender() != Some(sex.opposite().as_str()),
        None => true,
    }
}

/// Whole years between `birth` and `today`, calendar-correct.
///
/// The year difference is reduced by one while `today` precedes the birthday in
/// the current year. A future `birth` yields a negative age and is passed
/// through unchanged.
pub fn age_on(birth: NaiveDate, today: NaiveDate) -> i32 {
    let mut age = today.year() - birth.year();
    let before_birthday = today.month() < birth.month()
        || (today.month() == birth.month() && today.day() < birth.day());
    if before_birthday {
        age -= 1;
    }
    age
}

/// Age in whole years as of the local calendar date, `None` without a date.
pub fn age_from_birth_date(birth: Option<NaiveDate>) -> Option<i32> {
    birth.map(|b| age_on(b, Local::now().date_naive()))
}

/// Minors see pediatricians only, adults see non-pediatricians only.
/// Without a known age every doctor is eligible.
pub fn doctor_eligible_for_age(doctor: &Doctor, age: Option<i32>) -> bool {
    match age {
        None => true,
        Some(age) if age < ADULT_AGE => doctor.is_pediatrician,
        Some(_) => !doctor.is_pediatrician,
    }
}

/// Parses a `DD/MM/YYYY` birth date as entered in the form.
pub fn parse_birthdate(raw: &str) -> Result<NaiveDate, ModelError> {
    NaiveDate::parse_from_str(raw.trim(), BIRTHDATE_FORMAT).map_err(|_| ModelError::InvalidDate {
        field: "birthdate".into(),
        value: raw.into(),
    })
}

pub fn format_birthdate(date: NaiveDate) -> String {
    date.format(BIRTHDATE_FORMAT).to_string()
}
