//! Cross-reference lookups between doctors, cities and specialties.
//!
//! Collections are small, so every lookup is a linear scan. A missing
//! reference is reported as an empty name (or `None` for object lookups),
//! never as an error.

use serde::{Deserialize, Serialize};

use crate::models::{City, Doctor, Specialty};

/// Display names behind a doctor's city and specialty references.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DoctorInfo {
    pub city_name: String,
    pub specialty_name: String,
}

/// Resolves both references; either name is empty when its id is unknown.
pub fn resolve_doctor_info(
    cities: &[City],
    specialties: &[Specialty],
    city_id: &str,
    specialty_id: &str,
) -> DoctorInfo {
    let city_name = cities
        .iter()
        .find(|c| c.id == city_id)
        .map(|c| c.name.clone())
        .unwrap_or_default();

    DoctorInfo {
        city_name,
        specialty_name: specialty_name_by_id(specialties, specialty_id),
    }
}

pub fn specialty_name_by_id(specialties: &[Specialty], id: &str) -> String {
    specialties
        .iter()
        .find(|s| s.id == id)
        .map(|s| s.name.clone())
        .unwrap_or_default()
}

pub fn find_city_by_name<'a>(cities: &'a [City], name: &str) -> Option<&'a City> {
    cities.iter().find(|c| c.name == name)
}

pub fn find_specialty_by_name<'a>(specialties: &'a [Specialty], name: &str) -> Option<&'a Specialty> {
    specialties.iter().find(|s| s.name == name)
}

/// First doctor with this surname; the doctor selector is keyed by surname.
pub fn find_doctor_by_surname<'a>(doctors: &'a [Doctor], surname: &str) -> Option<&'a Doctor> {
    doctors.iter().find(|d| d.surname == surname)
}

/// `"<name> <surname> (<specialty>)"`, with empty parentheses for an
/// unresolved specialty.
pub fn doctor_label(doctor: &Doctor, specialties: &[Specialty]) -> String {
    format!(
        "{} ({})",
        doctor.full_name(),
        specialty_name_by_id(specialties, &doctor.specialty_id)
    )
}
