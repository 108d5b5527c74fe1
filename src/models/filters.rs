use chrono::NaiveDate;

use super::{City, Specialty};

/// Independently optional criteria narrowing the doctor roster.
///
/// `None` in any slot means that stage passes its input through untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DoctorConstraints {
    pub city: Option<City>,
    pub specialty: Option<Specialty>,
    pub birth_date: Option<NaiveDate>,
}

impl DoctorConstraints {
    pub fn is_empty(&self) -> bool {
        self.city.is_none() && self.specialty.is_none() && self.birth_date.is_none()
    }
}
