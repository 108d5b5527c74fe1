use serde::{Deserialize, Serialize};

use super::Field;

/// Raw form input, one string per field. Empty string means "not provided".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormValues {
    pub name: String,
    /// Birth date as entered, `DD/MM/YYYY`.
    pub birthdate: String,
    pub sex: String,
    pub city: String,
    #[serde(rename = "speciality")]
    pub specialty: String,
    pub doctor: String,
    pub email: String,
    pub phone: String,
}

impl FormValues {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Birthdate => &self.birthdate,
            Field::Sex => &self.sex,
            Field::City => &self.city,
            Field::Specialty => &self.specialty,
            Field::Doctor => &self.doctor,
            Field::Email => &self.email,
            Field::Phone => &self.phone,
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let slot = match field {
            Field::Name => &mut self.name,
            Field::Birthdate => &mut self.birthdate,
            Field::Sex => &mut self.sex,
            Field::City => &mut self.city,
            Field::Specialty => &mut self.specialty,
            Field::Doctor => &mut self.doctor,
            Field::Email => &mut self.email,
            Field::Phone => &mut self.phone,
        };
        *slot = value.into();
    }

    pub fn has_email(&self) -> bool {
        !self.email.is_empty()
    }

    pub fn has_phone(&self) -> bool {
        !self.phone.is_empty()
    }
}
