use async_trait::async_trait;

use super::{CatalogError, CatalogSource};
use crate::models::{City, Doctor, Specialty};

/// In-memory catalog source for tests and demos.
#[derive(Debug, Clone, Default)]
pub struct MemoryCatalogSource {
    cities: Vec<City>,
    specialties: Vec<Specialty>,
    doctors: Vec<Doctor>,
    doctors_error: Option<String>,
}

impl MemoryCatalogSource {
    pub fn new(cities: Vec<City>, specialties: Vec<Specialty>, doctors: Vec<Doctor>) -> Self {
        Self {
            cities,
            specialties,
            doctors,
            doctors_error: None,
        }
    }

    /// Makes `fetch_doctors` fail with an HTTP client error.
    pub fn failing_doctors(mut self, message: &str) -> Self {
        self.doctors_error = Some(message.to_string());
        self
    }
}

#[async_trait]
impl CatalogSource for MemoryCatalogSource {
    async fn fetch_cities(&self) -> Result<Vec<City>, CatalogError> {
        Ok(self.cities.clone())
    }

    async fn fetch_specialties(&self) -> Result<Vec<Specialty>, CatalogError> {
        Ok(self.specialties.clone())
    }

    async fn fetch_doctors(&self) -> Result<Vec<Doctor>, CatalogError> {
        match &self.doctors_error {
            Some(message) => Err(CatalogError::HttpClient(message.clone())),
            None => Ok(self.doctors.clone()),
        }
    }
}
