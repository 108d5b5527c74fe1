//! Catalog loading — cities, specialties and doctors fetched once at startup.
//!
//! Sources implement [`CatalogSource`]; [`load_catalog`] fetches the three
//! collections concurrently and freezes them into an immutable [`Catalog`]
//! snapshot shared through `Arc`.

pub mod file;
pub mod http;
pub mod memory;

pub use file::*;
pub use http::*;
pub use memory::*;

use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;

use crate::models::{City, Doctor, Specialty};

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Catalog service is not reachable at {0}")]
    Connection(String),

    #[error("Catalog service returned error (status {status}): {body}")]
    Status { status: u16, body: String },

    #[error("HTTP client error: {0}")]
    HttpClient(String),

    #[error("Malformed catalog response: {0}")]
    ResponseParsing(String),

    #[error("Catalog file {path}: {source}")]
    File {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Supplier of the three read-only catalog collections.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    async fn fetch_cities(&self) -> Result<Vec<City>, CatalogError>;

    async fn fetch_specialties(&self) -> Result<Vec<Specialty>, CatalogError>;

    async fn fetch_doctors(&self) -> Result<Vec<Doctor>, CatalogError>;
}

/// Write-once snapshot of the catalog. Never mutated after load.
#[derive(Debug, Clone)]
pub struct Catalog {
    cities: Arc<[City]>,
    specialties: Arc<[Specialty]>,
    doctors: Arc<[Doctor]>,
}

/// Doctor whose city or specialty reference does not resolve.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DanglingReference {
    pub doctor_id: String,
    pub missing_city: Option<String>,
    pub missing_specialty: Option<String>,
}

impl Catalog {
    pub fn new(cities: Vec<City>, specialties: Vec<Specialty>, doctors: Vec<Doctor>) -> Self {
        Self {
            cities: cities.into(),
            specialties: specialties.into(),
            doctors: doctors.into(),
        }
    }

    /// The not-yet-loaded catalog; every filter over it is empty.
    pub fn empty() -> Self {
        Self::new(Vec::new(), Vec::new(), Vec::new())
    }

    pub fn cities(&self) -> &[City] {
        &self.cities
    }

    pub fn specialties(&self) -> &[Specialty] {
        &self.specialties
    }

    /// Shared handle used as the specialty-menu memo key.
    pub fn specialties_snapshot(&self) -> &Arc<[Specialty]> {
        &self.specialties
    }

    /// The full, unfiltered roster.
    pub fn doctors(&self) -> &[Doctor] {
        &self.doctors
    }

    pub fn is_empty(&self) -> bool {
        self.cities.is_empty() && self.specialties.is_empty() && self.doctors.is_empty()
    }

    /// Doctors pointing at a city or specialty id missing from the catalog.
    pub fn dangling_references(&self) -> Vec<DanglingReference> {
        self.doctors
            .iter()
            .filter_map(|d| {
                let missing_city = (!self.cities.iter().any(|c| c.id == d.city_id))
                    .then(|| d.city_id.clone());
                let missing_specialty = (!self.specialties.iter().any(|s| s.id == d.specialty_id))
                    .then(|| d.specialty_id.clone());
                (missing_city.is_some() || missing_specialty.is_some()).then(|| DanglingReference {
                    doctor_id: d.id.clone(),
                    missing_city,
                    missing_specialty,
                })
            })
            .collect()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::empty()
    }
}

/// Fetches all three collections concurrently and freezes them.
///
/// Any single failure aborts the load. Unresolvable doctor references are
/// logged, not rejected: lookups treat them as unknown.
pub async fn load_catalog(source: &dyn CatalogSource) -> Result<Arc<Catalog>, CatalogError> {
    let (cities, specialties, doctors) = tokio::try_join!(
        source.fetch_cities(),
        source.fetch_specialties(),
        source.fetch_doctors(),
    )?;

    let catalog = Catalog::new(cities, specialties, doctors);
    tracing::info!(
        cities = catalog.cities().len(),
        specialties = catalog.specialties().len(),
        doctors = catalog.doctors().len(),
        "Catalog loaded"
    );

    for dangling in catalog.dangling_references() {
        tracing::warn!(
            doctor_id = %dangling.doctor_id,
            missing_city = ?dangling.missing_city,
            missing_specialty = ?dangling.missing_specialty,
            "Doctor references unknown catalog entry"
        );
    }

    Ok(Arc::new(catalog))
}
