use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde::de::DeserializeOwned;

use super::{CatalogError, CatalogSource};
use crate::models::{City, Doctor, Specialty};

pub const CITIES_FILE: &str = "cities.json";
pub const SPECIALTIES_FILE: &str = "specialties.json";
pub const DOCTORS_FILE: &str = "doctors.json";

/// Reads the catalog from `cities.json`, `specialties.json` and `doctors.json`
/// inside one directory (an offline copy of the catalog service).
#[derive(Debug, Clone)]
pub struct JsonDirCatalogSource {
    dir: PathBuf,
}

impl JsonDirCatalogSource {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    async fn read_json<T: DeserializeOwned>(&self, file: &str) -> Result<T, CatalogError> {
        let path = self.dir.join(file);
        let bytes = tokio::fs::read(&path).await.map_err(|source| CatalogError::File {
            path: path.display().to_string(),
            source,
        })?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}

#[async_trait]
impl CatalogSource for JsonDirCatalogSource {
    async fn fetch_cities(&self) -> Result<Vec<City>, CatalogError> {
        self.read_json(CITIES_FILE).await
    }

    async fn fetch_specialties(&self) -> Result<Vec<Specialty>, CatalogError> {
        self.read_json(SPECIALTIES_FILE).await
    }

    async fn fetch_doctors(&self) -> Result<Vec<Doctor>, CatalogError> {
        self.read_json(DOCTORS_FILE).await
    }
}
