use async_trait::async_trait;
use serde::de::DeserializeOwned;

use super::{CatalogError, CatalogSource};
use crate::config::CatalogConfig;
use crate::models::{City, Doctor, Specialty};

/// Catalog service client. Each collection is a JSON array behind its own path.
pub struct HttpCatalogSource {
    base_url: String,
    config: CatalogConfig,
    client: reqwest::Client,
}

impl HttpCatalogSource {
    pub fn new(config: CatalogConfig) -> Result<Self, CatalogError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| CatalogError::HttpClient(e.to_string()))?;

        Ok(Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            config,
            client,
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, CatalogError> {
        let url = self.url(path);
        tracing::debug!(%url, "Fetching catalog collection");

        let response = self.client.get(&url).send().await.map_err(|e| {
            if e.is_connect() {
                CatalogError::Connection(self.base_url.clone())
            } else if e.is_timeout() {
                CatalogError::HttpClient(format!(
                    "Request timed out after {}s",
                    self.config.timeout.as_secs()
                ))
            } else {
                CatalogError::HttpClient(e.to_string())
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(CatalogError::Status {
                status: status.as_u16(),
                body,
            });
        }

        response
            .json()
            .await
            .map_err(|e| CatalogError::ResponseParsing(e.to_string()))
    }
}

#[async_trait]
impl CatalogSource for HttpCatalogSource {
    async fn fetch_cities(&self) -> Result<Vec<City>, CatalogError> {
        self.get_json(&self.config.cities_path).await
    }

    async fn fetch_specialties(&self) -> Result<Vec<Specialty>, CatalogError> {
        self.get_json(&self.config.specialties_path).await
    }

    async fn fetch_doctors(&self) -> Result<Vec<Doctor>, CatalogError> {
        self.get_json(&self.config.doctors_path).await
    }
}
