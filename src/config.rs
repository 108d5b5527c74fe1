use std::time::Duration;

/// Application-level constants
pub const APP_NAME: &str = "Docselect";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Patients younger than this are routed to pediatricians only.
pub const ADULT_AGE: i32 = 18;

/// Display/entry format of the birth date form field.
pub const BIRTHDATE_FORMAT: &str = "%d/%m/%Y";

/// Environment variable holding the catalog service base URL.
pub const API_URL_ENV: &str = "DOCSELECT_API_URL";

/// Environment variable overriding the catalog request timeout (seconds).
pub const TIMEOUT_ENV: &str = "DOCSELECT_TIMEOUT_SECS";

const DEFAULT_API_URL: &str = "http://localhost:3000";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Default tracing filter when `RUST_LOG` is not set.
pub fn default_log_filter() -> &'static str {
    "docselect=info,docselect_lib=info"
}

/// Where the catalog service lives and which resource holds each collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogConfig {
    pub base_url: String,
    pub cities_path: String,
    pub specialties_path: String,
    pub doctors_path: String,
    pub timeout: Duration,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.into(),
            cities_path: "9fcb58ca-d3dd-424b-873b-dd3c76f000f4".into(),
            specialties_path: "e8897b19-46a0-4124-8454-0938225ee9ca".into(),
            doctors_path: "3d1c993c-cd8e-44c3-b1cb-585222859c21".into(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl CatalogConfig {
    /// Defaults overridden by `DOCSELECT_API_URL` / `DOCSELECT_TIMEOUT_SECS`.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();
        if let Some(url) = lookup(API_URL_ENV).filter(|u| !u.trim().is_empty()) {
            config.base_url = url;
        }
        match lookup(TIMEOUT_ENV).map(|raw| raw.trim().parse::<u64>()) {
            Some(Ok(secs)) if secs > 0 => config.timeout = Duration::from_secs(secs),
            Some(_) => tracing::warn!(
                var = TIMEOUT_ENV,
                default_secs = DEFAULT_TIMEOUT_SECS,
                "Ignoring invalid catalog timeout"
            ),
            None => {}
        }
        config
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}
