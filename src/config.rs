//! Client configuration for the Sanity content lake

use std::env;

/// Client configuration
#[derive(Debug, Clone)]
pub struct SanityConfig {
    /// Sanity project identifier
    pub project_id: String,
    /// Dataset name (default: "production")
    pub dataset: String,
    /// Dated API version, without the leading "v" (default: "2024-01-01")
    pub api_version: String,
    /// Optional API token for reading non-public datasets
    pub token: Option<String>,
    /// Route tokenless reads through the CDN edge (default: true)
    pub use_cdn: bool,
    /// Request timeout in seconds (default: 30)
    pub timeout_secs: u64,
}

impl Default for SanityConfig {
    fn default() -> Self {
        Self {
            project_id: "w8eezxao".to_string(),
            dataset: "production".to_string(),
            api_version: "2024-01-01".to_string(),
            token: None,
            use_cdn: true,
            timeout_secs: 30,
        }
    }
}

impl SanityConfig {
    /// Build a config from `SANITY_*` environment variables, falling back to
    /// the defaults for anything unset.
    ///
    /// Recognized: `SANITY_PROJECT_ID`, `SANITY_DATASET`, `SANITY_API_VERSION`,
    /// `SANITY_API_TOKEN`, `SANITY_USE_CDN`, `SANITY_TIMEOUT_SECS`.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            project_id: env_or("SANITY_PROJECT_ID", defaults.project_id),
            dataset: env_or("SANITY_DATASET", defaults.dataset),
            api_version: env_or("SANITY_API_VERSION", defaults.api_version),
            token: env::var("SANITY_API_TOKEN").ok().filter(|t| !t.is_empty()),
            use_cdn: env::var("SANITY_USE_CDN")
                .map(|v| !matches!(v.as_str(), "false" | "0"))
                .unwrap_or(defaults.use_cdn),
            timeout_secs: env::var("SANITY_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.timeout_secs),
        }
    }

    /// API host for queries. The CDN edge caches responses but rejects
    /// authenticated requests, so a configured token forces the live host.
    pub fn api_host(&self) -> &'static str {
        if self.use_cdn && self.token.is_none() {
            "apicdn.sanity.io"
        } else {
            "api.sanity.io"
        }
    }

    /// Full URL of the query endpoint for this project and dataset.
    pub fn query_url(&self) -> String {
        format!(
            "https://{}.{}/v{}/data/query/{}",
            self.project_id,
            self.api_host(),
            self.api_version,
            self.dataset
        )
    }
}

fn env_or(key: &str, default: String) -> String {
    match env::var(key) {
        Ok(value) if !value.is_empty() => value,
        _ => default,
    }
}
