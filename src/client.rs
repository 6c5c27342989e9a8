//! HTTP client for the Sanity content lake query API

use async_trait::async_trait;
use reqwest::{header, Client};
use serde::Deserialize;
use serde_json::Value;
use std::time::Duration;
use tracing::debug;

use crate::config::SanityConfig;
use crate::error::{ContentError, Result};
use crate::store::{ContentStore, QueryParams};

/// Envelope wrapping every query response.
#[derive(Debug, Deserialize)]
struct QueryEnvelope {
    #[serde(default)]
    result: Value,
}

/// HTTP implementation of [`ContentStore`] against the content lake.
///
/// Queries go out as `GET {query_url}?query=…&$param=…` with each parameter
/// value encoded as a JSON literal. Tokenless reads hit the CDN edge;
/// configuring a token switches to the live API host and sends it as a
/// bearer credential on every request.
///
/// # Example
///
/// ```rust,no_run
/// use folio_content::{SanityClient, SanityConfig};
///
/// # fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = SanityClient::new(SanityConfig {
///     project_id: "w8eezxao".into(),
///     ..Default::default()
/// })?;
/// # Ok(())
/// # }
/// ```
pub struct SanityClient {
    config: SanityConfig,
    client: Client,
}

impl SanityClient {
    /// Create a new client for the configured project and dataset.
    pub fn new(config: SanityConfig) -> Result<Self> {
        let mut headers = header::HeaderMap::new();
        if let Some(ref token) = config.token {
            headers.insert(
                header::AUTHORIZATION,
                header::HeaderValue::from_str(&format!("Bearer {}", token))
                    .map_err(|e| ContentError::Config(format!("invalid API token: {}", e)))?,
            );
        }

        let client = Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| ContentError::Config(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self { config, client })
    }

    /// Create a client from `SANITY_*` environment variables.
    pub fn from_env() -> Result<Self> {
        Self::new(SanityConfig::from_env())
    }

    pub fn config(&self) -> &SanityConfig {
        &self.config
    }
}

// Parameter values are sent as JSON literals: strings quoted, numbers bare.
fn param_literal(value: &Value) -> String {
    value.to_string()
}

#[async_trait]
impl ContentStore for SanityClient {
    async fn query(&self, query: &str, params: &QueryParams) -> Result<Value> {
        let url = self.config.query_url();
        let mut request = self.client.get(&url).query(&[("query", query)]);
        for (name, value) in params.iter() {
            request = request.query(&[(format!("${}", name), param_literal(value))]);
        }

        debug!(query, "content lake query");
        let response = request.send().await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message = response.text().await.unwrap_or_default();
            return Err(ContentError::Store { status, message });
        }

        let envelope: QueryEnvelope = response.json().await?;
        Ok(envelope.result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{from_value, json};

    #[test]
    fn envelope_unwraps_the_result_field() {
        let envelope: QueryEnvelope =
            from_value(json!({ "result": [{ "title": "x" }], "ms": 12 })).unwrap();
        assert_eq!(envelope.result, json!([{ "title": "x" }]));
    }

    #[test]
    fn envelope_without_result_is_null() {
        let envelope: QueryEnvelope = from_value(json!({ "ms": 3 })).unwrap();
        assert!(envelope.result.is_null());
    }

    #[test]
    fn string_params_encode_as_quoted_literals() {
        assert_eq!(param_literal(&json!("edge-cache")), "\"edge-cache\"");
        assert_eq!(param_literal(&json!(4)), "4");
    }

    #[test]
    fn client_builds_with_token() {
        let client = SanityClient::new(SanityConfig {
            token: Some("sk-test".into()),
            ..Default::default()
        });
        assert!(client.is_ok());
    }
}
