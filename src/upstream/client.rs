//! Diagnostics backend client.
//!
//! # Responsibilities
//! - Hold a single pooled HTTP client for the upstream backend
//! - Issue the diagnostics GET, exactly once per call
//! - Classify failures (transport, non-2xx status, undecodable body)

use std::time::Duration;

use reqwest::header::{HeaderValue, CONTENT_TYPE};
use reqwest::Client;
use serde_json::Value;

use crate::config::UpstreamConfig;
use crate::error::{GatewayError, Result};
use crate::observability::metrics;

/// Client for the backend diagnostics endpoint.
#[derive(Clone)]
pub struct DiagnosticsClient {
    client: Client,
    url: String,
}

impl DiagnosticsClient {
    /// Build a client for the configured upstream.
    ///
    /// No request timeout is applied unless `timeout_secs` is set. System
    /// proxy variables are ignored; the backend is addressed directly.
    pub fn new(config: &UpstreamConfig) -> std::result::Result<Self, reqwest::Error> {
        let mut builder = Client::builder().no_proxy();
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        Ok(Self {
            client: builder.build()?,
            url: config.diagnostics_url(),
        })
    }

    /// The URL every fetch targets.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Fetch the diagnostics document and return it verbatim.
    pub async fn fetch(&self) -> Result<Value> {
        tracing::debug!(url = %self.url, "Fetching system diagnostics");

        let response = self
            .client
            .get(&self.url)
            .header(CONTENT_TYPE, HeaderValue::from_static("application/json"))
            .send()
            .await
            .map_err(|e| {
                metrics::record_upstream("network_error");
                GatewayError::Network(e)
            })?;

        let status = response.status();
        if !status.is_success() {
            metrics::record_upstream("bad_status");
            return Err(GatewayError::Backend {
                status: status.as_u16(),
                status_text: status.canonical_reason().unwrap_or_default().to_string(),
            });
        }

        let body = response.json::<Value>().await.map_err(|e| {
            metrics::record_upstream("invalid_body");
            if e.is_decode() {
                GatewayError::Unknown(format!("Invalid JSON from backend: {}", e))
            } else {
                GatewayError::Network(e)
            }
        })?;

        metrics::record_upstream("success");
        Ok(body)
    }
}
