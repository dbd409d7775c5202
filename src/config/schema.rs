//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the gateway.
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

/// Environment variable that overrides the upstream base URL.
pub const API_BASE_URL_ENV: &str = "NEXT_PUBLIC_API_BASE_URL";

/// Base URL used when neither the config file nor the environment sets one.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8004";

/// Root configuration for the gateway.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct GatewayConfig {
    /// Listener configuration (bind address).
    pub listener: ListenerConfig,

    /// Diagnostics backend settings.
    pub upstream: UpstreamConfig,

    /// Timeout configuration for inbound requests.
    pub timeouts: TimeoutConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

impl GatewayConfig {
    /// Apply process environment overrides.
    ///
    /// Called once at startup; handlers only ever see the resolved values.
    pub fn apply_env_overrides(&mut self) {
        let resolved = self
            .upstream
            .resolve_base_url(std::env::var(API_BASE_URL_ENV).ok());
        if resolved != self.upstream.base_url {
            tracing::info!(
                env = API_BASE_URL_ENV,
                base_url = %resolved,
                "Upstream base URL taken from environment"
            );
        }
        self.upstream.base_url = resolved;
    }
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:3000").
    pub bind_address: String,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:3000".to_string(),
        }
    }
}

/// Upstream diagnostics backend.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct UpstreamConfig {
    /// Base URL of the backend API.
    pub base_url: String,

    /// Path appended to the base URL for the diagnostics call.
    pub diagnostics_path: String,

    /// Upstream request timeout in seconds. Unset means no deadline.
    pub timeout_secs: Option<u64>,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE_URL.to_string(),
            diagnostics_path: "/system/diagnostics".to_string(),
            timeout_secs: None,
        }
    }
}

impl UpstreamConfig {
    /// Pick the effective base URL: a non-blank environment value wins,
    /// otherwise the configured one, otherwise the built-in default.
    pub fn resolve_base_url(&self, env_value: Option<String>) -> String {
        if let Some(value) = env_value {
            let value = value.trim();
            if !value.is_empty() {
                return value.to_string();
            }
        }
        if self.base_url.trim().is_empty() {
            DEFAULT_API_BASE_URL.to_string()
        } else {
            self.base_url.clone()
        }
    }

    /// Full URL of the diagnostics endpoint.
    pub fn diagnostics_url(&self) -> String {
        format!(
            "{}{}",
            self.base_url.trim_end_matches('/'),
            self.diagnostics_path
        )
    }
}

/// Timeout configuration for inbound requests.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct TimeoutConfig {
    /// Total time allowed per inbound request, in seconds. Unset means no
    /// deadline, so upstream failures always surface as error envelopes.
    pub request_secs: Option<u64>,
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Log output format ("pretty" or "json").
    pub log_format: String,

    /// Enable metrics endpoint.
    pub metrics_enabled: bool,

    /// Metrics endpoint bind address.
    pub metrics_address: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_format: "pretty".to_string(),
            metrics_enabled: false,
            metrics_address: "0.0.0.0:9090".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_value_wins() {
        let upstream = UpstreamConfig::default();
        let url = upstream.resolve_base_url(Some("http://backend:9000".into()));
        assert_eq!(url, "http://backend:9000");
    }

    #[test]
    fn test_blank_env_falls_back() {
        let upstream = UpstreamConfig::default();
        assert_eq!(upstream.resolve_base_url(None), DEFAULT_API_BASE_URL);
        assert_eq!(upstream.resolve_base_url(Some(String::new())), DEFAULT_API_BASE_URL);
        assert_eq!(upstream.resolve_base_url(Some("   ".into())), DEFAULT_API_BASE_URL);
    }

    #[test]
    fn test_blank_config_falls_back_to_default() {
        let upstream = UpstreamConfig {
            base_url: String::new(),
            ..UpstreamConfig::default()
        };
        assert_eq!(upstream.resolve_base_url(None), DEFAULT_API_BASE_URL);
    }

    #[test]
    fn test_diagnostics_url() {
        let mut upstream = UpstreamConfig::default();
        assert_eq!(upstream.diagnostics_url(), "http://localhost:8004/system/diagnostics");

        upstream.base_url = "http://backend:9000/".into();
        assert_eq!(upstream.diagnostics_url(), "http://backend:9000/system/diagnostics");
    }

    #[test]
    fn test_minimal_toml() {
        let config: GatewayConfig = toml::from_str("[upstream]\nbase_url = \"http://b:1\"\n").unwrap();
        assert_eq!(config.upstream.base_url, "http://b:1");
        assert_eq!(config.upstream.diagnostics_path, "/system/diagnostics");
        assert_eq!(config.listener.bind_address, "0.0.0.0:3000");
        assert!(config.upstream.timeout_secs.is_none());
        assert!(config.timeouts.request_secs.is_none());
    }
}
