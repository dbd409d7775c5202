//! Startup orchestration.
//!
//! # Responsibilities
//! - Load configuration (file optional, defaults otherwise)
//! - Apply command-line and environment overrides
//! - Validate the final configuration before anything binds

use std::path::Path;

use crate::config::{load_config, validate_config, ConfigError, GatewayConfig};

/// Produce the configuration the gateway will run with.
///
/// Precedence: `bind_override` > config file > defaults for the listener;
/// `NEXT_PUBLIC_API_BASE_URL` > config file > default for the upstream.
pub fn prepare_config(
    path: Option<&Path>,
    bind_override: Option<&str>,
) -> Result<GatewayConfig, ConfigError> {
    let mut config = match path {
        Some(path) => {
            let config = load_config(path)?;
            tracing::info!(path = %path.display(), "Configuration file loaded");
            config
        }
        None => GatewayConfig::default(),
    };

    if let Some(bind) = bind_override {
        config.listener.bind_address = bind.to_string();
    }
    config.apply_env_overrides();

    validate_config(&config).map_err(ConfigError::Validation)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bind_override() {
        let config = prepare_config(None, Some("127.0.0.1:4100")).unwrap();
        assert_eq!(config.listener.bind_address, "127.0.0.1:4100");
    }

    #[test]
    fn test_invalid_bind_override_rejected() {
        let err = prepare_config(None, Some("not-an-address")).unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
    }
}
