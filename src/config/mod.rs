//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML, optional)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → GatewayConfig::apply_env_overrides (NEXT_PUBLIC_API_BASE_URL)
//!     → GatewayConfig (validated, immutable)
//!     → injected into handlers via AppState
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; handlers never read the environment
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, ConfigError};
pub use schema::GatewayConfig;
pub use schema::ListenerConfig;
pub use schema::ObservabilityConfig;
pub use schema::UpstreamConfig;
pub use validation::{validate_config, ValidationError};
