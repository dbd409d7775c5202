//! Console gateway library.
//!
//! Backend-for-frontend routes for the query console: reprocess
//! acknowledgments and a pass-through to the backend diagnostics endpoint.

pub mod config;
pub mod error;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod upstream;

pub use config::GatewayConfig;
pub use error::{ErrorEnvelope, GatewayError};
pub use http::HttpServer;
pub use lifecycle::Shutdown;
