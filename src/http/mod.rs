//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware)
//!     → request.rs (request ID, trace span)
//!     → reprocess.rs | diagnostics.rs (handlers)
//!     → error envelope or JSON payload to client
//! ```

pub mod diagnostics;
pub mod reprocess;
pub mod request;
pub mod server;

pub use reprocess::{reprocess_query, Acknowledgment};
pub use request::{RequestIdExt, UuidRequestId, X_REQUEST_ID};
pub use server::{AppState, HttpServer};
