//! Upstream backend access.
//!
//! # Data Flow
//! ```text
//! GET /api/system/diagnostics
//!     → client.rs (single GET {base_url}/system/diagnostics)
//!     → 2xx: JSON body relayed verbatim
//!     → otherwise: GatewayError (Backend / Network / Unknown)
//! ```
//!
//! # Design Decisions
//! - One attempt per request; no retries, no circuit breaking
//! - The base URL is resolved at startup and injected, never read per call

pub mod client;

pub use client::DiagnosticsClient;
