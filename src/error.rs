//! Request-level errors and the JSON envelope they are rendered as.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, GatewayError>;

/// Everything that can go wrong while handling a gateway request.
#[derive(Debug, Error)]
pub enum GatewayError {
    /// The request was missing something it needs.
    #[error("{0}")]
    Validation(String),

    /// The upstream answered with a non-2xx status.
    #[error("Backend responded with {}", describe_status(.status, .status_text))]
    Backend { status: u16, status_text: String },

    /// The upstream could not be reached at all.
    #[error("Network error: {0}")]
    Network(#[source] reqwest::Error),

    #[error("{0}")]
    Unknown(String),
}

impl GatewayError {
    /// HTTP status this error is surfaced with.
    pub fn status_code(&self) -> StatusCode {
        match self {
            GatewayError::Validation(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Translate into the response envelope.
    ///
    /// `context` becomes the `error` field of 5xx envelopes; validation
    /// failures carry their own message and no details.
    pub fn into_api_error(self, context: &str) -> ApiError {
        let status = self.status_code();
        let envelope = match self {
            GatewayError::Validation(message) => ErrorEnvelope::new(message),
            other => {
                let details = other.to_string();
                let details = if details.trim().is_empty() {
                    "Unknown error".to_string()
                } else {
                    details
                };
                ErrorEnvelope::new(context).with_details(details)
            }
        };
        ApiError { status, envelope }
    }
}

fn describe_status(status: &u16, status_text: &str) -> String {
    let status_text = status_text.trim();
    if status_text.is_empty() {
        status.to_string()
    } else {
        format!("{} {}", status, status_text)
    }
}

/// Uniform JSON body for every failed request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorEnvelope {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ErrorEnvelope {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }
}

/// An error envelope paired with the status it is sent with.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub envelope: ErrorEnvelope,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(self.envelope)).into_response()
    }
}
