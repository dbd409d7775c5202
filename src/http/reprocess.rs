//! `PATCH /api/queries/{id}/reprocess`
//!
//! Acknowledges a reprocess request. Nothing is dispatched to the backend
//! yet; the request is logged and a fresh acknowledgment returned.

use std::time::Instant;

use axum::{
    extract::{rejection::PathRejection, Path},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{GatewayError, Result};
use crate::observability::metrics;

pub const ROUTE: &str = "/api/queries/{id}/reprocess";

const MISSING_ID: &str = "Query ID is required";
const FAILURE: &str = "Failed to reprocess query";
pub const ACK_MESSAGE: &str = "Query reprocessing started";

/// Success body for an accepted reprocess request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Acknowledgment {
    pub success: bool,
    pub message: String,
    pub query_id: String,
    /// ISO-8601 UTC, millisecond precision.
    pub timestamp: String,
}

/// Accept a reprocess request for `id`.
pub fn reprocess_query(id: Option<&str>) -> Result<Acknowledgment> {
    let query_id = match id {
        Some(id) if !id.is_empty() => id,
        _ => return Err(GatewayError::Validation(MISSING_ID.to_string())),
    };

    tracing::info!(query_id = %query_id, "Reprocessing started for query");

    Ok(Acknowledgment {
        success: true,
        message: ACK_MESSAGE.to_string(),
        query_id: query_id.to_string(),
        timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
    })
}

pub async fn reprocess(id: std::result::Result<Path<String>, PathRejection>) -> Response {
    let start = Instant::now();
    let id = id.ok().map(|Path(id)| id);

    match reprocess_query(id.as_deref()) {
        Ok(ack) => {
            metrics::record_request(ROUTE, 200, start);
            (StatusCode::OK, Json(ack)).into_response()
        }
        Err(e) => {
            if matches!(e, GatewayError::Validation(_)) {
                tracing::warn!(error = %e, "Rejected reprocess request");
            } else {
                tracing::error!(error = %e, "Failed to reprocess query");
            }
            let api = e.into_api_error(FAILURE);
            metrics::record_request(ROUTE, api.status.as_u16(), start);
            api.into_response()
        }
    }
}
