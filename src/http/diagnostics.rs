//! `GET /api/system/diagnostics`
//!
//! Relays the backend diagnostics document. Query string and headers of the
//! incoming request are ignored.

use std::time::Instant;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::http::server::AppState;
use crate::observability::metrics;

pub const ROUTE: &str = "/api/system/diagnostics";

const FAILURE: &str = "Failed to fetch system diagnostics";

pub async fn get_diagnostics(State(state): State<AppState>) -> Response {
    let start = Instant::now();

    match state.diagnostics.fetch().await {
        Ok(body) => {
            metrics::record_request(ROUTE, 200, start);
            (StatusCode::OK, Json(body)).into_response()
        }
        Err(e) => {
            tracing::error!(
                upstream = %state.diagnostics.url(),
                error = %e,
                "Failed to fetch system diagnostics"
            );
            let api = e.into_api_error(FAILURE);
            metrics::record_request(ROUTE, api.status.as_u16(), start);
            api.into_response()
        }
    }
}
