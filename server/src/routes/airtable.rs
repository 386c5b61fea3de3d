//! Record proxy route.
//!
//! ERROR HANDLING
//! ==============
//! Upstream non-success statuses pass through with the raw upstream text
//! wrapped as `{"error": "..."}`. Anything that prevents a usable answer
//! (transport failure, missing config, a non-JSON success body) collapses to
//! `500 {"error":"Server error"}`. The browser never sees the credential.

use axum::extract::State;
use axum::http::{HeaderValue, StatusCode, header};
use axum::response::{IntoResponse, Response};
use records::source::{RecordSource, SourceError, UpstreamResponse};

use crate::state::AppState;

pub const SERVER_ERROR_MESSAGE: &str = "Server error";

/// `GET /api/airtable`: replay the data-source read for the browser.
pub async fn list_records(State(state): State<AppState>) -> Response {
    let outcome = state.source.fetch_raw().await;
    proxy_response(outcome)
}

/// Map a data-source outcome onto the proxy's HTTP contract.
pub(crate) fn proxy_response(outcome: Result<UpstreamResponse, SourceError>) -> Response {
    match outcome {
        Ok(upstream) if upstream.is_success() => {
            if serde_json::from_str::<serde_json::Value>(&upstream.body).is_err() {
                tracing::error!(bytes = upstream.body.len(), "upstream success body is not JSON");
                return server_error();
            }
            tracing::info!(status = upstream.status, bytes = upstream.body.len(), "records proxied");
            json_response(StatusCode::OK, upstream.body)
        }
        Ok(upstream) => {
            tracing::warn!(status = upstream.status, bytes = upstream.body.len(), "upstream rejected record read");
            let status = StatusCode::from_u16(upstream.status).unwrap_or(StatusCode::BAD_GATEWAY);
            json_response(status, error_body(&upstream.body))
        }
        Err(err) => {
            tracing::error!(error = %err, "record read failed");
            server_error()
        }
    }
}

fn server_error() -> Response {
    json_response(StatusCode::INTERNAL_SERVER_ERROR, error_body(SERVER_ERROR_MESSAGE))
}

pub(crate) fn error_body(message: &str) -> String {
    serde_json::json!({ "error": message }).to_string()
}

/// JSON response that must never be cached by the browser or intermediaries.
pub(crate) fn json_response(status: StatusCode, body: String) -> Response {
    (
        status,
        [
            (header::CONTENT_TYPE, HeaderValue::from_static("application/json")),
            (header::CACHE_CONTROL, HeaderValue::from_static("no-store")),
        ],
        body,
    )
        .into_response()
}

#[cfg(test)]
#[path = "airtable_test.rs"]
mod tests;
