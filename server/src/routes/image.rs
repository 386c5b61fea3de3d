//! Allow-listed image relay.
//!
//! Cards never point `<img>` at a remote host directly. They go through
//! `/api/image?url=...`, which refuses anything outside the known image
//! origins before a single byte is fetched.

use axum::body::Bytes;
use axum::extract::{Query, State};
use axum::http::{HeaderValue, StatusCode, header};
use axum::response::{IntoResponse, Response};
use records::origin;
use reqwest::Url;
use reqwest::redirect::Policy;
use serde::Deserialize;

use super::airtable::{error_body, json_response};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ImageQuery {
    pub url: String,
}

/// Largest image body relayed to the browser.
pub const MAX_IMAGE_BYTES: usize = 10 * 1024 * 1024;

/// Redirect hops followed before giving up.
const MAX_IMAGE_REDIRECTS: usize = 5;

/// Redirect policy for the relay client: every hop must stay on the
/// allow-list. A hop elsewhere stops the chain and the 3xx is treated as a
/// failed fetch.
pub fn redirect_policy() -> Policy {
    Policy::custom(|attempt| {
        if attempt.previous().len() >= MAX_IMAGE_REDIRECTS {
            attempt.error("too many image redirects")
        } else if origin::is_allowed_url(attempt.url()) {
            attempt.follow()
        } else {
            tracing::warn!(host = attempt.url().host_str().unwrap_or("<none>"), "image redirect off allow-list");
            attempt.stop()
        }
    })
}

/// `GET /api/image?url=<encoded>`: relay an image from an allowed origin.
pub async fn proxy_image(State(state): State<AppState>, Query(query): Query<ImageQuery>) -> Response {
    let url = match check_origin(&query.url) {
        Ok(url) => url,
        Err(rejection) => return rejection,
    };

    let response = match state.images.get(url).send().await {
        Ok(resp) => resp,
        Err(e) => {
            tracing::warn!(error = %e.without_url(), "image fetch failed");
            return image_fetch_failed();
        }
    };

    let status = response.status();
    if !status.is_success() {
        tracing::warn!(status = status.as_u16(), "image upstream rejected request");
        return image_fetch_failed();
    }
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(str::to_owned);

    match read_capped(response, MAX_IMAGE_BYTES).await {
        Ok(bytes) => image_response(content_type.as_deref(), bytes),
        Err(BodyError::TooLarge) => {
            tracing::warn!(limit = MAX_IMAGE_BYTES, "image body over size limit");
            image_fetch_failed()
        }
        Err(BodyError::Read(e)) => {
            tracing::warn!(error = %e.without_url(), "image body read failed");
            image_fetch_failed()
        }
    }
}

/// Parse `raw` and reject anything outside the allow-list.
pub(crate) fn check_origin(raw: &str) -> Result<Url, Response> {
    match Url::parse(raw) {
        Ok(url) if origin::is_allowed_url(&url) => Ok(url),
        parsed => {
            let host = parsed.as_ref().ok().and_then(|u| u.host_str().map(str::to_owned));
            tracing::warn!(host = host.as_deref().unwrap_or("<unparseable>"), "image origin rejected");
            Err(json_response(StatusCode::FORBIDDEN, error_body("image origin not allowed")))
        }
    }
}

#[derive(Debug)]
pub(crate) enum BodyError {
    TooLarge,
    Read(reqwest::Error),
}

/// Read the body chunk by chunk, refusing to buffer more than `limit` bytes.
pub(crate) async fn read_capped(mut response: reqwest::Response, limit: usize) -> Result<Bytes, BodyError> {
    if response
        .content_length()
        .is_some_and(|len| usize::try_from(len).map_or(true, |len| len > limit))
    {
        return Err(BodyError::TooLarge);
    }
    let mut buf = Vec::new();
    while let Some(chunk) = response.chunk().await.map_err(BodyError::Read)? {
        if buf.len() + chunk.len() > limit {
            return Err(BodyError::TooLarge);
        }
        buf.extend_from_slice(&chunk);
    }
    Ok(Bytes::from(buf))
}

pub(crate) fn image_response(content_type: Option<&str>, bytes: Bytes) -> Response {
    let content_type = content_type
        .filter(|ct| ct.starts_with("image/"))
        .and_then(|ct| HeaderValue::from_str(ct).ok())
        .unwrap_or_else(|| HeaderValue::from_static("application/octet-stream"));
    (
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, content_type),
            (header::X_CONTENT_TYPE_OPTIONS, HeaderValue::from_static("nosniff")),
        ],
        bytes,
    )
        .into_response()
}

fn image_fetch_failed() -> Response {
    json_response(StatusCode::BAD_GATEWAY, error_body("image fetch failed"))
}

#[cfg(test)]
#[path = "image_test.rs"]
mod tests;
