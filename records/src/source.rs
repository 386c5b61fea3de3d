//! Airtable data-source client.
//!
//! DESIGN
//! ======
//! `RecordSource` is the seam between HTTP handlers and the upstream store.
//! `fetch_raw` returns status + body untouched so the proxy can pass failures
//! through verbatim; `fetch_records` layers status checking and decoding on
//! top for callers that only want rows. Tests swap in an in-memory source.
//!
//! The credential is only ever placed in the `Authorization` header. It is
//! never logged and never part of an error message.

use std::sync::Arc;
use std::time::Duration;

use crate::config::AirtableConfig;
use crate::record::{Record, RecordsPage};

#[cfg(test)]
#[path = "source_test.rs"]
mod source_test;

// =============================================================================
// ERROR
// =============================================================================

/// Errors produced while reading from the data source.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    /// A required environment variable is not set.
    #[error("data source not configured: {0} is not set")]
    NotConfigured(&'static str),

    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),

    /// The request never produced a response (DNS, connect, timeout, reset).
    #[error("failed to reach data source: {0}")]
    Request(String),

    /// The data source answered with a non-success status.
    #[error("failed to fetch records: upstream status {status}")]
    Status { status: u16, body: String },

    /// A success body could not be decoded.
    #[error("failed to decode records: {0}")]
    Decode(String),
}

impl SourceError {
    /// Transport failures, rate limiting and upstream 5xx are worth another attempt.
    #[must_use]
    pub fn retryable(&self) -> bool {
        match self {
            Self::Request(_) => true,
            Self::Status { status, .. } => retryable_status(*status),
            _ => false,
        }
    }
}

// =============================================================================
// RESPONSE
// =============================================================================

/// Upstream status and body, uninterpreted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpstreamResponse {
    pub status: u16,
    pub body: String,
}

impl UpstreamResponse {
    #[must_use]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Check the status and decode the body as a records page.
    ///
    /// # Errors
    ///
    /// [`SourceError::Status`] for non-2xx, [`SourceError::Decode`] for a bad body.
    pub fn into_page(self) -> Result<RecordsPage, SourceError> {
        if !self.is_success() {
            return Err(SourceError::Status { status: self.status, body: self.body });
        }
        parse_page(&self.body)
    }
}

/// Decode a records page body.
///
/// # Errors
///
/// Returns [`SourceError::Decode`] when the body is not a records page.
pub fn parse_page(body: &str) -> Result<RecordsPage, SourceError> {
    serde_json::from_str(body).map_err(|e| SourceError::Decode(e.to_string()))
}

// =============================================================================
// SEAM
// =============================================================================

/// Read access to the external record store.
#[async_trait::async_trait]
pub trait RecordSource: Send + Sync {
    /// Perform one read and hand back the upstream status and body.
    async fn fetch_raw(&self) -> Result<UpstreamResponse, SourceError>;

    /// Read and decode all records from a successful response.
    async fn fetch_records(&self) -> Result<Vec<Record>, SourceError> {
        Ok(self.fetch_raw().await?.into_page()?.records)
    }
}

/// Shared handle used by axum state and Leptos context.
pub type SharedSource = Arc<dyn RecordSource>;

// =============================================================================
// CLIENT
// =============================================================================

/// HTTP client for the Airtable list endpoint.
#[derive(Clone)]
pub struct AirtableSource {
    http: reqwest::Client,
    config: Arc<AirtableConfig>,
}

impl AirtableSource {
    /// # Errors
    ///
    /// Returns [`SourceError::HttpClientBuild`] if the HTTP client cannot be built.
    pub fn new(config: AirtableConfig) -> Result<Self, SourceError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeouts.request_secs))
            .connect_timeout(Duration::from_secs(config.timeouts.connect_secs))
            .build()
            .map_err(|e| SourceError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http, config: Arc::new(config) })
    }

    #[must_use]
    pub fn config(&self) -> &AirtableConfig {
        &self.config
    }

    async fn fetch_once(&self, url: &str) -> Result<UpstreamResponse, SourceError> {
        let mut request = self
            .http
            .get(url)
            .header(reqwest::header::ACCEPT, "application/json")
            .header(reqwest::header::CACHE_CONTROL, "no-store");
        if let Some(token) = self.config.token.as_deref() {
            request = request.header(reqwest::header::AUTHORIZATION, bearer(token));
        }

        let response = request.send().await.map_err(|e| SourceError::Request(e.without_url().to_string()))?;
        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| SourceError::Request(e.without_url().to_string()))?;
        Ok(UpstreamResponse { status, body })
    }
}

#[async_trait::async_trait]
impl RecordSource for AirtableSource {
    async fn fetch_raw(&self) -> Result<UpstreamResponse, SourceError> {
        let url = self.config.url.as_deref().ok_or(SourceError::NotConfigured("AIRTABLE_URL"))?;

        let mut attempt: u32 = 0;
        loop {
            tracing::debug!(%url, attempt, "fetching records");
            let result = self.fetch_once(url).await;
            let retry = attempt < self.config.max_retries
                && match &result {
                    Ok(resp) => retryable_status(resp.status),
                    Err(err) => err.retryable(),
                };
            if !retry {
                return result;
            }

            attempt += 1;
            let delay = backoff_delay(self.config.retry_backoff_ms, attempt);
            let delay_ms = u64::try_from(delay.as_millis()).unwrap_or(u64::MAX);
            match &result {
                Ok(resp) => tracing::warn!(status = resp.status, attempt, delay_ms, "retrying record fetch"),
                Err(err) => tracing::warn!(error = %err, attempt, delay_ms, "retrying record fetch"),
            }
            tokio::time::sleep(delay).await;
        }
    }
}

/// `Authorization` header value for a token.
#[must_use]
pub fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

/// Rate limiting and server errors.
#[must_use]
pub fn retryable_status(status: u16) -> bool {
    matches!(status, 429 | 500..=599)
}

/// Linear backoff: attempt `n` (1-based) waits `n * base_ms`.
#[must_use]
pub fn backoff_delay(base_ms: u64, attempt: u32) -> Duration {
    Duration::from_millis(base_ms.saturating_mul(u64::from(attempt)))
}
