//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor.
//! It holds the record source behind the `RecordSource` seam and a plain HTTP
//! client for relaying allow-listed images. Nothing here is mutable: every
//! request reads upstream fresh.

use std::sync::Arc;
use std::time::Duration;

use records::config::AirtableConfig;
use records::source::{AirtableSource, SharedSource, SourceError};

const IMAGE_REQUEST_TIMEOUT_SECS: u64 = 30;
const IMAGE_CONNECT_TIMEOUT_SECS: u64 = 10;

/// Shared application state, injected into Axum handlers via State extractor.
/// Clone is required by Axum; all inner fields are Arc-wrapped or Clone.
#[derive(Clone)]
pub struct AppState {
    pub source: SharedSource,
    pub images: reqwest::Client,
}

impl AppState {
    #[must_use]
    pub fn new(source: SharedSource, images: reqwest::Client) -> Self {
        Self { source, images }
    }

    /// Build state around the live Airtable source. The image client re-checks
    /// the allow-list on every redirect hop.
    ///
    /// # Errors
    ///
    /// Returns an error if either HTTP client cannot be built.
    pub fn from_config(config: AirtableConfig) -> Result<Self, SourceError> {
        let source = AirtableSource::new(config)?;
        let images = reqwest::Client::builder()
            .timeout(Duration::from_secs(IMAGE_REQUEST_TIMEOUT_SECS))
            .connect_timeout(Duration::from_secs(IMAGE_CONNECT_TIMEOUT_SECS))
            .redirect(crate::routes::image::redirect_policy())
            .build()
            .map_err(|e| SourceError::HttpClientBuild(e.to_string()))?;
        Ok(Self::new(Arc::new(source), images))
    }
}

#[cfg(test)]
pub mod test_helpers {
    use super::*;
    use records::source::{RecordSource, UpstreamResponse};
    use std::sync::Mutex;

    /// Source that replays canned outcomes in order and counts calls.
    pub struct MockSource {
        outcomes: Mutex<Vec<Result<UpstreamResponse, SourceError>>>,
        pub calls: Mutex<usize>,
    }

    impl MockSource {
        pub fn new(outcomes: Vec<Result<UpstreamResponse, SourceError>>) -> Self {
            Self { outcomes: Mutex::new(outcomes), calls: Mutex::new(0) }
        }

        pub fn call_count(&self) -> usize {
            *self.calls.lock().expect("mock mutex should lock")
        }
    }

    #[async_trait::async_trait]
    impl RecordSource for MockSource {
        async fn fetch_raw(&self) -> Result<UpstreamResponse, SourceError> {
            *self.calls.lock().expect("mock mutex should lock") += 1;
            let mut outcomes = self.outcomes.lock().expect("mock mutex should lock");
            if outcomes.is_empty() {
                return Err(SourceError::Request("mock source exhausted".into()));
            }
            outcomes.remove(0)
        }
    }

    /// Upstream response with the given status and body.
    pub fn upstream(status: u16, body: &str) -> Result<UpstreamResponse, SourceError> {
        Ok(UpstreamResponse { status, body: body.to_owned() })
    }

    /// `AppState` backed by a mock source.
    pub fn test_app_state(source: Arc<MockSource>) -> AppState {
        AppState::new(source, reqwest::Client::new())
    }
}

#[cfg(test)]
#[path = "state_test.rs"]
mod tests;
