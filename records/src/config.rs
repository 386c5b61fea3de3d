//! Airtable configuration parsed from environment variables.
//!
//! Missing `AIRTABLE_URL`/`AIRTABLE_TOKEN` is not a start-up error: the
//! server still boots, and every fetch fails until the variables are set.

use std::fmt;

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;

pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_MAX_RETRIES: u32 = 0;
pub const DEFAULT_RETRY_BACKOFF_MS: u64 = 250;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceTimeouts {
    pub request_secs: u64,
    pub connect_secs: u64,
}

impl Default for SourceTimeouts {
    fn default() -> Self {
        Self { request_secs: DEFAULT_REQUEST_TIMEOUT_SECS, connect_secs: DEFAULT_CONNECT_TIMEOUT_SECS }
    }
}

#[derive(Clone, PartialEq, Eq)]
pub struct AirtableConfig {
    /// Full REST endpoint including base and table.
    pub url: Option<String>,
    /// Personal access token, sent as a bearer credential.
    pub token: Option<String>,
    pub timeouts: SourceTimeouts,
    /// Extra attempts after the first for retryable failures.
    pub max_retries: u32,
    /// Base delay between attempts; attempt `n` waits `n * backoff`.
    pub retry_backoff_ms: u64,
}

impl AirtableConfig {
    /// Build config from environment variables.
    ///
    /// - `AIRTABLE_URL`, `AIRTABLE_TOKEN`: required for a working fetch
    /// - `AIRTABLE_REQUEST_TIMEOUT_SECS`: default 30
    /// - `AIRTABLE_CONNECT_TIMEOUT_SECS`: default 10
    /// - `AIRTABLE_MAX_RETRIES`: default 0
    /// - `AIRTABLE_RETRY_BACKOFF_MS`: default 250
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            url: env_non_empty("AIRTABLE_URL"),
            token: env_non_empty("AIRTABLE_TOKEN"),
            timeouts: SourceTimeouts {
                request_secs: env_parse("AIRTABLE_REQUEST_TIMEOUT_SECS", DEFAULT_REQUEST_TIMEOUT_SECS),
                connect_secs: env_parse("AIRTABLE_CONNECT_TIMEOUT_SECS", DEFAULT_CONNECT_TIMEOUT_SECS),
            },
            max_retries: env_parse("AIRTABLE_MAX_RETRIES", DEFAULT_MAX_RETRIES),
            retry_backoff_ms: env_parse("AIRTABLE_RETRY_BACKOFF_MS", DEFAULT_RETRY_BACKOFF_MS),
        }
    }

    /// Config pointing at `url` with defaults for everything else.
    #[must_use]
    pub fn with_endpoint(url: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            url: Some(url.into()),
            token: Some(token.into()),
            timeouts: SourceTimeouts::default(),
            max_retries: DEFAULT_MAX_RETRIES,
            retry_backoff_ms: DEFAULT_RETRY_BACKOFF_MS,
        }
    }

    /// Names of required variables that are unset.
    #[must_use]
    pub fn missing_vars(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.url.is_none() {
            missing.push("AIRTABLE_URL");
        }
        if self.token.is_none() {
            missing.push("AIRTABLE_TOKEN");
        }
        missing
    }
}

impl fmt::Debug for AirtableConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AirtableConfig")
            .field("url", &self.url)
            .field("token", &self.token.as_ref().map(|_| "<redacted>"))
            .field("timeouts", &self.timeouts)
            .field("max_retries", &self.max_retries)
            .field("retry_backoff_ms", &self.retry_backoff_ms)
            .finish()
    }
}

fn env_non_empty(key: &str) -> Option<String> {
    std::env::var(key).ok().map(|v| v.trim().to_owned()).filter(|v| !v.is_empty())
}

fn env_parse<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.trim().parse::<T>().ok())
        .unwrap_or(default)
}
