//! REST helpers for the record proxy.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning an error, since the proxy is only
//! called from the browser.
//!
//! ERROR HANDLING
//! ==============
//! Transport failures, non-2xx statuses and undecodable bodies all collapse
//! into one display string so views show a single error line.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use records::Record;
#[cfg(feature = "hydrate")]
use records::RecordsPage;

/// Same-origin proxy for the upstream record list.
pub const RECORDS_ENDPOINT: &str = "/api/airtable";

#[cfg(any(test, feature = "hydrate"))]
fn request_failed_message(status: u16) -> String {
    format!("Request failed: {status}")
}

/// Fetch one page of records from the proxy, abortable through `signal`.
///
/// # Errors
///
/// Returns a display string for a transport error, a non-2xx status, or a
/// body that does not decode as a records page.
#[cfg(feature = "hydrate")]
pub async fn fetch_records_page(signal: Option<&web_sys::AbortSignal>) -> Result<RecordsPage, String> {
    let resp = gloo_net::http::Request::get(RECORDS_ENDPOINT)
        .abort_signal(signal)
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if !resp.ok() {
        return Err(request_failed_message(resp.status()));
    }
    resp.json::<RecordsPage>().await.map_err(|e| e.to_string())
}

/// Fetch the record list through the proxy.
///
/// # Errors
///
/// See [`fetch_records_page`]. Always errors outside the browser.
pub async fn fetch_records() -> Result<Vec<Record>, String> {
    #[cfg(feature = "hydrate")]
    {
        fetch_records_page(None).await.map(|page| page.records)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err("not available on server".to_owned())
    }
}
