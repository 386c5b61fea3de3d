//! Image origin allow-list and image proxy URLs.
//!
//! Slides are only ever displayed through `/api/image`, which refuses any
//! URL outside the two known hosts: the Airtable attachment CDN and the
//! screenshot buckets in `us-west-2`. Both sides share this module so the
//! card can pick a fallback before it renders an `<img>` the proxy would
//! reject anyway.

#[cfg(test)]
#[path = "origin_test.rs"]
mod origin_test;

use url::Url;

/// Path of the server-side image proxy.
pub const IMAGE_PROXY_PATH: &str = "/api/image";

/// Airtable attachment CDN host.
pub const AIRTABLE_ATTACHMENT_HOST: &str = "v5.airtableusercontent.com";

/// Suffix matched by any bucket host (`<bucket>.s3.us-west-2.amazonaws.com`).
pub const S3_BUCKET_HOST_SUFFIX: &str = ".s3.us-west-2.amazonaws.com";

/// Whether `raw` parses as a URL pointing at an allow-listed image origin.
#[must_use]
pub fn is_allowed_image_url(raw: &str) -> bool {
    Url::parse(raw).is_ok_and(|url| is_allowed_url(&url))
}

/// Only `https` with no explicit port, no credentials, and an exact
/// host match (or a non-empty bucket label in front of the S3 suffix).
#[must_use]
pub fn is_allowed_url(url: &Url) -> bool {
    url.scheme() == "https"
        && url.port().is_none()
        && url.username().is_empty()
        && url.password().is_none()
        && url.host_str().is_some_and(is_allowed_host)
}

/// Host check on its own, for callers that already parsed the URL.
#[must_use]
pub fn is_allowed_host(host: &str) -> bool {
    let host = host.to_ascii_lowercase();
    if host == AIRTABLE_ATTACHMENT_HOST {
        return true;
    }
    host.strip_suffix(S3_BUCKET_HOST_SUFFIX)
        .is_some_and(|bucket| !bucket.is_empty() && bucket.split('.').all(|label| !label.is_empty()))
}

/// Proxy URL for an allow-listed slide, `None` when the origin is rejected.
#[must_use]
pub fn image_proxy_src(raw: &str) -> Option<String> {
    is_allowed_image_url(raw).then(|| format!("{IMAGE_PROXY_PATH}?url={}", urlencoding::encode(raw)))
}
