//! Slide resolution for carousel cards.
//!
//! A record carries its screenshots in one of two shapes: an Airtable
//! attachment list (`Screenshots`) or a comma separated string of bucket URLs
//! (`S3 Links`). A non-empty `S3 Links` wins when both are present.

use crate::record::RecordFields;

#[cfg(test)]
#[path = "slides_test.rs"]
mod slides_test;

/// Resolve the ordered slide URLs for a record.
///
/// Returns `None` when the record has no usable image field at all, in which
/// case the card renders nothing. `Some(vec![])` means the field exists but
/// holds no URLs.
#[must_use]
pub fn resolve_slides(fields: &RecordFields) -> Option<Vec<String>> {
    if let Some(links) = fields.s3_links.as_deref().filter(|s| !s.is_empty()) {
        return Some(split_links(links));
    }
    fields
        .screenshots
        .as_ref()
        .map(|shots| shots.iter().map(|shot| shot.url.clone()).collect())
}

/// Split a comma separated link list, trimming pieces and dropping blanks.
#[must_use]
pub fn split_links(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|link| !link.is_empty())
        .map(str::to_owned)
        .collect()
}
