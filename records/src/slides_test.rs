use super::*;
use crate::record::Attachment;
use serde_json::Map;

fn shot(url: &str) -> Attachment {
    Attachment { url: url.to_owned(), extra: Map::new() }
}

#[test]
fn no_image_fields_resolves_to_none() {
    assert_eq!(resolve_slides(&RecordFields::default()), None);
}

#[test]
fn empty_s3_links_without_screenshots_resolves_to_none() {
    let fields = RecordFields { s3_links: Some(String::new()), ..RecordFields::default() };
    assert_eq!(resolve_slides(&fields), None);
}

#[test]
fn s3_links_are_trimmed_and_blanks_dropped() {
    let fields = RecordFields { s3_links: Some("a, b ,,c".to_owned()), ..RecordFields::default() };
    assert_eq!(resolve_slides(&fields), Some(vec!["a".to_owned(), "b".to_owned(), "c".to_owned()]));
}

#[test]
fn s3_links_take_precedence_over_screenshots() {
    let fields = RecordFields {
        s3_links: Some("https://x.s3.us-west-2.amazonaws.com/1.png".to_owned()),
        screenshots: Some(vec![shot("https://v5.airtableusercontent.com/ignored.png")]),
        ..RecordFields::default()
    };
    assert_eq!(resolve_slides(&fields), Some(vec!["https://x.s3.us-west-2.amazonaws.com/1.png".to_owned()]));
}

#[test]
fn screenshots_keep_source_order() {
    let fields = RecordFields {
        screenshots: Some(vec![shot("one"), shot("two"), shot("three")]),
        ..RecordFields::default()
    };
    assert_eq!(
        resolve_slides(&fields),
        Some(vec!["one".to_owned(), "two".to_owned(), "three".to_owned()])
    );
}

#[test]
fn empty_screenshot_list_is_present_but_empty() {
    let fields = RecordFields { screenshots: Some(Vec::new()), ..RecordFields::default() };
    assert_eq!(resolve_slides(&fields), Some(Vec::new()));
}

#[test]
fn whitespace_only_s3_links_yield_no_slides() {
    let fields = RecordFields { s3_links: Some(" , ,".to_owned()), ..RecordFields::default() };
    assert_eq!(resolve_slides(&fields), Some(Vec::new()));
}
