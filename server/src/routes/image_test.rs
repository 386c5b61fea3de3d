use super::*;
use crate::state::test_helpers::{MockSource, test_app_state};
use std::sync::Arc;

async fn body_text(resp: Response) -> String {
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .expect("body should be readable");
    String::from_utf8(bytes.to_vec()).expect("utf-8")
}

#[test]
fn allow_listed_urls_pass_the_origin_check() {
    assert!(check_origin("https://v5.airtableusercontent.com/v3/u/1/2.png").is_ok());
    assert!(check_origin("https://screens.s3.us-west-2.amazonaws.com/apps/1.png").is_ok());
}

#[tokio::test]
async fn rejected_origins_return_403_json() {
    for url in [
        "https://example.com/a.png",
        "http://v5.airtableusercontent.com/a.png",
        "https://v5.airtableusercontent.com:444/a.png",
        "https://s3.us-west-2.amazonaws.com/bucket/a.png",
        "not a url",
    ] {
        let resp = check_origin(url).expect_err("origin should be rejected");
        assert_eq!(resp.status(), StatusCode::FORBIDDEN, "{url}");
        assert_eq!(body_text(resp).await, r#"{"error":"image origin not allowed"}"#);
    }
}

#[tokio::test]
async fn handler_rejects_before_fetching() {
    let state = test_app_state(Arc::new(MockSource::new(Vec::new())));
    let resp = proxy_image(State(state), Query(ImageQuery { url: "https://evil.test/x.png".into() })).await;
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn image_response_keeps_image_content_type() {
    let resp = image_response(Some("image/png"), Bytes::from_static(b"\x89PNG"));
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(resp.headers().get(header::CONTENT_TYPE).unwrap(), "image/png");
    assert_eq!(resp.headers().get(header::X_CONTENT_TYPE_OPTIONS).unwrap(), "nosniff");
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    assert_eq!(&bytes[..], b"\x89PNG");
}

#[test]
fn image_response_neutralizes_non_image_content_type() {
    let resp = image_response(Some("text/html"), Bytes::new());
    assert_eq!(resp.headers().get(header::CONTENT_TYPE).unwrap(), "application/octet-stream");
    let resp = image_response(None, Bytes::new());
    assert_eq!(resp.headers().get(header::CONTENT_TYPE).unwrap(), "application/octet-stream");
}

async fn serve(router: axum::Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("addr");
    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("serve");
    });
    format!("http://{addr}")
}

fn relay_state() -> AppState {
    let config = records::config::AirtableConfig::with_endpoint("http://127.0.0.1:9/v0/app/t", "pat");
    AppState::from_config(config).expect("state should build")
}

#[test]
fn check_origin_returns_the_parsed_url() {
    let url = check_origin("https://v5.airtableusercontent.com/a.png").expect("allowed");
    assert_eq!(url.host_str(), Some("v5.airtableusercontent.com"));
}

#[tokio::test]
async fn relay_client_does_not_follow_redirects_off_the_allow_list() {
    let upstream = axum::Router::new()
        .route("/start", axum::routing::get(|| async { axum::response::Redirect::temporary("/landing") }))
        .route("/landing", axum::routing::get(|| async { "not an allowed image" }));
    let base = serve(upstream).await;

    let resp = relay_state().images.get(format!("{base}/start")).send().await.expect("request");
    assert_eq!(resp.status(), reqwest::StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(resp.headers().get("location").unwrap(), "/landing");
}

#[tokio::test]
async fn read_capped_rejects_bodies_over_the_limit() {
    let upstream = axum::Router::new().route("/big", axum::routing::get(|| async { vec![7_u8; 64] }));
    let base = serve(upstream).await;
    let client = reqwest::Client::new();

    let resp = client.get(format!("{base}/big")).send().await.expect("request");
    assert!(matches!(read_capped(resp, 16).await, Err(BodyError::TooLarge)));

    let resp = client.get(format!("{base}/big")).send().await.expect("request");
    let bytes = read_capped(resp, 1024).await.expect("within limit");
    assert_eq!(bytes.len(), 64);
}
