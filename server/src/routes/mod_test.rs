use super::*;
use crate::state::test_helpers::{MockSource, test_app_state, upstream};
use std::sync::Arc;

async fn serve(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("addr");
    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("serve");
    });
    format!("http://{addr}")
}

fn no_redirect_client() -> reqwest::Client {
    reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .build()
        .expect("client")
}

#[tokio::test]
async fn root_permanently_redirects_to_browse_listing() {
    let state = test_app_state(Arc::new(MockSource::new(Vec::new())));
    let base = serve(api_routes(state)).await;

    let resp = no_redirect_client().get(format!("{base}/")).send().await.expect("request");
    assert_eq!(resp.status().as_u16(), 308);
    assert_eq!(resp.headers().get("location").unwrap(), DEFAULT_BROWSE_PATH);
}

#[tokio::test]
async fn healthz_is_ok() {
    let state = test_app_state(Arc::new(MockSource::new(Vec::new())));
    let base = serve(api_routes(state)).await;

    let resp = no_redirect_client().get(format!("{base}/healthz")).send().await.expect("request");
    assert_eq!(resp.status().as_u16(), 200);
}

#[tokio::test]
async fn api_airtable_is_wired_to_the_proxy() {
    let mock = Arc::new(MockSource::new(vec![upstream(200, r#"{"records":[]}"#)]));
    let base = serve(api_routes(test_app_state(mock.clone()))).await;

    let resp = no_redirect_client().get(format!("{base}/api/airtable")).send().await.expect("request");
    assert_eq!(resp.status().as_u16(), 200);
    assert_eq!(resp.headers().get("cache-control").unwrap(), "no-store");
    assert_eq!(resp.text().await.expect("body"), r#"{"records":[]}"#);
    assert_eq!(mock.call_count(), 1);
}

#[tokio::test]
async fn api_image_without_url_is_a_client_error() {
    let state = test_app_state(Arc::new(MockSource::new(Vec::new())));
    let base = serve(api_routes(state)).await;

    let resp = no_redirect_client().get(format!("{base}/api/image")).send().await.expect("request");
    assert_eq!(resp.status().as_u16(), 400);
}

#[tokio::test]
async fn api_image_rejects_foreign_origin_over_http() {
    let state = test_app_state(Arc::new(MockSource::new(Vec::new())));
    let base = serve(api_routes(state)).await;

    let target = "https%3A%2F%2Fexample.com%2Fa.png";
    let resp = no_redirect_client()
        .get(format!("{base}/api/image?url={target}"))
        .send()
        .await
        .expect("request");
    assert_eq!(resp.status().as_u16(), 403);
}
