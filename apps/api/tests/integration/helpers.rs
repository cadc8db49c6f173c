use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, StatusCode},
};
use likes_api::{
    config::Config,
    domain::likes::like_count::CoercionMode,
    presentation::http::{routes::create_router, state::AppState},
};
use mockito::{Mock, Server, ServerGuard};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tower::ServiceExt;

pub const COLLECTION_ID: &str = "col-test";
pub const API_TOKEN: &str = "test-token";
pub const LIKE_FIELD: &str = "like-count";

pub struct TestApp {
    pub app: Router,
    pub upstream: ServerGuard,
}

fn build_config(base_url: String) -> Config {
    Config {
        host: "127.0.0.1".to_string(),
        port: 0,
        webflow_api_token: API_TOKEN.to_string(),
        webflow_collection_id: COLLECTION_ID.to_string(),
        webflow_api_base_url: base_url,
        like_count_field: LIKE_FIELD.to_string(),
        like_count_coercion: CoercionMode::Lenient,
        upstream_timeout_seconds: 5,
        max_body_bytes: 1024,
    }
}

pub async fn spawn_app() -> TestApp {
    let upstream = Server::new_async().await;
    let state = AppState::from_config(build_config(upstream.url()))
        .expect("failed to build app state");

    TestApp {
        app: create_router(state),
        upstream,
    }
}

pub fn item_path(item_id: &str) -> String {
    format!("/collections/{}/items/{}", COLLECTION_ID, item_id)
}

/// Upstream item fetch answering with the given `fieldData`, expected `hits` times.
pub async fn mock_item(
    upstream: &mut ServerGuard,
    item_id: &str,
    field_data: Value,
    hits: usize,
) -> Mock {
    upstream
        .mock("GET", item_path(item_id).as_str())
        .expect(hits)
        .match_header("authorization", format!("Bearer {}", API_TOKEN).as_str())
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(serde_json::json!({ "id": item_id, "fieldData": field_data }).to_string())
        .create_async()
        .await
}

pub async fn send(app: &Router, req: Request<Body>) -> axum::response::Response {
    app.clone().oneshot(req).await.expect("request failed")
}

pub async fn read_json<T: DeserializeOwned>(res: axum::response::Response) -> T {
    let bytes = to_bytes(res.into_body(), usize::MAX)
        .await
        .expect("failed to read body");
    serde_json::from_slice(&bytes).expect("failed to parse json")
}

pub async fn read_text(res: axum::response::Response) -> String {
    let bytes = axum::body::to_bytes(res.into_body(), usize::MAX)
        .await
        .expect("failed to read body");
    String::from_utf8(bytes.to_vec()).expect("invalid utf8")
}

pub async fn expect_status(
    res: axum::response::Response,
    expected: StatusCode,
) -> axum::response::Response {
    let actual = res.status();

    if actual == expected {
        return res;
    }

    let body = read_text(res).await;
    panic!(
        "HTTP status mismatch. Expected {}, got {}. Response body: {}",
        expected, actual, body
    );
}

pub fn assert_cors_headers(res: &axum::response::Response) {
    let headers = res.headers();
    assert_eq!(headers["access-control-allow-origin"], "*");
    assert_eq!(headers["access-control-allow-headers"], "Content-Type");
    assert_eq!(headers["access-control-allow-methods"], "GET, POST, OPTIONS");
}
