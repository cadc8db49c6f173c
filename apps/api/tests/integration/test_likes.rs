use super::helpers::{
    LIKE_FIELD, assert_cors_headers, expect_status, item_path, mock_item, read_json, send,
    spawn_app,
};
use axum::{
    body::Body,
    http::{Request, StatusCode, header},
};
use likes_api::presentation::http::routes::{LEGACY_LIKES_PATH, LIKES_PATH};
use mockito::Matcher;
use serde_json::{Value, json};

fn get_likes(item_id: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(format!("{}?itemId={}", LIKES_PATH, item_id))
        .body(Body::empty())
        .expect("failed to build get request")
}

fn post_like_query(item_id: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(format!("{}?itemId={}", LIKES_PATH, item_id))
        .body(Body::empty())
        .expect("failed to build post request")
}

fn post_like_body(body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(LIKES_PATH)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("failed to build post request")
}

#[tokio::test]
async fn absent_count_reads_zero_then_first_like_writes_integer_one() {
    let mut app = spawn_app().await;
    let fetch = mock_item(&mut app.upstream, "X", json!({ "name": "Poster" }), 2).await;
    let update = app
        .upstream
        .mock("PATCH", item_path("X").as_str())
        .match_header("authorization", "Bearer test-token")
        .match_body(Matcher::Json(json!({ "fieldData": { LIKE_FIELD: 1 } })))
        .with_status(200)
        .with_body("{}")
        .expect(1)
        .create_async()
        .await;

    let res = expect_status(send(&app.app, get_likes("X")).await, StatusCode::OK).await;
    assert_cors_headers(&res);
    let body: Value = read_json(res).await;
    assert_eq!(body, json!({ "itemId": "X", "likes": 0, "name": "Poster" }));

    let res = expect_status(send(&app.app, post_like_query("X")).await, StatusCode::OK).await;
    let body: Value = read_json(res).await;
    assert_eq!(body["itemId"], "X");
    assert_eq!(body["likes"], json!(1));
    assert_eq!(body["message"], "Like added successfully");

    fetch.assert_async().await;
    update.assert_async().await;
}

#[tokio::test]
async fn string_count_is_incremented_numerically() {
    let mut app = spawn_app().await;
    let _fetch = mock_item(&mut app.upstream, "X", json!({ LIKE_FIELD: "5" }), 1).await;
    let update = app
        .upstream
        .mock("PATCH", item_path("X").as_str())
        .match_body(Matcher::Json(json!({ "fieldData": { LIKE_FIELD: 6 } })))
        .with_status(200)
        .with_body("{}")
        .create_async()
        .await;

    let res = expect_status(send(&app.app, post_like_query("X")).await, StatusCode::OK).await;
    let body: Value = read_json(res).await;

    assert_eq!(body["likes"], json!(6));
    assert!(body["likes"].is_u64());
    update.assert_async().await;
}

#[tokio::test]
async fn item_id_can_come_from_json_body() {
    let mut app = spawn_app().await;
    let _fetch = mock_item(&mut app.upstream, "from-body", json!({ LIKE_FIELD: 41 }), 1).await;
    let update = app
        .upstream
        .mock("PATCH", item_path("from-body").as_str())
        .match_body(Matcher::Json(json!({ "fieldData": { LIKE_FIELD: 42 } })))
        .with_status(200)
        .create_async()
        .await;

    let res = expect_status(
        send(&app.app, post_like_body(r#"{"itemId":"from-body"}"#)).await,
        StatusCode::OK,
    )
    .await;
    let body: Value = read_json(res).await;

    assert_eq!(body["itemId"], "from-body");
    assert_eq!(body["likes"], json!(42));
    update.assert_async().await;
}

#[tokio::test]
async fn consecutive_reads_return_the_same_count() {
    let mut app = spawn_app().await;
    let fetch = app
        .upstream
        .mock("GET", item_path("X").as_str())
        .with_status(200)
        .with_body(json!({ "id": "X", "fieldData": { LIKE_FIELD: 9 } }).to_string())
        .expect(2)
        .create_async()
        .await;

    let first: Value = read_json(send(&app.app, get_likes("X")).await).await;
    let second: Value = read_json(send(&app.app, get_likes("X")).await).await;

    assert_eq!(first["likes"], json!(9));
    assert_eq!(first["likes"], second["likes"]);
    fetch.assert_async().await;
}

#[tokio::test]
async fn missing_item_id_is_rejected_on_every_channel() {
    let app = spawn_app().await;

    let requests = [
        Request::builder()
            .method("GET")
            .uri(LIKES_PATH)
            .body(Body::empty())
            .unwrap(),
        Request::builder()
            .method("GET")
            .uri(format!("{}?itemId=", LIKES_PATH))
            .body(Body::empty())
            .unwrap(),
        Request::builder()
            .method("POST")
            .uri(LIKES_PATH)
            .body(Body::empty())
            .unwrap(),
        post_like_body("{}"),
        post_like_body(r#"{"itemId":""}"#),
    ];

    for req in requests {
        let res = expect_status(send(&app.app, req).await, StatusCode::BAD_REQUEST).await;
        assert_cors_headers(&res);
        let body: Value = read_json(res).await;
        assert_eq!(body, json!({ "error": "itemId required" }));
    }
}

#[tokio::test]
async fn malformed_body_is_rejected() {
    let app = spawn_app().await;

    let res = expect_status(
        send(&app.app, post_like_body("{\"itemId\":")).await,
        StatusCode::BAD_REQUEST,
    )
    .await;
    let body: Value = read_json(res).await;

    assert_eq!(body["error"], "Invalid JSON body");
}

#[tokio::test]
async fn upstream_read_failure_is_bad_gateway_for_both_operations() {
    let mut app = spawn_app().await;
    let _fetch = app
        .upstream
        .mock("GET", item_path("gone").as_str())
        .with_status(404)
        .with_body("{\"message\":\"Requested resource not found\"}")
        .expect(2)
        .create_async()
        .await;
    let update = app
        .upstream
        .mock("PATCH", item_path("gone").as_str())
        .expect(0)
        .create_async()
        .await;

    for req in [get_likes("gone"), post_like_query("gone")] {
        let res = expect_status(send(&app.app, req).await, StatusCode::BAD_GATEWAY).await;
        assert_cors_headers(&res);
        let body: Value = read_json(res).await;
        assert_eq!(body["error"], "Upstream service error");
        assert_eq!(body["details"], "Webflow API error: 404");
    }

    update.assert_async().await;
}

#[tokio::test]
async fn upstream_update_failure_reports_status_and_body() {
    let mut app = spawn_app().await;
    let _fetch = mock_item(&mut app.upstream, "X", json!({ LIKE_FIELD: 2 }), 1).await;
    let _update = app
        .upstream
        .mock("PATCH", item_path("X").as_str())
        .with_status(409)
        .with_body("item is locked")
        .create_async()
        .await;

    let res = expect_status(send(&app.app, post_like_query("X")).await, StatusCode::BAD_GATEWAY).await;
    let body: Value = read_json(res).await;

    assert_eq!(body["details"], "Webflow update error: 409 - item is locked");
}

#[tokio::test]
async fn undecodable_item_is_internal_error() {
    let mut app = spawn_app().await;
    let _fetch = app
        .upstream
        .mock("GET", item_path("X").as_str())
        .with_status(200)
        .with_body("not json")
        .create_async()
        .await;

    let res = expect_status(
        send(&app.app, get_likes("X")).await,
        StatusCode::INTERNAL_SERVER_ERROR,
    )
    .await;
    assert_cors_headers(&res);
    let body: Value = read_json(res).await;

    assert_eq!(body["error"], "Internal server error");
}

#[tokio::test]
async fn legacy_function_path_serves_the_same_endpoint() {
    let mut app = spawn_app().await;
    let _fetch = mock_item(&mut app.upstream, "X", json!({ LIKE_FIELD: "3" }), 1).await;

    let req = Request::builder()
        .method("GET")
        .uri(format!("{}?itemId=X", LEGACY_LIKES_PATH))
        .body(Body::empty())
        .unwrap();
    let res = expect_status(send(&app.app, req).await, StatusCode::OK).await;
    let body: Value = read_json(res).await;

    assert_eq!(body["likes"], json!(3));
}
