#![cfg(feature = "server")]

mod common;

use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode, header};
use common::{FakeSource, analysis};
use serde_json::{Value, json};
use shub_analysis::server::analysis_router;
use shub_kernel::domain::config::ApiConfig;
use shub_kernel::domain::registry::InitializedSlice;
use shub_kernel::server::ApiState;
use tower::ServiceExt;

fn app(source: FakeSource) -> Router {
    let state = ApiState::builder()
        .config(ApiConfig::default())
        .register_slice(InitializedSlice::new(analysis(source)))
        .build()
        .unwrap();
    let (router, _) = analysis_router().split_for_parts();
    router.with_state(state)
}

async fn post(app: Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let request = Request::post(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap_or(Value::Null))
}

#[test]
fn routes_are_documented() {
    let (_, api) = analysis_router().split_for_parts();
    for path in ["/api/analyze/text", "/api/analyze/demo", "/api/analyze/user"] {
        assert!(api.paths.paths.contains_key(path), "{path} missing from the OpenAPI document");
    }
}

#[tokio::test]
async fn text_endpoint_labels_the_text() {
    let (status, json) =
        post(app(FakeSource::posts(&[])), "/api/analyze/text", json!({ "text": "Great, great!" }))
            .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["source"], json!({ "kind": "text" }));
    assert_eq!(json["results"][0]["label"], "Positive");
    assert_eq!(json["summary"]["positivePct"], 100.0);
}

#[tokio::test]
async fn empty_text_is_still_labelled() {
    let (status, json) =
        post(app(FakeSource::posts(&[])), "/api/analyze/text", json!({ "text": "" })).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["results"][0]["label"], "Negative");
}

#[tokio::test]
async fn demo_endpoint_uses_the_default_count() {
    let (status, json) = post(app(FakeSource::posts(&[])), "/api/analyze/demo", json!({})).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["summary"]["total"], 10);
    assert_eq!(json["summary"]["positive"], 5);
    assert_eq!(json["summary"]["negativePct"], 50.0);
}

#[tokio::test]
async fn bad_input_is_a_bad_request() {
    let (status, json) =
        post(app(FakeSource::posts(&[])), "/api/analyze/demo", json!({ "count": 3 })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "validation");
    assert!(json.get("hint").is_none());

    let (status, _) =
        post(app(FakeSource::posts(&[])), "/api/analyze/user", json!({ "username": "a b" })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn malformed_bodies_answer_with_a_json_error() {
    for (uri, body) in [
        ("/api/analyze/demo", json!({ "count": -1 })),
        ("/api/analyze/text", json!({ "text": "hi", "lang": "en" })),
        ("/api/analyze/user", json!({ "count": 20 })),
    ] {
        let (status, json) = post(app(FakeSource::posts(&[])), uri, body).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{uri}");
        assert_eq!(json["error"], "validation", "{uri}");
        assert!(json["message"].as_str().is_some_and(|m| !m.is_empty()), "{uri}");
    }
}

#[tokio::test]
async fn collaborator_failures_map_to_statuses() {
    let (status, json) = post(
        app(FakeSource::failing("not_found")),
        "/api/analyze/user",
        json!({ "username": "ghost" }),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["error"], "not_found");

    let (status, json) = post(
        app(FakeSource::failing("unavailable")),
        "/api/analyze/user",
        json!({ "username": "someone", "count": 20 }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert!(json["hint"].as_str().unwrap().contains("demo mode"));
}

#[tokio::test]
async fn fallback_turns_failures_into_the_demo_batch() {
    let (status, json) = post(
        app(FakeSource::failing("unavailable")),
        "/api/analyze/user",
        json!({ "username": "someone", "fallback": true }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["source"]["kind"], "demo");
    assert!(json["notice"].as_str().unwrap().contains("demo batch"));
}
