#![cfg(feature = "server")]

use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode};
use shub_kernel::domain::config::ApiConfig;
use shub_kernel::domain::registry::{FeatureSlice, InitializedSlice};
use shub_kernel::server::{ApiState, ApiStateError, system_router};
use std::any::Any;
use tower::ServiceExt;

#[derive(Debug)]
struct Probe(u8);

impl FeatureSlice for Probe {
    fn as_any(&self) -> &dyn Any {
        self
    }
}

#[test]
fn state_resolves_registered_slices() {
    let state = ApiState::builder()
        .config(ApiConfig::default())
        .register_slices([InitializedSlice::new(Probe(7))])
        .build()
        .unwrap();

    assert_eq!(state.get_slice::<Probe>().map(|p| p.0), Some(7));
    assert_eq!(state.slice_ids().count(), 1);
    assert_eq!(state.config.server.port, 4583);
}

#[test]
fn state_requires_config_and_reports_missing_slices() {
    assert!(matches!(ApiState::builder().build(), Err(ApiStateError::Validation { .. })));

    let state = ApiState::builder().config(ApiConfig::default()).build().unwrap();
    let err = state.try_get_slice::<Probe>().unwrap_err();
    assert!(err.to_string().contains("Probe"));
}

#[tokio::test]
async fn health_reports_up() {
    let (router, api) = system_router::<()>().split_for_parts();
    assert!(api.paths.paths.contains_key("/health"));

    let response = router
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["status"], "up");
}
