use super::dto::{DemoRequest, ErrorBody, TextRequest, UserRequest};
use super::error::ApiError;
use crate::Analysis;
use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use shub_derive::api_handler;
use shub_kernel::domain::constants::ANALYSIS_TAG;
use shub_kernel::domain::sentiment::AnalysisReport;
use shub_kernel::server::ApiState;

#[api_handler(
    post,
    path = "/api/analyze/text",
    request_body = TextRequest,
    responses(
        (status = OK, description = "Label of the submitted text", body = AnalysisReport),
        (status = BAD_REQUEST, description = "Malformed body", body = ErrorBody),
    ),
    tag = ANALYSIS_TAG,
)]
pub(super) async fn analyze_text(
    State(state): State<ApiState>,
    payload: Result<Json<TextRequest>, JsonRejection>,
) -> Result<Json<AnalysisReport>, ApiError> {
    let Json(request) = payload?;
    let analysis = state.try_get_slice::<Analysis>()?;
    Ok(Json(analysis.analyzer.analyze_text(&request.text)))
}

#[api_handler(
    post,
    path = "/api/analyze/demo",
    request_body = DemoRequest,
    responses(
        (status = OK, description = "Labels and summary of the demo batch", body = AnalysisReport),
        (status = BAD_REQUEST, description = "Count out of range", body = ErrorBody),
    ),
    tag = ANALYSIS_TAG,
)]
pub(super) async fn analyze_demo(
    State(state): State<ApiState>,
    payload: Result<Json<DemoRequest>, JsonRejection>,
) -> Result<Json<AnalysisReport>, ApiError> {
    let Json(request) = payload?;
    let analysis = state.try_get_slice::<Analysis>()?;
    Ok(Json(analysis.analyzer.analyze_demo(request.count)?))
}

#[api_handler(
    post,
    path = "/api/analyze/user",
    request_body = UserRequest,
    responses(
        (status = OK, description = "Labels and summary of the user's posts", body = AnalysisReport),
        (status = BAD_REQUEST, description = "Invalid username or count", body = ErrorBody),
        (status = NOT_FOUND, description = "Unknown user or no posts", body = ErrorBody),
        (status = BAD_GATEWAY, description = "Post service unavailable", body = ErrorBody),
    ),
    tag = ANALYSIS_TAG,
)]
pub(super) async fn analyze_user(
    State(state): State<ApiState>,
    payload: Result<Json<UserRequest>, JsonRejection>,
) -> Result<Json<AnalysisReport>, ApiError> {
    let Json(request) = payload?;
    let analysis = state.try_get_slice::<Analysis>()?;
    let report =
        analysis.analyzer.analyze_user(&request.username, request.count, request.fallback).await?;
    Ok(Json(report))
}
