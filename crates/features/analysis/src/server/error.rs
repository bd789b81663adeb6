use super::dto::ErrorBody;
use crate::error::{AnalysisError, ErrorKind};
use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use shub_kernel::server::ApiStateError;
use tracing::{error, warn};

/// HTTP face of [`AnalysisError`].
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    body: ErrorBody,
}

impl ApiError {
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        self.status
    }
}

impl From<AnalysisError> for ApiError {
    fn from(err: AnalysisError) -> Self {
        let (status, kind) = match err.kind() {
            ErrorKind::Input => (StatusCode::BAD_REQUEST, "validation"),
            ErrorKind::NotFound => (StatusCode::NOT_FOUND, "not_found"),
            ErrorKind::Upstream => (StatusCode::BAD_GATEWAY, "upstream"),
        };

        if status.is_client_error() {
            warn!(%status, error = %err, "Analysis request rejected");
        } else {
            error!(%status, error = %err, "Analysis request failed");
        }

        Self {
            status,
            body: ErrorBody {
                error: kind.to_owned(),
                message: err.to_string(),
                hint: err.hint().map(str::to_owned),
            },
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        warn!(status = %rejection.status(), error = %rejection.body_text(), "Malformed request body");
        Self {
            status: StatusCode::BAD_REQUEST,
            body: ErrorBody {
                error: "validation".to_owned(),
                message: rejection.body_text(),
                hint: None,
            },
        }
    }
}

impl From<ApiStateError> for ApiError {
    fn from(err: ApiStateError) -> Self {
        error!(error = %err, "Analysis slice is not registered");
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            body: ErrorBody { error: "internal".to_owned(), message: err.to_string(), hint: None },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(self.body)).into_response()
    }
}
