//! JSON endpoints of the analysis workflows.

mod dto;
mod error;
mod handlers;

pub use dto::{DemoRequest, ErrorBody, TextRequest, UserRequest};
pub use error::ApiError;

use shub_kernel::server::ApiState;
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

/// `/api/analyze/*` routes. Requires the [`Analysis`](crate::Analysis) slice in the state.
pub fn analysis_router() -> OpenApiRouter<ApiState> {
    OpenApiRouter::new()
        .routes(routes!(handlers::analyze_text))
        .routes(routes!(handlers::analyze_demo))
        .routes(routes!(handlers::analyze_user))
}
