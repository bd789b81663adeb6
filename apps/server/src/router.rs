use axum::Router;
use axum::response::Html;
use axum::routing::get;
use shub::domain::constants::{ANALYSIS_TAG, SYSTEM_TAG};
use shub::kernel::prelude::ApiState;
use shub::server::router::{analysis_router, system_router};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_axum::router::OpenApiRouter;
use utoipa_scalar::{Scalar, Servable};

const INDEX_HTML: &str = include_str!("../static/index.html");

#[derive(OpenApi)]
#[openapi(
    info(title = "Sentiment Hub", description = "TF-IDF sentiment analysis of short posts"),
    tags(
        (name = SYSTEM_TAG, description = "Service status"),
        (name = ANALYSIS_TAG, description = "Text, demo and user analysis"),
    )
)]
struct ApiDoc;

#[allow(unreachable_pub)]
pub fn init(state: ApiState) -> Router {
    let api = ApiDoc::openapi();

    let (openapi_routes, api_doc) = OpenApiRouter::with_openapi(api)
        .merge(system_router())
        .merge(analysis_router())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
        .split_for_parts();

    let scalar_routes = Scalar::with_url("/docs", api_doc);

    Router::new().route("/", get(index)).merge(openapi_routes).merge(scalar_routes)
}

async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}
