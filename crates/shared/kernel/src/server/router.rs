use super::health;
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

/// Operational routes (`/health`) mounted by every server.
pub fn system_router<S>() -> OpenApiRouter<S>
where
    S: Send + Sync + Clone + 'static,
{
    health::touch_start_time();
    OpenApiRouter::<S>::new().routes(routes!(health::health_handler))
}
