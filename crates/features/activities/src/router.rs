use crate::handlers;
use mhs_kernel::server::ApiState;
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

/// `/activities` routes; expects the [`crate::Activities`] slice in the state.
pub fn activities_router() -> OpenApiRouter<ApiState> {
    OpenApiRouter::new()
        .routes(routes!(handlers::list_activities))
        .routes(routes!(handlers::signup))
        .routes(routes!(handlers::unregister))
}
