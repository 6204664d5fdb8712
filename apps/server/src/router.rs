use axum::Router;
use axum::response::Redirect;
use axum::routing::get;
use mhs::domain::constants::{INDEX_PAGE, STATIC_ROUTE};
use mhs::kernel::prelude::ApiState;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_axum::router::OpenApiRouter;
use utoipa_scalar::{Scalar, Servable};

#[derive(OpenApi)]
#[openapi(info(title = "Mergington High School Activities API"))]
struct ApiDoc;

/// Builds the full application router around `state`.
pub fn init(state: ApiState) -> Router {
    let static_dir = state.config.storage.static_dir.clone();

    let (api_routes, api_doc) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .merge(mhs::server::router::system_router())
        .merge(mhs::server::router::activities_router())
        .with_state(state)
        .split_for_parts();

    Router::new()
        .route("/", get(|| async { Redirect::temporary(INDEX_PAGE) }))
        .nest_service(STATIC_ROUTE, ServeDir::new(static_dir))
        .merge(api_routes)
        .merge(Scalar::with_url("/api", api_doc))
        .layer(TraceLayer::new_for_http())
}
