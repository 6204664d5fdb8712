use crate::Activities;
use crate::error::ActivityError;
use crate::model::{Activity, Catalog, EmailQuery, ErrorResponse, MessageResponse};
use axum::Json;
use axum::extract::{Path, Query, State};
use mhs_derive::api_handler;
use mhs_kernel::domain::constants::ACTIVITIES_TAG;
use mhs_kernel::server::ApiState;

#[api_handler(
    get,
    path = "/activities",
    responses((status = OK, description = "Every activity keyed by name", body = indexmap::IndexMap<String, Activity>)),
    tag = ACTIVITIES_TAG,
)]
pub(crate) async fn list_activities(
    State(state): State<ApiState>,
) -> Result<Json<Catalog>, ActivityError> {
    let activities = state.try_get_slice::<Activities>()?;
    Ok(Json(activities.registry.list()))
}

#[api_handler(
    post,
    path = "/activities/{activity_name}/signup",
    params(
        ("activity_name" = String, Path, description = "Activity name"),
        ("email" = String, Query, description = "Student email"),
    ),
    responses(
        (status = OK, description = "Student signed up", body = MessageResponse),
        (status = BAD_REQUEST, description = "Student is already signed up", body = ErrorResponse),
        (status = NOT_FOUND, description = "Activity not found", body = ErrorResponse),
    ),
    tag = ACTIVITIES_TAG,
)]
pub(crate) async fn signup(
    State(state): State<ApiState>,
    Path(activity_name): Path<String>,
    Query(query): Query<EmailQuery>,
) -> Result<Json<MessageResponse>, ActivityError> {
    let activities = state.try_get_slice::<Activities>()?;
    let confirmation = activities.registry.signup(&activity_name, &query.email)?;
    Ok(Json(MessageResponse { message: confirmation.to_string() }))
}

#[api_handler(
    delete,
    path = "/activities/{activity_name}/unregister",
    params(
        ("activity_name" = String, Path, description = "Activity name"),
        ("email" = String, Query, description = "Student email"),
    ),
    responses(
        (status = OK, description = "Student unregistered", body = MessageResponse),
        (status = NOT_FOUND, description = "Activity not found or student not registered", body = ErrorResponse),
    ),
    tag = ACTIVITIES_TAG,
)]
pub(crate) async fn unregister(
    State(state): State<ApiState>,
    Path(activity_name): Path<String>,
    Query(query): Query<EmailQuery>,
) -> Result<Json<MessageResponse>, ActivityError> {
    let activities = state.try_get_slice::<Activities>()?;
    let confirmation = activities.registry.unregister(&activity_name, &query.email)?;
    Ok(Json(MessageResponse { message: confirmation.to_string() }))
}
