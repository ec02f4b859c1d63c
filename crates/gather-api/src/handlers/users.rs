//! REST handlers for the user collection.

use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use gather_core::mutations;
use gather_store::resolve;
use gather_types::{NewUser, UserId, UserPatch};

use crate::error::ApiError;
use crate::handlers::parse_uuid;
use crate::state::AppState;

/// List all users in insertion order.
pub async fn list_users(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, ApiError> {
    let directory = state.directory.read().await;
    let users = directory.users.list();
    Ok(Json(serde_json::json!({
        "count": users.len(),
        "users": users,
    })))
}

/// One user plus the events they host (derived, insertion order).
pub async fn get_user(
    State(state): State<Arc<AppState>>,
    Path(id_str): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let id = UserId::from(parse_uuid(&id_str)?);
    let directory = state.directory.read().await;

    let user = directory.users.get(id)?;
    let events = resolve::hosted_events(&directory.events, user.id);

    Ok(Json(serde_json::json!({
        "user": user,
        "events": events,
    })))
}

/// Create a user. Publishes `user.created`.
pub async fn create_user(
    State(state): State<Arc<AppState>>,
    Json(draft): Json<NewUser>,
) -> Result<impl IntoResponse, ApiError> {
    let mut directory = state.directory.write().await;
    let user = mutations::create_user(&mut directory, &state.bus, draft)?;
    Ok((StatusCode::CREATED, Json(user)))
}

/// Partially update a user. Publishes `user.updated`.
pub async fn update_user(
    State(state): State<Arc<AppState>>,
    Path(id_str): Path<String>,
    Json(patch): Json<UserPatch>,
) -> Result<impl IntoResponse, ApiError> {
    let id = UserId::from(parse_uuid(&id_str)?);
    let mut directory = state.directory.write().await;
    let user = mutations::update_user(&mut directory, &state.bus, id, patch)?;
    Ok(Json(user))
}

/// Delete a user. Publishes `user.deleted`. Nothing cascades.
pub async fn delete_user(
    State(state): State<Arc<AppState>>,
    Path(id_str): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let id = UserId::from(parse_uuid(&id_str)?);
    let mut directory = state.directory.write().await;
    let user = mutations::delete_user(&mut directory, &state.bus, id)?;
    Ok(Json(user))
}

/// Delete every user. Bulk sweep; publishes nothing.
pub async fn delete_all_users(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, ApiError> {
    let mut directory = state.directory.write().await;
    let count = mutations::delete_all_users(&mut directory);
    Ok(Json(serde_json::json!({ "count": count })))
}
