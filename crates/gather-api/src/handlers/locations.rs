//! REST handlers for the location collection.
//!
//! Locations carry no derived edges; events reference them one-way.

use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use gather_core::mutations;
use gather_types::{LocationId, LocationPatch, NewLocation};

use crate::error::ApiError;
use crate::handlers::parse_uuid;
use crate::state::AppState;

/// List all locations in insertion order.
pub async fn list_locations(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, ApiError> {
    let directory = state.directory.read().await;
    let locations = directory.locations.list();
    Ok(Json(serde_json::json!({
        "count": locations.len(),
        "locations": locations,
    })))
}

/// One location by id.
pub async fn get_location(
    State(state): State<Arc<AppState>>,
    Path(id_str): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let id = LocationId::from(parse_uuid(&id_str)?);
    let directory = state.directory.read().await;
    let location = directory.locations.get(id)?;
    Ok(Json(serde_json::json!({ "location": location })))
}

/// Create a location. Publishes `location.created`.
pub async fn create_location(
    State(state): State<Arc<AppState>>,
    Json(draft): Json<NewLocation>,
) -> Result<impl IntoResponse, ApiError> {
    let mut directory = state.directory.write().await;
    let location = mutations::create_location(&mut directory, &state.bus, draft)?;
    Ok((StatusCode::CREATED, Json(location)))
}

/// Partially update a location. Publishes `location.updated`.
pub async fn update_location(
    State(state): State<Arc<AppState>>,
    Path(id_str): Path<String>,
    Json(patch): Json<LocationPatch>,
) -> Result<impl IntoResponse, ApiError> {
    let id = LocationId::from(parse_uuid(&id_str)?);
    let mut directory = state.directory.write().await;
    let location = mutations::update_location(&mut directory, &state.bus, id, patch)?;
    Ok(Json(location))
}

/// Delete a location. Publishes `location.deleted`. Events scheduled
/// there keep their dangling venue key.
pub async fn delete_location(
    State(state): State<Arc<AppState>>,
    Path(id_str): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let id = LocationId::from(parse_uuid(&id_str)?);
    let mut directory = state.directory.write().await;
    let location = mutations::delete_location(&mut directory, &state.bus, id)?;
    Ok(Json(location))
}

/// Delete every location. Bulk sweep; publishes nothing.
pub async fn delete_all_locations(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, ApiError> {
    let mut directory = state.directory.write().await;
    let count = mutations::delete_all_locations(&mut directory);
    Ok(Json(serde_json::json!({ "count": count })))
}
