//! REST handlers for the participant collection.

use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use gather_core::mutations;
use gather_types::{NewParticipant, ParticipantId, ParticipantPatch};

use crate::error::ApiError;
use crate::handlers::parse_uuid;
use crate::state::AppState;

/// List all participation records in insertion order.
pub async fn list_participants(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, ApiError> {
    let directory = state.directory.read().await;
    let participants = directory.participants.list();
    Ok(Json(serde_json::json!({
        "count": participants.len(),
        "participants": participants,
    })))
}

/// One participation record by id.
pub async fn get_participant(
    State(state): State<Arc<AppState>>,
    Path(id_str): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let id = ParticipantId::from(parse_uuid(&id_str)?);
    let directory = state.directory.read().await;
    let participant = directory.participants.get(id)?;
    Ok(Json(serde_json::json!({ "participant": participant })))
}

/// Create a participation record. Publishes `participant.created`, the
/// topic the filtered attendance stream watches.
pub async fn create_participant(
    State(state): State<Arc<AppState>>,
    Json(draft): Json<NewParticipant>,
) -> Result<impl IntoResponse, ApiError> {
    let mut directory = state.directory.write().await;
    let participant = mutations::create_participant(&mut directory, &state.bus, draft)?;
    Ok((StatusCode::CREATED, Json(participant)))
}

/// Partially update a participation record. Publishes
/// `participant.updated`.
pub async fn update_participant(
    State(state): State<Arc<AppState>>,
    Path(id_str): Path<String>,
    Json(patch): Json<ParticipantPatch>,
) -> Result<impl IntoResponse, ApiError> {
    let id = ParticipantId::from(parse_uuid(&id_str)?);
    let mut directory = state.directory.write().await;
    let participant = mutations::update_participant(&mut directory, &state.bus, id, patch)?;
    Ok(Json(participant))
}

/// Delete a participation record. Publishes `participant.deleted`.
pub async fn delete_participant(
    State(state): State<Arc<AppState>>,
    Path(id_str): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let id = ParticipantId::from(parse_uuid(&id_str)?);
    let mut directory = state.directory.write().await;
    let participant = mutations::delete_participant(&mut directory, &state.bus, id)?;
    Ok(Json(participant))
}

/// Delete every participation record. Bulk sweep; publishes nothing.
pub async fn delete_all_participants(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, ApiError> {
    let mut directory = state.directory.write().await;
    let count = mutations::delete_all_participants(&mut directory);
    Ok(Json(serde_json::json!({ "count": count })))
}
