//! REST handlers for the event collection.
//!
//! `GET /api/events/{id}` is where reference resolution earns its keep:
//! the response carries the host, the venue, and the attendance list,
//! each resolved best-effort. A dangling foreign key yields `null` for
//! that edge while the event's own fields and sibling edges are served
//! normally.

use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use gather_core::mutations;
use gather_store::resolve;
use gather_types::{EventId, EventPatch, NewEvent};

use crate::error::ApiError;
use crate::handlers::parse_uuid;
use crate::state::AppState;

/// List all events in insertion order.
pub async fn list_events(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, ApiError> {
    let directory = state.directory.read().await;
    let events = directory.events.list();
    Ok(Json(serde_json::json!({
        "count": events.len(),
        "events": events,
    })))
}

/// One event with host, venue, and attendance resolved.
pub async fn get_event(
    State(state): State<Arc<AppState>>,
    Path(id_str): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let id = EventId::from(parse_uuid(&id_str)?);
    let directory = state.directory.read().await;

    let event = directory.events.get(id)?;
    let host = resolve::host(&directory.users, event);
    let venue = resolve::venue(&directory.locations, event);
    let attendance = resolve::attendance(&directory.participants, event.id);

    Ok(Json(serde_json::json!({
        "event": event,
        "host": host,
        "venue": venue,
        "attendance": attendance,
    })))
}

/// Create an event. Publishes `event.created`.
pub async fn create_event(
    State(state): State<Arc<AppState>>,
    Json(draft): Json<NewEvent>,
) -> Result<impl IntoResponse, ApiError> {
    let mut directory = state.directory.write().await;
    let event = mutations::create_event(&mut directory, &state.bus, draft)?;
    Ok((StatusCode::CREATED, Json(event)))
}

/// Partially update an event. Publishes `event.updated`.
pub async fn update_event(
    State(state): State<Arc<AppState>>,
    Path(id_str): Path<String>,
    Json(patch): Json<EventPatch>,
) -> Result<impl IntoResponse, ApiError> {
    let id = EventId::from(parse_uuid(&id_str)?);
    let mut directory = state.directory.write().await;
    let event = mutations::update_event(&mut directory, &state.bus, id, patch)?;
    Ok(Json(event))
}

/// Delete an event. Publishes `event.deleted`. Participations survive.
pub async fn delete_event(
    State(state): State<Arc<AppState>>,
    Path(id_str): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let id = EventId::from(parse_uuid(&id_str)?);
    let mut directory = state.directory.write().await;
    let event = mutations::delete_event(&mut directory, &state.bus, id)?;
    Ok(Json(event))
}

/// Delete every event. Bulk sweep; publishes nothing.
pub async fn delete_all_events(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, ApiError> {
    let mut directory = state.directory.write().await;
    let count = mutations::delete_all_events(&mut directory);
    Ok(Json(serde_json::json!({ "count": count })))
}
