//! Axum router construction for the API.
//!
//! Assembles all routes (REST + `WebSocket`) into a single [`Router`]
//! with CORS middleware enabled for cross-origin client access.

use std::sync::Arc;

use axum::Router;
use axum::routing::get;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::handlers::{self, events, locations, participants, users};
use crate::state::AppState;
use crate::ws;

/// Build the complete Axum router.
///
/// Each entity family mounts the same six operations on two paths; the
/// change stream mounts one `WebSocket` route parameterized by topic.
///
/// CORS is configured to allow any origin for development. In
/// production this should be restricted.
pub fn build_router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Status page
        .route("/", get(handlers::index))
        // WebSocket change streams
        .route("/ws/changes/{topic}", get(ws::ws_changes))
        // Users
        .route(
            "/api/users",
            get(users::list_users)
                .post(users::create_user)
                .delete(users::delete_all_users),
        )
        .route(
            "/api/users/{id}",
            get(users::get_user)
                .patch(users::update_user)
                .delete(users::delete_user),
        )
        // Events
        .route(
            "/api/events",
            get(events::list_events)
                .post(events::create_event)
                .delete(events::delete_all_events),
        )
        .route(
            "/api/events/{id}",
            get(events::get_event)
                .patch(events::update_event)
                .delete(events::delete_event),
        )
        // Locations
        .route(
            "/api/locations",
            get(locations::list_locations)
                .post(locations::create_location)
                .delete(locations::delete_all_locations),
        )
        .route(
            "/api/locations/{id}",
            get(locations::get_location)
                .patch(locations::update_location)
                .delete(locations::delete_location),
        )
        // Participants
        .route(
            "/api/participants",
            get(participants::list_participants)
                .post(participants::create_participant)
                .delete(participants::delete_all_participants),
        )
        .route(
            "/api/participants/{id}",
            get(participants::get_participant)
                .patch(participants::update_participant)
                .delete(participants::delete_participant),
        )
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
