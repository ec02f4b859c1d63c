//! REST endpoint handlers.
//!
//! Every entity family exposes the same six routes, one submodule each:
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | `GET` | `/api/<plural>` | List the collection |
//! | `GET` | `/api/<plural>/{id}` | One record with derived fields resolved |
//! | `POST` | `/api/<plural>` | Create |
//! | `PATCH` | `/api/<plural>/{id}` | Partial update |
//! | `DELETE` | `/api/<plural>/{id}` | Delete |
//! | `DELETE` | `/api/<plural>` | Delete all, returns `{"count": n}` |
//!
//! Queries take the directory read lock and resolve derived edges
//! best-effort: a dangling foreign key renders as `null` (singular) or an
//! empty array (plural) while sibling fields come through untouched.
//! Mutations take the write lock and go through `gather-core`, which
//! publishes the lifecycle change before the lock is released.

pub mod events;
pub mod locations;
pub mod participants;
pub mod users;

use std::sync::Arc;

use axum::extract::State;
use axum::response::{Html, IntoResponse};
use uuid::Uuid;

use crate::error::ApiError;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// GET / -- minimal HTML status page
// ---------------------------------------------------------------------------

/// Serve a minimal HTML page showing collection counts and API links.
pub async fn index(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let directory = state.directory.read().await;
    let users = directory.users.len();
    let events = directory.events.len();
    let locations = directory.locations.len();
    let participants = directory.participants.len();

    Html(format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <title>Gather</title>
    <style>
        body {{
            background: #0d1117;
            color: #c9d1d9;
            font-family: 'Cascadia Code', 'Fira Code', 'Consolas', monospace;
            padding: 2rem;
            max-width: 720px;
            margin: 0 auto;
        }}
        h1 {{ color: #58a6ff; margin-bottom: 0.25rem; }}
        .subtitle {{ color: #8b949e; margin-top: 0; }}
        .metric {{
            display: inline-block;
            background: #161b22;
            border: 1px solid #30363d;
            border-radius: 6px;
            padding: 1rem 1.5rem;
            margin: 0.5rem 0.5rem 0.5rem 0;
            min-width: 120px;
        }}
        .metric .label {{ color: #8b949e; font-size: 0.85rem; }}
        .metric .value {{ color: #58a6ff; font-size: 1.5rem; font-weight: bold; }}
        a {{ color: #58a6ff; text-decoration: none; }}
        a:hover {{ text-decoration: underline; }}
        ul {{ list-style: none; padding: 0; }}
        li {{ padding: 0.3rem 0; }}
        hr {{ border: none; border-top: 1px solid #30363d; margin: 1.5rem 0; }}
    </style>
</head>
<body>
    <h1>Gather</h1>
    <p class="subtitle">Event platform API</p>

    <div>
        <div class="metric">
            <div class="label">Users</div>
            <div class="value">{users}</div>
        </div>
        <div class="metric">
            <div class="label">Events</div>
            <div class="value">{events}</div>
        </div>
        <div class="metric">
            <div class="label">Locations</div>
            <div class="value">{locations}</div>
        </div>
        <div class="metric">
            <div class="label">Participants</div>
            <div class="value">{participants}</div>
        </div>
    </div>

    <hr>

    <h2>REST</h2>
    <ul>
        <li><a href="/api/users">/api/users</a> -- users (GET, POST, DELETE; /{{id}} GET, PATCH, DELETE)</li>
        <li><a href="/api/events">/api/events</a> -- events</li>
        <li><a href="/api/locations">/api/locations</a> -- locations</li>
        <li><a href="/api/participants">/api/participants</a> -- participants</li>
    </ul>

    <h2>WebSocket</h2>
    <ul>
        <li><code>ws://host:port/ws/changes/{{topic}}</code> -- lifecycle stream,
            topics like <code>user.created</code>; <code>participant.created</code>
            accepts <code>?event_id=</code></li>
    </ul>
</body>
</html>"#
    ))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Parse a UUID from a path segment, returning an [`ApiError`] on failure.
pub(crate) fn parse_uuid(s: &str) -> Result<Uuid, ApiError> {
    s.parse::<Uuid>()
        .map_err(|e| ApiError::InvalidId(format!("{s}: {e}")))
}
