//! `WebSocket` handler for lifecycle change streaming.
//!
//! Clients connect to `GET /ws/changes/{topic}` (topic names like
//! `user.created`) and receive one JSON frame per matching change:
//!
//! ```json
//! {"topic": "user.created", "data": { ...the record... }}
//! ```
//!
//! `participant.created` additionally accepts `?event_id=<uuid>` to watch
//! a single event's attendance; the filter is rejected on any other topic.
//!
//! If a client falls behind, the oldest pending changes are dropped and
//! the stream resumes at the newest (see `gather-bus`). Disconnecting
//! drops the subscription, which releases the bus registration.

use std::sync::Arc;

use axum::extract::ws::{Message, WebSocket};
use axum::extract::{Path, Query, State, WebSocketUpgrade};
use axum::response::IntoResponse;
use gather_bus::{Lifecycle, Subscription, Topic};
use gather_types::{EntityKind, EventId};
use tracing::{debug, warn};
use uuid::Uuid;

use crate::error::ApiError;
use crate::state::AppState;

/// Query parameters for the change stream.
#[derive(Debug, serde::Deserialize)]
pub struct ChangesQuery {
    /// Restrict `participant.created` payloads to one event's attendance.
    pub event_id: Option<Uuid>,
}

/// Validate the event filter against the requested topic.
///
/// The filter is only meaningful on `participant.created`; supplying it
/// anywhere else is a client error, not something to silently ignore.
fn validate_filter(topic: Topic, filter: Option<EventId>) -> Result<(), ApiError> {
    let filterable = Topic::new(EntityKind::Participant, Lifecycle::Created);
    if filter.is_some() && topic != filterable {
        return Err(ApiError::InvalidQuery(format!(
            "event_id filter is only supported on {filterable}, not {topic}"
        )));
    }
    Ok(())
}

/// Upgrade to a `WebSocket` connection and stream one topic's changes.
///
/// # Route
///
/// `GET /ws/changes/{topic}?event_id=<uuid>`
pub async fn ws_changes(
    ws: WebSocketUpgrade,
    State(state): State<Arc<AppState>>,
    Path(topic_str): Path<String>,
    Query(params): Query<ChangesQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let topic: Topic = topic_str
        .parse()
        .map_err(|e: gather_bus::TopicParseError| ApiError::InvalidQuery(e.to_string()))?;
    let filter = params.event_id.map(EventId::from);
    validate_filter(topic, filter)?;

    let subscription = state.bus.subscribe_filtered(topic, filter);
    Ok(ws.on_upgrade(move |socket| handle_ws(socket, subscription)))
}

/// Handle the `WebSocket` lifecycle: forward each matching change as a
/// text frame until either side goes away.
async fn handle_ws(mut socket: WebSocket, mut subscription: Subscription) {
    debug!(topic = %subscription.topic(), "change stream client connected");

    loop {
        tokio::select! {
            // Receive the next matching change from the bus.
            change = subscription.recv() => {
                match change {
                    Some(change) => {
                        let frame = serde_json::json!({
                            "topic": subscription.topic().to_string(),
                            "data": change,
                        });
                        let json = match serde_json::to_string(&frame) {
                            Ok(j) => j,
                            Err(e) => {
                                warn!("Failed to serialize change frame: {e}");
                                continue;
                            }
                        };
                        let msg: Message = Message::Text(json.into());
                        if socket.send(msg).await.is_err() {
                            debug!("change stream client disconnected (send failed)");
                            return;
                        }
                    }
                    None => {
                        debug!("change bus closed, shutting down stream");
                        return;
                    }
                }
            }
            // Check if the client sent a close frame or disconnected.
            msg = socket.recv() => {
                match msg {
                    Some(Ok(Message::Close(_))) | None => {
                        debug!("change stream client disconnected");
                        return;
                    }
                    Some(Ok(Message::Ping(data))) => {
                        let pong = Message::Pong(data);
                        if socket.send(pong).await.is_err() {
                            debug!("change stream client disconnected (pong failed)");
                            return;
                        }
                    }
                    Some(Err(e)) => {
                        debug!("change stream error: {e}");
                        return;
                    }
                    _ => {
                        // Ignore other message types from the client.
                    }
                }
            }
        }
    }
}
