//! The change bus: one bounded broadcast channel per topic.
//!
//! Publishing fans a [`Change`] out to every live subscriber of the
//! matching topic. Delivery is per-subscriber FIFO (each receiver sees
//! changes in publish order); ordering across subscribers is unspecified.
//!
//! # Slow subscribers
//!
//! Channels are bounded rings: a subscriber that falls more than the
//! channel capacity behind loses the oldest pending messages and resumes
//! at the newest (drop-oldest). Publishing therefore never blocks and
//! never fails -- a topic with zero subscribers is a no-op.
//!
//! # Unsubscribing
//!
//! Dropping a [`Subscription`] releases its receiver; pending deliveries
//! to it are discarded. A disconnected WebSocket client unsubscribes by
//! letting its handler return.

use std::collections::HashMap;

use gather_types::EventId;
use tokio::sync::broadcast;
use tracing::debug;

use crate::change::Change;
use crate::topic::{Lifecycle, Topic};

/// Default per-topic channel capacity.
///
/// A subscriber lagging by more than this many messages skips to the
/// newest (the broadcast ring drops the oldest entries).
pub const DEFAULT_CAPACITY: usize = 256;

/// Process-wide fan-out of lifecycle change notifications.
///
/// Constructed once at startup with every topic's channel in place, then
/// shared behind an `Arc`. Publishing is synchronous and lock-free.
#[derive(Debug)]
pub struct ChangeBus {
    channels: HashMap<Topic, broadcast::Sender<Change>>,
}

impl ChangeBus {
    /// Create a bus with the given per-topic channel capacity.
    pub fn new(capacity: usize) -> Self {
        let channels = Topic::ALL
            .into_iter()
            .map(|topic| {
                let (tx, _) = broadcast::channel(capacity.max(1));
                (topic, tx)
            })
            .collect();
        Self { channels }
    }

    /// Subscribe to one topic with no payload filter.
    pub fn subscribe(&self, topic: Topic) -> Subscription {
        self.subscribe_filtered(topic, None)
    }

    /// Subscribe to one topic, optionally filtering participant payloads
    /// by the event they point at.
    ///
    /// The filter only ever matches participant records; it exists for the
    /// `participant.created` stream, where a client typically watches a
    /// single event's attendance.
    pub fn subscribe_filtered(&self, topic: Topic, event_filter: Option<EventId>) -> Subscription {
        // Every topic's channel is created in `new`, so the lookup cannot
        // miss; the fallback channel satisfies the no-panic lint posture.
        let rx = self.channels.get(&topic).map_or_else(
            || broadcast::channel::<Change>(1).1,
            broadcast::Sender::subscribe,
        );
        Subscription {
            topic,
            rx,
            event_filter,
        }
    }

    /// Publish a lifecycle change, fanning out to the matching topic's
    /// live subscribers. Returns how many receivers got the message;
    /// zero subscribers is a normal outcome, not an error.
    pub fn publish(&self, lifecycle: Lifecycle, change: Change) -> usize {
        let topic = Topic::new(change.entity(), lifecycle);
        let delivered = self
            .channels
            .get(&topic)
            // send errs only when there are zero receivers, which is
            // normal when nobody is watching this topic.
            .map_or(0, |tx| tx.send(change).unwrap_or(0));
        debug!(%topic, delivered, "change published");
        delivered
    }

    /// Number of live subscribers on a topic.
    pub fn subscriber_count(&self, topic: Topic) -> usize {
        self.channels
            .get(&topic)
            .map_or(0, broadcast::Sender::receiver_count)
    }
}

impl Default for ChangeBus {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

/// A live registration on one topic.
///
/// Yields matching changes in publish order for as long as the value is
/// held; dropping it unsubscribes.
#[derive(Debug)]
pub struct Subscription {
    topic: Topic,
    rx: broadcast::Receiver<Change>,
    event_filter: Option<EventId>,
}

impl Subscription {
    /// The topic this subscription is registered on.
    pub const fn topic(&self) -> Topic {
        self.topic
    }

    /// Wait for the next matching change.
    ///
    /// Returns `None` once the bus has been dropped and every pending
    /// message is drained. Lag (see [`ChangeBus`]) is absorbed here: the
    /// oldest missed messages are skipped and reception continues at the
    /// newest, with a debug log noting how many were dropped.
    pub async fn recv(&mut self) -> Option<Change> {
        loop {
            match self.rx.recv().await {
                Ok(change) => {
                    if self.matches(&change) {
                        return Some(change);
                    }
                }
                Err(broadcast::error::RecvError::Lagged(skipped)) => {
                    debug!(topic = %self.topic, skipped, "subscriber lagged, oldest changes dropped");
                }
                Err(broadcast::error::RecvError::Closed) => return None,
            }
        }
    }

    fn matches(&self, change: &Change) -> bool {
        match self.event_filter {
            None => true,
            Some(want) => match change.participant_event_id() {
                // The filter constrains participant payloads only.
                None => true,
                Some(have) => have == want,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use gather_types::{EntityKind, Location, LocationId, Participant, ParticipantId, User, UserId};

    use super::*;

    fn user_change(name: &str) -> Change {
        Change::User(User {
            id: UserId::new(),
            username: String::from(name),
            email: format!("{name}@example.com"),
            created_at: Utc::now(),
        })
    }

    fn location_change(name: &str) -> Change {
        Change::Location(Location {
            id: LocationId::new(),
            name: String::from(name),
            desc: String::new(),
            lat: 0.0,
            lng: 0.0,
            created_at: Utc::now(),
        })
    }

    fn participant_change(event_id: EventId) -> Change {
        Change::Participant(Participant {
            id: ParticipantId::new(),
            user_id: UserId::new(),
            event_id,
            created_at: Utc::now(),
        })
    }

    fn username(change: &Change) -> Option<&str> {
        match change {
            Change::User(u) => Some(u.username.as_str()),
            _ => None,
        }
    }

    #[tokio::test]
    async fn publish_with_no_subscribers_is_a_noop() {
        let bus = ChangeBus::default();
        let delivered = bus.publish(Lifecycle::Created, user_change("a"));
        assert_eq!(delivered, 0);
    }

    #[tokio::test]
    async fn subscriber_sees_only_its_topic() {
        let bus = ChangeBus::default();
        let mut sub = bus.subscribe(Topic::new(EntityKind::User, Lifecycle::Created));

        // An unrelated mutation's notification must not leak in.
        bus.publish(Lifecycle::Created, location_change("Hall"));
        bus.publish(Lifecycle::Created, user_change("ada"));

        let received = sub.recv().await;
        assert_eq!(received.as_ref().and_then(username), Some("ada"));
    }

    #[tokio::test]
    async fn updates_do_not_reach_created_subscribers() {
        let bus = ChangeBus::default();
        let mut created = bus.subscribe(Topic::new(EntityKind::User, Lifecycle::Created));

        bus.publish(Lifecycle::Updated, user_change("renamed"));
        bus.publish(Lifecycle::Created, user_change("fresh"));

        let received = created.recv().await;
        assert_eq!(received.as_ref().and_then(username), Some("fresh"));
    }

    #[tokio::test]
    async fn each_subscriber_receives_in_publish_order() {
        let bus = ChangeBus::default();
        let topic = Topic::new(EntityKind::User, Lifecycle::Created);
        let mut first = bus.subscribe(topic);
        let mut second = bus.subscribe(topic);

        for name in ["a", "b", "c"] {
            bus.publish(Lifecycle::Created, user_change(name));
        }

        for sub in [&mut first, &mut second] {
            let mut seen = Vec::new();
            for _ in 0..3 {
                if let Some(change) = sub.recv().await {
                    seen.push(username(&change).unwrap_or("").to_string());
                }
            }
            assert_eq!(seen, vec!["a", "b", "c"]);
        }
    }

    #[tokio::test]
    async fn participant_filter_passes_matching_event_only() {
        let bus = ChangeBus::default();
        let watched = EventId::new();
        let other = EventId::new();
        let mut sub = bus.subscribe_filtered(
            Topic::new(EntityKind::Participant, Lifecycle::Created),
            Some(watched),
        );

        bus.publish(Lifecycle::Created, participant_change(other));
        bus.publish(Lifecycle::Created, participant_change(watched));
        bus.publish(Lifecycle::Created, participant_change(other));
        bus.publish(Lifecycle::Created, participant_change(watched));

        for _ in 0..2 {
            let received = sub.recv().await;
            assert_eq!(
                received.and_then(|c| c.participant_event_id()),
                Some(watched)
            );
        }
    }

    #[tokio::test]
    async fn lagged_subscriber_drops_oldest_and_resumes() {
        // Capacity 4: publishing 6 drops the oldest 2 for a receiver that
        // has not drained. (broadcast rounds capacity to a power of two.)
        let bus = ChangeBus::new(4);
        let mut sub = bus.subscribe(Topic::new(EntityKind::User, Lifecycle::Created));

        for name in ["a", "b", "c", "d", "e", "f"] {
            bus.publish(Lifecycle::Created, user_change(name));
        }

        let mut seen = Vec::new();
        for _ in 0..4 {
            if let Some(change) = sub.recv().await {
                seen.push(username(&change).unwrap_or("").to_string());
            }
        }
        assert_eq!(seen, vec!["c", "d", "e", "f"]);
    }

    #[tokio::test]
    async fn dropping_subscription_unsubscribes() {
        let bus = ChangeBus::default();
        let topic = Topic::new(EntityKind::User, Lifecycle::Created);
        let sub = bus.subscribe(topic);
        assert_eq!(bus.subscriber_count(topic), 1);

        drop(sub);
        assert_eq!(bus.subscriber_count(topic), 0);
        assert_eq!(bus.publish(Lifecycle::Created, user_change("a")), 0);
    }

    #[tokio::test]
    async fn recv_ends_when_bus_is_dropped() {
        let bus = ChangeBus::default();
        let mut sub = bus.subscribe(Topic::new(EntityKind::User, Lifecycle::Created));
        bus.publish(Lifecycle::Created, user_change("last"));
        drop(bus);

        // The pending message is still delivered, then the stream ends.
        let received = sub.recv().await;
        assert_eq!(received.as_ref().and_then(username), Some("last"));
        assert!(sub.recv().await.is_none());
    }
}
