//! The payload delivered on a change topic: the full affected record.
//!
//! [`Change`] serializes untagged, so a WebSocket subscriber of
//! `user.created` receives the plain user object, exactly what the
//! corresponding query would have returned.

use gather_types::{EntityKind, Event, EventId, Location, Participant, User};
use serde::Serialize;

/// The record a lifecycle notification carries.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Change {
    /// A user record.
    User(User),
    /// An event record.
    Event(Event),
    /// A location record.
    Location(Location),
    /// A participant record.
    Participant(Participant),
}

impl Change {
    /// The entity kind of the carried record.
    pub const fn entity(&self) -> EntityKind {
        match self {
            Self::User(_) => EntityKind::User,
            Self::Event(_) => EntityKind::Event,
            Self::Location(_) => EntityKind::Location,
            Self::Participant(_) => EntityKind::Participant,
        }
    }

    /// The event a participant record points at, for subscriber-side
    /// filtering. `None` for every other entity kind.
    pub const fn participant_event_id(&self) -> Option<EventId> {
        match self {
            Self::Participant(p) => Some(p.event_id),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use gather_types::{LocationId, ParticipantId, UserId};

    use super::*;

    #[test]
    fn change_serializes_as_the_bare_record() {
        let location = Location {
            id: LocationId::new(),
            name: String::from("Hall"),
            desc: String::from("Main hall"),
            lat: 41.0,
            lng: 29.0,
            created_at: Utc::now(),
        };
        let change = Change::Location(location.clone());
        assert_eq!(
            serde_json::to_value(&change).ok(),
            serde_json::to_value(&location).ok()
        );
    }

    #[test]
    fn participant_event_id_only_for_participants() {
        let event_id = EventId::new();
        let participant = Change::Participant(Participant {
            id: ParticipantId::new(),
            user_id: UserId::new(),
            event_id,
            created_at: Utc::now(),
        });
        assert_eq!(participant.participant_event_id(), Some(event_id));
        assert_eq!(participant.entity(), EntityKind::Participant);

        let location = Change::Location(Location {
            id: LocationId::new(),
            name: String::from("Hall"),
            desc: String::new(),
            lat: 0.0,
            lng: 0.0,
            created_at: Utc::now(),
        });
        assert_eq!(location.participant_event_id(), None);
    }
}
