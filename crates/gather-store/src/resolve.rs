//! Reference resolution: derived graph edges computed on demand.
//!
//! Relationships are stored as foreign-key fields only. These functions
//! compute the derived edges from collection snapshots -- pure reads, no
//! hidden mutation, no denormalized state to keep in sync.
//!
//! A dangling foreign key resolves to `None` (singular edges) or simply
//! matches nothing (plural edges). Resolution failure never aborts the
//! caller's sibling fields; the enclosing response assembles best-effort.
//!
//! Every edge is an O(n) scan or filter. At this scale that is the design;
//! the natural optimization, if one collection grows hot, is a map from FK
//! value to owning row ids maintained on write.

use gather_types::{Event, EventId, Location, Participant, User, UserId};

use crate::collection::Collection;

/// The user hosting an event (`event.user_id` lookup).
///
/// `None` when the foreign key dangles.
pub fn host<'a>(users: &'a Collection<User>, event: &Event) -> Option<&'a User> {
    users.get(event.user_id).ok()
}

/// The venue of an event (`event.location_id` lookup).
///
/// `None` when the foreign key dangles.
pub fn venue<'a>(locations: &'a Collection<Location>, event: &Event) -> Option<&'a Location> {
    locations.get(event.location_id).ok()
}

/// All participants attending an event, in insertion order.
pub fn attendance(
    participants: &Collection<Participant>,
    event_id: EventId,
) -> Vec<&Participant> {
    participants
        .list()
        .iter()
        .filter(|p| p.event_id == event_id)
        .collect()
}

/// All events hosted by a user, in insertion order.
pub fn hosted_events(events: &Collection<Event>, user_id: UserId) -> Vec<&Event> {
    events
        .list()
        .iter()
        .filter(|e| e.user_id == user_id)
        .collect()
}

#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, NaiveTime};
    use gather_types::{NewEvent, NewLocation, NewParticipant, NewUser};

    use crate::directory::Directory;

    use super::*;

    fn seed_graph() -> Directory {
        let mut directory = Directory::new();

        let ada = directory.users.insert(NewUser {
            username: String::from("ada"),
            email: String::from("ada@x.com"),
        });
        let hall = directory.locations.insert(NewLocation {
            name: String::from("Hall"),
            desc: String::from("Main hall"),
            lat: 41.0,
            lng: 29.0,
        });
        let meetup = directory.events.insert(NewEvent {
            title: String::from("Rust meetup"),
            desc: String::from("Monthly gathering"),
            date: NaiveDate::from_ymd_opt(2026, 3, 14).unwrap_or_default(),
            from: NaiveTime::from_hms_opt(18, 0, 0).unwrap_or_default(),
            to: NaiveTime::from_hms_opt(21, 0, 0).unwrap_or_default(),
            location_id: hall.id,
            user_id: ada.id,
        });
        directory.participants.insert(NewParticipant {
            user_id: ada.id,
            event_id: meetup.id,
        });

        directory
    }

    #[test]
    fn host_resolves_through_user_fk() {
        let directory = seed_graph();
        let event = directory.events.list().first();
        assert!(event.is_some());
        if let Some(event) = event {
            let resolved = host(&directory.users, event);
            assert_eq!(resolved.map(|u| u.username.as_str()), Some("ada"));
        }
    }

    #[test]
    fn venue_resolves_through_location_fk() {
        let directory = seed_graph();
        let event = directory.events.list().first();
        if let Some(event) = event {
            let resolved = venue(&directory.locations, event);
            assert_eq!(resolved.map(|l| l.name.as_str()), Some("Hall"));
        }
    }

    #[test]
    fn dangling_fk_resolves_to_none_not_error() {
        let mut directory = seed_graph();
        let location_id = directory.locations.list().first().map(|l| l.id);
        if let Some(location_id) = location_id {
            assert!(directory.locations.remove(location_id).is_ok());
        }

        // The event still lists and its own fields still read; only the
        // derived venue is absent.
        let event = directory.events.list().first();
        assert!(event.is_some());
        if let Some(event) = event {
            assert_eq!(event.title, "Rust meetup");
            assert!(venue(&directory.locations, event).is_none());
            // The sibling edge is unaffected by the dangling venue.
            assert!(host(&directory.users, event).is_some());
        }
    }

    #[test]
    fn attendance_filters_by_event_in_insertion_order() {
        let mut directory = seed_graph();
        let meetup_id = directory.events.list().first().map(|e| e.id);
        let other = directory.events.insert(NewEvent {
            title: String::from("Other"),
            desc: String::from("Unrelated"),
            date: NaiveDate::from_ymd_opt(2026, 4, 1).unwrap_or_default(),
            from: NaiveTime::from_hms_opt(9, 0, 0).unwrap_or_default(),
            to: NaiveTime::from_hms_opt(10, 0, 0).unwrap_or_default(),
            location_id: gather_types::LocationId::new(),
            user_id: gather_types::UserId::new(),
        });

        let grace = directory.users.insert(NewUser {
            username: String::from("grace"),
            email: String::from("grace@x.com"),
        });
        if let Some(meetup_id) = meetup_id {
            directory.participants.insert(NewParticipant {
                user_id: grace.id,
                event_id: meetup_id,
            });
            directory.participants.insert(NewParticipant {
                user_id: grace.id,
                event_id: other.id,
            });

            let attending = attendance(&directory.participants, meetup_id);
            assert_eq!(attending.len(), 2);
            assert!(attending.iter().all(|p| p.event_id == meetup_id));
            // Insertion order: ada's seed row first, then grace's.
            assert_eq!(
                attending.last().map(|p| p.user_id),
                Some(grace.id)
            );
        }
    }

    #[test]
    fn hosted_events_filters_by_user() {
        let directory = seed_graph();
        let ada_id = directory.users.list().first().map(|u| u.id);
        if let Some(ada_id) = ada_id {
            let hosted = hosted_events(&directory.events, ada_id);
            assert_eq!(hosted.len(), 1);
            assert_eq!(hosted.first().map(|e| e.title.as_str()), Some("Rust meetup"));
        }
        // A user nobody references hosts nothing.
        assert!(hosted_events(&directory.events, UserId::new()).is_empty());
    }
}
