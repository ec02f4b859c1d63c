//! Cold-start seed data.
//!
//! The server starts with a small consistent sample graph so queries and
//! subscriptions have something to chew on immediately. Seeding writes
//! directly to the directory and publishes **no** lifecycle changes: it is
//! startup input, not runtime mutation, and nobody can be subscribed yet.

use chrono::{NaiveDate, NaiveTime};
use gather_store::Directory;
use gather_types::{NewEvent, NewLocation, NewParticipant, NewUser};
use tracing::info;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

fn time(h: u32, m: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, 0).unwrap_or_default()
}

/// Populate an empty directory with the sample graph.
///
/// Three users, two venues, two events (both hosted by the first user),
/// and three attendance records. Safe to call on a non-empty directory,
/// though the intended use is once at startup.
pub fn seed(directory: &mut Directory) {
    let ada = directory.users.insert(NewUser {
        username: String::from("ada"),
        email: String::from("ada@example.com"),
    });
    let grace = directory.users.insert(NewUser {
        username: String::from("grace"),
        email: String::from("grace@example.com"),
    });
    let linus = directory.users.insert(NewUser {
        username: String::from("linus"),
        email: String::from("linus@example.com"),
    });

    let hall = directory.locations.insert(NewLocation {
        name: String::from("City Hall Annex"),
        desc: String::from("Ground-floor conference space next to the main hall"),
        lat: 41.0082,
        lng: 28.9784,
    });
    let garden = directory.locations.insert(NewLocation {
        name: String::from("Botanic Garden Pavilion"),
        desc: String::from("Open-air pavilion by the greenhouse"),
        lat: 41.0136,
        lng: 29.0097,
    });

    let rustcon = directory.events.insert(NewEvent {
        title: String::from("Rust Meetup #42"),
        desc: String::from("Lightning talks and hallway track"),
        date: date(2026, 9, 12),
        from: time(18, 30),
        to: time(21, 0),
        location_id: hall.id,
        user_id: ada.id,
    });
    let picnic = directory.events.insert(NewEvent {
        title: String::from("Autumn Picnic"),
        desc: String::from("Bring a dish, meet the community"),
        date: date(2026, 10, 3),
        from: time(12, 0),
        to: time(16, 0),
        location_id: garden.id,
        user_id: ada.id,
    });

    directory.participants.insert(NewParticipant {
        user_id: grace.id,
        event_id: rustcon.id,
    });
    directory.participants.insert(NewParticipant {
        user_id: linus.id,
        event_id: rustcon.id,
    });
    directory.participants.insert(NewParticipant {
        user_id: grace.id,
        event_id: picnic.id,
    });

    info!(
        users = directory.users.len(),
        events = directory.events.len(),
        locations = directory.locations.len(),
        participants = directory.participants.len(),
        "directory seeded"
    );
}

#[cfg(test)]
mod tests {
    use gather_store::resolve;

    use super::*;

    #[test]
    fn seed_populates_all_collections() {
        let mut directory = Directory::new();
        seed(&mut directory);
        assert_eq!(directory.users.len(), 3);
        assert_eq!(directory.locations.len(), 2);
        assert_eq!(directory.events.len(), 2);
        assert_eq!(directory.participants.len(), 3);
    }

    #[test]
    fn seeded_graph_is_internally_consistent() {
        let mut directory = Directory::new();
        seed(&mut directory);

        // Every seeded FK resolves: no dangling references at cold start.
        for event in directory.events.list() {
            assert!(resolve::host(&directory.users, event).is_some());
            assert!(resolve::venue(&directory.locations, event).is_some());
        }
        for participant in directory.participants.list() {
            assert!(directory.users.get(participant.user_id).is_ok());
            assert!(directory.events.get(participant.event_id).is_ok());
        }
    }

    #[test]
    fn first_user_hosts_both_events() {
        let mut directory = Directory::new();
        seed(&mut directory);
        let ada = directory.users.list().first();
        assert!(ada.is_some());
        if let Some(ada) = ada {
            let hosted = resolve::hosted_events(&directory.events, ada.id);
            assert_eq!(hosted.len(), 2);
        }
    }
}
