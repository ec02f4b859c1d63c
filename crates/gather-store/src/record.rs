//! The [`Record`] trait: how an entity enters and changes inside a
//! [`Collection`](crate::Collection).
//!
//! Each entity type binds its draft (create input) and patch (partial
//! update) types and knows how to build a stored row from a draft and how
//! to merge a patch onto itself. Merging is field-by-field: only `Some`
//! patch fields overwrite, so an empty patch is a no-op.
//!
//! `build` assigns the fresh id and `created_at` timestamp; neither is ever
//! touched by `merge`.

use chrono::Utc;
use gather_types::{
    EntityKind, Event, EventId, EventPatch, Location, LocationId, LocationPatch, NewEvent,
    NewLocation, NewParticipant, NewUser, Participant, ParticipantId, ParticipantPatch, User,
    UserId, UserPatch,
};
use uuid::Uuid;

/// A storable entity: identity, construction from a draft, patch merging.
pub trait Record: Clone {
    /// The typed identifier for this entity.
    type Id: Copy + Eq + Into<Uuid>;
    /// The create input carrying every required field.
    type Draft;
    /// The partial-update input; every field optional.
    type Patch;

    /// Which collection this entity belongs to (used in errors and topics).
    const KIND: EntityKind;

    /// Build a stored row from a draft, assigning a fresh id and timestamp.
    fn build(draft: Self::Draft) -> Self;

    /// The row's identifier.
    fn id(&self) -> Self::Id;

    /// Overwrite only the fields present in the patch.
    fn merge(&mut self, patch: Self::Patch);
}

impl Record for User {
    type Id = UserId;
    type Draft = NewUser;
    type Patch = UserPatch;

    const KIND: EntityKind = EntityKind::User;

    fn build(draft: NewUser) -> Self {
        Self {
            id: UserId::new(),
            username: draft.username,
            email: draft.email,
            created_at: Utc::now(),
        }
    }

    fn id(&self) -> UserId {
        self.id
    }

    fn merge(&mut self, patch: UserPatch) {
        if let Some(username) = patch.username {
            self.username = username;
        }
        if let Some(email) = patch.email {
            self.email = email;
        }
    }
}

impl Record for Event {
    type Id = EventId;
    type Draft = NewEvent;
    type Patch = EventPatch;

    const KIND: EntityKind = EntityKind::Event;

    fn build(draft: NewEvent) -> Self {
        Self {
            id: EventId::new(),
            title: draft.title,
            desc: draft.desc,
            date: draft.date,
            from: draft.from,
            to: draft.to,
            location_id: draft.location_id,
            user_id: draft.user_id,
            created_at: Utc::now(),
        }
    }

    fn id(&self) -> EventId {
        self.id
    }

    fn merge(&mut self, patch: EventPatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(desc) = patch.desc {
            self.desc = desc;
        }
        if let Some(date) = patch.date {
            self.date = date;
        }
        if let Some(from) = patch.from {
            self.from = from;
        }
        if let Some(to) = patch.to {
            self.to = to;
        }
        if let Some(location_id) = patch.location_id {
            self.location_id = location_id;
        }
        if let Some(user_id) = patch.user_id {
            self.user_id = user_id;
        }
    }
}

impl Record for Location {
    type Id = LocationId;
    type Draft = NewLocation;
    type Patch = LocationPatch;

    const KIND: EntityKind = EntityKind::Location;

    fn build(draft: NewLocation) -> Self {
        Self {
            id: LocationId::new(),
            name: draft.name,
            desc: draft.desc,
            lat: draft.lat,
            lng: draft.lng,
            created_at: Utc::now(),
        }
    }

    fn id(&self) -> LocationId {
        self.id
    }

    fn merge(&mut self, patch: LocationPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(desc) = patch.desc {
            self.desc = desc;
        }
        if let Some(lat) = patch.lat {
            self.lat = lat;
        }
        if let Some(lng) = patch.lng {
            self.lng = lng;
        }
    }
}

impl Record for Participant {
    type Id = ParticipantId;
    type Draft = NewParticipant;
    type Patch = ParticipantPatch;

    const KIND: EntityKind = EntityKind::Participant;

    fn build(draft: NewParticipant) -> Self {
        Self {
            id: ParticipantId::new(),
            user_id: draft.user_id,
            event_id: draft.event_id,
            created_at: Utc::now(),
        }
    }

    fn id(&self) -> ParticipantId {
        self.id
    }

    fn merge(&mut self, patch: ParticipantPatch) {
        if let Some(user_id) = patch.user_id {
            self.user_id = user_id;
        }
        if let Some(event_id) = patch.event_id {
            self.event_id = event_id;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_assigns_distinct_ids() {
        let a = User::build(NewUser {
            username: String::from("a"),
            email: String::from("a@x.com"),
        });
        let b = User::build(NewUser {
            username: String::from("b"),
            email: String::from("b@x.com"),
        });
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn merge_overwrites_only_present_fields() {
        let mut user = User::build(NewUser {
            username: String::from("ada"),
            email: String::from("ada@x.com"),
        });
        user.merge(UserPatch {
            username: Some(String::from("lovelace")),
            email: None,
        });
        assert_eq!(user.username, "lovelace");
        assert_eq!(user.email, "ada@x.com");
    }

    #[test]
    fn empty_patch_is_a_no_op() {
        let mut location = Location::build(NewLocation {
            name: String::from("Hall"),
            desc: String::from("Main hall"),
            lat: 41.0,
            lng: 29.0,
        });
        let before = location.clone();
        location.merge(LocationPatch::default());
        assert_eq!(location, before);
    }

    #[test]
    fn merge_never_touches_id_or_created_at() {
        let mut participant = Participant::build(NewParticipant {
            user_id: gather_types::UserId::new(),
            event_id: gather_types::EventId::new(),
        });
        let (id, created_at) = (participant.id, participant.created_at);
        participant.merge(ParticipantPatch {
            user_id: Some(gather_types::UserId::new()),
            event_id: None,
        });
        assert_eq!(participant.id, id);
        assert_eq!(participant.created_at, created_at);
    }
}
