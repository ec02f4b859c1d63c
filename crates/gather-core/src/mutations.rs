//! Mutation orchestration: validate, write, publish, return.
//!
//! Every mutation follows the same state machine:
//!
//! 1. **validate** -- required-field presence on the draft (creates only;
//!    patches have no required fields and cross-entity references are
//!    never checked, so a foreign key may dangle from birth);
//! 2. **write** -- delegate to the owning [`Collection`](gather_store::Collection);
//! 3. **publish** -- on success, exactly one lifecycle change on the bus;
//!    a write that failed with `NotFound` publishes nothing;
//! 4. **return** -- the affected record, or the count for `delete_all_*`.
//!
//! The four entity families implement the identical shape. Two documented
//! gaps are deliberate and must not be "fixed" silently:
//!
//! - deleting a user (or event) does **not** cascade to events or
//!   participants that reference it; the survivors simply hold dangling
//!   foreign keys that resolve to absent derived fields;
//! - `delete_all_*` is a bulk administrative sweep and publishes no
//!   per-row lifecycle changes.

use gather_bus::{Change, ChangeBus, Lifecycle};
use gather_store::Directory;
use gather_types::{
    Event, EventId, EventPatch, Location, LocationId, LocationPatch, NewEvent, NewLocation,
    NewParticipant, NewUser, Participant, ParticipantId, ParticipantPatch, User, UserId, UserPatch,
};
use validator::Validate;

use crate::error::MutationError;

// ---------------------------------------------------------------------------
// User mutations
// ---------------------------------------------------------------------------

/// Create a user and publish `user.created`.
pub fn create_user(
    directory: &mut Directory,
    bus: &ChangeBus,
    draft: NewUser,
) -> Result<User, MutationError> {
    draft.validate()?;
    let user = directory.users.insert(draft);
    bus.publish(Lifecycle::Created, Change::User(user.clone()));
    Ok(user)
}

/// Merge a patch onto a user and publish `user.updated`.
pub fn update_user(
    directory: &mut Directory,
    bus: &ChangeBus,
    id: UserId,
    patch: UserPatch,
) -> Result<User, MutationError> {
    let user = directory.users.update(id, patch)?;
    bus.publish(Lifecycle::Updated, Change::User(user.clone()));
    Ok(user)
}

/// Delete a user and publish `user.deleted`.
///
/// Events the user hosts and participations they hold are left in place
/// with dangling foreign keys.
pub fn delete_user(
    directory: &mut Directory,
    bus: &ChangeBus,
    id: UserId,
) -> Result<User, MutationError> {
    let user = directory.users.remove(id)?;
    bus.publish(Lifecycle::Deleted, Change::User(user.clone()));
    Ok(user)
}

/// Remove every user. Publishes nothing; returns the removed count.
pub fn delete_all_users(directory: &mut Directory) -> usize {
    directory.users.clear()
}

// ---------------------------------------------------------------------------
// Event mutations
// ---------------------------------------------------------------------------

/// Create an event and publish `event.created`.
///
/// The venue and host foreign keys are accepted as given; existence is
/// not checked.
pub fn create_event(
    directory: &mut Directory,
    bus: &ChangeBus,
    draft: NewEvent,
) -> Result<Event, MutationError> {
    draft.validate()?;
    let event = directory.events.insert(draft);
    bus.publish(Lifecycle::Created, Change::Event(event.clone()));
    Ok(event)
}

/// Merge a patch onto an event and publish `event.updated`.
pub fn update_event(
    directory: &mut Directory,
    bus: &ChangeBus,
    id: EventId,
    patch: EventPatch,
) -> Result<Event, MutationError> {
    let event = directory.events.update(id, patch)?;
    bus.publish(Lifecycle::Updated, Change::Event(event.clone()));
    Ok(event)
}

/// Delete an event and publish `event.deleted`.
///
/// Participations pointing at the event are left in place.
pub fn delete_event(
    directory: &mut Directory,
    bus: &ChangeBus,
    id: EventId,
) -> Result<Event, MutationError> {
    let event = directory.events.remove(id)?;
    bus.publish(Lifecycle::Deleted, Change::Event(event.clone()));
    Ok(event)
}

/// Remove every event. Publishes nothing; returns the removed count.
pub fn delete_all_events(directory: &mut Directory) -> usize {
    directory.events.clear()
}

// ---------------------------------------------------------------------------
// Location mutations
// ---------------------------------------------------------------------------

/// Create a location and publish `location.created`.
pub fn create_location(
    directory: &mut Directory,
    bus: &ChangeBus,
    draft: NewLocation,
) -> Result<Location, MutationError> {
    draft.validate()?;
    let location = directory.locations.insert(draft);
    bus.publish(Lifecycle::Created, Change::Location(location.clone()));
    Ok(location)
}

/// Merge a patch onto a location and publish `location.updated`.
pub fn update_location(
    directory: &mut Directory,
    bus: &ChangeBus,
    id: LocationId,
    patch: LocationPatch,
) -> Result<Location, MutationError> {
    let location = directory.locations.update(id, patch)?;
    bus.publish(Lifecycle::Updated, Change::Location(location.clone()));
    Ok(location)
}

/// Delete a location and publish `location.deleted`.
///
/// Events scheduled there keep their now-dangling venue key.
pub fn delete_location(
    directory: &mut Directory,
    bus: &ChangeBus,
    id: LocationId,
) -> Result<Location, MutationError> {
    let location = directory.locations.remove(id)?;
    bus.publish(Lifecycle::Deleted, Change::Location(location.clone()));
    Ok(location)
}

/// Remove every location. Publishes nothing; returns the removed count.
pub fn delete_all_locations(directory: &mut Directory) -> usize {
    directory.locations.clear()
}

// ---------------------------------------------------------------------------
// Participant mutations
// ---------------------------------------------------------------------------

/// Create a participation record and publish `participant.created`.
///
/// This is the payload the filtered `participant.created` subscription
/// watches: subscribers with an event filter only see records whose
/// `event_id` matches.
pub fn create_participant(
    directory: &mut Directory,
    bus: &ChangeBus,
    draft: NewParticipant,
) -> Result<Participant, MutationError> {
    draft.validate()?;
    let participant = directory.participants.insert(draft);
    bus.publish(Lifecycle::Created, Change::Participant(participant.clone()));
    Ok(participant)
}

/// Merge a patch onto a participation record and publish
/// `participant.updated`.
pub fn update_participant(
    directory: &mut Directory,
    bus: &ChangeBus,
    id: ParticipantId,
    patch: ParticipantPatch,
) -> Result<Participant, MutationError> {
    let participant = directory.participants.update(id, patch)?;
    bus.publish(Lifecycle::Updated, Change::Participant(participant.clone()));
    Ok(participant)
}

/// Delete a participation record and publish `participant.deleted`.
pub fn delete_participant(
    directory: &mut Directory,
    bus: &ChangeBus,
    id: ParticipantId,
) -> Result<Participant, MutationError> {
    let participant = directory.participants.remove(id)?;
    bus.publish(Lifecycle::Deleted, Change::Participant(participant.clone()));
    Ok(participant)
}

/// Remove every participation record. Publishes nothing; returns the
/// removed count.
pub fn delete_all_participants(directory: &mut Directory) -> usize {
    directory.participants.clear()
}
