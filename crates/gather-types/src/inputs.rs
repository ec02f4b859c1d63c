//! Mutation input types: per-entity drafts and patches.
//!
//! A `New*` draft carries every required field for a create. Required-ness
//! is structural (serde rejects a missing field) plus a non-empty check on
//! string fields via [`validator::Validate`]. Nothing beyond presence is
//! validated: foreign keys are not checked against their target collection,
//! and email addresses are not format-checked.
//!
//! A `*Patch` is the partial-update companion: every field is optional, and
//! only the fields present overwrite the stored record. An empty patch is a
//! legal no-op.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use ts_rs::TS;
use validator::Validate;

use crate::ids::{EventId, LocationId, UserId};

// ---------------------------------------------------------------------------
// User inputs
// ---------------------------------------------------------------------------

/// Draft for creating a [`crate::User`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate, TS)]
#[ts(export, export_to = "bindings/")]
pub struct NewUser {
    /// Display handle. Must be non-empty.
    #[validate(length(min = 1, message = "username is required"))]
    pub username: String,
    /// Contact email address. Must be non-empty.
    #[validate(length(min = 1, message = "email is required"))]
    pub email: String,
}

/// Partial update for a [`crate::User`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct UserPatch {
    /// Replacement display handle, if provided.
    pub username: Option<String>,
    /// Replacement email address, if provided.
    pub email: Option<String>,
}

// ---------------------------------------------------------------------------
// Event inputs
// ---------------------------------------------------------------------------

/// Draft for creating an [`crate::Event`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate, TS)]
#[ts(export, export_to = "bindings/")]
pub struct NewEvent {
    /// Event title. Must be non-empty.
    #[validate(length(min = 1, message = "title is required"))]
    pub title: String,
    /// Narrative description. Must be non-empty.
    #[validate(length(min = 1, message = "desc is required"))]
    pub desc: String,
    /// Calendar day the event takes place.
    pub date: NaiveDate,
    /// Start time of day.
    pub from: NaiveTime,
    /// End time of day.
    pub to: NaiveTime,
    /// Venue foreign key. Existence is not checked on write.
    pub location_id: LocationId,
    /// Host foreign key. Existence is not checked on write.
    pub user_id: UserId,
}

/// Partial update for an [`crate::Event`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct EventPatch {
    /// Replacement title, if provided.
    pub title: Option<String>,
    /// Replacement description, if provided.
    pub desc: Option<String>,
    /// Replacement calendar day, if provided.
    pub date: Option<NaiveDate>,
    /// Replacement start time, if provided.
    pub from: Option<NaiveTime>,
    /// Replacement end time, if provided.
    pub to: Option<NaiveTime>,
    /// Replacement venue foreign key, if provided.
    pub location_id: Option<LocationId>,
    /// Replacement host foreign key, if provided.
    pub user_id: Option<UserId>,
}

// ---------------------------------------------------------------------------
// Location inputs
// ---------------------------------------------------------------------------

/// Draft for creating a [`crate::Location`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate, TS)]
#[ts(export, export_to = "bindings/")]
pub struct NewLocation {
    /// Display name. Must be non-empty.
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
    /// Narrative description. Must be non-empty.
    #[validate(length(min = 1, message = "desc is required"))]
    pub desc: String,
    /// Latitude in decimal degrees.
    pub lat: f64,
    /// Longitude in decimal degrees.
    pub lng: f64,
}

/// Partial update for a [`crate::Location`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct LocationPatch {
    /// Replacement display name, if provided.
    pub name: Option<String>,
    /// Replacement description, if provided.
    pub desc: Option<String>,
    /// Replacement latitude, if provided.
    pub lat: Option<f64>,
    /// Replacement longitude, if provided.
    pub lng: Option<f64>,
}

// ---------------------------------------------------------------------------
// Participant inputs
// ---------------------------------------------------------------------------

/// Draft for creating a [`crate::Participant`].
///
/// Both foreign keys are structurally required but not existence-checked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate, TS)]
#[ts(export, export_to = "bindings/")]
pub struct NewParticipant {
    /// The attending user.
    pub user_id: UserId,
    /// The attended event.
    pub event_id: EventId,
}

/// Partial update for a [`crate::Participant`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct ParticipantPatch {
    /// Replacement user foreign key, if provided.
    pub user_id: Option<UserId>,
    /// Replacement event foreign key, if provided.
    pub event_id: Option<EventId>,
}

#[cfg(test)]
mod tests {
    use validator::Validate;

    use super::*;

    #[test]
    fn blank_username_fails_validation() {
        let draft = NewUser {
            username: String::new(),
            email: String::from("a@x.com"),
        };
        assert!(draft.validate().is_err());
    }

    #[test]
    fn populated_user_draft_passes_validation() {
        let draft = NewUser {
            username: String::from("a"),
            email: String::from("a@x.com"),
        };
        assert!(draft.validate().is_ok());
    }

    #[test]
    fn participant_draft_has_no_string_rules() {
        let draft = NewParticipant {
            user_id: UserId::new(),
            event_id: EventId::new(),
        };
        assert!(draft.validate().is_ok());
    }

    #[test]
    fn missing_required_field_is_a_serde_error() {
        // Structural required-ness: serde rejects a draft with no email.
        let result: Result<NewUser, _> =
            serde_json::from_str(r#"{"username":"ada"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn empty_patch_deserializes() {
        let patch: Result<UserPatch, _> = serde_json::from_str("{}");
        assert_eq!(patch.ok(), Some(UserPatch::default()));
    }
}
