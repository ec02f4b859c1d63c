//! Core entity structs for the Gather platform.
//!
//! The four collections form a small graph: an [`Event`] is hosted by a
//! [`User`] at a [`Location`], and a [`Participant`] row joins a user to an
//! event (many-to-many attendance). Relationships are stored as foreign-key
//! ID fields only; the derived edges (event -> user, event -> location,
//! event -> participants, user -> events) are computed on demand by the
//! resolver, never denormalized into storage.
//!
//! A foreign key is not validated on write. A dangling FK resolves to an
//! absent derived field rather than failing the enclosing query.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::ids::{EventId, LocationId, ParticipantId, UserId};

// ---------------------------------------------------------------------------
// Entity kind
// ---------------------------------------------------------------------------

/// The four entity collections, used to tag errors and change topics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    /// A registered user.
    User,
    /// A scheduled event.
    Event,
    /// A venue location.
    Location,
    /// An attendance record joining a user to an event.
    Participant,
}

impl EntityKind {
    /// All entity kinds, in declaration order.
    pub const ALL: [Self; 4] = [Self::User, Self::Event, Self::Location, Self::Participant];

    /// The lowercase wire name of this kind (`"user"`, `"event"`, ...).
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Event => "event",
            Self::Location => "location",
            Self::Participant => "participant",
        }
    }
}

impl core::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl core::str::FromStr for EntityKind {
    type Err = UnknownEntityKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "user" => Ok(Self::User),
            "event" => Ok(Self::Event),
            "location" => Ok(Self::Location),
            "participant" => Ok(Self::Participant),
            other => Err(UnknownEntityKind(other.to_string())),
        }
    }
}

/// Parse error for an unrecognized [`EntityKind`] wire name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownEntityKind(pub String);

impl core::fmt::Display for UnknownEntityKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "unknown entity kind: {}", self.0)
    }
}

impl core::error::Error for UnknownEntityKind {}

// ---------------------------------------------------------------------------
// User
// ---------------------------------------------------------------------------

/// A registered user who can host events and attend them.
///
/// The events a user hosts are a derived edge (events whose `user_id`
/// points here), not stored on the record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct User {
    /// Unique user identifier.
    pub id: UserId,
    /// Display handle.
    pub username: String,
    /// Contact email address.
    pub email: String,
    /// Real-world creation time.
    pub created_at: DateTime<Utc>,
}

// ---------------------------------------------------------------------------
// Event
// ---------------------------------------------------------------------------

/// A scheduled event hosted by a user at a location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct Event {
    /// Unique event identifier.
    pub id: EventId,
    /// Event title.
    pub title: String,
    /// Narrative description.
    pub desc: String,
    /// Calendar day the event takes place.
    pub date: NaiveDate,
    /// Start time of day.
    pub from: NaiveTime,
    /// End time of day.
    pub to: NaiveTime,
    /// Venue foreign key. May dangle; resolution is best-effort.
    pub location_id: LocationId,
    /// Host foreign key. May dangle; resolution is best-effort.
    pub user_id: UserId,
    /// Real-world creation time.
    pub created_at: DateTime<Utc>,
}

// ---------------------------------------------------------------------------
// Location
// ---------------------------------------------------------------------------

/// A venue where events take place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct Location {
    /// Unique location identifier.
    pub id: LocationId,
    /// Display name.
    pub name: String,
    /// Narrative description.
    pub desc: String,
    /// Latitude in decimal degrees.
    pub lat: f64,
    /// Longitude in decimal degrees.
    pub lng: f64,
    /// Real-world creation time.
    pub created_at: DateTime<Utc>,
}

// ---------------------------------------------------------------------------
// Participant
// ---------------------------------------------------------------------------

/// An attendance record: one user attending one event.
///
/// This is the many-to-many join between users and events. Both foreign
/// keys may dangle after the referenced row is deleted; nothing cascades.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct Participant {
    /// Unique participation identifier.
    pub id: ParticipantId,
    /// The attending user.
    pub user_id: UserId,
    /// The attended event.
    pub event_id: EventId,
    /// Real-world creation time.
    pub created_at: DateTime<Utc>,
}
