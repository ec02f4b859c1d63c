//! Shared type definitions for the Gather event platform.
//!
//! This crate is the single source of truth for all types used across the
//! Gather workspace. Types defined here flow downstream to `TypeScript`
//! via `ts-rs` for the web client.
//!
//! # Modules
//!
//! - [`ids`] -- Type-safe UUID wrappers for all entity identifiers
//! - [`entities`] -- The four entity structs and [`EntityKind`]
//! - [`inputs`] -- Mutation drafts and partial-update patches

pub mod entities;
pub mod ids;
pub mod inputs;

// Re-export all public types at crate root for convenience.
pub use entities::{EntityKind, Event, Location, Participant, UnknownEntityKind, User};
pub use ids::{EventId, LocationId, ParticipantId, UserId};
pub use inputs::{
    EventPatch, LocationPatch, NewEvent, NewLocation, NewParticipant, NewUser, ParticipantPatch,
    UserPatch,
};
