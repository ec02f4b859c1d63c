//! The process-wide entity directory.
//!
//! [`Directory`] aggregates the four collections into one snapshot object.
//! It is constructed once at startup, dependency-injected into every caller
//! (never an ambient global), and wrapped in a read-write lock by the API
//! layer so interleaved requests tolerate each other.

use gather_types::{Event, Location, Participant, User};

use crate::collection::Collection;

/// All four entity collections, constructed once per process.
#[derive(Debug, Clone, Default)]
pub struct Directory {
    /// Registered users.
    pub users: Collection<User>,
    /// Scheduled events.
    pub events: Collection<Event>,
    /// Venue locations.
    pub locations: Collection<Location>,
    /// Attendance records.
    pub participants: Collection<Participant>,
}

impl Directory {
    /// Create an empty directory.
    pub const fn new() -> Self {
        Self {
            users: Collection::new(),
            events: Collection::new(),
            locations: Collection::new(),
            participants: Collection::new(),
        }
    }
}
