//! Typed lifecycle change-notification channels for Gather.
//!
//! Every create/update/delete of an entity publishes a [`Change`] on the
//! matching [`Topic`] (entity kind x lifecycle phase, 12 in total). Live
//! subscribers receive changes in publish order; nobody listening means
//! the publish is a no-op. Fan-out is in-process only -- cross-process
//! delivery is explicitly out of scope for this system.
//!
//! # Modules
//!
//! - [`topic`] -- [`Topic`], [`Lifecycle`], wire-name parsing
//! - [`change`] -- the [`Change`] payload enum
//! - [`bus`] -- [`ChangeBus`] and [`Subscription`]

pub mod bus;
pub mod change;
pub mod topic;

pub use bus::{ChangeBus, DEFAULT_CAPACITY, Subscription};
pub use change::Change;
pub use topic::{Lifecycle, Topic, TopicParseError};
