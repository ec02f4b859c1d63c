//! Mutation orchestration and cold-start seeding for Gather.
//!
//! Queries read the [`Directory`](gather_store::Directory) and resolve
//! derived edges directly; mutations go through this crate so that every
//! successful write publishes exactly one lifecycle change on the
//! [`ChangeBus`](gather_bus::ChangeBus). The write and the publish are
//! sequential within one mutation: a reader that observes the mutation's
//! result will also have been reachable by its notification.
//!
//! # Modules
//!
//! - [`mutations`] -- the sixteen mutation operations, four per entity family
//! - [`seed`] -- the startup sample graph
//! - [`error`] -- [`MutationError`]

pub mod error;
pub mod mutations;
pub mod seed;

pub use error::MutationError;
