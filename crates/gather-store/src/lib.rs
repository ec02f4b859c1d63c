//! In-memory entity collections and reference resolution for Gather.
//!
//! This crate is the storage heart of the platform: four insertion-ordered
//! [`Collection`]s aggregated into a [`Directory`], plus the pure functions
//! in [`resolve`] that compute derived graph edges (event -> host, event ->
//! venue, event -> attendance, user -> hosted events) on demand.
//!
//! The store is synchronous and lock-free by itself; concurrent callers
//! wrap the [`Directory`] in a read-write lock at the layer that owns it.
//!
//! # Modules
//!
//! - [`record`] -- the [`Record`] trait binding drafts and patches to entities
//! - [`collection`] -- the generic insertion-ordered collection
//! - [`directory`] -- the four collections as one injected snapshot object
//! - [`resolve`] -- pure derived-edge resolution, dangling-FK tolerant
//! - [`error`] -- [`StoreError`]

pub mod collection;
pub mod directory;
pub mod error;
pub mod record;
pub mod resolve;

pub use collection::Collection;
pub use directory::Directory;
pub use error::StoreError;
pub use record::Record;
