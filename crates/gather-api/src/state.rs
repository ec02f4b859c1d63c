//! Shared application state for the API server.
//!
//! [`AppState`] holds the two process-wide singletons: the entity
//! [`Directory`] behind a read-write lock, and the [`ChangeBus`]. Both are
//! constructed once at startup and injected into handlers via Axum's
//! `State` extractor -- nothing here is an ambient global, so tests build
//! their own isolated instances.

use std::sync::Arc;

use gather_bus::{ChangeBus, DEFAULT_CAPACITY};
use gather_store::Directory;
use tokio::sync::RwLock;

/// Shared state for the Axum application.
///
/// Queries take the directory read lock; mutations take the write lock,
/// so a query issued after a mutation completes always sees its effects.
/// The bus is lock-free and shared as-is.
#[derive(Clone)]
pub struct AppState {
    /// The four entity collections.
    pub directory: Arc<RwLock<Directory>>,
    /// Lifecycle change fan-out for subscription streams.
    pub bus: Arc<ChangeBus>,
}

impl AppState {
    /// Create state with an empty directory and default channel capacity.
    pub fn new() -> Self {
        Self::with_bus_capacity(DEFAULT_CAPACITY)
    }

    /// Create state with an explicit per-topic channel capacity.
    pub fn with_bus_capacity(capacity: usize) -> Self {
        Self {
            directory: Arc::new(RwLock::new(Directory::new())),
            bus: Arc::new(ChangeBus::new(capacity)),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
