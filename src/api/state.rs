//! Application state for the payroll engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::store::StoreLoader;

/// Shared application state.
///
/// Contains resources shared across all request handlers — the loaded
/// company store (settings and rosters). The store is immutable after
/// loading, so handlers need no locking.
#[derive(Clone)]
pub struct AppState {
    /// The loaded company store.
    store: Arc<StoreLoader>,
}

impl AppState {
    /// Creates a new application state with the given store.
    pub fn new(store: StoreLoader) -> Self {
        Self {
            store: Arc::new(store),
        }
    }

    /// Returns a reference to the loaded store.
    pub fn store(&self) -> &StoreLoader {
        &self.store
    }
}
