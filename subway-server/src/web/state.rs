//! Application state for the web layer.

use crate::store::SubwayStore;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Station and line storage
    pub store: SubwayStore,
}

impl AppState {
    /// Create a new app state.
    pub fn new(store: SubwayStore) -> Self {
        Self { store }
    }
}
