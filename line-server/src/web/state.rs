//! Application state for the web layer.

use crate::lines::LineService;
use crate::stations::StationRegistry;

/// Shared application state.
///
/// Contains the services needed to handle requests; cloning is cheap and
/// clones share the same stores.
#[derive(Clone)]
pub struct AppState {
    /// Station registry
    pub stations: StationRegistry,

    /// Line service
    pub lines: LineService,
}

impl AppState {
    /// Create state with a fresh registry and line store.
    pub fn new() -> Self {
        let stations = StationRegistry::new();
        let lines = LineService::new(stations.clone());
        Self { stations, lines }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
