//! In-memory station registry.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::debug;

use crate::domain::{Station, StationId};

use super::error::StationError;

/// Thread-safe station store.
///
/// The registry is the sole owner and producer of [`Station`] tokens; lines
/// only hold copies. Clones of the registry share the same underlying map.
#[derive(Clone)]
pub struct StationRegistry {
    inner: Arc<RwLock<Inner>>,
}

struct Inner {
    next_id: u64,
    stations: HashMap<StationId, Station>,
}

impl StationRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        StationRegistry {
            inner: Arc::new(RwLock::new(Inner {
                next_id: 1,
                stations: HashMap::new(),
            })),
        }
    }

    /// Register a station under a fresh id.
    ///
    /// # Errors
    ///
    /// Returns `Invalid` for a blank name and `DuplicateName` if another
    /// station already carries the (trimmed) name.
    pub async fn create(&self, name: &str) -> Result<Station, StationError> {
        let mut guard = self.inner.write().await;

        // Validate against the trimmed form the token will carry.
        let candidate = Station::new(StationId(guard.next_id), name)?;
        if guard.stations.values().any(|s| s.name() == candidate.name()) {
            return Err(StationError::DuplicateName(candidate.name().to_string()));
        }

        guard.next_id += 1;
        guard.stations.insert(candidate.id(), candidate.clone());
        debug!(id = %candidate.id(), name = candidate.name(), "station registered");
        Ok(candidate)
    }

    /// Look up a station token by id.
    pub async fn get(&self, id: StationId) -> Option<Station> {
        let guard = self.inner.read().await;
        guard.stations.get(&id).cloned()
    }

    /// Resolve an id that must exist.
    pub async fn resolve(&self, id: StationId) -> Result<Station, StationError> {
        self.get(id).await.ok_or(StationError::NotFound(id))
    }

    /// All stations, in id order.
    pub async fn list(&self) -> Vec<Station> {
        let guard = self.inner.read().await;
        let mut stations: Vec<Station> = guard.stations.values().cloned().collect();
        stations.sort_by_key(Station::id);
        stations
    }

    /// Remove a station from the registry.
    ///
    /// Lines keep any tokens they already hold (tokens are values, not
    /// references); removal only stops new lookups.
    pub async fn remove(&self, id: StationId) -> Result<(), StationError> {
        let mut guard = self.inner.write().await;
        guard
            .stations
            .remove(&id)
            .map(|_| ())
            .ok_or(StationError::NotFound(id))
    }

    /// Number of registered stations.
    pub async fn len(&self) -> usize {
        let guard = self.inner.read().await;
        guard.stations.len()
    }

    /// True if no stations are registered.
    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

impl Default for StationRegistry {
    fn default() -> Self {
        Self::new()
    }
}
