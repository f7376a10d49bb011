use super::{Algorithm, Distance, Itinerary, NetworkSnapshot, RoadNetwork};
use crate::errors::NetworkError;

use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use std::sync::Arc;

/// Road network that can be shared between threads
/// Mutations are serialized behind a single writer lock, queries run on a snapshot
/// taken at query start so they never hold the lock while searching
#[derive(Debug, Clone, Default)]
pub struct SharedNetwork {
    inner: Arc<RwLock<RoadNetwork>>,
}

impl SharedNetwork {

    pub fn new(network: RoadNetwork) -> Self {
        Self {
            inner: Arc::new(RwLock::new(network)),
        }
    }

    fn read(&self) -> RwLockReadGuard<'_, RoadNetwork> {
        self.inner.read()
    }

    fn write(&self) -> RwLockWriteGuard<'_, RoadNetwork> {
        self.inner.write()
    }

    pub fn add_location(&self, name: impl Into<String>) -> Result<(), NetworkError> {
        self.write().add_location(name)
    }

    pub fn add_route(&self, from: &str, to: &str, distance: i64) -> Result<(), NetworkError> {
        self.write().add_route(from, to, distance)
    }

    pub fn remove_route(&self, a: &str, b: &str) -> Result<Distance, NetworkError> {
        self.write().remove_route(a, b)
    }

    pub fn remove_location(&self, name: &str) -> Result<usize, NetworkError> {
        self.write().remove_location(name)
    }

    /// Apply several changes under one lock
    pub fn update<R>(&self, f: impl FnOnce(&mut RoadNetwork) -> R) -> R {
        f(&mut self.write())
    }

    /// Run a read-only closure against the current network
    pub fn inspect<R>(&self, f: impl FnOnce(&RoadNetwork) -> R) -> R {
        f(&self.read())
    }

    pub fn location_count(&self) -> usize {
        self.read().location_count()
    }

    pub fn route_count(&self) -> usize {
        self.read().route_count()
    }

    pub fn snapshot(&self) -> NetworkSnapshot {
        self.read().snapshot()
    }

    pub fn shortest_path(&self, start: &str, end: &str) -> Result<Option<Itinerary>, NetworkError> {
        self.snapshot().shortest_path(start, end)
    }

    pub fn fewest_hops(&self, start: &str, end: &str) -> Result<Option<Itinerary>, NetworkError> {
        self.snapshot().fewest_hops(start, end)
    }

    pub fn find_route(&self, algorithm: Algorithm, start: &str, end: &str) -> Result<Option<Itinerary>, NetworkError> {
        self.snapshot().find_route(algorithm, start, end)
    }
}

impl From<RoadNetwork> for SharedNetwork {
    fn from(network: RoadNetwork) -> Self {
        Self::new(network)
    }
}
