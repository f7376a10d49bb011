//! Road network store
//!
//! Locations are named nodes, routes join two distinct locations with a positive distance.
//! Each route is kept once under its unordered pair of endpoints, the directed view used by
//! the path finders is derived from it on demand.

mod config;
mod inspect;
mod planner;
mod shared;

pub use config::NetworkConfig;
pub use inspect::NetworkStats;
pub use planner::{Algorithm, Itinerary, NetworkSnapshot, RouteSummary};
pub use shared::SharedNetwork;

use crate::collections::{FxIndexMap, FxIndexSet};
use crate::errors::NetworkError;

use tracing::debug;

/// Distance of a single route
pub type Distance = u32;

/// Location name -> (neighbor name, route distance) for every location
/// Locations appear in insertion order, neighbors in route insertion order
pub type Adjacency = FxIndexMap<String, Vec<(String, Distance)>>;

/// Undirected connection between two locations
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    pub from: String,
    pub to: String,
    pub distance: Distance,
}

/// Unordered pair of endpoints, smaller name first
type RouteKey = (String, String);

fn route_key(a: &str, b: &str) -> RouteKey {
    if a <= b {
        (a.to_string(), b.to_string())
    } else {
        (b.to_string(), a.to_string())
    }
}

/// Owns the locations and routes of one network
#[derive(Debug, Clone, Default)]
pub struct RoadNetwork {
    config: NetworkConfig,
    locations: FxIndexSet<String>,
    routes: FxIndexMap<RouteKey, Route>,
}

impl RoadNetwork {

    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: NetworkConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    pub fn config(&self) -> &NetworkConfig {
        &self.config
    }

    /// Register a new location, names are case-sensitive
    pub fn add_location(&mut self, name: impl Into<String>) -> Result<(), NetworkError> {
        let name = name.into();

        if name.is_empty() {
            return Err(NetworkError::InvalidName);
        }
        if self.locations.contains(&name) {
            return Err(NetworkError::DuplicateLocation(name));
        }
        if !self.config.has_room(self.locations.len()) {
            return Err(NetworkError::CapacityExceeded(self.locations.len()));
        }

        debug!(location = %name, "location added");
        self.locations.insert(name);
        Ok(())
    }

    /// Connect two existing locations in both directions
    /// distance must be a positive integer that fits in a Distance
    pub fn add_route(&mut self, from: &str, to: &str, distance: i64) -> Result<(), NetworkError> {
        self.require_location(from)?;
        self.require_location(to)?;

        if from == to {
            return Err(NetworkError::SelfRoute(from.to_string()));
        }

        let distance = Distance::try_from(distance)
            .ok()
            .filter(|d| *d > 0)
            .ok_or(NetworkError::InvalidDistance(distance))?;

        let key = route_key(from, to);
        if self.routes.contains_key(&key) {
            return Err(NetworkError::DuplicateRoute(from.to_string(), to.to_string()));
        }

        debug!(from, to, distance, "route added");
        self.routes.insert(key, Route {
            from: from.to_string(),
            to: to.to_string(),
            distance,
        });
        Ok(())
    }

    /// Remove the route between two locations, in either order
    /// Returns the distance of the removed route
    pub fn remove_route(&mut self, a: &str, b: &str) -> Result<Distance, NetworkError> {
        self.require_location(a)?;
        self.require_location(b)?;

        let route = self.routes.shift_remove(&route_key(a, b))
            .ok_or_else(|| NetworkError::UnknownRoute(a.to_string(), b.to_string()))?;

        debug!(from = %route.from, to = %route.to, "route removed");
        Ok(route.distance)
    }

    /// Remove a location along with every route touching it
    /// Returns the number of routes removed
    pub fn remove_location(&mut self, name: &str) -> Result<usize, NetworkError> {
        if !self.locations.shift_remove(name) {
            return Err(NetworkError::UnknownLocation(name.to_string()));
        }

        let before = self.routes.len();
        self.routes.retain(|(a, b), _| a != name && b != name);
        let removed = before - self.routes.len();

        debug!(location = name, routes = removed, "location removed");
        Ok(removed)
    }

    pub fn contains_location(&self, name: &str) -> bool {
        self.locations.contains(name)
    }

    pub fn location_count(&self) -> usize {
        self.locations.len()
    }

    /// Number of physical routes, each undirected route counts once
    pub fn route_count(&self) -> usize {
        self.routes.len()
    }

    /// Location names in insertion order
    pub fn locations(&self) -> impl Iterator<Item = &str> {
        self.locations.iter().map(String::as_str)
    }

    /// Routes in insertion order, endpoints as they were given to add_route
    pub fn routes(&self) -> impl Iterator<Item = &Route> {
        self.routes.values()
    }

    /// Distance of the direct route between two locations, in either order
    pub fn route_distance(&self, a: &str, b: &str) -> Option<Distance> {
        self.routes.get(&route_key(a, b)).map(|route| route.distance)
    }

    /// Build the directed view of the network
    /// Every route shows up as an arc in both directions, isolated locations get an empty list
    pub fn adjacency(&self) -> Adjacency {
        let mut adjacency: Adjacency = self.locations.iter()
            .map(|name| (name.clone(), Vec::new()))
            .collect();

        for route in self.routes.values() {
            if let Some(arcs) = adjacency.get_mut(&route.from) {
                arcs.push((route.to.clone(), route.distance));
            }
            if let Some(arcs) = adjacency.get_mut(&route.to) {
                arcs.push((route.from.clone(), route.distance));
            }
        }

        adjacency
    }

    /// Freeze the current state for path queries
    pub fn snapshot(&self) -> NetworkSnapshot {
        NetworkSnapshot::new(self.adjacency())
    }

    /// Shortest route by total distance, None when the locations are not connected
    pub fn shortest_path(&self, start: &str, end: &str) -> Result<Option<Itinerary>, NetworkError> {
        self.snapshot().shortest_path(start, end)
    }

    /// Route with the fewest hops, None when the locations are not connected
    pub fn fewest_hops(&self, start: &str, end: &str) -> Result<Option<Itinerary>, NetworkError> {
        self.snapshot().fewest_hops(start, end)
    }

    pub fn find_route(&self, algorithm: Algorithm, start: &str, end: &str) -> Result<Option<Itinerary>, NetworkError> {
        self.snapshot().find_route(algorithm, start, end)
    }

    fn require_location(&self, name: &str) -> Result<(), NetworkError> {
        if self.locations.contains(name) {
            Ok(())
        } else {
            Err(NetworkError::UnknownLocation(name.to_string()))
        }
    }
}
