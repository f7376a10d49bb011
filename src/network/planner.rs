use super::{Adjacency, Distance};
use crate::errors::{NetworkError, PathPlannerError};
use crate::graph_algos::{bfs::bfs, dijkstra::dijkstra};

use std::fmt;
use tracing::debug;

/// Cost model used to pick a route
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    /// Least total distance
    Dijkstra,
    /// Fewest hops, route distances are ignored while searching
    Bfs,
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Algorithm::Dijkstra => write!(f, "Dijkstra - Weighted"),
            Algorithm::Bfs => write!(f, "Least Hops - BFS"),
        }
    }
}

/// A route found between two locations
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Itinerary {
    /// Locations from start to end, both included
    pub stops: Vec<String>,
    /// Sum of the route distances travelled
    pub distance: u64,
}

impl Itinerary {

    /// Number of routes travelled
    pub fn hops(&self) -> usize {
        self.stops.len().saturating_sub(1)
    }

    pub fn summary(&self) -> RouteSummary {
        let legs = self.hops();
        let average_leg = if legs > 0 {
            self.distance as f64 / legs as f64
        } else {
            0.0
        };

        RouteSummary {
            stops: self.stops.len(),
            legs,
            total_distance: self.distance,
            average_leg,
        }
    }
}

impl fmt::Display for Itinerary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.stops.join(" -> "), self.distance)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RouteSummary {
    /// Stops including start and end
    pub stops: usize,
    pub legs: usize,
    pub total_distance: u64,
    pub average_leg: f64,
}

/// Immutable copy of a network's adjacency, taken when a query starts
/// Later changes to the network do not affect it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetworkSnapshot {
    adjacency: Adjacency,
}

impl NetworkSnapshot {

    pub fn new(adjacency: Adjacency) -> Self {
        Self { adjacency }
    }

    pub fn adjacency(&self) -> &Adjacency {
        &self.adjacency
    }

    /// Shortest route by total distance using Dijkstra's algorithm
    /// Returns None when no route connects the two locations
    pub fn shortest_path(&self, start: &str, end: &str) -> Result<Option<Itinerary>, NetworkError> {
        let (start, end) = self.endpoints(start, end)?;

        let result = dijkstra(
            start,
            |node| self.arcs(node).map(|(next, distance)| (next, u64::from(distance))),
            |node| *node == end,
        );

        let itinerary = match result {
            Ok((stops, distance)) => Some(Itinerary {
                stops: stops.into_iter().map(String::from).collect(),
                distance,
            }),
            Err(PathPlannerError::NoPathFound) => None,
        };

        let found = itinerary.as_ref().map(|itinerary| (itinerary.distance, itinerary.hops()));
        log_result(Algorithm::Dijkstra, start, end, found);
        Ok(itinerary)
    }

    /// Route with the fewest hops using breadth-first search
    /// The itinerary still reports the total distance of the hops taken
    /// Returns None when no route connects the two locations
    pub fn fewest_hops(&self, start: &str, end: &str) -> Result<Option<Itinerary>, NetworkError> {
        let (start, end) = self.endpoints(start, end)?;

        let result = bfs(
            start,
            |node| self.arcs(node).map(|(next, _)| next),
            |node| *node == end,
        );

        let (itinerary, found) = match result {
            Ok((stops, hops)) => {
                let distance = self.path_distance(&stops);
                let itinerary = Itinerary {
                    stops: stops.into_iter().map(String::from).collect(),
                    distance,
                };
                (Some(itinerary), Some((distance, hops)))
            }
            Err(PathPlannerError::NoPathFound) => (None, None),
        };

        log_result(Algorithm::Bfs, start, end, found);
        Ok(itinerary)
    }

    pub fn find_route(&self, algorithm: Algorithm, start: &str, end: &str) -> Result<Option<Itinerary>, NetworkError> {
        match algorithm {
            Algorithm::Dijkstra => self.shortest_path(start, end),
            Algorithm::Bfs => self.fewest_hops(start, end),
        }
    }

    /// Resolve both query endpoints to names owned by the snapshot
    fn endpoints(&self, start: &str, end: &str) -> Result<(&str, &str), NetworkError> {
        Ok((self.resolve(start)?, self.resolve(end)?))
    }

    fn resolve(&self, name: &str) -> Result<&str, NetworkError> {
        self.adjacency.get_key_value(name)
            .map(|(key, _)| key.as_str())
            .ok_or_else(|| NetworkError::UnknownLocation(name.to_string()))
    }

    /// Outgoing arcs of a location, empty for unknown names
    fn arcs<'a>(&'a self, node: &str) -> impl Iterator<Item = (&'a str, Distance)> + use<'a> {
        self.adjacency.get(node)
            .into_iter()
            .flatten()
            .map(|(next, distance)| (next.as_str(), *distance))
    }

    /// Sum of arc distances along consecutive stops
    fn path_distance(&self, stops: &[&str]) -> u64 {
        stops.windows(2)
            .filter_map(|pair| {
                self.arcs(pair[0])
                    .find(|(next, _)| *next == pair[1])
                    .map(|(_, distance)| u64::from(distance))
            })
            .sum()
    }
}

/// found carries (distance, hops) of the route, None when there is none
fn log_result(algorithm: Algorithm, start: &str, end: &str, found: Option<(u64, usize)>) {
    match found {
        Some((distance, hops)) => debug!(%algorithm, start, end, distance, hops, "route found"),
        None => debug!(%algorithm, start, end, "no route"),
    }
}
