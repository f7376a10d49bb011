//! Shortest routes over a road network
//!
//! Build a [`RoadNetwork`] of named locations joined by undirected routes, then ask for the
//! shortest route by distance (Dijkstra) or by number of hops (breadth-first search).
//!
//! ```
//! use roadnav::RoadNetwork;
//!
//! let mut network = RoadNetwork::new();
//! for name in ["A", "B", "C"] {
//!     network.add_location(name).unwrap();
//! }
//! network.add_route("A", "B", 5).unwrap();
//! network.add_route("B", "C", 3).unwrap();
//! network.add_route("A", "C", 100).unwrap();
//!
//! let by_distance = network.shortest_path("A", "C").unwrap().unwrap();
//! assert_eq!(by_distance.stops, ["A", "B", "C"]);
//! assert_eq!(by_distance.distance, 8);
//!
//! let by_hops = network.fewest_hops("A", "C").unwrap().unwrap();
//! assert_eq!(by_hops.stops, ["A", "C"]);
//! ```

mod collections;
pub mod errors;
pub mod graph_algos;
pub mod network;

pub use errors::{NetworkError, PathPlannerError};
pub use network::{
    Adjacency, Algorithm, Distance, Itinerary, NetworkConfig, NetworkSnapshot, NetworkStats,
    RoadNetwork, Route, RouteSummary, SharedNetwork,
};
