use thiserror::Error;

/// Failures of the generic search algorithms
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PathPlannerError {
    #[error("no path found")]
    NoPathFound, // Unable to find a path to the goal
}

/// Rejected operations on a road network
/// The network is left unchanged whenever one of these is returned
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum NetworkError {
    #[error("location '{0}' already exists")]
    DuplicateLocation(String),

    #[error("location '{0}' not found")]
    UnknownLocation(String),

    #[error("distance must be a positive integer, got {0}")]
    InvalidDistance(i64),

    #[error("route already exists between '{0}' and '{1}'")]
    DuplicateRoute(String, String),

    #[error("no route between '{0}' and '{1}'")]
    UnknownRoute(String, String),

    #[error("location name must not be empty")]
    InvalidName,

    #[error("cannot add a route from '{0}' to itself")]
    SelfRoute(String),

    #[error("cannot add more locations (limit of {0} reached)")]
    CapacityExceeded(usize),
}
