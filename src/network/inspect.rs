use super::{Distance, RoadNetwork};

/// Summary figures for a whole network
#[derive(Debug, Clone, PartialEq)]
pub struct NetworkStats {
    pub locations: usize,
    pub routes: usize,
    /// Mean route distance, 0.0 when there are no routes
    pub average_distance: f64,
    /// Location with the most routes, earliest added wins ties
    pub most_connected: Option<String>,
}

impl RoadNetwork {

    pub fn stats(&self) -> NetworkStats {
        let total: u64 = self.routes().map(|route| u64::from(route.distance)).sum();
        let average_distance = if self.route_count() > 0 {
            total as f64 / self.route_count() as f64
        } else {
            0.0
        };

        // max_by_key keeps the last maximum, so compare by (degree, reversed position)
        let most_connected = self.adjacency()
            .into_iter()
            .enumerate()
            .max_by_key(|(position, (_, arcs))| (arcs.len(), std::cmp::Reverse(*position)))
            .map(|(_, (name, _))| name);

        NetworkStats {
            locations: self.location_count(),
            routes: self.route_count(),
            average_distance,
            most_connected,
        }
    }

    /// Square matrix of direct distances, rows and columns in location order
    /// 0 means the two locations have no direct route
    pub fn distance_matrix(&self) -> Vec<Vec<Distance>> {
        let n = self.location_count();
        let mut matrix = vec![vec![0; n]; n];

        for route in self.routes() {
            let (Some(i), Some(j)) = (
                self.locations.get_index_of(route.from.as_str()),
                self.locations.get_index_of(route.to.as_str()),
            ) else {
                continue;
            };
            matrix[i][j] = route.distance;
            matrix[j][i] = route.distance;
        }

        matrix
    }

    /// Locations whose name starts with prefix, ignoring case
    pub fn suggest(&self, prefix: &str) -> Vec<&str> {
        let prefix = prefix.to_lowercase();
        self.locations()
            .filter(|name| name.to_lowercase().starts_with(&prefix))
            .collect()
    }
}
