/// Settings applied to a road network when it is created
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NetworkConfig {
    /// Upper bound on the number of locations, None for no limit
    pub max_locations: Option<usize>,
}

impl NetworkConfig {

    pub fn new() -> Self {
        Self::default()
    }

    /// Limit how many locations the network may hold
    pub fn with_max_locations(mut self, max_locations: usize) -> Self {
        self.max_locations = Some(max_locations);
        self
    }

    /// True when one more location still fits
    pub(crate) fn has_room(&self, location_count: usize) -> bool {
        self.max_locations.is_none_or(|max| location_count < max)
    }
}
