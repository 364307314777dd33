use std::collections::HashMap;

use tripscan_core::Coordinate;

use crate::data;

/// Best-effort airport/region code to geocoordinate resolution.
///
/// Purely a static dictionary lookup: no interpolation, no geocoding call.
/// A miss is an expected outcome; callers filter unresolved codes out of
/// any viewport computation rather than substituting a default position.
pub struct CoordinateResolver {
    coordinates: HashMap<String, Coordinate>,
}

impl CoordinateResolver {
    /// Resolver over the compiled-in coordinate table.
    pub fn new() -> Self {
        Self::from_table(data::load_coordinates())
    }

    /// Resolver over an explicit table.
    pub fn from_table(table: HashMap<String, Coordinate>) -> Self {
        let coordinates = table
            .into_iter()
            .map(|(code, coordinate)| (code.to_uppercase(), coordinate))
            .collect();

        Self { coordinates }
    }

    /// Case-insensitive exact lookup against the static table.
    pub fn resolve(&self, code: &str) -> Option<Coordinate> {
        self.coordinates.get(&code.to_uppercase()).copied()
    }

    pub fn contains(&self, code: &str) -> bool {
        self.coordinates.contains_key(&code.to_uppercase())
    }
}

impl Default for CoordinateResolver {
    fn default() -> Self {
        Self::new()
    }
}
