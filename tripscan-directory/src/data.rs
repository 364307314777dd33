use std::collections::HashMap;

use tripscan_core::Coordinate;

use crate::directory::Airport;

pub fn load_airports() -> Vec<Airport> {
    serde_json::from_str(include_str!("../data/airports.json"))
        .expect("Failed to parse airports.json")
}

pub fn load_coordinates() -> HashMap<String, Coordinate> {
    let table: HashMap<String, (f64, f64)> =
        serde_json::from_str(include_str!("../data/coordinates.json"))
            .expect("Failed to parse coordinates.json");

    table
        .into_iter()
        .map(|(code, (latitude, longitude))| {
            (
                code,
                Coordinate {
                    latitude,
                    longitude,
                },
            )
        })
        .collect()
}
