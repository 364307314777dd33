use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::data;

/// Queries shorter than this return nothing; below two characters the
/// candidate set is too large to be useful.
pub const MIN_QUERY_CHARS: usize = 2;

/// Default cap on free-text matches
pub const DEFAULT_SEARCH_LIMIT: usize = 10;

/// One row of the airport reference table. Identity is the IATA code.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Airport {
    pub code: String,
    pub name: String,
    pub city: String,
    pub country: String,
}

/// Immutable airport reference table with exact code lookup and free-text
/// search. Read-only after construction.
pub struct AirportDirectory {
    airports: Vec<Airport>,
    by_code: HashMap<String, usize>,
}

impl AirportDirectory {
    /// Build the directory from the compiled-in reference table.
    pub fn new() -> Self {
        Self::from_airports(data::load_airports())
    }

    /// Build a directory over an explicit table.
    pub fn from_airports(airports: Vec<Airport>) -> Self {
        let by_code = airports
            .iter()
            .enumerate()
            .map(|(idx, airport)| (airport.code.to_lowercase(), idx))
            .collect();

        Self { airports, by_code }
    }

    /// Case-insensitive exact match on the code. Absence is a normal,
    /// expected outcome, never an error.
    pub fn lookup(&self, code: &str) -> Option<&Airport> {
        self.by_code
            .get(&code.to_lowercase())
            .map(|&idx| &self.airports[idx])
    }

    pub fn search(&self, query: &str) -> Vec<&Airport> {
        self.search_with_limit(query, DEFAULT_SEARCH_LIMIT)
    }

    /// Case-insensitive substring search over code, city, name and country,
    /// in table order, truncated to `limit`. The query is matched as a
    /// literal: user input is unconstrained, so metacharacters must not be
    /// interpreted.
    pub fn search_with_limit(&self, query: &str, limit: usize) -> Vec<&Airport> {
        let normalized = query.trim().to_lowercase();
        if normalized.chars().count() < MIN_QUERY_CHARS {
            return Vec::new();
        }

        self.airports
            .iter()
            .filter(|airport| {
                airport.code.to_lowercase().contains(&normalized)
                    || airport.city.to_lowercase().contains(&normalized)
                    || airport.name.to_lowercase().contains(&normalized)
                    || airport.country.to_lowercase().contains(&normalized)
            })
            .take(limit)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.airports.len()
    }

    pub fn is_empty(&self) -> bool {
        self.airports.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Airport> {
        self.airports.iter()
    }
}

impl Default for AirportDirectory {
    fn default() -> Self {
        Self::new()
    }
}
