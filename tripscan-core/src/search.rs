use serde::{Deserialize, Serialize};

use crate::{CoreError, CoreResult};

/// Smallest result count the remote search accepts.
pub const MIN_RESULTS: u32 = 5;
/// Largest result count the remote search accepts.
pub const MAX_RESULTS: u32 = 20;

/// Coarse geographic bucket scoping which departure airports are searched.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Region {
    Europe,
    NorthAmerica,
    Asia,
    SouthAmerica,
    Africa,
    Oceania,
}

impl Region {
    /// Human-readable label for display surfaces
    pub fn label(&self) -> &'static str {
        match self {
            Region::Europe => "Europe",
            Region::NorthAmerica => "North America",
            Region::Asia => "Asia",
            Region::SouthAmerica => "South America",
            Region::Africa => "Africa",
            Region::Oceania => "Oceania",
        }
    }
}

/// A monetary amount in a named currency
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Price {
    pub amount: f64,
    pub currency: String,
}

/// Geographic position in decimal degrees
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

/// Parameters submitted to the remote search
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchRequest {
    pub destination: String,
    pub region: Region,
    pub max_results: u32,
}

impl SearchRequest {
    pub fn new(destination: impl Into<String>, region: Region, max_results: u32) -> Self {
        Self {
            destination: destination.into(),
            region,
            max_results,
        }
    }

    /// Pre-submission check mirroring what the remote search will accept.
    pub fn validate(&self) -> CoreResult<()> {
        let code_ok =
            self.destination.len() == 3 && self.destination.chars().all(|c| c.is_ascii_alphabetic());
        if !code_ok {
            return Err(CoreError::Validation(
                "destination must be a 3-letter IATA code".to_string(),
            ));
        }

        if !(MIN_RESULTS..=MAX_RESULTS).contains(&self.max_results) {
            return Err(CoreError::Validation(format!(
                "maxResults must be between {} and {}",
                MIN_RESULTS, MAX_RESULTS
            )));
        }

        Ok(())
    }
}

/// Completion state reported by the remote search
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SearchStatus {
    Completed,
    Partial,
    Failed,
}

/// One priced flight option returned by the remote search.
///
/// Consumed read-only; the result set arrives ordered ascending by price and
/// is never re-sorted here. Everything beyond the basic fields is nullable
/// on the wire.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlightOffer {
    pub origin: String,
    pub city: String,
    pub price: f64,
    pub stops: u32,
    pub duration_minutes: u32,
    #[serde(default)]
    pub coordinates: Option<Coordinate>,

    // Booking information
    #[serde(default)]
    pub airline: Option<String>,
    #[serde(default)]
    pub airline_code: Option<String>,
    #[serde(default)]
    pub flight_number: Option<String>,
    #[serde(default)]
    pub departure_time: Option<String>,
    #[serde(default)]
    pub arrival_time: Option<String>,
    #[serde(default)]
    pub book_by: Option<String>,

    // Multi-segment detail
    #[serde(default)]
    pub segments: Option<Vec<FlightSegment>>,
    #[serde(default)]
    pub layovers: Option<Vec<Layover>>,

    // Booking links
    #[serde(default)]
    pub booking_options: Option<Vec<BookingOption>>,
}

/// One leg of a multi-segment journey
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlightSegment {
    pub segment_number: u32,
    pub flight_number: String,
    pub airline: String,
    pub airline_code: String,
    pub departure: Location,
    pub arrival: Location,
    pub duration_minutes: u32,
}

/// Airport location with timing
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    /// IATA code
    pub airport: String,
    pub city: String,
    /// ISO-8601 datetime
    pub time: String,
}

/// Connection between segments. `is_short` flags connections under an hour,
/// `is_long` flags connections over four hours.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Layover {
    pub airport: String,
    pub city: String,
    pub duration_minutes: u32,
    pub is_short: bool,
    pub is_long: bool,
    pub description: String,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CommissionType {
    None,
    Affiliate,
    Margin,
}

/// Outbound link for booking an offer
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingOption {
    pub provider: String,
    pub url: String,
    /// 1 = highest priority
    pub priority: u32,
    pub display_label: String,
    pub commission_type: CommissionType,
    pub requires_authentication: bool,
}

/// Full response envelope from the remote search
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlightSearchResponse {
    pub destination: String,
    pub currency: String,
    pub generated_at: String,
    pub result_count: u32,
    pub status: SearchStatus,
    pub results: Vec<FlightOffer>,
}
