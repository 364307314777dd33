pub mod history;
pub mod repository;
pub mod search;

pub use history::{RecentSearch, SearchOutcome};
pub use repository::{KeyValueStore, StoreError};
pub use search::{
    BookingOption, CommissionType, Coordinate, FlightOffer, FlightSearchResponse, FlightSegment,
    Layover, Location, Price, Region, SearchRequest, SearchStatus,
};

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Validation failed: {0}")]
    Validation(String),
}

pub type CoreResult<T> = Result<T, CoreError>;
