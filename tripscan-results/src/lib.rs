pub mod aggregator;
pub mod format;

pub use aggregator::{CityGrouping, MapPoints, PlottedOffer, ResultStatistics, ResultsAggregator};
