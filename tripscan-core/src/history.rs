use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::search::{Price, Region, SearchRequest};

/// A previously submitted search, kept for quick re-issue.
///
/// Entries start out pending (no result fields) and are enriched in place
/// once the matching search resolves; they never revert. At most one entry
/// exists per `(destination, region)` pair.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RecentSearch {
    pub destination: String,
    pub region: Region,
    pub max_results: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub departure_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub return_date: Option<NaiveDate>,
    /// Epoch millis of submission
    pub timestamp: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cheapest_price: Option<Price>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cheapest_origin: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub results_count: Option<u32>,
}

impl RecentSearch {
    /// Entry for a just-submitted search, with no result fields yet.
    pub fn pending(
        request: &SearchRequest,
        departure_date: Option<NaiveDate>,
        return_date: Option<NaiveDate>,
    ) -> Self {
        Self {
            destination: request.destination.clone(),
            region: request.region,
            max_results: request.max_results,
            departure_date,
            return_date,
            timestamp: Utc::now().timestamp_millis(),
            cheapest_price: None,
            cheapest_origin: None,
            results_count: None,
        }
    }

    /// Whether results have been attached to this entry
    pub fn is_enriched(&self) -> bool {
        self.cheapest_price.is_some()
    }

    /// Identity test on the store's dedup key
    pub fn matches(&self, destination: &str, region: Region) -> bool {
        self.destination == destination && self.region == region
    }
}

/// Result statistics attached to a recorded search once it resolves.
/// Derived from the cheapest offer of an ascending-price result set.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SearchOutcome {
    pub cheapest_price: Price,
    pub cheapest_origin: String,
    pub results_count: u32,
}
