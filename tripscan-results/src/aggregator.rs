use std::collections::HashMap;

use serde::Serialize;
use tracing::warn;

use tripscan_core::{Coordinate, FlightOffer, FlightSearchResponse, Price, SearchOutcome};
use tripscan_directory::{AirportDirectory, CoordinateResolver};

/// Price spread of a non-empty result set
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ResultStatistics {
    pub cheapest: f64,
    pub average: f64,
    pub most_expensive: f64,
}

/// Distinct departure airports observed for one city
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CityGrouping {
    pub city: String,
    /// Distinct origin codes, in first-seen order
    pub airports: Vec<String>,
    pub count: usize,
}

/// An offer with a resolved map position
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PlottedOffer {
    pub origin: String,
    pub city: String,
    pub price: f64,
    pub coordinate: Coordinate,
}

/// Total partition of a result set into mappable offers and origin codes
/// with no known position. Every input offer lands in exactly one side, so
/// the caller can account for the whole set between "shown on map" and
/// "missing location data".
#[derive(Debug, Clone, Serialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct MapPoints {
    pub plotted: Vec<PlottedOffer>,
    /// Deduplicated origin codes that could not be placed
    pub unresolved: Vec<String>,
}

/// Derives summary views from a result set for display, without mutating
/// it. The offer set is consumed as delivered: already ordered ascending by
/// price, never re-sorted here.
pub struct ResultsAggregator {
    directory: AirportDirectory,
    resolver: CoordinateResolver,
}

impl ResultsAggregator {
    pub fn new(directory: AirportDirectory, resolver: CoordinateResolver) -> Self {
        Self {
            directory,
            resolver,
        }
    }

    /// Cheapest, mean and most expensive price. `None` for an empty set;
    /// callers branch on emptiness before formatting, there is no zero
    /// default.
    pub fn statistics(&self, offers: &[FlightOffer]) -> Option<ResultStatistics> {
        let first = offers.first()?;

        let mut cheapest = first.price;
        let mut most_expensive = first.price;
        let mut total = 0.0;
        for offer in offers {
            cheapest = cheapest.min(offer.price);
            most_expensive = most_expensive.max(offer.price);
            total += offer.price;
        }

        Some(ResultStatistics {
            cheapest,
            average: total / offers.len() as f64,
            most_expensive,
        })
    }

    /// Bucket offers by city and collect the distinct origin codes per
    /// bucket. Ordered descending by distinct-airport count, ties broken by
    /// city name, so rendering is stable across calls.
    pub fn group_by_city(&self, offers: &[FlightOffer]) -> Vec<CityGrouping> {
        let mut order: Vec<String> = Vec::new();
        let mut buckets: HashMap<String, Vec<String>> = HashMap::new();

        for offer in offers {
            let city = self.city_for(offer);
            let airports = buckets.entry(city.clone()).or_insert_with(|| {
                order.push(city);
                Vec::new()
            });
            if !airports.contains(&offer.origin) {
                airports.push(offer.origin.clone());
            }
        }

        let mut groups: Vec<CityGrouping> = order
            .into_iter()
            .map(|city| {
                let airports = buckets.remove(&city).unwrap_or_default();
                CityGrouping {
                    count: airports.len(),
                    city,
                    airports,
                }
            })
            .collect();

        groups.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.city.cmp(&b.city)));
        groups
    }

    /// Partition offers into those with a known map position and those
    /// without. An offer's own coordinates win; otherwise the static
    /// resolver is consulted; a miss on both sides leaves the origin in
    /// `unresolved`.
    pub fn resolve_map_points(&self, offers: &[FlightOffer]) -> MapPoints {
        let mut points = MapPoints::default();

        for offer in offers {
            let coordinate = offer
                .coordinates
                .or_else(|| self.resolver.resolve(&offer.origin));

            match coordinate {
                Some(coordinate) => points.plotted.push(PlottedOffer {
                    origin: offer.origin.clone(),
                    city: offer.city.clone(),
                    price: offer.price,
                    coordinate,
                }),
                None => {
                    warn!("Missing coordinates for airport: {}", offer.origin);
                    if !points.unresolved.contains(&offer.origin) {
                        points.unresolved.push(offer.origin.clone());
                    }
                }
            }
        }

        points
    }

    /// Enrichment payload for the recent-search history: the first offer of
    /// the ascending-price result set is the cheapest. `None` when the
    /// search came back empty.
    pub fn search_outcome(&self, response: &FlightSearchResponse) -> Option<SearchOutcome> {
        let cheapest = response.results.first()?;

        Some(SearchOutcome {
            cheapest_price: Price {
                amount: cheapest.price,
                currency: response.currency.clone(),
            },
            cheapest_origin: cheapest.origin.clone(),
            results_count: response.result_count,
        })
    }

    fn city_for(&self, offer: &FlightOffer) -> String {
        if !offer.city.trim().is_empty() {
            return offer.city.clone();
        }

        // Some suppliers omit the city name; fall back to the directory.
        self.directory
            .lookup(&offer.origin)
            .map(|airport| airport.city.clone())
            .unwrap_or_else(|| offer.origin.clone())
    }
}
