//! End-to-end exercise of the search flow: destination entry, history
//! recording, result aggregation, history enrichment.

use tripscan_core::{FlightOffer, FlightSearchResponse, RecentSearch, Region, SearchRequest, SearchStatus};
use tripscan_directory::{AirportDirectory, CoordinateResolver};
use tripscan_results::ResultsAggregator;
use tripscan_store::{MemoryStore, RecentSearchStore};

fn offer(origin: &str, city: &str, price: f64) -> FlightOffer {
    FlightOffer {
        origin: origin.to_string(),
        city: city.to_string(),
        price,
        stops: 1,
        duration_minutes: 640,
        coordinates: None,
        airline: None,
        airline_code: None,
        flight_number: None,
        departure_time: None,
        arrival_time: None,
        book_by: None,
        segments: None,
        layovers: None,
        booking_options: None,
    }
}

#[test]
fn test_submit_aggregate_enrich_flow() {
    let directory = AirportDirectory::new();
    let aggregator = ResultsAggregator::new(AirportDirectory::new(), CoordinateResolver::new());
    let mut history = RecentSearchStore::new(Box::new(MemoryStore::new()));
    history.restore();

    // The user types a destination and picks one of the suggestions.
    let suggestions = directory.search("bangk");
    let destination = &suggestions.first().expect("no suggestion for bangk").code;
    assert_eq!(destination, "BKK");

    // Submitting the search records a pending history entry.
    let request = SearchRequest::new(destination.clone(), Region::Europe, 10);
    request.validate().unwrap();
    history.record(RecentSearch::pending(&request, None, None));
    assert_eq!(history.entries().len(), 1);
    assert!(!history.entries()[0].is_enriched());

    // The remote search resolves with an ascending-price result set.
    let response = FlightSearchResponse {
        destination: request.destination.clone(),
        currency: "EUR".to_string(),
        generated_at: "2025-06-01T12:00:00Z".to_string(),
        result_count: 3,
        status: SearchStatus::Completed,
        results: vec![
            offer("LHR", "London", 399.0),
            offer("LGW", "London", 420.0),
            offer("CDG", "Paris", 455.0),
        ],
    };

    let stats = aggregator.statistics(&response.results).unwrap();
    assert_eq!(stats.cheapest, 399.0);
    assert_eq!(stats.most_expensive, 455.0);

    let groups = aggregator.group_by_city(&response.results);
    assert_eq!(groups[0].city, "London");
    assert_eq!(groups[0].count, 2);

    // LGW is not in the coordinate table; the partition still covers
    // every offer.
    let points = aggregator.resolve_map_points(&response.results);
    assert_eq!(points.unresolved, vec!["LGW"]);
    assert_eq!(points.plotted.len() + points.unresolved.len(), 3);

    // The outcome lands on the matching history entry.
    let outcome = aggregator.search_outcome(&response).unwrap();
    history.enrich(&request.destination, request.region, &outcome);

    let entry = &history.entries()[0];
    assert!(entry.is_enriched());
    assert_eq!(entry.cheapest_origin.as_deref(), Some("LHR"));
    assert_eq!(entry.cheapest_price.as_ref().unwrap().amount, 399.0);
    assert_eq!(entry.results_count, Some(3));

    // Observing the same results again changes nothing.
    history.enrich(&request.destination, request.region, &outcome);
    assert_eq!(history.entries().len(), 1);
}
