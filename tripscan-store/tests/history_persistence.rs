use chrono::NaiveDate;
use tempfile::tempdir;

use tripscan_core::{Price, RecentSearch, Region, SearchOutcome, SearchRequest};
use tripscan_store::app_config::HistoryConfig;
use tripscan_store::{FileStore, RecentSearchStore};

fn config_for(dir: &std::path::Path) -> HistoryConfig {
    HistoryConfig {
        data_dir: dir.to_path_buf(),
        ..HistoryConfig::default()
    }
}

#[test]
fn test_history_survives_process_restart() {
    let dir = tempdir().unwrap();

    let mut store = RecentSearchStore::open(config_for(dir.path()));
    assert!(store.entries().is_empty());

    let request = SearchRequest::new("BKK", Region::Europe, 10);
    store.record(RecentSearch::pending(
        &request,
        NaiveDate::from_ymd_opt(2025, 12, 25),
        NaiveDate::from_ymd_opt(2026, 1, 5),
    ));
    store.enrich(
        "BKK",
        Region::Europe,
        &SearchOutcome {
            cheapest_price: Price {
                amount: 399.0,
                currency: "EUR".to_string(),
            },
            cheapest_origin: "LHR".to_string(),
            results_count: 10,
        },
    );

    // A second store over the same directory sees the enriched entry.
    let restored = RecentSearchStore::open(config_for(dir.path()));
    let entries = restored.entries();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].destination, "BKK");
    assert_eq!(
        entries[0].departure_date,
        NaiveDate::from_ymd_opt(2025, 12, 25)
    );
    assert!(entries[0].is_enriched());
    assert_eq!(entries[0].cheapest_origin.as_deref(), Some("LHR"));
}

#[test]
fn test_persisted_layout_is_the_documented_wire_shape() {
    let dir = tempdir().unwrap();

    let mut store = RecentSearchStore::open(config_for(dir.path()));
    let request = SearchRequest::new("BKK", Region::NorthAmerica, 15);
    store.record(RecentSearch::pending(&request, None, None));

    let payload =
        std::fs::read_to_string(dir.path().join("recent-searches.json")).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&payload).unwrap();

    let records = parsed.as_array().expect("history is an ordered list");
    assert_eq!(records.len(), 1);
    assert_eq!(records[0]["destination"], "BKK");
    assert_eq!(records[0]["region"], "NORTH_AMERICA");
    assert_eq!(records[0]["maxResults"], 15);
    assert!(records[0]["timestamp"].is_i64());
}

#[test]
fn test_corrupt_file_restores_to_empty() {
    let dir = tempdir().unwrap();
    std::fs::write(dir.path().join("recent-searches.json"), "not json at all").unwrap();

    let store = RecentSearchStore::open(config_for(dir.path()));
    assert!(store.entries().is_empty());
}

#[test]
fn test_clear_deletes_the_backing_file() {
    let dir = tempdir().unwrap();

    let mut store = RecentSearchStore::open(config_for(dir.path()));
    store.record(RecentSearch::pending(
        &SearchRequest::new("BKK", Region::Europe, 10),
        None,
        None,
    ));
    assert!(dir.path().join("recent-searches.json").exists());

    store.clear();
    assert!(!dir.path().join("recent-searches.json").exists());
}

#[test]
fn test_file_store_missing_key_is_none() {
    use tripscan_core::KeyValueStore;

    let dir = tempdir().unwrap();
    let store = FileStore::new(dir.path());

    assert!(store.get("recent-searches").unwrap().is_none());
}
