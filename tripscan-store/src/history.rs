use chrono::Utc;
use tracing::{debug, warn};

use tripscan_core::{KeyValueStore, RecentSearch, Region, SearchOutcome, StoreError};

use crate::app_config::HistoryConfig;
use crate::kv::FileStore;

/// Bounded, deduplicated, persisted history of submitted searches.
///
/// The list is always sorted most-recent-first, holds at most one entry per
/// `(destination, region)` pair and never exceeds the configured capacity.
/// Persistence is best-effort: a failing backend costs durability, never the
/// search flow, so no public operation here returns an error.
pub struct RecentSearchStore {
    backend: Box<dyn KeyValueStore>,
    storage_key: String,
    capacity: usize,
    entries: Vec<RecentSearch>,
}

impl RecentSearchStore {
    pub fn new(backend: Box<dyn KeyValueStore>) -> Self {
        Self::with_settings(backend, HistoryConfig::default())
    }

    pub fn with_settings(backend: Box<dyn KeyValueStore>, config: HistoryConfig) -> Self {
        Self {
            backend,
            storage_key: config.storage_key,
            capacity: config.capacity,
            entries: Vec::new(),
        }
    }

    /// File-backed store per the given config, restored from disk.
    pub fn open(config: HistoryConfig) -> Self {
        let backend = FileStore::new(config.data_dir.clone());
        let mut store = Self::with_settings(Box::new(backend), config);
        store.restore();
        store
    }

    /// Load persisted history, if any. A corrupt or unreadable payload is
    /// treated as no history: the store starts empty rather than failing.
    pub fn restore(&mut self) -> &[RecentSearch] {
        match self.try_restore() {
            Ok(count) => debug!("Restored {} recent searches", count),
            Err(err) => {
                warn!("Failed to load recent searches: {}", err);
                self.entries.clear();
            }
        }

        &self.entries
    }

    /// Record a submitted search. Any prior entry for the same
    /// `(destination, region)` pair is replaced, the new entry is stamped
    /// with a fresh timestamp and prepended, and the list is truncated to
    /// capacity. Returns the updated list, most-recent-first.
    pub fn record(&mut self, mut search: RecentSearch) -> &[RecentSearch] {
        search.timestamp = Utc::now().timestamp_millis();

        self.entries
            .retain(|entry| !entry.matches(&search.destination, search.region));
        self.entries.insert(0, search);
        self.entries.truncate(self.capacity);
        self.persist();

        &self.entries
    }

    /// Attach result statistics to the matching entry. Skips the write when
    /// the stored values already equal the incoming ones, so re-observing
    /// the same result set is idempotent. Without a matching entry this is
    /// a silent no-op: enrichment never creates entries.
    pub fn enrich(&mut self, destination: &str, region: Region, outcome: &SearchOutcome) {
        let Some(entry) = self
            .entries
            .iter_mut()
            .find(|entry| entry.matches(destination, region))
        else {
            debug!("No recent search to enrich for {}", destination);
            return;
        };

        let unchanged = entry.cheapest_price.as_ref().map(|price| price.amount)
            == Some(outcome.cheapest_price.amount)
            && entry.cheapest_origin.as_deref() == Some(outcome.cheapest_origin.as_str());
        if unchanged {
            return;
        }

        entry.cheapest_price = Some(outcome.cheapest_price.clone());
        entry.cheapest_origin = Some(outcome.cheapest_origin.clone());
        entry.results_count = Some(outcome.results_count);
        self.persist();
    }

    /// Empty the list and remove the persisted key entirely.
    pub fn clear(&mut self) {
        self.entries.clear();
        if let Err(err) = self.backend.remove(&self.storage_key) {
            warn!("Failed to clear recent searches: {}", err);
        }
    }

    /// Current history, most-recent-first
    pub fn entries(&self) -> &[RecentSearch] {
        &self.entries
    }

    fn try_restore(&mut self) -> Result<usize, StoreError> {
        self.entries = match self.backend.get(&self.storage_key)? {
            Some(payload) => serde_json::from_str(&payload)?,
            None => Vec::new(),
        };

        Ok(self.entries.len())
    }

    fn persist(&mut self) {
        if let Err(err) = self.try_persist() {
            warn!("Failed to persist recent searches: {}", err);
        }
    }

    fn try_persist(&mut self) -> Result<(), StoreError> {
        let payload = serde_json::to_string_pretty(&self.entries)?;
        self.backend.set(&self.storage_key, &payload)
    }
}
