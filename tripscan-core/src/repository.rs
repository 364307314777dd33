/// Failure raised by a key-value backend.
///
/// These never escape the recent-search store's public surface; the store
/// logs them and degrades to in-memory behavior.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("I/O failure: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed payload: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("Backend unavailable: {0}")]
    Unavailable(String),
}

/// Key-value persistence provided by the host environment.
///
/// String payloads under well-known keys. All operations are synchronous;
/// nothing in this core blocks on network I/O.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;

    fn remove(&mut self, key: &str) -> Result<(), StoreError>;
}
