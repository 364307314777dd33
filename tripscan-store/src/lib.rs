pub mod app_config;
pub mod history;
pub mod kv;

pub use history::RecentSearchStore;
pub use kv::{FileStore, MemoryStore};
