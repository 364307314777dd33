use serde::Deserialize;
use std::env;
use std::path::PathBuf;

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub history: HistoryConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct HistoryConfig {
    /// Maximum entries kept in the recent-search list
    #[serde(default = "default_capacity")]
    pub capacity: usize,
    /// Well-known key the history is persisted under
    #[serde(default = "default_storage_key")]
    pub storage_key: String,
    /// Directory the file backend writes into
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
}

fn default_capacity() -> usize {
    5
}

fn default_storage_key() -> String {
    "recent-searches".to_string()
}

fn default_data_dir() -> PathBuf {
    PathBuf::from(".tripscan")
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            capacity: default_capacity(),
            storage_key: default_storage_key(),
            data_dir: default_data_dir(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let s = config::Config::builder()
            // Start off by merging in the "default" configuration file
            .add_source(config::File::with_name("config/default").required(false))
            // Add in the current environment file, optional
            .add_source(config::File::with_name(&format!("config/{}", run_mode)).required(false))
            // Add in a local configuration file, not checked in
            .add_source(config::File::with_name("config/local").required(false))
            // Add in settings from the environment (with a prefix of TRIPSCAN)
            // Eg. `TRIPSCAN__HISTORY__CAPACITY=10` would set the capacity
            .add_source(config::Environment::with_prefix("TRIPSCAN").separator("__"))
            .build()?;

        s.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_history_defaults() {
        let history = HistoryConfig::default();
        assert_eq!(history.capacity, 5);
        assert_eq!(history.storage_key, "recent-searches");
        assert_eq!(history.data_dir, PathBuf::from(".tripscan"));
    }

    #[test]
    fn test_history_overrides_from_file() {
        let s = config::Config::builder()
            .add_source(config::File::from_str(
                "history = { capacity = 3, storage_key = \"rs\", data_dir = \"/tmp/tripscan\" }",
                config::FileFormat::Toml,
            ))
            .build()
            .unwrap();

        let config: Config = s.try_deserialize().unwrap();
        assert_eq!(config.history.capacity, 3);
        assert_eq!(config.history.storage_key, "rs");
        assert_eq!(config.history.data_dir, PathBuf::from("/tmp/tripscan"));
    }
}
