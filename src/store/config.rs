use serde::Deserialize;

/// Storage key used when none is configured.
pub const DEFAULT_STORAGE_KEY: &str = "chemistry-inference";

/// Settings for a [`Store`](super::Store).
///
/// Deserializable so that an embedding application can keep it in its own
/// configuration file; missing fields take their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Key under which [`Store::save`](super::Store::save) writes the document.
    pub storage_key: String,
    /// Start with the built-in carbon dioxide / calcium example instead of
    /// an empty store.
    pub seed_sample_data: bool,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            seed_sample_data: false,
        }
    }
}

impl StoreConfig {
    pub fn with_storage_key(mut self, key: impl Into<String>) -> Self {
        self.storage_key = key.into();
        self
    }

    pub fn with_sample_data(mut self, seed: bool) -> Self {
        self.seed_sample_data = seed;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = StoreConfig::default();
        assert_eq!(config.storage_key, "chemistry-inference");
        assert!(!config.seed_sample_data);
    }

    #[test]
    fn partial_config_fills_defaults() {
        let config: StoreConfig = serde_json::from_str(r#"{ "seed_sample_data": true }"#).unwrap();
        assert_eq!(config.storage_key, DEFAULT_STORAGE_KEY);
        assert!(config.seed_sample_data);
    }

    #[test]
    fn builder() {
        let config = StoreConfig::default().with_storage_key("lab-notes");
        assert_eq!(config.storage_key, "lab-notes");
    }
}
