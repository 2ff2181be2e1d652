use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Runtime settings for the catalog
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CatalogConfig {
    /// Listings per page
    pub page_size: usize,
    /// Quiet period before free-text search is committed
    pub search_debounce_ms: u64,
    /// Number of recent search terms kept
    pub search_history_capacity: usize,
    /// File backing favorites and search history
    pub storage_path: PathBuf,
    /// Optional JSON feed replacing the built-in listings
    pub catalog_url: Option<String>,
    /// Maximum photo distance accepted by geo-verification
    pub geo_tolerance_meters: f64,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            page_size: 9,
            search_debounce_ms: 300,
            search_history_capacity: 5,
            storage_path: PathBuf::from("assetplane_storage.json"),
            catalog_url: None,
            geo_tolerance_meters: 100.0,
        }
    }
}

impl CatalogConfig {
    /// Read a JSON config file; absent fields keep their defaults
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        let config: Self = serde_json::from_str(&raw)
            .with_context(|| format!("Failed to parse config {}", path.display()))?;
        Ok(config.normalized())
    }

    pub fn search_debounce(&self) -> Duration {
        Duration::from_millis(self.search_debounce_ms)
    }

    fn normalized(mut self) -> Self {
        self.page_size = self.page_size.max(1);
        self.search_history_capacity = self.search_history_capacity.max(1);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_file_keeps_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.json");
        std::fs::write(&path, r#"{"page_size": 0, "catalog_url": "http://feed"}"#).unwrap();

        let config = CatalogConfig::load(&path).unwrap();
        assert_eq!(config.page_size, 1);
        assert_eq!(config.catalog_url.as_deref(), Some("http://feed"));
        assert_eq!(config.search_debounce(), Duration::from_millis(300));
        assert_eq!(config.search_history_capacity, 5);
    }

    #[test]
    fn test_missing_file_is_error() {
        assert!(CatalogConfig::load("/nonexistent/catalog.json").is_err());
    }
}
