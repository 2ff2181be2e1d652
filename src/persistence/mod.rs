pub mod favorites;
pub mod history;
pub mod inspections;
pub mod store;

pub use favorites::FavoritesSet;
pub use history::SearchHistory;
pub use inspections::InspectionLog;
pub use store::{FileStore, KeyValueStore, MemoryStore};

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::warn;

/// Storage keys shared with the marketing site
pub mod keys {
    pub const FAVORITES: &str = "favorites";
    pub const SEARCH_HISTORY: &str = "searchHistory";
    pub const INSPECTIONS: &str = "inspections";
    pub const SELECTED_PROPERTY: &str = "selectedProperty";
}

/// Read a JSON value, treating a missing or malformed entry as absent
pub(crate) fn load_json<T: DeserializeOwned>(store: &dyn KeyValueStore, key: &str) -> Option<T> {
    let raw = store.get(key)?;
    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(err) => {
            warn!("Ignoring malformed stored value for {}: {}", key, err);
            None
        }
    }
}

/// Write a JSON value, logging instead of failing when the store refuses it
pub(crate) fn save_json<T: Serialize + ?Sized>(store: &mut dyn KeyValueStore, key: &str, value: &T) {
    let encoded = match serde_json::to_string(value) {
        Ok(encoded) => encoded,
        Err(err) => {
            warn!("Failed to encode {}: {}", key, err);
            return;
        }
    };

    if let Err(err) = store.set(key, &encoded) {
        warn!("Failed to persist {}: {:#}", key, err);
    }
}
