use crate::persistence::{keys, load_json, save_json, KeyValueStore};
use std::collections::BTreeSet;
use tracing::{debug, warn};

/// Listing ids the user has saved
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FavoritesSet {
    ids: BTreeSet<u32>,
}

impl FavoritesSet {
    /// Restore from the store; missing or malformed content yields an empty set
    ///
    /// Ids are stored as strings (`["1","5"]`), bare numbers are accepted too.
    pub fn load(store: &dyn KeyValueStore) -> Self {
        let Some(raw) = load_json::<Vec<serde_json::Value>>(store, keys::FAVORITES) else {
            return Self::default();
        };

        let parsed: Option<BTreeSet<u32>> = raw.iter().map(parse_id).collect();
        match parsed {
            Some(ids) => Self { ids },
            None => {
                warn!("Stored favorites contain a non-numeric id, resetting");
                Self::default()
            }
        }
    }

    pub fn contains(&self, id: u32) -> bool {
        self.ids.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = u32> + '_ {
        self.ids.iter().copied()
    }

    /// Flip membership of `id` and persist; returns whether it is now a favorite
    pub fn toggle(&mut self, id: u32, store: &mut dyn KeyValueStore) -> bool {
        let saved = if self.ids.remove(&id) {
            false
        } else {
            self.ids.insert(id);
            true
        };
        debug!("Favorite {} -> {}", id, saved);

        let encoded: Vec<String> = self.ids.iter().map(u32::to_string).collect();
        save_json(store, keys::FAVORITES, &encoded);
        saved
    }
}

fn parse_id(value: &serde_json::Value) -> Option<u32> {
    match value {
        serde_json::Value::String(s) => s.trim().parse().ok(),
        serde_json::Value::Number(n) => n.as_u64().and_then(|n| u32::try_from(n).ok()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistence::MemoryStore;

    #[test]
    fn test_toggle_twice_restores_membership() {
        let mut store = MemoryStore::new();
        let mut favorites = FavoritesSet::load(&store);

        assert!(favorites.toggle(3, &mut store));
        assert!(favorites.contains(3));
        assert!(!favorites.toggle(3, &mut store));
        assert!(!favorites.contains(3));
        assert!(favorites.is_empty());
    }

    #[test]
    fn test_toggle_persists_ids_as_strings() {
        let mut store = MemoryStore::new();
        let mut favorites = FavoritesSet::default();
        favorites.toggle(5, &mut store);
        favorites.toggle(1, &mut store);
        favorites.toggle(5, &mut store);
        favorites.toggle(5, &mut store);

        assert_eq!(store.get(keys::FAVORITES).as_deref(), Some(r#"["1","5"]"#));
        assert_eq!(FavoritesSet::load(&store), favorites);
        assert_eq!(favorites.len(), 2);
    }

    #[test]
    fn test_load_accepts_numbers_and_strings() {
        let store = MemoryStore::new().with_entry(keys::FAVORITES, r#"["2", 4]"#);
        let favorites = FavoritesSet::load(&store);
        assert_eq!(favorites.iter().collect::<Vec<_>>(), vec![2, 4]);
    }

    #[test]
    fn test_malformed_content_resets_to_empty() {
        for raw in [r#"{"1": true}"#, r#"["one"]"#, "[", r#"[-1]"#] {
            let store = MemoryStore::new().with_entry(keys::FAVORITES, raw);
            assert!(FavoritesSet::load(&store).is_empty(), "{raw}");
        }
    }
}
