use crate::persistence::{keys, load_json, save_json, KeyValueStore};
use tracing::debug;

pub const DEFAULT_CAPACITY: usize = 5;

/// Recent distinct search terms, most recent first
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchHistory {
    terms: Vec<String>,
    capacity: usize,
}

impl SearchHistory {
    pub fn new(capacity: usize) -> Self {
        Self {
            terms: Vec::new(),
            capacity: capacity.max(1),
        }
    }

    /// Restore from the store, re-normalizing whatever was saved
    pub fn load(store: &dyn KeyValueStore, capacity: usize) -> Self {
        let mut history = Self::new(capacity);
        let saved: Vec<String> = load_json(store, keys::SEARCH_HISTORY).unwrap_or_default();

        // Oldest first so the saved head ends up in front again
        for term in saved.iter().rev() {
            history.insert(term);
        }
        history
    }

    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Record a term and persist; blank terms are ignored
    pub fn record(&mut self, term: &str, store: &mut dyn KeyValueStore) -> bool {
        if !self.insert(term) {
            return false;
        }
        debug!("Search history: {:?}", self.terms);
        save_json(store, keys::SEARCH_HISTORY, &self.terms);
        true
    }

    /// Terms starting with `prefix`, most recent first
    pub fn suggestions(&self, prefix: &str) -> Vec<&str> {
        let prefix = prefix.trim().to_lowercase();
        self.terms
            .iter()
            .filter(|term| term.starts_with(&prefix))
            .map(String::as_str)
            .collect()
    }

    fn insert(&mut self, term: &str) -> bool {
        let term = term.trim().to_lowercase();
        if term.is_empty() {
            return false;
        }

        self.terms.retain(|existing| *existing != term);
        self.terms.insert(0, term);
        self.terms.truncate(self.capacity);
        true
    }
}

impl Default for SearchHistory {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistence::MemoryStore;

    #[test]
    fn test_cap_keeps_most_recent() {
        let mut store = MemoryStore::new();
        let mut history = SearchHistory::default();
        for term in ["lagos", "villa", "abuja", "land", "accra", "nairobi"] {
            history.record(term, &mut store);
        }

        assert_eq!(history.terms(), &["nairobi", "accra", "land", "abuja", "villa"]);
    }

    #[test]
    fn test_rerecord_promotes_without_growing() {
        let mut store = MemoryStore::new();
        let mut history = SearchHistory::default();
        for term in ["lagos", "villa", "abuja"] {
            history.record(term, &mut store);
        }

        history.record("lagos", &mut store);
        assert_eq!(history.terms(), &["lagos", "abuja", "villa"]);
        assert_eq!(history.len(), 3);
    }

    #[test]
    fn test_blank_terms_are_ignored() {
        let mut store = MemoryStore::new();
        let mut history = SearchHistory::default();
        assert!(!history.record("   ", &mut store));
        assert!(history.is_empty());
        assert_eq!(store.get(keys::SEARCH_HISTORY), None);
    }

    #[test]
    fn test_terms_are_trimmed_and_lowercased() {
        let mut store = MemoryStore::new();
        let mut history = SearchHistory::default();
        history.record("  Villa ", &mut store);
        history.record("VILLA", &mut store);
        assert_eq!(history.terms(), &["villa"]);
    }

    #[test]
    fn test_persisted_and_restored() {
        let mut store = MemoryStore::new();
        let mut history = SearchHistory::default();
        history.record("lagos", &mut store);
        history.record("villa", &mut store);

        assert_eq!(
            store.get(keys::SEARCH_HISTORY).as_deref(),
            Some(r#"["villa","lagos"]"#)
        );
        assert_eq!(SearchHistory::load(&store, DEFAULT_CAPACITY), history);
    }

    #[test]
    fn test_load_normalizes_and_recovers() {
        let store = MemoryStore::new().with_entry(
            keys::SEARCH_HISTORY,
            r#"["a","b","a","","c","d","e","f"]"#,
        );
        let history = SearchHistory::load(&store, DEFAULT_CAPACITY);
        assert_eq!(history.terms(), &["a", "b", "c", "d", "e"]);

        let broken = MemoryStore::new().with_entry(keys::SEARCH_HISTORY, r#"{"a":1}"#);
        assert!(SearchHistory::load(&broken, DEFAULT_CAPACITY).is_empty());
    }

    #[test]
    fn test_suggestions_by_prefix() {
        let mut store = MemoryStore::new();
        let mut history = SearchHistory::default();
        for term in ["lagos", "land", "villa"] {
            history.record(term, &mut store);
        }
        assert_eq!(history.suggestions("La"), vec!["land", "lagos"]);
        assert_eq!(history.suggestions("").len(), 3);
    }
}
