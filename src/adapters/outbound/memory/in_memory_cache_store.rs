use crate::ports::outbound::CacheStore;
use dashmap::DashMap;
use std::sync::Arc;

/// InMemoryCacheStore adapter - a non-persistent cache store.
///
/// This adapter implements the CacheStore port over a thread-safe map.
/// Used when caching across runs is disabled and as a store for tests.
#[derive(Default, Clone)]
pub struct InMemoryCacheStore {
    entries: Arc<DashMap<String, serde_json::Value>>,
}

impl InMemoryCacheStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored entries (for testing/monitoring)
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl CacheStore for InMemoryCacheStore {
    fn get(&self, key: &str) -> Option<serde_json::Value> {
        self.entries.get(key).map(|v| v.clone())
    }

    fn update(&self, key: &str, value: serde_json::Value) {
        self.entries.insert(key.to_string(), value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_and_update() {
        let store = InMemoryCacheStore::new();
        assert!(store.get("k").is_none());
        assert!(store.is_empty());

        store.update("k", serde_json::json!({"a": 1}));
        assert_eq!(store.get("k"), Some(serde_json::json!({"a": 1})));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_update_overwrites() {
        let store = InMemoryCacheStore::new();
        store.update("k", serde_json::json!(1));
        store.update("k", serde_json::json!(2));
        assert_eq!(store.get("k"), Some(serde_json::json!(2)));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_clones_share_entries() {
        let store = InMemoryCacheStore::new();
        let clone = store.clone();
        store.update("k", serde_json::json!("v"));
        assert_eq!(clone.get("k"), Some(serde_json::json!("v")));
    }
}
