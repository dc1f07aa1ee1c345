use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A cached payload wrapped with the time it was stored.
///
/// Expiry is the caller's concern: the store never evicts, the fetcher
/// checks the timestamp at read time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CacheEntry<T> {
    pub timestamp: DateTime<Utc>,
    pub data: T,
}

impl<T> CacheEntry<T> {
    pub fn new(data: T) -> Self {
        Self {
            timestamp: Utc::now(),
            data,
        }
    }

    /// Age of this entry relative to `now`.
    pub fn age(&self, now: DateTime<Utc>) -> chrono::Duration {
        now - self.timestamp
    }
}

/// CacheStore port - a minimal associative store for analysis results
///
/// The backing store is an infrastructure concern (a JSON file on
/// disk, an in-memory map in tests); this port only assumes key-based
/// get/update over JSON payloads with no eviction guarantee.
///
/// # Failure semantics
/// Store failures are recoverable by contract: implementations return
/// `None` from `get` when a read fails, and `update` is best-effort
/// (a failed write is logged and ignored, never surfaced).
pub trait CacheStore: Send + Sync {
    /// Returns the payload stored under `key`, or `None` if absent or
    /// unreadable.
    fn get(&self, key: &str) -> Option<serde_json::Value>;

    /// Stores `value` under `key`, replacing any previous payload.
    fn update(&self, key: &str, value: serde_json::Value);
}

impl CacheStore for Box<dyn CacheStore> {
    fn get(&self, key: &str) -> Option<serde_json::Value> {
        (**self).get(key)
    }

    fn update(&self, key: &str, value: serde_json::Value) {
        (**self).update(key, value)
    }
}
