use crate::ports::outbound::CacheStore;
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Mutex;

/// JsonFileCacheStore adapter - a persistent cache store backed by a
/// single JSON file.
///
/// This adapter implements the CacheStore port, standing in for the
/// host environment's key/value storage. The whole map is loaded at
/// construction and rewritten on every update.
///
/// # Failure semantics
/// An unreadable or corrupt file behaves as an empty store; a failed
/// write is logged to stderr and otherwise ignored. The store never
/// surfaces errors to its callers.
pub struct JsonFileCacheStore {
    path: PathBuf,
    entries: Mutex<HashMap<String, serde_json::Value>>,
}

impl JsonFileCacheStore {
    pub fn new(path: PathBuf) -> Self {
        let entries = Self::load(&path);
        Self {
            path,
            entries: Mutex::new(entries),
        }
    }

    fn load(path: &PathBuf) -> HashMap<String, serde_json::Value> {
        let Ok(content) = std::fs::read_to_string(path) else {
            return HashMap::new();
        };
        serde_json::from_str(&content).unwrap_or_default()
    }

    fn persist(&self, entries: &HashMap<String, serde_json::Value>) {
        let Ok(content) = serde_json::to_string(entries) else {
            return;
        };
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                let _ = std::fs::create_dir_all(parent);
            }
        }
        if let Err(e) = std::fs::write(&self.path, content) {
            eprintln!(
                "⚠️  Warning: failed to persist cache to {}: {}",
                self.path.display(),
                e
            );
        }
    }
}

impl CacheStore for JsonFileCacheStore {
    fn get(&self, key: &str) -> Option<serde_json::Value> {
        self.entries.lock().ok()?.get(key).cloned()
    }

    fn update(&self, key: &str, value: serde_json::Value) {
        let Ok(mut entries) = self.entries.lock() else {
            return;
        };
        entries.insert(key.to_string(), value);
        self.persist(&entries);
    }
}
