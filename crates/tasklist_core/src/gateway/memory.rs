//! In-memory gateway for tests and ephemeral sessions.

use super::{GatewayError, GatewayResult, KeyValueStore};
use std::collections::HashMap;
use std::sync::Mutex;

/// Process-local key-value map. Contents are lost on drop.
#[derive(Debug, Default)]
pub struct MemoryKvStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryKvStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-seeded with one entry.
    pub fn with_entry(key: impl Into<String>, value: impl Into<String>) -> Self {
        let store = Self::new();
        if let Ok(mut entries) = store.entries.lock() {
            entries.insert(key.into(), value.into());
        }
        store
    }
}

impl KeyValueStore for MemoryKvStore {
    fn get(&self, key: &str) -> GatewayResult<Option<String>> {
        let entries = self
            .entries
            .lock()
            .map_err(|_| GatewayError::Unavailable("memory store lock poisoned".to_string()))?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> GatewayResult<()> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|_| GatewayError::Unavailable("memory store lock poisoned".to_string()))?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
