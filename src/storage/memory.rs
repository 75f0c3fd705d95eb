use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use crate::errors::{HeadlinesError, HeadlinesResult};
use crate::storage::traits::KeyValueStorage;

/// In-memory storage. Clones share state, and the whole store can be switched
/// off to behave like a storage area that rejects every call.
#[derive(Debug, Clone)]
pub struct MemoryStorage {
    entries: Arc<Mutex<HashMap<String, String>>>,
    available: Arc<AtomicBool>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self {
            entries: Arc::new(Mutex::new(HashMap::new())),
            available: Arc::new(AtomicBool::new(true)),
        }
    }

    pub fn unavailable() -> Self {
        let storage = Self::new();
        storage.set_available(false);
        storage
    }

    pub fn set_available(&self, available: bool) {
        self.available.store(available, Ordering::SeqCst);
    }

    fn entries(&self) -> HeadlinesResult<std::sync::MutexGuard<'_, HashMap<String, String>>> {
        if !self.available.load(Ordering::SeqCst) {
            return Err(HeadlinesError::Storage("storage unavailable".to_string()));
        }
        self.entries
            .lock()
            .map_err(|_| HeadlinesError::Storage("storage lock poisoned".to_string()))
    }
}

impl Default for MemoryStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get(&self, key: &str) -> HeadlinesResult<Option<String>> {
        Ok(self.entries()?.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> HeadlinesResult<()> {
        self.entries()?.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> HeadlinesResult<()> {
        self.entries()?.remove(key);
        Ok(())
    }
}
