use std::collections::HashMap;

use super::{StorageError, Store};

/// In-memory store, optionally refusing every operation to simulate an unavailable backend
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
    unavailable: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store whose reads and writes all fail with [`StorageError::Unavailable`]
    pub fn unavailable() -> Self {
        Self { entries: HashMap::new(), unavailable: true }
    }

    /// Seed a raw value (test helper for corrupt or legacy data)
    pub fn with_entry(mut self, key: &str, value: &str) -> Self {
        self.entries.insert(key.to_string(), value.to_string());
        self
    }

    pub fn set_unavailable(&mut self, unavailable: bool) {
        self.unavailable = unavailable;
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    fn check_available(&self) -> Result<(), StorageError> {
        if self.unavailable {
            return Err(StorageError::Unavailable("in-memory store is disabled".to_string()));
        }
        Ok(())
    }
}

impl Store for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.check_available()?;
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.check_available()?;
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        self.check_available()?;
        self.entries.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_absent_key() {
        let store = MemoryStore::new();
        assert_eq!(store.get("history").unwrap(), None);
    }

    #[test]
    fn test_set_then_get() {
        let mut store = MemoryStore::new();
        store.set("isDarkTheme", "true").unwrap();
        assert_eq!(store.get("isDarkTheme").unwrap().as_deref(), Some("true"));

        store.set("isDarkTheme", "false").unwrap();
        assert_eq!(store.get("isDarkTheme").unwrap().as_deref(), Some("false"));
    }

    #[test]
    fn test_remove_key() {
        let mut store = MemoryStore::new().with_entry("history", "[]");
        assert!(store.contains_key("history"));

        store.remove("history").unwrap();
        assert!(!store.contains_key("history"));

        // Removing again is fine
        assert!(store.remove("history").is_ok());
    }

    #[test]
    fn test_unavailable_store_fails_every_operation() {
        let mut store = MemoryStore::unavailable();
        assert!(matches!(store.get("k"), Err(StorageError::Unavailable(_))));
        assert!(matches!(store.set("k", "v"), Err(StorageError::Unavailable(_))));
        assert!(matches!(store.remove("k"), Err(StorageError::Unavailable(_))));
    }

    #[test]
    fn test_store_can_recover_availability() {
        let mut store = MemoryStore::unavailable();
        store.set_unavailable(false);
        assert!(store.set("k", "v").is_ok());
    }
}
