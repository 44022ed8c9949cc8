use crate::models::SearchCriteria;
use crate::parsers::parse_history;
use crate::storage::{StorageError, Store};

/// Storage key holding the serialized history list
pub const HISTORY_KEY: &str = "history";

/// Ordered, deduplicated list of past search criteria kept in a [`Store`]
///
/// Records are kept in insertion order (oldest first). Only criteria are stored;
/// query strings are re-synthesized whenever they are displayed.
#[derive(Debug)]
pub struct HistoryStore<S: Store> {
    store: S,
}

impl<S: Store> HistoryStore<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    pub fn into_inner(self) -> S {
        self.store
    }

    /// Append criteria unless an identical record (all six fields equal) is already stored
    ///
    /// A corrupt history slot is overwritten with a fresh list holding just `criteria`.
    /// History that could not be read is never overwritten.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Unavailable`] if the current list cannot be read or the
    /// updated list cannot be written.
    pub fn add(&mut self, criteria: &SearchCriteria) -> Result<(), StorageError> {
        let mut records = self.load()?;

        if records.contains(criteria) {
            tracing::debug!("History already contains {:?}, skipping", criteria.base);
            return Ok(());
        }

        records.push(criteria.clone());
        let json = serde_json::to_string(&records)
            .map_err(|e| StorageError::unavailable("Failed to serialize history", e))?;
        self.store.set(HISTORY_KEY, &json)?;

        tracing::debug!("Added {:?} to history ({} records)", criteria.base, records.len());
        Ok(())
    }

    /// All stored criteria, oldest first
    ///
    /// Never fails: an absent, unreadable or malformed slot yields an empty list.
    pub fn list(&self) -> Vec<SearchCriteria> {
        self.load().unwrap_or_else(|e| {
            tracing::warn!("Could not read search history: {}", e);
            Vec::new()
        })
    }

    /// Stored records; an absent or corrupt slot is empty, an unreadable store is an error
    fn load(&self) -> Result<Vec<SearchCriteria>, StorageError> {
        let Some(raw) = self.store.get(HISTORY_KEY)? else {
            return Ok(Vec::new());
        };

        Ok(parse_history(&raw).unwrap_or_else(|e| {
            tracing::warn!("Ignoring stored history: {:#}", e);
            Vec::new()
        }))
    }

    /// Criteria at a zero-based position in [`HistoryStore::list`] order
    pub fn get(&self, index: usize) -> Option<SearchCriteria> {
        self.list().into_iter().nth(index)
    }

    pub fn len(&self) -> usize {
        self.list().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Remove the whole history slot
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Unavailable`] if the store refuses the removal.
    pub fn clear(&mut self) -> Result<(), StorageError> {
        self.store.remove(HISTORY_KEY)?;
        tracing::info!("Search history cleared");
        Ok(())
    }
}
