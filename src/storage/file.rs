//! File-backed store: load/save with atomic writes

use std::collections::BTreeMap;
use std::fs::{self, File};
use std::io::{ErrorKind, Read};
use std::path::{Path, PathBuf};

use super::{StorageError, Store};
use crate::utils::validate_file_size;

pub const STORAGE_FILENAME: &str = "storage.json";

/// Key-value store persisted as a single JSON object file
///
/// Every operation re-reads the file, so external edits are picked up and there is
/// no cache to invalidate. A file that is not a JSON object of strings is treated as
/// empty (and replaced on the next write).
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// Open the store in `data_dir`, creating the directory if missing
    pub fn open(data_dir: &Path) -> Result<Self, StorageError> {
        if !data_dir.exists() {
            fs::create_dir_all(data_dir)
                .map_err(|e| StorageError::unavailable("Failed to create data directory", e))?;
        }

        Ok(Self { path: data_dir.join(STORAGE_FILENAME) })
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_entries(&self) -> Result<BTreeMap<String, String>, StorageError> {
        let mut file = match File::open(&self.path) {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(e) => return Err(StorageError::unavailable("Failed to open storage file", e)),
        };

        // Size check on the open handle avoids a TOCTOU race with the read below
        validate_file_size(&file, &self.path)
            .map_err(|e| StorageError::unavailable("Refusing to load storage file", e))?;

        let mut bytes = Vec::new();
        file.read_to_end(&mut bytes)
            .map_err(|e| StorageError::unavailable("Failed to read storage file", e))?;

        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(BTreeMap::new());
        }

        match serde_json::from_slice(&bytes) {
            Ok(entries) => Ok(entries),
            Err(e) => {
                tracing::warn!(
                    "Ignoring corrupt storage file {}: {}",
                    self.path.display(),
                    e
                );
                Ok(BTreeMap::new())
            }
        }
    }

    fn write_entries(&self, entries: &BTreeMap<String, String>) -> Result<(), StorageError> {
        // Write atomically (temp file + rename)
        let temp_path = self.path.with_file_name(format!("{}.tmp", STORAGE_FILENAME));
        let json = serde_json::to_string_pretty(entries)
            .map_err(|e| StorageError::unavailable("Failed to serialize storage", e))?;

        fs::write(&temp_path, json)
            .map_err(|e| StorageError::unavailable("Failed to write storage temp file", e))?;
        fs::rename(&temp_path, &self.path)
            .map_err(|e| StorageError::unavailable("Failed to rename storage temp file", e))?;

        Ok(())
    }
}

impl Store for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let mut entries = self.read_entries()?;
        Ok(entries.remove(key))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut entries = self.read_entries()?;
        entries.insert(key.to_string(), value.to_string());
        self.write_entries(&entries)?;
        tracing::debug!("Stored {} ({} bytes) in {}", key, value.len(), self.path.display());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        let mut entries = self.read_entries()?;
        if entries.remove(key).is_some() {
            self.write_entries(&entries)?;
            tracing::debug!("Removed {} from {}", key, self.path.display());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    fn open_temp_store() -> (TempDir, FileStore) {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let store = FileStore::open(dir.path()).expect("Failed to open store");
        (dir, store)
    }

    #[test]
    fn test_open_creates_missing_directory() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("a").join("b");

        let store = FileStore::open(&nested).unwrap();
        assert!(nested.is_dir());
        assert_eq!(store.path(), nested.join(STORAGE_FILENAME));
    }

    #[test]
    fn test_get_without_file() {
        let (_dir, store) = open_temp_store();
        assert_eq!(store.get("history").unwrap(), None);
        assert!(!store.path().exists());
    }

    #[test]
    fn test_set_persists_across_instances() {
        let (dir, mut store) = open_temp_store();
        store.set("isDarkTheme", "true").unwrap();
        store.set("history", "[]").unwrap();

        let reopened = FileStore::open(dir.path()).unwrap();
        assert_eq!(reopened.get("isDarkTheme").unwrap().as_deref(), Some("true"));
        assert_eq!(reopened.get("history").unwrap().as_deref(), Some("[]"));
    }

    #[test]
    fn test_file_layout_is_object_of_strings() {
        let (_dir, mut store) = open_temp_store();
        store.set("history", r#"[{"base":"x"}]"#).unwrap();

        let contents = fs::read_to_string(store.path()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&contents).unwrap();
        assert_eq!(value["history"], serde_json::json!(r#"[{"base":"x"}]"#));
    }

    #[test]
    fn test_remove_keeps_other_keys() {
        let (_dir, mut store) = open_temp_store();
        store.set("history", "[]").unwrap();
        store.set("isDarkTheme", "false").unwrap();

        store.remove("history").unwrap();
        assert_eq!(store.get("history").unwrap(), None);
        assert_eq!(store.get("isDarkTheme").unwrap().as_deref(), Some("false"));
    }

    #[test]
    fn test_remove_absent_key_does_not_create_file() {
        let (_dir, mut store) = open_temp_store();
        store.remove("history").unwrap();
        assert!(!store.path().exists());
    }

    #[test]
    fn test_no_temp_file_left_behind() {
        let (dir, mut store) = open_temp_store();
        store.set("k", "v").unwrap();
        assert!(!dir.path().join(format!("{}.tmp", STORAGE_FILENAME)).exists());
    }

    #[test]
    fn test_corrupt_file_reads_as_empty() {
        let (_dir, mut store) = open_temp_store();
        fs::write(store.path(), "{ this is not json").unwrap();
        assert_eq!(store.get("history").unwrap(), None);

        // Next write replaces the corrupt file
        store.set("history", "[]").unwrap();
        assert_eq!(store.get("history").unwrap().as_deref(), Some("[]"));
    }

    #[test]
    fn test_non_string_values_read_as_empty() {
        let (_dir, store) = open_temp_store();
        fs::write(store.path(), r#"{"history": [1, 2, 3]}"#).unwrap();
        assert_eq!(store.get("history").unwrap(), None);
    }

    #[test]
    fn test_whitespace_file_reads_as_empty() {
        let (_dir, store) = open_temp_store();
        fs::write(store.path(), "  \n").unwrap();
        assert_eq!(store.get("history").unwrap(), None);
    }

    #[test]
    fn test_oversized_file_is_unavailable() {
        let (_dir, store) = open_temp_store();
        let file = File::create(store.path()).unwrap();
        file.set_len(10 * 1024 * 1024 + 1).unwrap();

        let result = store.get("history");
        assert!(matches!(result, Err(StorageError::Unavailable(_))));
        assert!(result.unwrap_err().to_string().contains("too large"));
    }

    #[cfg(unix)]
    #[test]
    fn test_unwritable_directory_is_unavailable() {
        use std::os::unix::fs::PermissionsExt;

        let (dir, mut store) = open_temp_store();
        fs::set_permissions(dir.path(), fs::Permissions::from_mode(0o500)).unwrap();

        let result = store.set("history", "[]");

        fs::set_permissions(dir.path(), fs::Permissions::from_mode(0o700)).unwrap();

        // Root ignores directory permissions, so only assert when the write was refused
        if let Err(e) = result {
            assert!(matches!(e, StorageError::Unavailable(_)));
        }
    }
}
