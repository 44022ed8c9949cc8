//! Shared test utilities for integration tests
#![allow(dead_code)]

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Builder for a throw-away data directory with a seeded `storage.json`
pub struct DataDirBuilder {
    temp_dir: TempDir,
    entries: BTreeMap<String, String>,
}

impl DataDirBuilder {
    /// Create a new builder with an empty data directory (no storage file)
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        Self { temp_dir, entries: BTreeMap::new() }
    }

    /// Seed the `history` slot with a raw JSON string
    pub fn with_raw_history(mut self, raw: &str) -> Self {
        self.entries.insert("history".to_string(), raw.to_string());
        self
    }

    /// Seed the `history` slot from record builders
    pub fn with_history(self, records: &[RecordBuilder]) -> Self {
        let list = records.iter().map(|r| r.to_json()).collect::<Vec<_>>().join(",");
        self.with_raw_history(&format!("[{}]", list))
    }

    /// Seed the `isDarkTheme` slot
    pub fn with_dark_theme(mut self, dark: bool) -> Self {
        self.entries.insert("isDarkTheme".to_string(), dark.to_string());
        self
    }

    /// Write the storage file verbatim instead of from seeded entries
    pub fn with_storage_file(self, content: &str) -> Self {
        fs::write(storage_path(self.temp_dir.path()), content)
            .expect("Failed to write storage file");
        self
    }

    /// Build and return the temp directory (consumes self)
    pub fn build(self) -> TempDir {
        if !self.entries.is_empty() {
            let json = serde_json::to_string_pretty(&self.entries).expect("Failed to encode");
            fs::write(storage_path(self.temp_dir.path()), json)
                .expect("Failed to write storage file");
        }
        self.temp_dir
    }
}

impl Default for DataDirBuilder {
    fn default() -> Self {
        Self::new()
    }
}

pub fn storage_path(data_dir: &Path) -> PathBuf {
    data_dir.join("storage.json")
}

/// Read back the raw value of one storage slot
pub fn read_slot(data_dir: &Path, key: &str) -> Option<String> {
    let content = fs::read_to_string(storage_path(data_dir)).ok()?;
    let entries: BTreeMap<String, String> = serde_json::from_str(&content).ok()?;
    entries.get(key).cloned()
}

/// Builder for one stored history record
pub struct RecordBuilder {
    base: String,
    exact_match: String,
    exclude: String,
    domain: String,
    terms_appearing: String,
    file_type: String,
}

impl RecordBuilder {
    pub fn new(base: &str) -> Self {
        Self {
            base: base.to_string(),
            exact_match: String::new(),
            exclude: String::new(),
            domain: String::new(),
            terms_appearing: "any".to_string(),
            file_type: "any".to_string(),
        }
    }

    pub fn exact_match(mut self, exact_match: &str) -> Self {
        self.exact_match = exact_match.to_string();
        self
    }

    pub fn exclude(mut self, exclude: &str) -> Self {
        self.exclude = exclude.to_string();
        self
    }

    pub fn domain(mut self, domain: &str) -> Self {
        self.domain = domain.to_string();
        self
    }

    pub fn terms_appearing(mut self, code: &str) -> Self {
        self.terms_appearing = code.to_string();
        self
    }

    pub fn file_type(mut self, code: &str) -> Self {
        self.file_type = code.to_string();
        self
    }

    pub fn to_json(&self) -> String {
        serde_json::json!({
            "base": self.base,
            "exactMatch": self.exact_match,
            "exclude": self.exclude,
            "domain": self.domain,
            "termsAppearing": self.terms_appearing,
            "fileType": self.file_type,
        })
        .to_string()
    }
}
