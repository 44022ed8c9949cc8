//! Search Query Builder - Compose advanced Google search queries
//!
//! This library turns structured search criteria into a query string using the search
//! engine's operators, and keeps a deduplicated history of past criteria in a small
//! key-value store. It supports:
//!
//! - Synthesizing queries with scope operators, exact and excluded phrases, `site:` and
//!   `filetype:` filters
//! - Recording, listing and clearing search history with exact-duplicate suppression
//! - Persisting a dark/light theme preference next to the history
//! - Copying queries to the clipboard and opening them in the browser
//!
//! # Example
//!
//! ```
//! use search_query_builder::models::{FileType, SearchCriteria};
//! use search_query_builder::storage::MemoryStore;
//! use search_query_builder::{HistoryStore, synthesize};
//!
//! let criteria = SearchCriteria::new("cats")
//!     .with_exact_match("maine coon")
//!     .with_file_type(FileType::Pdf);
//! criteria.validate()?;
//! assert_eq!(synthesize(&criteria), r#"cats "maine coon" filetype:pdf"#);
//!
//! let mut history = HistoryStore::new(MemoryStore::new());
//! history.add(&criteria)?;
//! history.add(&criteria)?;
//! assert_eq!(history.list().len(), 1);
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod browser;
pub mod cli;
pub mod clipboard;
pub mod history;
pub mod models;
pub mod parsers;
pub mod query;
pub mod storage;
pub mod theme;
pub mod tui;
pub mod utils;

// Re-export commonly used types
pub use history::HistoryStore;
pub use models::{FileType, SearchCriteria, TermsAppearing, ValidationError};
pub use query::{search_url, synthesize};
pub use storage::{FileStore, MemoryStore, StorageError, Store};
