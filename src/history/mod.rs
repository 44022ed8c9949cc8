//! Locally persisted search history
//!
//! A single storage slot (`history`) holds a JSON array of [`SearchCriteria`] records.
//! Adding is deduplicated by structural equality over all six fields, so resubmitting
//! the same form does not grow the list. Reading never fails: missing, unreadable or
//! corrupt data is logged and treated as an empty history.
//!
//! [`SearchCriteria`]: crate::models::SearchCriteria

pub mod store;

pub use store::{HISTORY_KEY, HistoryStore};
