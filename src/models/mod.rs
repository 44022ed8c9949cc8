//! Data models for search criteria and their persisted history records.
//!
//! - [`SearchCriteria`] - Structured form input, also the stored history record
//! - [`TermsAppearing`] - Where the keywords must appear (title, text, URL, links)
//! - [`FileType`] - File format restriction
//! - [`ValidationError`] - Form input rejected before synthesis
//!
//! These models use serde for JSON (de)serialization with lenient deserializers for
//! optional fields in the `parsers::deserializers` module.

pub mod criteria;

pub use criteria::{FileType, SearchCriteria, TermsAppearing, ValidationError};
