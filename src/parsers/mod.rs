//! JSON decoding for persisted search history
//!
//! # Error Handling Strategy
//!
//! This module follows a **graceful degradation** approach:
//!
//! - **Individual record failures**: Records that are not objects or have no keywords are
//!   logged and skipped, so one bad record does not wipe the whole history.
//!
//! - **Catastrophic failure detection**: If the stored value is not a JSON array, or more
//!   than 50% of its records fail to decode, the parser returns an error. Callers treat that
//!   as "no history" rather than surfacing it.
//!
//! - **Lenient fields**: Missing or `null` optional fields read as empty, and unknown selector
//!   codes read as `any`, via the custom deserializers in [`deserializers`].

pub mod deserializers;
pub mod history;

pub use history::parse_history;
