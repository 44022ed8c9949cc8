//! Query-string synthesis: structured criteria in, search engine query grammar out.

pub mod synthesize;
pub mod url;

pub use synthesize::{split_phrases, synthesize};
pub use url::{SEARCH_ENDPOINT, search_url};
