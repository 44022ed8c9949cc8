use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

/// Search endpoint the generated query is appended to
pub const SEARCH_ENDPOINT: &str = "https://www.google.com/search?q=";

// Characters left unescaped in a query component (same set as encodeURIComponent)
const QUERY_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Build the search URL for a query string
///
/// # Examples
///
/// ```
/// use search_query_builder::query::search_url;
///
/// assert_eq!(
///     search_url("x site:example.com"),
///     "https://www.google.com/search?q=x%20site%3Aexample.com"
/// );
/// ```
pub fn search_url(query: &str) -> String {
    format!("{}{}", SEARCH_ENDPOINT, utf8_percent_encode(query, QUERY_ENCODE_SET))
}
