use crate::models::SearchCriteria;

/// Split a comma-separated phrase list into trimmed, non-empty phrases
///
/// # Examples
///
/// ```
/// use search_query_builder::query::split_phrases;
///
/// let phrases: Vec<&str> = split_phrases(" a, b ,,").collect();
/// assert_eq!(phrases, vec!["a", "b"]);
/// ```
pub fn split_phrases(list: &str) -> impl Iterator<Item = &str> {
    list.split(',').map(str::trim).filter(|phrase| !phrase.is_empty())
}

/// Render search criteria into the search engine's query grammar
///
/// Pieces are emitted in a fixed order, separated by single spaces:
/// 1. Scope operator (`allintitle:` etc.) unless terms may appear anywhere
/// 2. The keywords, verbatim
/// 3. Each exact-match phrase, double-quoted
/// 4. Each excluded phrase, as `-"phrase"`
/// 5. `site:domain` when a domain is set
/// 6. `filetype:code` when a file type is set
///
/// Phrases are not escaped; embedded quotes pass through as-is.
///
/// The keywords must be non-empty. Run [`SearchCriteria::validate`] first.
///
/// # Examples
///
/// ```
/// use search_query_builder::models::{SearchCriteria, TermsAppearing};
/// use search_query_builder::synthesize;
///
/// let criteria = SearchCriteria::new("cats").with_terms_appearing(TermsAppearing::Title);
/// assert_eq!(synthesize(&criteria), "allintitle: cats");
/// ```
pub fn synthesize(criteria: &SearchCriteria) -> String {
    debug_assert!(!criteria.base.is_empty(), "search criteria must contain keywords");

    let mut query = String::with_capacity(criteria.base.len() + 32);

    if let Some(operator) = criteria.terms_appearing.operator() {
        query.push_str(operator);
        query.push(' ');
    }

    query.push_str(&criteria.base);

    for phrase in split_phrases(&criteria.exact_match) {
        query.push_str(" \"");
        query.push_str(phrase);
        query.push('"');
    }

    for phrase in split_phrases(&criteria.exclude) {
        query.push_str(" -\"");
        query.push_str(phrase);
        query.push('"');
    }

    if !criteria.domain.is_empty() {
        query.push_str(" site:");
        query.push_str(&criteria.domain);
    }

    if let Some(code) = criteria.file_type.filter_code() {
        query.push_str(" filetype:");
        query.push_str(code);
    }

    query
}
