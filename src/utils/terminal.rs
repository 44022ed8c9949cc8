//! Terminal output sanitization
//!
//! History records come from a file anyone can edit, so their text is untrusted when it
//! reaches the terminal. ANSI escape sequences embedded in a keyword could clear the
//! screen, move the cursor or recolor later output. Anything printed from stored
//! history goes through [`sanitize_query_line`].

/// Strips ANSI CSI escape sequences and control characters from a string
///
/// Tab, newline and carriage return are kept.
///
/// # Examples
///
/// ```
/// use search_query_builder::utils::terminal::strip_ansi_codes;
///
/// assert_eq!(strip_ansi_codes("\x1b[31mcats\x1b[0m"), "cats");
/// ```
pub fn strip_ansi_codes(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        // CSI sequence: ESC [ params... final letter
        if ch == '\x1b' && chars.peek() == Some(&'[') {
            chars.next();
            for next_ch in chars.by_ref() {
                if next_ch.is_ascii_alphabetic() {
                    break;
                }
            }
            continue;
        }

        if ch.is_control() && !matches!(ch, '\t' | '\n' | '\r') {
            continue;
        }

        result.push(ch);
    }

    result
}

/// Sanitize a query for one-line display: escape sequences removed, line breaks and tabs
/// turned into spaces
pub fn sanitize_query_line(text: &str) -> String {
    strip_ansi_codes(text)
        .chars()
        .map(|ch| if matches!(ch, '\t' | '\n' | '\r') { ' ' } else { ch })
        .collect()
}
