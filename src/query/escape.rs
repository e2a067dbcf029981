//! Escaping and quoting of values for the Lucene/Solr query grammar.
//!
//! Every scalar embedded in a clause, except raw expressions and open range
//! bounds, passes through [`sanitize`]: first each reserved token is
//! backslash-escaped, then the escaped text is wrapped in double quotes if it
//! contains a space or is exactly one of the boolean keywords.
//!
//! ```
//! use ckan_solr::query::escape::{escape, sanitize};
//!
//! assert_eq!(escape("a*b"), "a\\*b");
//! assert_eq!(sanitize("AND"), "\"AND\"");
//! assert_eq!(sanitize("big data"), "\"big data\"");
//! ```

/// Tokens with special meaning in the query grammar.
///
/// `&&` and `||` are reserved only as pairs; a lone `&` or `|` is literal.
pub const RESERVED_TOKENS: [&str; 18] = [
    "\"", "+", "-", "&&", "||", "!", "(", ")", "{", "}", "[", "]", "^", "~", "*", "?", ":", "\\",
];

/// Values that would be read as boolean operators if left unquoted.
pub const BOOLEAN_OPERATORS: [&str; 3] = ["NOT", "AND", "OR"];

/// Separator between terms; a value containing it must be quoted.
pub const VALUE_SEPARATOR: char = ' ';

const DOUBLE_QUOTE: char = '"';
const ESCAPE: char = '\\';

/// Backslash-escape every reserved token in `value`.
///
/// Single left-to-right pass, so escapes inserted here are never escaped
/// again within the same call. Not idempotent across calls.
pub fn escape(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len() + value.len() / 4);
    let mut chars = value.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '&' | '|' if chars.peek() == Some(&ch) => {
                chars.next();
                escaped.push(ESCAPE);
                escaped.push(ch);
                escaped.push(ESCAPE);
                escaped.push(ch);
            }
            '"' | '+' | '-' | '!' | '(' | ')' | '{' | '}' | '[' | ']' | '^' | '~' | '*' | '?'
            | ':' | '\\' => {
                escaped.push(ESCAPE);
                escaped.push(ch);
            }
            _ => escaped.push(ch),
        }
    }

    escaped
}

/// Check whether already-escaped text must be wrapped in quotes.
pub fn needs_quoting(escaped: &str) -> bool {
    escaped.contains(VALUE_SEPARATOR) || BOOLEAN_OPERATORS.contains(&escaped)
}

/// Wrap already-escaped text in double quotes when required.
pub fn quote(escaped: String) -> String {
    if needs_quoting(&escaped) {
        let mut quoted = String::with_capacity(escaped.len() + 2);
        quoted.push(DOUBLE_QUOTE);
        quoted.push_str(&escaped);
        quoted.push(DOUBLE_QUOTE);
        quoted
    } else {
        escaped
    }
}

/// Escape then quote a value.
pub fn sanitize(value: &str) -> String {
    quote(escape(value))
}
