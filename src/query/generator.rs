//! Fragment generators, one per [`Operation`](crate::criteria::Operation).
//!
//! | Operation     | Fragment                        |
//! |---------------|---------------------------------|
//! | `EQUALS`      | `value`                         |
//! | `CONTAINS`    | `*value*`                       |
//! | `STARTS_WITH` | `value*`                        |
//! | `ENDS_WITH`   | `*value`                        |
//! | `EXPRESSION`  | raw value, not escaped          |
//! | `BETWEEN`     | `[lo TO hi]`, `{lo TO hi}`, ... |

use crate::criteria::{Predicate, Range, Scalar};
use crate::query::escape::sanitize;

/// Wildcard token; also stands for an open range bound.
pub const WILDCARD: &str = "*";

/// Separator between the two bounds of a range.
pub const RANGE_OPERATOR: &str = " TO ";

/// Generate the fragment for a single predicate.
///
/// The match is the dispatch table: every operation has exactly one arm.
pub fn generate(predicate: &Predicate) -> String {
    match predicate {
        Predicate::Equals(value) => equals(value),
        Predicate::Contains(value) => contains(value),
        Predicate::StartsWith(value) => starts_with(value),
        Predicate::EndsWith(value) => ends_with(value),
        Predicate::Expression(value) => expression(value),
        Predicate::Between(range) => between(range),
    }
}

fn filter_value(value: &Scalar) -> String {
    sanitize(&value.to_string())
}

/// `value`
pub fn equals(value: &Scalar) -> String {
    filter_value(value)
}

/// `*value*`
pub fn contains(value: &Scalar) -> String {
    format!("{WILDCARD}{}{WILDCARD}", filter_value(value))
}

/// `value*`
pub fn starts_with(value: &Scalar) -> String {
    format!("{}{WILDCARD}", filter_value(value))
}

/// `*value`
pub fn ends_with(value: &Scalar) -> String {
    format!("{WILDCARD}{}", filter_value(value))
}

/// The value verbatim.
pub fn expression(value: &Scalar) -> String {
    value.to_string()
}

/// Range with independent inclusive/exclusive brackets per side.
pub fn between(range: &Range) -> String {
    let mut fragment = String::new();

    fragment.push(if range.include_lower { '[' } else { '{' });
    fragment.push_str(&bound(range.lower.as_ref()));
    fragment.push_str(RANGE_OPERATOR);
    fragment.push_str(&bound(range.upper.as_ref()));
    fragment.push(if range.include_upper { ']' } else { '}' });

    fragment
}

fn bound(value: Option<&Scalar>) -> String {
    match value {
        Some(value) => filter_value(value),
        None => WILDCARD.to_string(),
    }
}
