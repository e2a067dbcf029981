//! Predicates: one operation paired with its payload.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::criteria::scalar::Scalar;
use crate::error::{CriteriaError, Result};

/// The kind of match a predicate expresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Operation {
    /// Exact term match.
    Equals,
    /// Wildcard on both sides of the value.
    Contains,
    /// Trailing wildcard.
    StartsWith,
    /// Leading wildcard.
    EndsWith,
    /// Raw query syntax, emitted verbatim.
    Expression,
    /// Range with independently inclusive or exclusive bounds.
    Between,
}

impl Operation {
    /// All operations, in declaration order.
    pub const ALL: [Operation; 6] = [
        Operation::Equals,
        Operation::Contains,
        Operation::StartsWith,
        Operation::EndsWith,
        Operation::Expression,
        Operation::Between,
    ];

    /// Wire name of this operation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::Equals => "EQUALS",
            Operation::Contains => "CONTAINS",
            Operation::StartsWith => "STARTS_WITH",
            Operation::EndsWith => "ENDS_WITH",
            Operation::Expression => "EXPRESSION",
            Operation::Between => "BETWEEN",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Payload of a [`Operation::Between`] predicate.
///
/// A `None` bound leaves that side open; it compiles to `*` regardless of
/// its inclusive flag.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Range {
    /// Lower bound, `None` for unbounded.
    #[serde(default)]
    pub lower: Option<Scalar>,
    /// Upper bound, `None` for unbounded.
    #[serde(default)]
    pub upper: Option<Scalar>,
    /// Whether the lower bound itself matches.
    pub include_lower: bool,
    /// Whether the upper bound itself matches.
    pub include_upper: bool,
}

impl Range {
    /// Create a range with explicit bound flags.
    pub fn new(
        lower: Option<Scalar>,
        upper: Option<Scalar>,
        include_lower: bool,
        include_upper: bool,
    ) -> Self {
        Range {
            lower,
            upper,
            include_lower,
            include_upper,
        }
    }

    /// Create a range with both bounds inclusive.
    pub fn inclusive(lower: Option<Scalar>, upper: Option<Scalar>) -> Self {
        Self::new(lower, upper, true, true)
    }

    /// Create a range with both bounds exclusive.
    pub fn exclusive(lower: Option<Scalar>, upper: Option<Scalar>) -> Self {
        Self::new(lower, upper, false, false)
    }

    /// Range matching values greater than or equal to `value`.
    pub fn at_least<V: Into<Scalar>>(value: V) -> Self {
        Self::new(Some(value.into()), None, true, true)
    }

    /// Range matching values less than or equal to `value`.
    pub fn at_most<V: Into<Scalar>>(value: V) -> Self {
        Self::new(None, Some(value.into()), true, true)
    }
}

/// Untyped predicate payload, used when the operation is only known at runtime.
#[derive(Debug, Clone, PartialEq)]
pub enum PredicateValue {
    /// A single scalar.
    Scalar(Scalar),
    /// A range payload.
    Range(Range),
}

impl From<Scalar> for PredicateValue {
    fn from(value: Scalar) -> Self {
        PredicateValue::Scalar(value)
    }
}

impl From<Range> for PredicateValue {
    fn from(value: Range) -> Self {
        PredicateValue::Range(value)
    }
}

/// One test within a criteria.
///
/// Each variant carries exactly the payload its operation needs, so a
/// predicate with a mismatched payload cannot be constructed.
///
/// `Expression` content is emitted without any escaping. It must already be
/// valid, trusted query syntax; never route untrusted input through it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(
    tag = "operation",
    content = "value",
    rename_all = "SCREAMING_SNAKE_CASE"
)]
pub enum Predicate {
    Equals(Scalar),
    Contains(Scalar),
    StartsWith(Scalar),
    EndsWith(Scalar),
    Expression(Scalar),
    Between(Range),
}

impl Predicate {
    /// Build a predicate from an operation and an untyped payload.
    ///
    /// Fails with [`CriteriaError::MalformedPredicate`] when the payload shape
    /// does not match the operation.
    pub fn new<V: Into<PredicateValue>>(operation: Operation, value: V) -> Result<Self> {
        match (operation, value.into()) {
            (Operation::Equals, PredicateValue::Scalar(v)) => Ok(Predicate::Equals(v)),
            (Operation::Contains, PredicateValue::Scalar(v)) => Ok(Predicate::Contains(v)),
            (Operation::StartsWith, PredicateValue::Scalar(v)) => Ok(Predicate::StartsWith(v)),
            (Operation::EndsWith, PredicateValue::Scalar(v)) => Ok(Predicate::EndsWith(v)),
            (Operation::Expression, PredicateValue::Scalar(v)) => Ok(Predicate::Expression(v)),
            (Operation::Between, PredicateValue::Range(r)) => Ok(Predicate::Between(r)),
            (Operation::Between, PredicateValue::Scalar(_)) => {
                Err(CriteriaError::malformed(operation, "a range payload"))
            }
            (_, PredicateValue::Range(_)) => {
                Err(CriteriaError::malformed(operation, "a single scalar"))
            }
        }
    }

    /// The operation this predicate performs.
    pub fn operation(&self) -> Operation {
        match self {
            Predicate::Equals(_) => Operation::Equals,
            Predicate::Contains(_) => Operation::Contains,
            Predicate::StartsWith(_) => Operation::StartsWith,
            Predicate::EndsWith(_) => Operation::EndsWith,
            Predicate::Expression(_) => Operation::Expression,
            Predicate::Between(_) => Operation::Between,
        }
    }

    /// The scalar payload, for every operation except `Between`.
    pub fn scalar(&self) -> Option<&Scalar> {
        match self {
            Predicate::Equals(v)
            | Predicate::Contains(v)
            | Predicate::StartsWith(v)
            | Predicate::EndsWith(v)
            | Predicate::Expression(v) => Some(v),
            Predicate::Between(_) => None,
        }
    }

    /// The range payload of a `Between` predicate.
    pub fn range(&self) -> Option<&Range> {
        match self {
            Predicate::Between(r) => Some(r),
            _ => None,
        }
    }

    /// The payload as an untyped value.
    pub fn value(&self) -> PredicateValue {
        match self {
            Predicate::Equals(v)
            | Predicate::Contains(v)
            | Predicate::StartsWith(v)
            | Predicate::EndsWith(v)
            | Predicate::Expression(v) => PredicateValue::Scalar(v.clone()),
            Predicate::Between(r) => PredicateValue::Range(r.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_matching_shapes() {
        let p = Predicate::new(Operation::Equals, Scalar::from("foo")).unwrap();
        assert_eq!(p, Predicate::Equals(Scalar::from("foo")));
        assert_eq!(p.operation(), Operation::Equals);

        let range = Range::new(Some(Scalar::from(1)), Some(Scalar::from(10)), true, false);
        let p = Predicate::new(Operation::Between, range.clone()).unwrap();
        assert_eq!(p.range(), Some(&range));
        assert!(p.scalar().is_none());
    }

    #[test]
    fn test_new_rejects_scalar_for_between() {
        let result = Predicate::new(Operation::Between, Scalar::from(5));
        match result {
            Err(CriteriaError::MalformedPredicate { operation, .. }) => {
                assert_eq!(operation, Operation::Between);
            }
            other => panic!("Expected MalformedPredicate, got {other:?}"),
        }
    }

    #[test]
    fn test_new_rejects_range_for_scalar_operations() {
        for operation in Operation::ALL {
            if operation == Operation::Between {
                continue;
            }
            let result = Predicate::new(operation, Range::inclusive(None, None));
            assert!(result.is_err(), "{operation} accepted a range");
        }
    }

    #[test]
    fn test_value_round_trips_through_new() {
        for predicate in [
            Predicate::Contains(Scalar::from("abc")),
            Predicate::Between(Range::at_least(3)),
        ] {
            let rebuilt = Predicate::new(predicate.operation(), predicate.value()).unwrap();
            assert_eq!(rebuilt, predicate);
        }
    }

    #[test]
    fn test_serde_shape() {
        let json = r#"{"operation":"BETWEEN","value":{"lower":1,"upper":null,"include_lower":true,"include_upper":false}}"#;
        let p: Predicate = serde_json::from_str(json).unwrap();
        assert_eq!(
            p,
            Predicate::Between(Range::new(Some(Scalar::from(1)), None, true, false))
        );

        let p: Predicate = serde_json::from_str(r#"{"operation":"STARTS_WITH","value":"ab"}"#).unwrap();
        assert_eq!(p, Predicate::StartsWith(Scalar::from("ab")));
    }

    #[test]
    fn test_serde_rejects_mismatched_payload() {
        let json = r#"{"operation":"BETWEEN","value":5}"#;
        assert!(serde_json::from_str::<Predicate>(json).is_err());

        let json = r#"{"operation":"BETWEEN","value":{"lower":1,"upper":2}}"#;
        assert!(serde_json::from_str::<Predicate>(json).is_err());
    }

    #[test]
    fn test_operation_display() {
        assert_eq!(Operation::StartsWith.to_string(), "STARTS_WITH");
        assert_eq!(Operation::Between.to_string(), "BETWEEN");
    }
}
