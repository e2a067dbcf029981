//! Criteria model.
//!
//! A [`Criteria`] describes a filter on one field: the field name, whether
//! the clause is negated, and an unordered set of [`Predicate`]s. Criteria
//! are plain values; the compiler in [`crate::query`] reads them and never
//! mutates them.
//!
//! # Core Components
//!
//! - [`Criteria`] - one filter clause on a single field
//! - [`predicate::Predicate`] - an operation together with its payload
//! - [`predicate::Range`] - the named-field payload of a `BETWEEN` predicate
//! - [`scalar::Scalar`] - the value type predicates test against
//!
//! # Examples
//!
//! ```
//! use ckan_solr::criteria::{Criteria, Range, Scalar};
//!
//! let criteria = Criteria::new("tags")
//!     .equals("economy")
//!     .starts_with("fin");
//! assert_eq!(criteria.field(), "tags");
//! assert_eq!(criteria.predicates().len(), 2);
//!
//! let range = Range::new(Some(Scalar::from(1)), Some(Scalar::from(10)), true, false);
//! let age = Criteria::new("age").between(range);
//! assert!(!age.is_negating());
//! ```

pub mod predicate;
pub mod scalar;

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

pub use self::predicate::{Operation, Predicate, PredicateValue, Range};
pub use self::scalar::Scalar;

/// Unordered, de-duplicated collection of predicates.
///
/// Iteration order is unspecified and may differ between equal sets.
pub type PredicateSet = HashSet<Predicate, ahash::RandomState>;

/// A filter clause on a single field.
///
/// Built through consuming builder methods; the field name is not validated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Criteria {
    /// The field the clause applies to.
    field: String,
    /// Whether matches are excluded rather than included.
    #[serde(default)]
    negating: bool,
    /// The tests OR'd together within the clause.
    #[serde(default)]
    predicates: PredicateSet,
}

impl Criteria {
    /// Create a criteria with no predicates on `field`.
    ///
    /// With no predicates added it compiles to "field has any value".
    pub fn new<S: Into<String>>(field: S) -> Self {
        Criteria {
            field: field.into(),
            negating: false,
            predicates: PredicateSet::default(),
        }
    }

    /// Create a criteria from its parts.
    pub fn from_parts<S, I>(field: S, negating: bool, predicates: I) -> Self
    where
        S: Into<String>,
        I: IntoIterator<Item = Predicate>,
    {
        Criteria {
            field: field.into(),
            negating,
            predicates: predicates.into_iter().collect(),
        }
    }

    /// Negate the clause.
    pub fn negate(self) -> Self {
        self.with_negating(true)
    }

    /// Set the negation flag explicitly.
    pub fn with_negating(mut self, negating: bool) -> Self {
        self.negating = negating;
        self
    }

    /// Add a predicate. Duplicates collapse.
    pub fn with_predicate(mut self, predicate: Predicate) -> Self {
        self.predicates.insert(predicate);
        self
    }

    /// Add an exact-match predicate.
    pub fn equals<V: Into<Scalar>>(self, value: V) -> Self {
        self.with_predicate(Predicate::Equals(value.into()))
    }

    /// Add a substring predicate.
    pub fn contains<V: Into<Scalar>>(self, value: V) -> Self {
        self.with_predicate(Predicate::Contains(value.into()))
    }

    /// Add a prefix predicate.
    pub fn starts_with<V: Into<Scalar>>(self, value: V) -> Self {
        self.with_predicate(Predicate::StartsWith(value.into()))
    }

    /// Add a suffix predicate.
    pub fn ends_with<V: Into<Scalar>>(self, value: V) -> Self {
        self.with_predicate(Predicate::EndsWith(value.into()))
    }

    /// Add a raw expression predicate.
    ///
    /// The expression is emitted verbatim and must be trusted, valid query
    /// syntax.
    pub fn expression<V: Into<Scalar>>(self, value: V) -> Self {
        self.with_predicate(Predicate::Expression(value.into()))
    }

    /// Add a range predicate.
    pub fn between(self, range: Range) -> Self {
        self.with_predicate(Predicate::Between(range))
    }

    /// Get the field name.
    pub fn field(&self) -> &str {
        &self.field
    }

    /// Check whether the clause is negated.
    pub fn is_negating(&self) -> bool {
        self.negating
    }

    /// Get the predicates.
    pub fn predicates(&self) -> &PredicateSet {
        &self.predicates
    }

    /// Check whether any predicate is present.
    pub fn has_predicates(&self) -> bool {
        !self.predicates.is_empty()
    }
}
