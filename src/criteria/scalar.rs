//! Scalar values carried by predicates.
//!
//! A [`Scalar`] is the single value a predicate tests against. The compiler
//! only ever needs its text representation, which follows the conventions
//! Solr expects for each type:
//!
//! - **Text** - verbatim
//! - **Integer** - decimal digits
//! - **Float** - shortest round-tripping decimal form
//! - **Boolean** - `true` / `false`
//! - **DateTime** - RFC 3339 in UTC with a `Z` suffix
//!
//! ```
//! use ckan_solr::criteria::scalar::Scalar;
//!
//! assert_eq!(Scalar::from("hello").to_string(), "hello");
//! assert_eq!(Scalar::from(42).to_string(), "42");
//! assert_eq!(Scalar::from(true).to_string(), "true");
//! ```

use std::fmt;
use std::hash::{Hash, Hasher};

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// A single value inside a predicate.
///
/// In serialized form scalars are untagged: JSON booleans, integers and
/// floats map to their variants and every JSON string is [`Scalar::Text`],
/// whatever it looks like. Timestamps are written as `{"datetime": "..."}`.
///
/// Integers must fit in an `i64`; larger JSON integers are rejected rather
/// than widened to a lossy float.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    /// Boolean value
    Boolean(bool),
    /// Integer value
    Integer(i64),
    /// Floating point value
    Float(#[serde(deserialize_with = "float_only::deserialize")] f64),
    /// DateTime value
    DateTime(#[serde(with = "tagged_datetime")] DateTime<Utc>),
    /// Text value
    Text(String),
}

/// `{"datetime": "<RFC 3339>"}`, the serialized form of [`Scalar::DateTime`].
mod tagged_datetime {
    use chrono::{DateTime, Utc};
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    #[derive(Serialize, Deserialize)]
    #[serde(deny_unknown_fields)]
    struct Tagged {
        datetime: DateTime<Utc>,
    }

    pub fn serialize<S>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        Tagged { datetime: *value }.serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Tagged::deserialize(deserializer).map(|tagged| tagged.datetime)
    }
}

/// Accepts JSON floats only, so out-of-range integers are not silently
/// rounded.
mod float_only {
    use std::fmt;

    use serde::Deserializer;
    use serde::de::{self, Visitor};

    struct FloatVisitor;

    impl Visitor<'_> for FloatVisitor {
        type Value = f64;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a floating point number")
        }

        fn visit_f64<E: de::Error>(self, value: f64) -> Result<f64, E> {
            Ok(value)
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
        deserializer.deserialize_f64(FloatVisitor)
    }
}

impl Scalar {
    /// Get the text if this is a text value.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Scalar::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Get the numeric string representation, if numeric.
    pub fn as_numeric(&self) -> Option<String> {
        match self {
            Scalar::Integer(i) => Some(i.to_string()),
            Scalar::Float(f) => Some(f.to_string()),
            _ => None,
        }
    }

    /// Get the boolean if this is a boolean value.
    pub fn as_boolean(&self) -> Option<bool> {
        match self {
            Scalar::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    /// Get the timestamp if this is a datetime value.
    pub fn as_datetime(&self) -> Option<&DateTime<Utc>> {
        match self {
            Scalar::DateTime(dt) => Some(dt),
            _ => None,
        }
    }

    fn discriminant(&self) -> u8 {
        match self {
            Scalar::Boolean(_) => 0,
            Scalar::Integer(_) => 1,
            Scalar::Float(_) => 2,
            Scalar::DateTime(_) => 3,
            Scalar::Text(_) => 4,
        }
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Boolean(b) => write!(f, "{b}"),
            Scalar::Integer(i) => write!(f, "{i}"),
            Scalar::Float(v) => write!(f, "{v}"),
            Scalar::DateTime(dt) => f.write_str(&dt.to_rfc3339_opts(SecondsFormat::AutoSi, true)),
            Scalar::Text(s) => f.write_str(s),
        }
    }
}

// Floats compare and hash by bit pattern so predicates can be set members.
impl PartialEq for Scalar {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Scalar::Boolean(a), Scalar::Boolean(b)) => a == b,
            (Scalar::Integer(a), Scalar::Integer(b)) => a == b,
            (Scalar::Float(a), Scalar::Float(b)) => a.to_bits() == b.to_bits(),
            (Scalar::DateTime(a), Scalar::DateTime(b)) => a == b,
            (Scalar::Text(a), Scalar::Text(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for Scalar {}

impl Hash for Scalar {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.discriminant().hash(state);
        match self {
            Scalar::Boolean(b) => b.hash(state),
            Scalar::Integer(i) => i.hash(state),
            Scalar::Float(v) => v.to_bits().hash(state),
            Scalar::DateTime(dt) => dt.hash(state),
            Scalar::Text(s) => s.hash(state),
        }
    }
}

impl From<&str> for Scalar {
    fn from(value: &str) -> Self {
        Scalar::Text(value.to_string())
    }
}

impl From<String> for Scalar {
    fn from(value: String) -> Self {
        Scalar::Text(value)
    }
}

impl From<i64> for Scalar {
    fn from(value: i64) -> Self {
        Scalar::Integer(value)
    }
}

impl From<i32> for Scalar {
    fn from(value: i32) -> Self {
        Scalar::Integer(value as i64)
    }
}

impl From<u32> for Scalar {
    fn from(value: u32) -> Self {
        Scalar::Integer(value as i64)
    }
}

impl From<f64> for Scalar {
    fn from(value: f64) -> Self {
        Scalar::Float(value)
    }
}

impl From<bool> for Scalar {
    fn from(value: bool) -> Self {
        Scalar::Boolean(value)
    }
}

impl From<DateTime<Utc>> for Scalar {
    fn from(value: DateTime<Utc>) -> Self {
        Scalar::DateTime(value)
    }
}
