//! Failure records handed over by the validation engine.
//!
//! The engine reports one record per field that did not satisfy the request
//! schema. Records are immutable once constructed and are consumed by
//! reference; the translator never mutates its input.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One segment of a field path.
///
/// Paths mix object keys and array indices (e.g. `body.items.0.quantity`),
/// so a segment is either a string or an integer on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PathSegment {
    /// An object key (field name)
    Key(String),

    /// An array index
    Index(u64),
}

impl fmt::Display for PathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathSegment::Key(key) => f.write_str(key),
            PathSegment::Index(index) => write!(f, "{}", index),
        }
    }
}

impl From<&str> for PathSegment {
    fn from(key: &str) -> Self {
        PathSegment::Key(key.to_string())
    }
}

impl From<String> for PathSegment {
    fn from(key: String) -> Self {
        PathSegment::Key(key)
    }
}

impl From<u64> for PathSegment {
    fn from(index: u64) -> Self {
        PathSegment::Index(index)
    }
}

/// Category of a validation failure.
///
/// The canonical tags are kebab-case; the serde aliases accept the validation
/// engine's native tag strings so records can be deserialized straight from
/// its error payload. Tags with no matching variant deserialize to `Other`
/// and receive the per-route fallback message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ErrorKind {
    /// A required field was absent
    #[serde(alias = "value_error.missing")]
    MissingRequired,

    /// A string was shorter than the schema's minimum length
    #[serde(alias = "value_error.any_str.min_length")]
    StringTooShort,

    /// A string was not a valid email address
    #[serde(alias = "value_error.email")]
    InvalidEmail,

    /// A value could not be parsed as an integer
    #[serde(alias = "type_error.integer")]
    WrongTypeInteger,

    /// A number was below the schema's minimum
    #[serde(alias = "value_error.number.not_ge")]
    BelowMinimum,

    /// Any tag this crate has no specific rule for
    #[serde(other)]
    Other,
}

/// One reported validation problem.
///
/// The serde aliases (`loc`, `type`, `ctx`) match the validation engine's
/// native error representation, so a `Vec<ValidationFailure>` deserializes
/// directly from the engine's error list without reshaping.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationFailure {
    /// Ordered path to the offending field; only the last segment is used
    /// when formatting messages
    #[serde(alias = "loc")]
    pub field_path: Vec<PathSegment>,

    /// Category of the violation
    #[serde(alias = "type")]
    pub kind: ErrorKind,

    /// Constraint name to constraint value (e.g. `limit_value` -> 8).
    /// Absent on the wire for kinds that carry no constraint.
    #[serde(alias = "ctx", default)]
    pub context: HashMap<String, Value>,
}

impl ValidationFailure {
    /// Create a failure with an empty context.
    ///
    /// # Example
    /// ```
    /// use validation_translator::{ErrorKind, ValidationFailure};
    ///
    /// let failure = ValidationFailure::new(["body", "email"], ErrorKind::InvalidEmail);
    /// assert_eq!(failure.field().as_deref(), Some("email"));
    /// ```
    pub fn new<I, S>(field_path: I, kind: ErrorKind) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<PathSegment>,
    {
        Self {
            field_path: field_path.into_iter().map(Into::into).collect(),
            kind,
            context: HashMap::new(),
        }
    }

    /// Add a context entry (builder style).
    pub fn with_context(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.context.insert(name.into(), value.into());
        self
    }

    /// The offending field's name: the last path segment, rendered as text.
    ///
    /// # Returns
    /// `None` when the engine reported an empty path (the translator then
    /// falls back to its missing-value sentinel).
    pub fn field(&self) -> Option<String> {
        self.field_path.last().map(PathSegment::to_string)
    }
}
