//! Polymorphic values
//!
//! Attribute maps and observed values hold data whose shape is decided by
//! whoever writes them. Both are modelled as closed sum types over the
//! shapes the graph supports.

use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;

/// Extensible metadata attached to entities and relationships
pub type Attributes = BTreeMap<String, AttributeValue>;

/// Treat an explicit `null` like a missing field
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// A single attribute value
///
/// Serialized untagged, so an attribute map reads like plain JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttributeValue {
    /// Explicit absence
    Null,
    /// Boolean flag
    Bool(bool),
    /// Whole number
    Integer(i64),
    /// Real number
    Number(f64),
    /// Free text
    Text(String),
    /// Ordered list of values
    List(Vec<AttributeValue>),
    /// Nested mapping
    Map(BTreeMap<String, AttributeValue>),
}

impl AttributeValue {
    /// Get the text, if this is a text value
    pub fn as_str(&self) -> Option<&str> {
        match self {
            AttributeValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Get a numeric view of integer and real values
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            AttributeValue::Integer(i) => Some(*i as f64),
            AttributeValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Get the flag, if this is a boolean value
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            AttributeValue::Bool(b) => Some(*b),
            _ => None,
        }
    }
}

impl From<&str> for AttributeValue {
    fn from(s: &str) -> Self {
        AttributeValue::Text(s.to_string())
    }
}

impl From<String> for AttributeValue {
    fn from(s: String) -> Self {
        AttributeValue::Text(s)
    }
}

impl From<i64> for AttributeValue {
    fn from(i: i64) -> Self {
        AttributeValue::Integer(i)
    }
}

impl From<f64> for AttributeValue {
    fn from(n: f64) -> Self {
        AttributeValue::Number(n)
    }
}

impl From<bool> for AttributeValue {
    fn from(b: bool) -> Self {
        AttributeValue::Bool(b)
    }
}

impl From<serde_json::Value> for AttributeValue {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => AttributeValue::Null,
            serde_json::Value::Bool(b) => AttributeValue::Bool(b),
            serde_json::Value::Number(n) => match n.as_i64() {
                Some(i) => AttributeValue::Integer(i),
                // u64 beyond i64::MAX and reals both land here
                None => AttributeValue::Number(n.as_f64().unwrap_or(f64::NAN)),
            },
            serde_json::Value::String(s) => AttributeValue::Text(s),
            serde_json::Value::Array(items) => {
                AttributeValue::List(items.into_iter().map(Into::into).collect())
            }
            serde_json::Value::Object(fields) => AttributeValue::Map(
                fields.into_iter().map(|(k, v)| (k, v.into())).collect(),
            ),
        }
    }
}

/// Inclusive numeric range, written as a two-element array `[low, high]`
///
/// Bounds are stored as given; `low > high` is not rejected.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "(f64, f64)", into = "(f64, f64)")]
pub struct ValueRange {
    /// Lower bound
    pub low: f64,
    /// Upper bound
    pub high: f64,
}

impl ValueRange {
    /// Create a new range
    pub fn new(low: f64, high: f64) -> Self {
        Self { low, high }
    }

    /// Midpoint of the range
    pub fn midpoint(&self) -> f64 {
        (self.low + self.high) / 2.0
    }

    /// Check if the range contains a value
    pub fn contains(&self, value: f64) -> bool {
        value >= self.low && value <= self.high
    }
}

impl From<(f64, f64)> for ValueRange {
    fn from((low, high): (f64, f64)) -> Self {
        Self { low, high }
    }
}

impl From<ValueRange> for (f64, f64) {
    fn from(range: ValueRange) -> Self {
        (range.low, range.high)
    }
}

/// The value recorded by a [`SemanticLink`](crate::SemanticLink)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ObservedValue {
    /// A measured number
    Number(f64),
    /// A numeric range
    Range(ValueRange),
    /// A qualitative observation ("Positive", "Downgrade", ...)
    Text(String),
}

impl From<f64> for ObservedValue {
    fn from(n: f64) -> Self {
        ObservedValue::Number(n)
    }
}

impl From<&str> for ObservedValue {
    fn from(s: &str) -> Self {
        ObservedValue::Text(s.to_string())
    }
}

impl From<String> for ObservedValue {
    fn from(s: String) -> Self {
        ObservedValue::Text(s)
    }
}

impl From<ValueRange> for ObservedValue {
    fn from(range: ValueRange) -> Self {
        ObservedValue::Range(range)
    }
}
