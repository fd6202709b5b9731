//! Shared value types for flow graphs

use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};
use std::fmt;

/// Position of a node in a graph's label list
pub type NodeIndex = usize;

/// Monetary amount carried by an edge
///
/// Wraps the JSON number exactly as it appeared in the source document,
/// so integers stay integers when the graph is serialized again.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Amount(Number);

impl Amount {
    /// Extract an amount from a JSON value, if it is a number
    #[inline]
    #[must_use]
    pub fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Number(n) => Some(Self(n.clone())),
            _ => None,
        }
    }

    /// Create from a float; `None` for NaN or infinite values
    #[inline]
    #[must_use]
    pub fn from_f64(value: f64) -> Option<Self> {
        Number::from_f64(value).map(Self)
    }

    /// Amount as a float
    #[inline]
    #[must_use]
    pub fn as_f64(&self) -> f64 {
        self.0.as_f64().unwrap_or_default()
    }

    /// Check if the amount is below zero
    #[inline]
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.as_f64() < 0.0
    }

    /// Underlying JSON number
    #[inline]
    #[must_use]
    pub fn as_number(&self) -> &Number {
        &self.0
    }
}

impl From<i64> for Amount {
    fn from(value: i64) -> Self {
        Self(Number::from(value))
    }
}

impl From<u64> for Amount {
    fn from(value: u64) -> Self {
        Self(Number::from(value))
    }
}

impl From<i32> for Amount {
    fn from(value: i32) -> Self {
        Self(Number::from(value))
    }
}

impl From<Amount> for Value {
    fn from(value: Amount) -> Self {
        Value::Number(value.0)
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Name of the JSON kind of a value, for diagnostics
#[must_use]
pub fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
