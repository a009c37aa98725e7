//! Generated property values.
//!
//! `GraphValue` is what ends up on a node or an edge. Generators that produce
//! richer types (date/times) normalize to one of these variants before the
//! value leaves the generator.

use serde::{Deserialize, Serialize};

/// A concrete property value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum GraphValue {
    /// Null value
    Null,

    /// Boolean value
    Bool(bool),

    /// 64-bit signed integer
    Int(i64),

    /// 64-bit floating point
    Float(f64),

    /// String value
    String(String),

    /// List of values
    List(Vec<GraphValue>),
}

impl GraphValue {
    /// Check if this value is null.
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Try to get this value as a boolean.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Try to get this value as an i64.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Try to get this value as an f64. Integers widen.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Float(f) => Some(*f),
            Self::Int(i) => Some(*i as f64),
            _ => None,
        }
    }

    /// Try to get this value as a string reference.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }
}

impl From<bool> for GraphValue {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<i64> for GraphValue {
    fn from(i: i64) -> Self {
        Self::Int(i)
    }
}

impl From<f64> for GraphValue {
    fn from(f: f64) -> Self {
        Self::Float(f)
    }
}

impl From<String> for GraphValue {
    fn from(s: String) -> Self {
        Self::String(s)
    }
}

impl From<&str> for GraphValue {
    fn from(s: &str) -> Self {
        Self::String(s.to_string())
    }
}

impl From<&serde_json::Value> for GraphValue {
    fn from(value: &serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Self::Null,
            serde_json::Value::Bool(b) => Self::Bool(*b),
            serde_json::Value::Number(n) => match n.as_i64() {
                Some(i) => Self::Int(i),
                None => Self::Float(n.as_f64().unwrap_or_default()),
            },
            serde_json::Value::String(s) => Self::String(s.clone()),
            serde_json::Value::Array(items) => Self::List(items.iter().map(Self::from).collect()),
            // Nested maps are not node-property material; keep them as text.
            serde_json::Value::Object(_) => Self::String(value.to_string()),
        }
    }
}
