//! Typed attribute values.
//!
//! `Value` is the container for authored attribute data exchanged between
//! a scene source and its cached prims. The set of carried types is
//! deliberately small: scalars, strings, and nested dictionaries cover the
//! needs of non-geometric prims.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A dictionary of named values, ordered by key.
///
/// Used for shader constant overrides, where stable iteration order keeps
/// uniform upload deterministic.
pub type ValueDict = BTreeMap<String, Value>;

/// A dynamically typed attribute value.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Value {
    /// Boolean flag
    Bool(bool),

    /// Signed integer (ordering keys, counts)
    Int(i32),

    /// Double-precision scalar
    Float(f64),

    /// Opaque string (resource locators, names)
    String(String),

    /// Nested dictionary of named values
    Dict(ValueDict),
}

impl Value {
    /// The boolean carried by this value, if it is one.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// The integer carried by this value, if it is one.
    pub fn as_int(&self) -> Option<i32> {
        match self {
            Value::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// The scalar carried by this value. Integers widen to `f64`.
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(f) => Some(*f),
            Value::Int(i) => Some(f64::from(*i)),
            _ => None,
        }
    }

    /// The string carried by this value, if it is one.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// The dictionary carried by this value, if it is one.
    pub fn as_dict(&self) -> Option<&ValueDict> {
        match self {
            Value::Dict(d) => Some(d),
            _ => None,
        }
    }

    /// Consume the value, returning the owned string if it is one.
    pub fn into_string(self) -> Option<String> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Consume the value, returning the owned dictionary if it is one.
    pub fn into_dict(self) -> Option<ValueDict> {
        match self {
            Value::Dict(d) => Some(d),
            _ => None,
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Value::Int(i)
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<ValueDict> for Value {
    fn from(d: ValueDict) -> Self {
        Value::Dict(d)
    }
}
