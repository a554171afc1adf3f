//! Recursive type filter

use std::fmt;
use std::str::FromStr;

use serde_json::Value;

use crate::error::{Result, ShapekitError};

/// Runtime type of a non-array JSON value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeTag {
    /// `null` only; unlike a JavaScript `typeof` check, `Object` never matches it
    Null,
    Boolean,
    Number,
    String,
    Object,
}

impl TypeTag {
    /// Tag of `value`, or `None` for arrays, which are structure rather than content
    pub fn of(value: &Value) -> Option<Self> {
        match value {
            Value::Null => Some(TypeTag::Null),
            Value::Bool(_) => Some(TypeTag::Boolean),
            Value::Number(_) => Some(TypeTag::Number),
            Value::String(_) => Some(TypeTag::String),
            Value::Object(_) => Some(TypeTag::Object),
            Value::Array(_) => None,
        }
    }
}

impl FromStr for TypeTag {
    type Err = ShapekitError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "null" => Ok(TypeTag::Null),
            "boolean" | "bool" => Ok(TypeTag::Boolean),
            "number" => Ok(TypeTag::Number),
            "string" => Ok(TypeTag::String),
            "object" => Ok(TypeTag::Object),
            _ => Err(ShapekitError::UnknownTypeTag { tag: s.to_string() }),
        }
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TypeTag::Null => "null",
            TypeTag::Boolean => "boolean",
            TypeTag::Number => "number",
            TypeTag::String => "string",
            TypeTag::Object => "object",
        };
        f.write_str(name)
    }
}

/// Keep elements whose type is in `tags`, descending into nested arrays.
///
/// Nested arrays are always kept, even when nothing inside them matches, so
/// the nesting shape of the input survives.
pub fn filter_array(array: &[Value], tags: &[TypeTag]) -> Vec<Value> {
    array
        .iter()
        .filter_map(|item| match item {
            Value::Array(inner) => Some(Value::Array(filter_array(inner, tags))),
            other => TypeTag::of(other)
                .filter(|tag| tags.contains(tag))
                .map(|_| other.clone()),
        })
        .collect()
}
