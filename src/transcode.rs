//! Object ↔ array transcoding
//!
//! `object_to_array` turns `{"a": 1, "b": {"c": 2}}` into
//! `[["a", 1], ["b", [["c", 2]]]]`, recursing through objects only; arrays
//! are opaque leaves. `array_to_object` goes the other way for a list of
//! entries, picking the key at `key_index` and collapsing the rest into the
//! value.
//!
//! The two are not exact inverses. Round-trips hold for objects whose values
//! are scalars or further objects, without array-valued leaves.
//!
//! Inputs are trees: `serde_json::Value` cannot be cyclic.

use serde_json::{Map, Value};

use crate::error::{kind_name, Result, ShapekitError};

/// Convert an object into nested `[key, value]` pairs.
///
/// Arrays are returned untouched. Scalars and `null` are rejected with
/// [`ShapekitError::InvalidInput`].
pub fn object_to_array(value: &Value) -> Result<Value> {
    match value {
        Value::Object(_) | Value::Array(_) => Ok(transform(value)),
        other => Err(ShapekitError::InvalidInput {
            found: kind_name(other),
        }),
    }
}

fn transform(value: &Value) -> Value {
    match value {
        Value::Object(map) => Value::Array(
            map.iter()
                .map(|(key, inner)| Value::Array(vec![Value::String(key.clone()), transform(inner)]))
                .collect(),
        ),
        other => other.clone(),
    }
}

/// Convert a list of entries into an object.
///
/// Each entry must be an array. The element at `key_index` becomes the key;
/// a negative index, or one past the end of any entry, is
/// [`ShapekitError::IndexOutOfBounds`]. Keys are strings as-is, integral
/// numbers as integers, and anything else as compact JSON text. The remaining
/// elements become the value: one element unwraps, none gives `null`, more
/// stay an array. Repeated keys keep the last entry's value.
pub fn array_to_object(array: &Value, key_index: i64) -> Result<Value> {
    let Value::Array(entries) = array else {
        return Err(ShapekitError::NotAnArray {
            found: kind_name(array),
        });
    };

    let mut object = Map::with_capacity(entries.len());
    for (position, entry) in entries.iter().enumerate() {
        let Value::Array(items) = entry else {
            return Err(ShapekitError::NotAnArray {
                found: kind_name(entry),
            });
        };
        let Some(key_at) = usize::try_from(key_index).ok().filter(|&i| i < items.len()) else {
            return Err(ShapekitError::IndexOutOfBounds {
                index: key_index,
                len: items.len(),
                entry: position,
            });
        };

        let key = key_text(&items[key_at]);
        let mut rest: Vec<Value> = items
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != key_at)
            .map(|(_, item)| item.clone())
            .collect();

        let value = match rest.len() {
            0 => Value::Null,
            1 => rest.remove(0),
            _ => Value::Array(rest),
        };
        // an overwritten key keeps its first position
        object.insert(key, value);
    }
    Ok(Value::Object(object))
}

/// Largest float below which every integral value is exact
const MAX_EXACT_FLOAT: f64 = 9_007_199_254_740_992.0;

fn key_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        // 1.0 and 1 name the same key
        Value::Number(n) if n.is_f64() => match n.as_f64() {
            Some(f) if f == 0.0 => "0".to_string(),
            Some(f) if f.fract() == 0.0 && f.abs() < MAX_EXACT_FLOAT => format!("{:.0}", f),
            _ => n.to_string(),
        },
        other => other.to_string(),
    }
}
