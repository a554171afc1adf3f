//! Object walker

use serde_json::{Map, Value};

/// Call `callback(value, key)` once per key of `obj`, in insertion order.
///
/// Nested objects are passed as values, not walked.
pub fn for_each_in_object<F>(obj: &Map<String, Value>, mut callback: F)
where
    F: FnMut(&Value, &str),
{
    for (key, value) in obj {
        callback(value, key);
    }
}
