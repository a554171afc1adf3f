//! Order-preserving duplicate removal

use serde_json::Value;

/// Strict value equality.
///
/// Plain types use `==`. JSON numbers compare by numeric value, so `1` and
/// `1.0` are the same value even though `serde_json` stores them differently.
pub trait SameValue {
    fn same_value(&self, other: &Self) -> bool;
}

macro_rules! same_value_by_eq {
    ($($ty:ty),* $(,)?) => {
        $(
            impl SameValue for $ty {
                fn same_value(&self, other: &Self) -> bool {
                    self == other
                }
            }
        )*
    };
}

same_value_by_eq!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, bool, char, String,
    &str,
);

impl SameValue for Value {
    fn same_value(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Number(a), Value::Number(b)) => {
                if let (Some(a), Some(b)) = (a.as_i64(), b.as_i64()) {
                    return a == b;
                }
                if let (Some(a), Some(b)) = (a.as_u64(), b.as_u64()) {
                    return a == b;
                }
                a.as_f64() == b.as_f64()
            }
            (Value::Array(a), Value::Array(b)) => {
                a.len() == b.len() && a.iter().zip(b).all(|(x, y)| x.same_value(y))
            }
            (Value::Object(a), Value::Object(b)) => {
                a.len() == b.len()
                    && a.iter()
                        .all(|(key, x)| b.get(key).is_some_and(|y| x.same_value(y)))
            }
            (a, b) => a == b,
        }
    }
}

fn contains<T: SameValue>(items: &[T], item: &T) -> bool {
    items.iter().any(|other| other.same_value(item))
}

/// Keep the first occurrence of each value, except values listed in
/// `except`, which are kept every time they appear.
pub fn remove_duplicates<T>(array: &[T], except: &[T]) -> Vec<T>
where
    T: SameValue + Clone,
{
    let mut out: Vec<T> = Vec::with_capacity(array.len());
    for item in array {
        if contains(except, item) || !contains(&out, item) {
            out.push(item.clone());
        }
    }
    out
}
