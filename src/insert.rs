//! Positional insertion with a fractional index

/// Return a copy of `array` with `items` inserted at `floor(index)`.
///
/// An index outside `0..=array.len()` (or NaN) leaves the copy unchanged
/// instead of failing, so bulk callers can pass loosely validated positions.
/// `3.5` inserts exactly where `3` would.
pub fn insert_at<T, I>(array: &[T], index: f64, items: I) -> Vec<T>
where
    T: Clone,
    I: IntoIterator<Item = T>,
{
    let mut out = array.to_vec();
    if !(0.0..=array.len() as f64).contains(&index) {
        return out;
    }
    let position = index.floor() as usize;
    out.splice(position..position, items);
    out
}
