//! Value-keyed dispatcher
//!
//! A case table maps keys to zero-argument handlers. Building the table
//! is a fold over the registered pairs, so a later registration for the
//! same key replaces the earlier one (last-registration-wins).
//!
//! ```
//! use shapekit::dispatch::Cases;
//! use shapekit::ShapekitError;
//!
//! let out: Result<u32, ShapekitError> = Cases::new()
//!     .case("one", || Ok(1))
//!     .case("two", || Ok(2))
//!     .fallback(|| Ok(0))
//!     .dispatch(&"two");
//! assert_eq!(out.unwrap(), 2);
//! ```

use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

use crate::error::ShapekitError;

/// Boxed zero-argument handler
pub type Handler<'a, T, E> = Box<dyn FnOnce() -> Result<T, E> + 'a>;

/// Case table with an optional fallback handler
pub struct Cases<'a, K, T, E = ShapekitError> {
    table: HashMap<K, Handler<'a, T, E>>,
    fallback: Option<Handler<'a, T, E>>,
}

impl<'a, K, T, E> Default for Cases<'a, K, T, E> {
    fn default() -> Self {
        Self {
            table: HashMap::new(),
            fallback: None,
        }
    }
}

impl<'a, K, T, E> Cases<'a, K, T, E>
where
    K: Eq + Hash + Debug,
    E: From<ShapekitError>,
{
    /// Create an empty table with no fallback
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a handler for `key`, replacing any earlier one
    pub fn case<F>(mut self, key: K, handler: F) -> Self
    where
        F: FnOnce() -> Result<T, E> + 'a,
    {
        self.table.insert(key, Box::new(handler));
        self
    }

    /// Set the handler used when no key matches
    pub fn fallback<F>(mut self, handler: F) -> Self
    where
        F: FnOnce() -> Result<T, E> + 'a,
    {
        self.fallback = Some(Box::new(handler));
        self
    }

    /// Number of distinct keys in the table
    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// Run the handler registered for `subject`.
    ///
    /// Falls back to the fallback handler when nothing matches; without one,
    /// returns [`ShapekitError::UnmatchedCase`] converted into `E`. Errors
    /// from the selected handler are returned unchanged.
    pub fn dispatch(mut self, subject: &K) -> Result<T, E> {
        if let Some(handler) = self.table.remove(subject) {
            return handler();
        }
        match self.fallback {
            Some(fallback) => fallback(),
            None => Err(E::from(ShapekitError::UnmatchedCase {
                subject: format!("{:?}", subject),
            })),
        }
    }
}

/// Dispatch `subject` over `(key, handler)` pairs in one call.
///
/// Pairs are folded in order, later keys overwriting earlier ones.
pub fn select<'a, K, T, E, I>(
    subject: &K,
    pairs: I,
    fallback: Option<Handler<'a, T, E>>,
) -> Result<T, E>
where
    K: Eq + Hash + Debug,
    E: From<ShapekitError>,
    I: IntoIterator<Item = (K, Handler<'a, T, E>)>,
{
    let table = pairs.into_iter().collect::<HashMap<_, _>>();
    Cases { table, fallback }.dispatch(subject)
}
