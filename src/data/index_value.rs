//! Index/value entries and the cursor contract shared by all sparse walks.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A single non-zero entry of a data vector.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct IndexValue<T> {
    /// Absolute position in the dense sequence.
    pub index: usize,
    /// Value stored at `index`.
    pub value: T,
}

impl<T> IndexValue<T> {
    /// Create an entry.
    pub const fn new(index: usize, value: T) -> Self {
        Self { index, value }
    }
}

impl<T> From<(usize, T)> for IndexValue<T> {
    fn from((index, value): (usize, T)) -> Self {
        Self { index, value }
    }
}

/// Forward-only cursor over the non-zero entries of a vector.
///
/// Implementors keep the cursor parked on a valid entry or exhausted;
/// `advance` and `get` on an exhausted cursor are caller errors and panic.
pub trait IndexValueIterator {
    /// Element type of the underlying vector.
    type Value;

    /// Whether the cursor currently points at an entry.
    fn is_valid(&self) -> bool;

    /// Move to the next entry.
    ///
    /// # Panics
    ///
    /// Panics if the cursor is already exhausted.
    fn advance(&mut self);

    /// Entry under the cursor.
    ///
    /// # Panics
    ///
    /// Panics if the cursor is exhausted.
    fn get(&self) -> IndexValue<Self::Value>;

    /// Fold every remaining entry into an accumulator, consuming the cursor.
    fn fold_entries<B, F>(mut self, init: B, mut f: F) -> B
    where
        Self: Sized,
        F: FnMut(B, IndexValue<Self::Value>) -> B,
    {
        let mut acc = init;
        while self.is_valid() {
            acc = f(acc, self.get());
            self.advance();
        }
        acc
    }
}
