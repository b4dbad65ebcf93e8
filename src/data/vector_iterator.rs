//! Skip-zero iteration over dense storage.
//!
//! The cursor borrows the dense slice for its whole lifetime and walks it
//! once, front to back, exposing only the non-zero elements together with
//! the position they occupy in the original sequence.

use std::iter::FusedIterator;

use super::{IndexValue, IndexValueIterator, Scalar};

/// Index/value cursor over a borrowed dense slice.
///
/// `remaining` plays the role of the `[current, end)` cursor pair: its first
/// element is the current one and an empty slice means exhausted.
/// `index` counts every physical element consumed so far, zeros included.
#[derive(Debug, Clone)]
pub struct VectorIndexValueIterator<'a, T> {
    remaining: &'a [T],
    index: usize,
}

impl<'a, T: Scalar> VectorIndexValueIterator<'a, T> {
    /// Bind a cursor to the full extent of `values`, parked on the first
    /// non-zero element.
    pub fn new(values: &'a [T]) -> Self {
        let mut iter = Self {
            remaining: values,
            index: 0,
        };
        iter.skip_zeros();
        iter
    }

    /// Number of physical elements not yet consumed, zeros included.
    pub fn remaining_len(&self) -> usize {
        self.remaining.len()
    }

    fn skip_zeros(&mut self) {
        while let Some((first, rest)) = self.remaining.split_first() {
            if !first.is_zero() {
                break;
            }
            self.remaining = rest;
            self.index += 1;
        }
    }
}

impl<'a, T: Scalar> IndexValueIterator for VectorIndexValueIterator<'a, T> {
    type Value = T;

    #[inline]
    fn is_valid(&self) -> bool {
        !self.remaining.is_empty()
    }

    fn advance(&mut self) {
        assert!(self.is_valid(), "advance called on an exhausted index/value iterator");
        self.remaining = &self.remaining[1..];
        self.index += 1;
        self.skip_zeros();
    }

    #[inline]
    fn get(&self) -> IndexValue<T> {
        match self.remaining.first() {
            Some(&value) => IndexValue::new(self.index, value),
            None => panic!("get called on an exhausted index/value iterator"),
        }
    }
}

impl<'a, T: Scalar> Iterator for VectorIndexValueIterator<'a, T> {
    type Item = IndexValue<T>;

    fn next(&mut self) -> Option<Self::Item> {
        if !self.is_valid() {
            return None;
        }
        let entry = self.get();
        self.advance();
        Some(entry)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::from(self.is_valid()), Some(self.remaining.len()))
    }
}

impl<'a, T: Scalar> FusedIterator for VectorIndexValueIterator<'a, T> {}

/// Create an index/value cursor over the whole of `values`.
///
/// `values` must outlive the cursor and stay unmodified while it is in use,
/// which the borrow enforces.
pub fn make_vector_index_value_iterator<T: Scalar>(values: &[T]) -> VectorIndexValueIterator<'_, T> {
    VectorIndexValueIterator::new(values)
}
