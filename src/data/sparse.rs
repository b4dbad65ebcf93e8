//! Sparse data vectors holding only their non-zero entries.

use std::iter::FusedIterator;

use super::{DataError, DataVector, IndexValue, IndexValueIterator, Scalar};

/// Data vector storing only its non-zero `(index, value)` pairs, in
/// strictly increasing index order.
///
/// No explicit length is kept: [`dimension`](DataVector::dimension) is the
/// last stored index plus one, so trailing zeros of a dense source are not
/// represented. Indices are limited to `usize::MAX - 1` so that the
/// dimension always fits in a `usize`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SparseDataVector<T> {
    indices: Vec<usize>,
    values: Vec<T>,
}

impl<T: Scalar> SparseDataVector<T> {
    /// Create an empty vector.
    pub fn new() -> Self {
        Self {
            indices: Vec::new(),
            values: Vec::new(),
        }
    }

    /// Collect the entries produced by an index/value cursor.
    pub fn from_index_value_iterator<I>(mut entries: I) -> Result<Self, DataError>
    where
        I: IndexValueIterator<Value = T>,
    {
        let mut vector = Self::new();
        while entries.is_valid() {
            let entry = entries.get();
            vector.append_element(entry.index, entry.value)?;
            entries.advance();
        }
        Ok(vector)
    }

    /// Append an entry past the current last index. Zero values are
    /// dropped without touching the stored entries.
    pub fn append_element(&mut self, index: usize, value: T) -> Result<(), DataError> {
        if value.is_zero() {
            return Ok(());
        }
        if index == usize::MAX {
            return Err(DataError::IndexOutOfRange { index });
        }
        if let Some(&last) = self.indices.last() {
            if index <= last {
                return Err(DataError::IndexOutOfOrder { index, last });
            }
        }
        self.indices.push(index);
        self.values.push(value);
        Ok(())
    }

    /// Number of stored (non-zero) entries.
    pub fn num_non_zeros(&self) -> usize {
        self.indices.len()
    }

    /// Whether no entries are stored.
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Stored entries in index order.
    pub fn iter(&self) -> SparseIndexValueIterator<'_, T> {
        SparseIndexValueIterator {
            indices: &self.indices,
            values: &self.values,
            pos: 0,
        }
    }
}

/// Cursor over the stored entries of a [`SparseDataVector`].
#[derive(Debug, Clone)]
pub struct SparseIndexValueIterator<'a, T> {
    indices: &'a [usize],
    values: &'a [T],
    pos: usize,
}

impl<'a, T: Scalar> IndexValueIterator for SparseIndexValueIterator<'a, T> {
    type Value = T;

    #[inline]
    fn is_valid(&self) -> bool {
        self.pos < self.indices.len()
    }

    fn advance(&mut self) {
        assert!(self.is_valid(), "advance called on an exhausted index/value iterator");
        self.pos += 1;
    }

    fn get(&self) -> IndexValue<T> {
        assert!(self.is_valid(), "get called on an exhausted index/value iterator");
        IndexValue::new(self.indices[self.pos], self.values[self.pos])
    }
}

impl<'a, T: Scalar> Iterator for SparseIndexValueIterator<'a, T> {
    type Item = IndexValue<T>;

    fn next(&mut self) -> Option<Self::Item> {
        if !self.is_valid() {
            return None;
        }
        let entry = self.get();
        self.pos += 1;
        Some(entry)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.indices.len() - self.pos;
        (left, Some(left))
    }
}

impl<'a, T: Scalar> ExactSizeIterator for SparseIndexValueIterator<'a, T> {}

impl<'a, T: Scalar> FusedIterator for SparseIndexValueIterator<'a, T> {}

impl<T: Scalar> DataVector for SparseDataVector<T> {
    type Value = T;
    type Entries<'a> = SparseIndexValueIterator<'a, T> where Self: 'a;

    fn index_values(&self) -> Self::Entries<'_> {
        self.iter()
    }

    fn dimension(&self) -> usize {
        self.indices.last().map_or(0, |&last| last + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::make_vector_index_value_iterator;

    #[test]
    fn rejects_non_increasing_indices() {
        let mut vector = SparseDataVector::new();
        vector.append_element(3, 1.0).unwrap();
        assert_eq!(
            vector.append_element(3, 2.0),
            Err(DataError::IndexOutOfOrder { index: 3, last: 3 })
        );
        assert_eq!(
            vector.append_element(1, 2.0),
            Err(DataError::IndexOutOfOrder { index: 1, last: 3 })
        );
        assert_eq!(vector.num_non_zeros(), 1);
    }

    #[test]
    fn largest_index_is_rejected() {
        let mut vector = SparseDataVector::new();
        vector.append_element(2, 1.0).unwrap();
        assert_eq!(
            vector.append_element(usize::MAX, 2.0),
            Err(DataError::IndexOutOfRange { index: usize::MAX })
        );
        assert_eq!(vector.dimension(), 3);

        vector.append_element(usize::MAX - 1, 3.0).unwrap();
        assert_eq!(vector.dimension(), usize::MAX);
        let mut target = vec![0.0; 4];
        assert_eq!(
            vector.add_to(&mut target, 1.0),
            Err(DataError::LengthMismatch {
                dimension: usize::MAX,
                target: 4
            })
        );
    }

    #[test]
    fn trailing_zeros_do_not_count_toward_dimension() {
        let dense = [0.0, 1.0, 0.0, 0.0];
        let sparse = SparseDataVector::from_index_value_iterator(make_vector_index_value_iterator(&dense))
            .unwrap();
        assert_eq!(sparse.dimension(), 2);
        assert_eq!(sparse.to_dense(), vec![0.0, 1.0]);
    }

    #[test]
    fn zero_appends_are_dropped() {
        let mut vector = SparseDataVector::new();
        vector.append_element(0, 0i32).unwrap();
        vector.append_element(2, 5).unwrap();
        vector.append_element(4, 0).unwrap();
        assert_eq!(vector.num_non_zeros(), 1);
        assert_eq!(vector.dimension(), 3);
    }

    #[test]
    fn built_from_dense_cursor() {
        let dense = [0, 0, 3, 0, -5, 0, 0, 7];
        let sparse = SparseDataVector::from_index_value_iterator(make_vector_index_value_iterator(&dense))
            .expect("dense cursor yields increasing indices");
        let entries: Vec<_> = sparse.iter().map(|e| (e.index, e.value)).collect();
        assert_eq!(entries, vec![(2, 3), (4, -5), (7, 7)]);
        assert_eq!(sparse.iter().len(), 3);
    }

    #[test]
    fn empty_vector_has_zero_dimension() {
        let vector = SparseDataVector::<f64>::new();
        assert!(vector.is_empty());
        assert_eq!(vector.dimension(), 0);
        assert!(!vector.index_values().is_valid());
    }
}
