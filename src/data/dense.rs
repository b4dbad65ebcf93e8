//! Dense data vectors.

use super::{make_vector_index_value_iterator, DataVector, Scalar, VectorIndexValueIterator};

/// Data vector storing every element explicitly, zeros included.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DenseDataVector<T> {
    data: Vec<T>,
}

impl<T: Scalar> DenseDataVector<T> {
    /// Create an empty vector.
    pub fn new() -> Self {
        Self { data: Vec::new() }
    }

    /// Append an element at the next position.
    pub fn push(&mut self, value: T) {
        self.data.push(value);
    }

    /// Number of stored elements.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether no elements are stored.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Borrow the backing storage.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Number of non-zero elements.
    pub fn count_non_zeros(&self) -> usize {
        self.data.iter().filter(|v| !v.is_zero()).count()
    }
}

impl<T> From<Vec<T>> for DenseDataVector<T> {
    fn from(data: Vec<T>) -> Self {
        Self { data }
    }
}

impl<T: Scalar> FromIterator<T> for DenseDataVector<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            data: iter.into_iter().collect(),
        }
    }
}

impl<T: Scalar> DataVector for DenseDataVector<T> {
    type Value = T;
    type Entries<'a> = VectorIndexValueIterator<'a, T> where Self: 'a;

    fn index_values(&self) -> Self::Entries<'_> {
        make_vector_index_value_iterator(&self.data)
    }

    fn dimension(&self) -> usize {
        self.data.len()
    }
}
