//! Data vectors and skip-zero index/value iteration
//!
//! Dense storage is walked through [`VectorIndexValueIterator`], which hides
//! zero elements while keeping their positions in the reported indices.
//! Sparse storage exposes the same [`IndexValueIterator`] contract, so
//! scoring code written against [`DataVector`] only ever touches non-zero
//! contributions.

mod dense;
mod index_value;
mod scalar;
mod sparse;
mod vector_iterator;

pub use dense::DenseDataVector;
pub use index_value::{IndexValue, IndexValueIterator};
pub use scalar::Scalar;
pub use sparse::{SparseDataVector, SparseIndexValueIterator};
pub use vector_iterator::{make_vector_index_value_iterator, VectorIndexValueIterator};

use thiserror::Error;

/// Errors raised while building or combining data vectors.
#[derive(Debug, Error, PartialEq)]
pub enum DataError {
    /// Sparse entries must be appended with strictly increasing indices.
    #[error("index {index} appended after index {last}")]
    IndexOutOfOrder {
        /// Index that was rejected.
        index: usize,
        /// Largest index already stored.
        last: usize,
    },

    /// Index has no representable dense position after it.
    #[error("index {index} is out of range for a data vector")]
    IndexOutOfRange {
        /// Index that was rejected.
        index: usize,
    },

    /// Vector does not fit into the target buffer.
    #[error("length mismatch: vector dimension {dimension} exceeds target length {target}")]
    LengthMismatch {
        /// Dimension of the source vector.
        dimension: usize,
        /// Length of the target buffer.
        target: usize,
    },
}

/// A vector whose non-zero entries can be walked in index order.
///
/// All arithmetic is driven by [`index_values`](DataVector::index_values)
/// and therefore costs time proportional to the number of non-zero entries
/// (plus the skipped zeros for dense storage).
pub trait DataVector {
    /// Element type.
    type Value: Scalar;

    /// Cursor returned by [`index_values`](DataVector::index_values).
    type Entries<'a>: IndexValueIterator<Value = Self::Value>
    where
        Self: 'a;

    /// Cursor over the non-zero entries.
    fn index_values(&self) -> Self::Entries<'_>;

    /// Length of the equivalent dense vector.
    fn dimension(&self) -> usize;

    /// Dot product with a dense weight slice; weights past the end of the
    /// slice count as zero.
    fn dot(&self, weights: &[f64]) -> f64 {
        self.index_values().fold_entries(0.0, |acc, entry| {
            match weights.get(entry.index) {
                Some(w) => acc + w * entry.value.to_f64(),
                None => acc,
            }
        })
    }

    /// Squared Euclidean norm.
    fn norm2_squared(&self) -> f64 {
        self.index_values().fold_entries(0.0, |acc, entry| {
            let v = entry.value.to_f64();
            acc + v * v
        })
    }

    /// `target += scale * self`.
    fn add_to(&self, target: &mut [f64], scale: f64) -> Result<(), DataError> {
        let dimension = self.dimension();
        if dimension > target.len() {
            return Err(DataError::LengthMismatch {
                dimension,
                target: target.len(),
            });
        }
        let mut entries = self.index_values();
        while entries.is_valid() {
            let entry = entries.get();
            target[entry.index] += scale * entry.value.to_f64();
            entries.advance();
        }
        Ok(())
    }

    /// Expand into a dense `f64` buffer of length [`dimension`](DataVector::dimension).
    fn to_dense(&self) -> Vec<f64> {
        let mut dense = vec![0.0; self.dimension()];
        self.index_values().fold_entries((), |(), entry| {
            dense[entry.index] = entry.value.to_f64();
        });
        dense
    }
}
