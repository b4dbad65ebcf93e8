//! # Sparse Index/Value Iteration and Sign Predictors
//!
//! Building blocks for scoring sparse feature vectors:
//!
//! 1. **Skip-zero iteration**: walk dense storage exposing only non-zero
//!    `(index, value)` pairs, with indices that still refer to the dense
//!    positions
//! 2. **Data vectors**: dense and sparse storage behind one [`DataVector`]
//!    trait whose arithmetic touches non-zero entries only
//! 3. **Predictor composition**: [`SignPredictor`] turns any scalar
//!    predictor into a boolean one without changing the wrapped type
//! 4. **Pass-through persistence**: wrappers archive exactly the fields of
//!    the predictor they wrap
//!
//! ## Usage Example
//!
//! ```
//! use sparse_predict::{
//!     make_sign_predictor, make_vector_index_value_iterator, DenseDataVector, IndexValue,
//!     LinearPredictor, Predictor,
//! };
//!
//! let values = [0.0, 0.0, 3.0, 0.0, -5.0];
//! let entries: Vec<_> = make_vector_index_value_iterator(&values).collect();
//! assert_eq!(entries, vec![IndexValue::new(2, 3.0), IndexValue::new(4, -5.0)]);
//!
//! let classifier = make_sign_predictor(LinearPredictor::new(vec![0.0, 0.0, 1.0, 0.0, 1.0], 0.0));
//! assert!(!classifier.predict(&DenseDataVector::from(values.to_vec())));
//! ```

#![warn(missing_docs, missing_debug_implementations)]

pub mod archive;    // Named-field persistence contract
pub mod data;       // Data vectors and index/value iteration
pub mod predictors; // Scalar predictors and the sign decorator

// Re-exports for convenience
pub use archive::{Archivable, ArchiveError, ArchivedValue, Archiver, PropertyArchive, Unarchiver};
pub use data::{
    make_vector_index_value_iterator, DataError, DataVector, DenseDataVector, IndexValue,
    IndexValueIterator, Scalar, SparseDataVector, SparseIndexValueIterator,
    VectorIndexValueIterator,
};
pub use predictors::{
    make_sign_predictor, ConstantPredictor, LinearPredictor, Predictor, SignConvention,
    SignPredictor,
};
