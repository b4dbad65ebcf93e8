#![allow(dead_code)]

use sparse_predict::{
    Archivable, ArchiveError, Archiver, DenseDataVector, Predictor, Unarchiver,
};
use tracing_subscriber::EnvFilter;

/// Route `tracing` output through the test harness; filter with `RUST_LOG`.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Dense `f64` vector from a slice.
pub fn dense(values: &[f64]) -> DenseDataVector<f64> {
    DenseDataVector::from(values.to_vec())
}

/// Scalar predictor whose persistence always fails, for checking that
/// wrappers surface inner errors unchanged.
#[derive(Debug, Clone, Default)]
pub struct BrokenArchivePredictor {
    pub score: f64,
}

impl Predictor for BrokenArchivePredictor {
    type DataVector = DenseDataVector<f64>;
    type Output = f64;

    fn predict(&self, _data: &Self::DataVector) -> f64 {
        self.score
    }
}

impl Archivable for BrokenArchivePredictor {
    fn write_to_archive(&self, _archiver: &mut dyn Archiver) -> Result<(), ArchiveError> {
        Err(ArchiveError::invalid_value("score", "write refused"))
    }

    fn read_from_archive(&mut self, unarchiver: &dyn Unarchiver) -> Result<(), ArchiveError> {
        self.score = unarchiver.read_scalar("score")?;
        Ok(())
    }
}
