//! Fixed-output predictor.

use crate::archive::{Archivable, ArchiveError, Archiver, Unarchiver};
use crate::data::DenseDataVector;

use super::Predictor;

/// Predictor that ignores its input and returns a fixed value.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ConstantPredictor {
    value: f64,
}

impl ConstantPredictor {
    /// Create a predictor that always returns `value`.
    pub fn new(value: f64) -> Self {
        Self { value }
    }

    /// The returned value.
    pub fn value(&self) -> f64 {
        self.value
    }
}

impl Predictor for ConstantPredictor {
    type DataVector = DenseDataVector<f64>;
    type Output = f64;

    fn predict(&self, _data: &Self::DataVector) -> f64 {
        self.value
    }
}

impl Archivable for ConstantPredictor {
    fn write_to_archive(&self, archiver: &mut dyn Archiver) -> Result<(), ArchiveError> {
        archiver.write_scalar("value", self.value)
    }

    fn read_from_archive(&mut self, unarchiver: &dyn Unarchiver) -> Result<(), ArchiveError> {
        self.value = unarchiver.read_scalar("value")?;
        Ok(())
    }
}
