//! Linear scoring.

use tracing::debug;

use crate::archive::{Archivable, ArchiveError, Archiver, Unarchiver};
use crate::data::{DataVector, DenseDataVector};

use super::Predictor;

/// Affine scorer `w · x + b`.
///
/// Scoring walks only the non-zero entries of the input, so sparse inputs
/// cost time proportional to their support rather than to `w.len()`.
/// Input entries past the end of `w` contribute nothing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LinearPredictor {
    weights: Vec<f64>,
    bias: f64,
}

impl LinearPredictor {
    /// Create a predictor from weights and a bias.
    pub fn new(weights: Vec<f64>, bias: f64) -> Self {
        Self { weights, bias }
    }

    /// Weight vector `w`.
    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    /// Mutable weight vector.
    pub fn weights_mut(&mut self) -> &mut Vec<f64> {
        &mut self.weights
    }

    /// Bias term `b`.
    pub fn bias(&self) -> f64 {
        self.bias
    }

    /// Set the bias term.
    pub fn set_bias(&mut self, bias: f64) {
        self.bias = bias;
    }

    /// Number of weights.
    pub fn dimension(&self) -> usize {
        self.weights.len()
    }

    /// Score any data vector, dense or sparse.
    pub fn score<V: DataVector>(&self, data: &V) -> f64 {
        data.dot(&self.weights) + self.bias
    }

    /// Scale weights and bias by `factor`.
    pub fn scale(&mut self, factor: f64) {
        self.weights.iter_mut().for_each(|w| *w *= factor);
        self.bias *= factor;
    }
}

impl Predictor for LinearPredictor {
    type DataVector = DenseDataVector<f64>;
    type Output = f64;

    fn predict(&self, data: &Self::DataVector) -> f64 {
        self.score(data)
    }
}

/// Both archive directions accept only finite parameters.
fn check_finite(weights: &[f64], bias: f64) -> Result<(), ArchiveError> {
    if let Some(pos) = weights.iter().position(|w| !w.is_finite()) {
        return Err(ArchiveError::invalid_value(
            "w",
            format!("weight {pos} is not finite"),
        ));
    }
    if !bias.is_finite() {
        return Err(ArchiveError::invalid_value("b", "bias is not finite"));
    }
    Ok(())
}

impl Archivable for LinearPredictor {
    fn write_to_archive(&self, archiver: &mut dyn Archiver) -> Result<(), ArchiveError> {
        check_finite(&self.weights, self.bias)?;
        archiver.write_vector("w", &self.weights)?;
        archiver.write_scalar("b", self.bias)
    }

    fn read_from_archive(&mut self, unarchiver: &dyn Unarchiver) -> Result<(), ArchiveError> {
        let weights = unarchiver.read_vector("w")?;
        let bias = unarchiver.read_scalar("b")?;
        check_finite(&weights, bias)?;
        debug!(dimension = weights.len(), "restored linear predictor");
        self.weights = weights;
        self.bias = bias;
        Ok(())
    }
}
