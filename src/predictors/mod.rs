//! Predictors and predictor composition
//!
//! A [`Predictor`] maps a data vector to an output. Scalar predictors
//! ([`LinearPredictor`], [`ConstantPredictor`]) produce `f64` scores;
//! [`SignPredictor`] wraps any of them and reports the sign of the score,
//! leaving persistence to the wrapped predictor.

mod constant;
mod linear;
mod sign;

pub use constant::ConstantPredictor;
pub use linear::LinearPredictor;
pub use sign::{make_sign_predictor, SignConvention, SignPredictor};

/// A function from data vectors to predictions.
pub trait Predictor {
    /// Data vector type accepted by [`predict`](Predictor::predict).
    type DataVector: ?Sized;

    /// Prediction type.
    type Output;

    /// Predict the output for `data`.
    fn predict(&self, data: &Self::DataVector) -> Self::Output;
}
