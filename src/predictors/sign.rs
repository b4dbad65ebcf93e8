//! Sign-transform decorator
//!
//! [`SignPredictor`] owns one scalar predictor and turns its score into a
//! boolean. It adds no persisted state: archiving a `SignPredictor` writes
//! exactly the fields of the wrapped predictor.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::archive::{Archivable, ArchiveError, Archiver, Unarchiver};

use super::Predictor;

/// How a score of exactly zero maps onto the sign bit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SignConvention {
    /// `score >= 0` is `true`; zero is positive.
    #[default]
    NonNegative,
    /// `score > 0` is `true`; zero is negative.
    Positive,
}

impl SignConvention {
    /// Sign bit of `score`. `NaN` maps to `false` under both conventions.
    #[inline]
    pub fn sign(self, score: f64) -> bool {
        match self {
            SignConvention::NonNegative => score >= 0.0,
            SignConvention::Positive => score > 0.0,
        }
    }
}

/// Wraps a scalar predictor and predicts the sign bit of its output.
///
/// The zero boundary is runtime configuration and is not archived; a
/// restored `SignPredictor` keeps whatever convention it was built with.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SignPredictor<P> {
    predictor: P,
    convention: SignConvention,
}

impl<P> SignPredictor<P> {
    /// Wrap `predictor` using [`SignConvention::NonNegative`].
    pub fn new(predictor: P) -> Self {
        Self {
            predictor,
            convention: SignConvention::default(),
        }
    }

    /// Set the zero-boundary convention.
    pub fn with_convention(mut self, convention: SignConvention) -> Self {
        self.convention = convention;
        self
    }

    /// Zero-boundary convention in use.
    pub fn convention(&self) -> SignConvention {
        self.convention
    }

    /// The wrapped predictor.
    pub fn predictor(&self) -> &P {
        &self.predictor
    }

    /// Mutable access to the wrapped predictor.
    pub fn predictor_mut(&mut self) -> &mut P {
        &mut self.predictor
    }

    /// Unwrap, returning the inner predictor.
    pub fn into_inner(self) -> P {
        self.predictor
    }
}

impl<P> Predictor for SignPredictor<P>
where
    P: Predictor<Output = f64>,
{
    type DataVector = P::DataVector;
    type Output = bool;

    #[inline]
    fn predict(&self, data: &Self::DataVector) -> bool {
        self.convention.sign(self.predictor.predict(data))
    }
}

impl<P: Archivable> Archivable for SignPredictor<P> {
    fn write_to_archive(&self, archiver: &mut dyn Archiver) -> Result<(), ArchiveError> {
        trace!("sign predictor: writing inner predictor");
        self.predictor.write_to_archive(archiver)
    }

    fn read_from_archive(&mut self, unarchiver: &dyn Unarchiver) -> Result<(), ArchiveError> {
        trace!("sign predictor: reading inner predictor");
        self.predictor.read_from_archive(unarchiver)
    }
}

/// Wrap `predictor` in a [`SignPredictor`], inferring the inner type.
pub fn make_sign_predictor<P>(predictor: P) -> SignPredictor<P> {
    SignPredictor::new(predictor)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::archive::PropertyArchive;
    use crate::data::DenseDataVector;
    use crate::predictors::{ConstantPredictor, LinearPredictor};

    #[test]
    fn zero_boundary_follows_convention() {
        assert!(SignConvention::NonNegative.sign(0.0));
        assert!(SignConvention::NonNegative.sign(-0.0));
        assert!(!SignConvention::Positive.sign(0.0));
        assert!(!SignConvention::NonNegative.sign(f64::NAN));
        assert!(!SignConvention::Positive.sign(f64::NAN));
    }

    #[test]
    fn default_wraps_default_inner() {
        let predictor = SignPredictor::<ConstantPredictor>::default();
        assert_eq!(predictor.predictor().value(), 0.0);
        assert_eq!(predictor.convention(), SignConvention::NonNegative);
        assert!(predictor.predict(&DenseDataVector::new()));
    }

    #[test]
    fn clone_is_independent() {
        let original = make_sign_predictor(LinearPredictor::new(vec![1.0], 0.0));
        let mut copy = original.clone();
        copy.predictor_mut().set_bias(-10.0);

        let x = DenseDataVector::from(vec![1.0]);
        assert!(original.predict(&x));
        assert!(!copy.predict(&x));
    }

    #[test]
    fn archive_contains_only_inner_fields() {
        let inner = LinearPredictor::new(vec![0.5, -0.5], 1.0);
        let inner_archive = PropertyArchive::from_archivable(&inner).unwrap();
        let wrapped_archive = PropertyArchive::from_archivable(&make_sign_predictor(inner)).unwrap();
        assert_eq!(inner_archive, wrapped_archive);
    }

    #[test]
    fn into_inner_returns_wrapped_value() {
        let predictor = make_sign_predictor(ConstantPredictor::new(4.0));
        assert_eq!(predictor.into_inner(), ConstantPredictor::new(4.0));
    }
}
