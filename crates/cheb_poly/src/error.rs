//! Error types for polynomial operations.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from polynomial algebra.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum PolyError {
    /// A linear combination was given a different number of polynomials
    /// and weights.
    LengthMismatch { polys: usize, weights: usize },
}

impl Display for PolyError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::LengthMismatch { polys, weights } => write!(
                f,
                "invalid argument: {polys} polynomials but {weights} weights"
            ),
        }
    }
}

impl Error for PolyError {}
