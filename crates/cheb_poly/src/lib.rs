//! Chebyshev polynomials and Clenshaw series evaluation.
//!
//! This crate provides:
//! - Monomial-basis primitives (Horner evaluation, linear combination)
//! - Chebyshev basis generation in monomial form
//! - A Clenshaw evaluator for any basis with a three-term recurrence
//! - Chebyshev series evaluation built on top of it
//!
//! Polynomials are `&[f64]` coefficient slices, lowest degree first.
//!
//! ```
//! use cheb_poly::{evaluate_chebyshev_series, evaluate_polynomial, chebyshev_to_monomial};
//!
//! let coeffs = [1.0, 2.0, 3.0];
//! let fast = evaluate_chebyshev_series(&coeffs, 4.0);
//! let slow = evaluate_polynomial(&chebyshev_to_monomial(&coeffs), 4.0);
//! assert_eq!(fast, slow);
//! ```

pub mod chebyshev;
pub mod clenshaw;
pub mod error;
pub mod polynomial;

pub use chebyshev::{
    chebyshev_to_monomial, evaluate_chebyshev_series, evaluate_chebyshev_series_many,
    generate_basis,
};
pub use clenshaw::{Recurrence, clenshaw_evaluate};
pub use error::PolyError;
pub use polynomial::{
    derivative, evaluate_polynomial, linear_combination, multiply, trim_trailing_zeros,
};
