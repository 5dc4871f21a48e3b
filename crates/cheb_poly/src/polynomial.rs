//! Monomial-basis polynomial primitives.
//!
//! A polynomial is a coefficient slice ordered low-to-high degree, so
//! `[c_0, c_1, c_2]` is `c_0 + c_1*x + c_2*x^2`. Trailing zeros are allowed.
//! The empty slice is the zero polynomial.

use crate::error::PolyError;

/// Evaluate a monomial-basis polynomial at `x` with Horner's method.
///
/// Returns `0.0` for an empty coefficient slice.
pub fn evaluate_polynomial(poly: &[f64], x: f64) -> f64 {
    let mut acc = 0.0;
    for &c in poly.iter().rev() {
        acc = acc * x + c;
    }
    acc
}

/// Weighted sum `sum_i weights[i] * polys[i]`.
///
/// Shorter polynomials are padded with zeros up to the longest one.
/// Returns [`PolyError::LengthMismatch`] if the two lists differ in length.
pub fn linear_combination<P: AsRef<[f64]>>(
    polys: &[P],
    weights: &[f64],
) -> Result<Vec<f64>, PolyError> {
    if polys.len() != weights.len() {
        return Err(PolyError::LengthMismatch {
            polys: polys.len(),
            weights: weights.len(),
        });
    }

    let len = polys.iter().map(|p| p.as_ref().len()).max().unwrap_or(0);
    let mut out = vec![0.0; len];
    for (poly, &w) in polys.iter().zip(weights) {
        let poly = poly.as_ref();
        for i in 0..len {
            let c = if i < poly.len() { poly[i] } else { 0.0 };
            out[i] += w * c;
        }
    }
    Ok(out)
}

/// Product of two polynomials (coefficient convolution).
pub fn multiply(a: &[f64], b: &[f64]) -> Vec<f64> {
    if a.is_empty() || b.is_empty() {
        return Vec::new();
    }
    let mut out = vec![0.0; a.len() + b.len() - 1];
    for (i, &ai) in a.iter().enumerate() {
        for (j, &bj) in b.iter().enumerate() {
            out[i + j] += ai * bj;
        }
    }
    out
}

/// Derivative in the monomial basis. Constants differentiate to `[]`.
pub fn derivative(poly: &[f64]) -> Vec<f64> {
    poly.iter()
        .enumerate()
        .skip(1)
        .map(|(i, &c)| i as f64 * c)
        .collect()
}

/// Strip exact trailing zeros. An all-zero polynomial trims to `[]`.
pub fn trim_trailing_zeros(poly: &[f64]) -> &[f64] {
    let end = poly
        .iter()
        .rposition(|&c| c != 0.0)
        .map_or(0, |i| i + 1);
    &poly[..end]
}
