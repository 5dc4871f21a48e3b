//! Clenshaw evaluation for any basis with a three-term recurrence.
//!
//! The basis is described by its first two members and the recurrence
//! coefficients:
//!
//! ```text
//! T_k(x) = alpha(x) * T_{k-1}(x) + beta(x) * T_{k-2}(x),   k >= 2
//! ```
//!
//! A series `sum(c_k * T_k(x))` is then evaluated with the backward recurrence
//!
//! ```text
//! b_k = c_k + alpha(x) * b_{k+1} + beta(x) * b_{k+2},   b_n = b_{n+1} = 0
//! f(x) = T_0(x) * c_0 + T_1(x) * b_1 + beta(x) * T_0(x) * b_2
//! ```
//!
//! so no `T_k(x)` with `k >= 2` is ever formed.

use crate::polynomial::{evaluate_polynomial, linear_combination, multiply, trim_trailing_zeros};

/// Evaluate `sum(coefficients[k] * T_k(x))` for the basis defined by
/// `basis0`, `basis1`, `alpha` and `beta` (all monomial-basis polynomials).
///
/// The descriptor must actually reproduce the intended basis; this is not
/// checked. Returns `0.0` for empty coefficients.
pub fn clenshaw_evaluate(
    coefficients: &[f64],
    x: f64,
    basis0: &[f64],
    basis1: &[f64],
    alpha: &[f64],
    beta: &[f64],
) -> f64 {
    let Some((&c0, rest)) = coefficients.split_first() else {
        return 0.0;
    };

    let alpha_x = evaluate_polynomial(alpha, x);
    let beta_x = evaluate_polynomial(beta, x);
    let t0 = evaluate_polynomial(basis0, x);
    let t1 = evaluate_polynomial(basis1, x);

    let mut b_k1 = 0.0; // b_{k+1}
    let mut b_k2 = 0.0; // b_{k+2}

    // c_0 is folded in at the end.
    for &c_k in rest.iter().rev() {
        let b_k = c_k + alpha_x * b_k1 + beta_x * b_k2;
        b_k2 = b_k1;
        b_k1 = b_k;
    }

    t0 * c0 + t1 * b_k1 + beta_x * t0 * b_k2
}

/// A three-term recurrence descriptor `(T_0, T_1, alpha, beta)`.
#[derive(Debug, Clone, PartialEq)]
pub struct Recurrence {
    pub basis0: Vec<f64>,
    pub basis1: Vec<f64>,
    pub alpha: Vec<f64>,
    pub beta: Vec<f64>,
}

impl Recurrence {
    pub fn new(basis0: Vec<f64>, basis1: Vec<f64>, alpha: Vec<f64>, beta: Vec<f64>) -> Self {
        Self {
            basis0,
            basis1,
            alpha,
            beta,
        }
    }

    /// Chebyshev family: `T_0 = 1`, `T_1 = 2x`, `alpha = 2x`, `beta = -1`.
    pub fn chebyshev() -> Self {
        Self::new(vec![1.0], vec![0.0, 2.0], vec![0.0, 2.0], vec![-1.0])
    }

    /// Plain powers of x: `T_0 = 1`, `T_1 = x`, `alpha = x`, `beta = 0`.
    ///
    /// Series in this basis are ordinary monomial-basis polynomials.
    pub fn monomial() -> Self {
        Self::new(vec![1.0], vec![0.0, 1.0], vec![0.0, 1.0], vec![0.0])
    }

    /// Evaluate `sum(coefficients[k] * T_k(x))` with [`clenshaw_evaluate`].
    pub fn evaluate(&self, coefficients: &[f64], x: f64) -> f64 {
        clenshaw_evaluate(
            coefficients,
            x,
            &self.basis0,
            &self.basis1,
            &self.alpha,
            &self.beta,
        )
    }

    /// Materialize `T_0 .. T_{count-1}` in monomial form, trailing zeros
    /// trimmed.
    pub fn generate(&self, count: usize) -> Vec<Vec<f64>> {
        let seeds = [
            trim_trailing_zeros(&self.basis0).to_vec(),
            trim_trailing_zeros(&self.basis1).to_vec(),
        ];
        let mut polys: Vec<Vec<f64>> = seeds.into_iter().take(count).collect();

        for k in 2..count {
            let terms = [
                multiply(&self.alpha, &polys[k - 1]),
                multiply(&self.beta, &polys[k - 2]),
            ];
            let next = linear_combination(&terms, &[1.0, 1.0]).unwrap_or_default();
            polys.push(trim_trailing_zeros(&next).to_vec());
        }

        polys
    }

    /// Expand a series in this basis into monomial coefficients.
    pub fn to_monomial(&self, coefficients: &[f64]) -> Vec<f64> {
        let basis = self.generate(coefficients.len());
        linear_combination(&basis, coefficients).unwrap_or_default()
    }
}
