//! Chebyshev polynomial generation and series evaluation.
//!
//! The family is seeded with `T_0(x) = 1` and `T_1(x) = 2x` and continues with
//! `T_k(x) = 2x * T_{k-1}(x) - T_{k-2}(x)`. Series are evaluated with the
//! Clenshaw recurrence from [`crate::clenshaw`].

use crate::clenshaw::clenshaw_evaluate;
use crate::polynomial::linear_combination;

/// `alpha(x) = 2x`
const ALPHA: [f64; 2] = [0.0, 2.0];
/// `beta(x) = -1`
const BETA: [f64; 1] = [-1.0];

/// First `count` Chebyshev polynomials `T_0 .. T_{count-1}` in monomial form.
///
/// Coefficients are listed low-to-high degree with no trailing zeros.
/// Values are integers, so the output is exact for any sane `count`.
pub fn generate_basis(count: usize) -> Vec<Vec<f64>> {
    let seeds = [vec![1.0], vec![0.0, 2.0]];
    let mut polys: Vec<Vec<f64>> = seeds.into_iter().take(count).collect();

    for k in 2..count {
        let prev1 = &polys[k - 1];
        let prev2 = &polys[k - 2];

        // 2x * T_{k-1} is T_{k-1} shifted up one degree and doubled.
        let len = prev1.len() + 1;
        let mut next = vec![0.0; len];
        for i in 0..len {
            let shifted = if i >= 1 { prev1[i - 1] } else { 0.0 };
            let lower = if i < prev2.len() { prev2[i] } else { 0.0 };
            next[i] = 2.0 * shifted - lower;
        }
        polys.push(next);
    }

    polys
}

/// Evaluate a truncated Chebyshev series `sum(c_k * T_k(x))`.
///
/// Returns `0.0` for empty coefficients.
pub fn evaluate_chebyshev_series(coefficients: &[f64], x: f64) -> f64 {
    let basis = generate_basis(2);
    clenshaw_evaluate(coefficients, x, &basis[0], &basis[1], &ALPHA, &BETA)
}

/// Evaluate the same Chebyshev series at every point in `xs`.
pub fn evaluate_chebyshev_series_many(coefficients: &[f64], xs: &[f64]) -> Vec<f64> {
    xs.iter()
        .map(|&x| evaluate_chebyshev_series(coefficients, x))
        .collect()
}

/// Expand a Chebyshev series into monomial coefficients.
pub fn chebyshev_to_monomial(coefficients: &[f64]) -> Vec<f64> {
    let basis = generate_basis(coefficients.len());
    // Basis and coefficients have equal length by construction.
    linear_combination(&basis, coefficients).unwrap_or_default()
}
