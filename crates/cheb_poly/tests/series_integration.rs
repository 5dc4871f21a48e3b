//! Integration tests for basis generation and series evaluation through the
//! crate-root API.

use cheb_poly::*;

const EPS: f64 = 1e-10;

fn naive_eval(poly: &[f64], x: f64) -> f64 {
    poly.iter()
        .enumerate()
        .map(|(i, &c)| c * x.powi(i as i32))
        .sum()
}

#[test]
fn basis_length_and_prefix_stability() {
    for n in 0..15 {
        let short = generate_basis(n);
        let long = generate_basis(n + 1);
        assert_eq!(short.len(), n);
        assert_eq!(long.len(), n + 1);
        assert_eq!(&long[..n], &short[..], "prefix differs at n={n}");
    }
}

#[test]
fn basis_boundaries() {
    assert!(generate_basis(0).is_empty());
    assert_eq!(generate_basis(1), vec![vec![1.0]]);
    assert_eq!(generate_basis(2), vec![vec![1.0], vec![0.0, 2.0]]);
}

#[test]
fn basis_has_no_trailing_zeros() {
    for poly in generate_basis(10) {
        assert_eq!(trim_trailing_zeros(&poly), &poly[..]);
    }
}

#[test]
fn basis_at_one() {
    // With T_1 = 2x the family at x = 1 counts up: T_k(1) = k + 1.
    for (k, poly) in generate_basis(10).iter().enumerate() {
        assert_eq!(evaluate_polynomial(poly, 1.0), (k + 1) as f64);
    }
}

#[test]
fn horner_matches_naive_sum() {
    let polys: [&[f64]; 4] = [
        &[1.0, 2.0, 3.0, 4.0],
        &[0.0],
        &[-5.0, 0.0, 0.0, 0.0, 1.0],
        &[2.0, -3.0, 0.5],
    ];
    for poly in polys {
        for x in [-3.0, -1.0, 0.0, 2.0, 3.0] {
            assert_eq!(evaluate_polynomial(poly, x), naive_eval(poly, x));
        }
    }
    assert_eq!(evaluate_polynomial(&[1.0, 2.0, 3.0, 4.0], 3.0), 142.0);
}

#[test]
fn clenshaw_with_monomial_descriptor_is_horner() {
    let cases: [(&[f64], f64); 5] = [
        (&[1.0, 2.0, 3.0, 4.0], 3.0),
        (&[7.0], -2.0),
        (&[1.0, -1.0], 5.0),
        (&[0.5, 0.25, -0.125, 2.0, 1.0], 0.75),
        (&[], 1.0),
    ];
    let rec = Recurrence::monomial();
    for (coeffs, x) in cases {
        let via_clenshaw = clenshaw_evaluate(coeffs, x, &[1.0], &[0.0, 1.0], &[0.0, 1.0], &[0.0]);
        assert_eq!(via_clenshaw, evaluate_polynomial(coeffs, x));
        assert_eq!(rec.evaluate(coeffs, x), via_clenshaw);
    }
}

#[test]
fn chebyshev_fast_path_matches_expansion_exactly_on_integers() {
    let cases: [(&[f64], f64); 4] = [
        (&[1.0, 2.0, 3.0], 4.0),
        (&[1.0], 4.0),
        (&[0.0, 1.0, 0.0, -1.0], 2.0),
        (&[3.0, -2.0, 1.0, 4.0, -1.0], -1.0),
    ];
    for (coeffs, x) in cases {
        let basis = generate_basis(coeffs.len());
        let expanded = linear_combination(&basis, coeffs).unwrap();
        assert_eq!(
            evaluate_chebyshev_series(coeffs, x),
            evaluate_polynomial(&expanded, x)
        );
    }
}

#[test]
fn chebyshev_fast_path_matches_expansion_on_floats() {
    let coeffs = [0.125, -0.4, 0.9, 0.03, -0.27, 0.61, -0.05];
    let expanded = chebyshev_to_monomial(&coeffs);
    for i in 0..=20 {
        let x = -1.0 + 0.1 * i as f64;
        let fast = evaluate_chebyshev_series(&coeffs, x);
        let slow = evaluate_polynomial(&expanded, x);
        assert!((fast - slow).abs() < EPS, "x={x}: {fast} vs {slow}");
    }
}

#[test]
fn chebyshev_preset_agrees_with_facade() {
    let coeffs = [2.0, 0.5, -1.5, 0.25];
    let rec = Recurrence::chebyshev();
    for x in [-0.9, -0.2, 0.0, 0.4, 1.0] {
        assert_eq!(rec.evaluate(&coeffs, x), evaluate_chebyshev_series(&coeffs, x));
    }
}

#[test]
fn linear_combination_rejects_mismatch() {
    let basis = generate_basis(3);
    let err = linear_combination(&basis, &[1.0, 2.0]).unwrap_err();
    assert_eq!(
        err,
        PolyError::LengthMismatch {
            polys: 3,
            weights: 2
        }
    );
}

#[test]
fn repeated_calls_are_identical() {
    let coeffs = [0.7, -0.3, 0.2, 0.1];
    let x = 0.37;
    assert_eq!(generate_basis(6), generate_basis(6));
    assert_eq!(
        evaluate_polynomial(&coeffs, x).to_bits(),
        evaluate_polynomial(&coeffs, x).to_bits()
    );
    assert_eq!(
        evaluate_chebyshev_series(&coeffs, x).to_bits(),
        evaluate_chebyshev_series(&coeffs, x).to_bits()
    );
}

#[test]
fn derivative_of_expanded_series() {
    // d/dx (4x^2 - 1) = 8x
    let mono = chebyshev_to_monomial(&[0.0, 0.0, 1.0]);
    assert_eq!(derivative(&mono), vec![0.0, 8.0]);
}

#[test]
fn evaluate_many_is_pointwise() {
    let coeffs = [1.0, -0.5, 0.25];
    let xs: Vec<f64> = (0..5).map(|i| i as f64 * 0.25).collect();
    let ys = evaluate_chebyshev_series_many(&coeffs, &xs);
    for (x, y) in xs.iter().zip(ys) {
        assert_eq!(y, evaluate_chebyshev_series(&coeffs, *x));
    }
}
