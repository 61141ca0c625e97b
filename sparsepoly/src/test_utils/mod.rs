//! Generators for polynomials, shared by unit tests and the benches crate.

use proptest::prelude::*;
use rand::Rng;

use crate::polynomials::Polynomial;

/// Exclusive upper bound on exponents produced by [`small_polynomial`].
pub const SMALL_MAX_EXPONENT: i64 = 8;

/// Polynomials with small integer coefficients and exponents below
/// [`SMALL_MAX_EXPONENT`], so sums and products stay exact in `f64`.
pub fn small_polynomial() -> impl Strategy<Value = Polynomial> {
    proptest::collection::vec((-20i32..=20, 0..SMALL_MAX_EXPONENT), 0..6).prop_map(|pairs| {
        let mut poly = Polynomial::zero();
        for (coefficient, exponent) in pairs {
            // exponents come from a non-negative range
            let _ = poly.add_term(f64::from(coefficient), exponent);
        }
        poly
    })
}

/// Non-zero polynomials from [`small_polynomial`].
pub fn nonzero_polynomial() -> impl Strategy<Value = Polynomial> {
    small_polynomial().prop_filter("polynomial must be non-zero", |p| !p.is_zero())
}

/// Random sparse polynomial with up to `terms` terms and exponents in
/// `0..=max_exponent`; colliding exponents are merged.
pub fn random_polynomial<R: Rng>(rng: &mut R, terms: usize, max_exponent: u32) -> Polynomial {
    let mut poly = Polynomial::zero();
    for _ in 0..terms {
        let coefficient: f64 = rng.gen_range(-100.0..100.0);
        let exponent = rng.gen_range(0..=max_exponent);
        let _ = poly.add_term(coefficient, i64::from(exponent));
    }
    poly
}
