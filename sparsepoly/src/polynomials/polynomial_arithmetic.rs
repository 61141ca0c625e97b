//! Arithmetic that builds new polynomials out of existing ones.
//!
//! Inputs are only ever read; every result owns fresh term storage.

use tracing::debug;

use super::{term::Term, Polynomial};
use crate::error::{PolynomialError, Result};

/// Term-wise sum of `a` and `b`.
///
/// # Errors
/// - [`PolynomialError::NullReference`] if either operand is `None`
pub fn sum(a: Option<&Polynomial>, b: Option<&Polynomial>) -> Result<Polynomial> {
    let (a, b) = operands(a, b)?;
    let total = add(a, b);
    debug!(terms = total.terms(), "computed sum");
    Ok(total)
}

/// Full distributive product of `a` and `b`.
///
/// # Errors
/// - [`PolynomialError::NullReference`] if either operand is `None`
/// - [`PolynomialError::ExponentOverflow`] if two exponents add past `u64::MAX`
pub fn product(a: Option<&Polynomial>, b: Option<&Polynomial>) -> Result<Polynomial> {
    let (a, b) = operands(a, b)?;
    let result = multiply(a, b)?;
    debug!(
        lhs_terms = a.terms(),
        rhs_terms = b.terms(),
        terms = result.terms(),
        "computed product"
    );
    Ok(result)
}

fn operands<'a>(
    a: Option<&'a Polynomial>,
    b: Option<&'a Polynomial>,
) -> Result<(&'a Polynomial, &'a Polynomial)> {
    let a = a.ok_or(PolynomialError::NullReference { operand: "a" })?;
    let b = b.ok_or(PolynomialError::NullReference { operand: "b" })?;
    Ok((a, b))
}

/// Copies both operands, then drains the copy of `b` into the copy of `a`.
pub(crate) fn add(a: &Polynomial, b: &Polynomial) -> Polynomial {
    let mut total = a.clone();
    let mut scratch = b.clone();
    while let Some(term) = scratch.pop_lowest() {
        total.insert(term);
    }
    total
}

pub(crate) fn multiply(a: &Polynomial, b: &Polynomial) -> Result<Polynomial> {
    let mut result = Polynomial::zero();
    for lhs in a {
        for rhs in b {
            let exponent = lhs.exponent.checked_add(rhs.exponent).ok_or(
                PolynomialError::ExponentOverflow {
                    lhs: lhs.exponent,
                    rhs: rhs.exponent,
                },
            )?;
            result.insert(Term::new(lhs.coefficient * rhs.coefficient, exponent));
        }
    }
    Ok(result)
}

pub(crate) fn derivative(poly: &Polynomial) -> Result<Polynomial> {
    if poly.is_zero() {
        debug!("refusing to differentiate the zero polynomial");
        return Err(PolynomialError::InvalidState(
            "cannot differentiate the zero polynomial",
        ));
    }
    let mut derived = Polynomial::zero();
    for term in poly.iter().filter_map(Term::derive) {
        derived.insert(term);
    }
    Ok(derived)
}
