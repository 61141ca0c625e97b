use std::{
    any::Any,
    ops::{Add, Mul},
    slice,
};

use tracing::trace;

use super::{polynomial_arithmetic, term::Term};
use crate::error::{PolynomialError, Result};

/// A single-variable polynomial with `f64` coefficients.
///
/// Only non-zero terms are stored, ordered by strictly descending exponent.
/// The zero polynomial holds no terms at all.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Polynomial {
    terms: Vec<Term>,
}

impl Polynomial {
    /// The zero polynomial.
    #[inline]
    pub fn zero() -> Self {
        Self { terms: Vec::new() }
    }

    /// Deep copy of `source`.
    ///
    /// # Errors
    /// - [`PolynomialError::NullReference`] if `source` is `None`
    pub fn copy_of(source: Option<&Polynomial>) -> Result<Self> {
        source
            .cloned()
            .ok_or(PolynomialError::NullReference { operand: "source" })
    }

    /// Number of stored (non-zero) terms. This is not the degree.
    #[inline]
    pub fn terms(&self) -> usize {
        self.terms.len()
    }

    /// True for the zero polynomial.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.terms.is_empty()
    }

    /// Highest exponent with a non-zero coefficient, `None` for the zero polynomial.
    pub fn degree(&self) -> Option<u64> {
        self.leading_term().map(Term::exponent)
    }

    /// The term with the highest exponent.
    #[inline]
    pub fn leading_term(&self) -> Option<&Term> {
        self.terms.first()
    }

    /// Iterates over the stored terms from highest to lowest exponent.
    #[inline]
    pub fn iter(&self) -> slice::Iter<'_, Term> {
        self.terms.iter()
    }

    /// Adds `coefficient * x^exponent` to this polynomial.
    ///
    /// A term with the same exponent absorbs the coefficient, and is removed if the
    /// merged coefficient is exactly zero. A zero `coefficient` is a no-op.
    ///
    /// # Errors
    /// - [`PolynomialError::InvalidArgument`] if `exponent` is negative; the
    ///   polynomial is left untouched
    pub fn add_term(&mut self, coefficient: f64, exponent: i64) -> Result<()> {
        let exponent =
            u64::try_from(exponent).map_err(|_| PolynomialError::InvalidArgument { exponent })?;
        self.insert(Term::new(coefficient, exponent));
        Ok(())
    }

    /// Removes the term with `exponent` and returns its coefficient, or `0.0` if
    /// there is no such term.
    pub fn delete_term(&mut self, exponent: i64) -> f64 {
        let index = match self.find(exponent) {
            Some(index) => index,
            None => return 0.0,
        };
        let removed = self.terms.remove(index);
        trace!(exponent, coefficient = removed.coefficient, "deleted term");
        removed.coefficient
    }

    /// Coefficient of the `x^exponent` term, `0.0` when absent.
    pub fn get_coefficient(&self, exponent: i64) -> f64 {
        self.find(exponent)
            .map_or(0.0, |index| self.terms[index].coefficient)
    }

    /// Evaluates the polynomial at `x`.
    pub fn evaluate(&self, x: f64) -> f64 {
        self.terms.iter().map(|term| term.evaluate(x)).sum()
    }

    /// Compares against an arbitrary value; anything that is not a
    /// [`Polynomial`] is unequal.
    pub fn equals(&self, other: &dyn Any) -> bool {
        other
            .downcast_ref::<Polynomial>()
            .map_or(false, |other| self == other)
    }

    /// Symbolic derivative with respect to `x`.
    ///
    /// # Errors
    /// - [`PolynomialError::InvalidState`] for the zero polynomial
    pub fn derivative(&self) -> Result<Polynomial> {
        polynomial_arithmetic::derivative(self)
    }

    /// Inserts or merges `term`, keeping exponents strictly descending and
    /// dropping any coefficient that ends up exactly zero.
    pub(crate) fn insert(&mut self, term: Term) {
        if term.coefficient == 0.0 {
            return;
        }
        match self.position(term.exponent) {
            Ok(index) => {
                let merged = self.terms[index].coefficient + term.coefficient;
                if merged == 0.0 {
                    self.terms.remove(index);
                    trace!(exponent = term.exponent, "term cancelled");
                } else {
                    self.terms[index].coefficient = merged;
                    trace!(exponent = term.exponent, coefficient = merged, "term merged");
                }
            }
            Err(index) => {
                self.terms.insert(index, term);
                trace!(
                    exponent = term.exponent,
                    coefficient = term.coefficient,
                    "term inserted"
                );
            }
        }
    }

    /// Takes the lowest-order term out of the polynomial.
    pub(crate) fn pop_lowest(&mut self) -> Option<Term> {
        self.terms.pop()
    }

    fn find(&self, exponent: i64) -> Option<usize> {
        let exponent = u64::try_from(exponent).ok()?;
        self.position(exponent).ok()
    }

    // descending order, so larger exponents compare as `Less`
    fn position(&self, exponent: u64) -> std::result::Result<usize, usize> {
        self.terms
            .binary_search_by(|term| exponent.cmp(&term.exponent))
    }
}

impl<'a> IntoIterator for &'a Polynomial {
    type Item = &'a Term;
    type IntoIter = slice::Iter<'a, Term>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a> Add for &'a Polynomial {
    type Output = Polynomial;

    fn add(self, rhs: Self) -> Polynomial {
        polynomial_arithmetic::add(self, rhs)
    }
}

impl<'a> Mul for &'a Polynomial {
    type Output = Polynomial;

    /// # Panics
    ///
    /// If a product exponent does not fit in a `u64`. Use
    /// [`polynomial_arithmetic::product`] to get that as an error instead.
    fn mul(self, rhs: Self) -> Polynomial {
        match polynomial_arithmetic::multiply(self, rhs) {
            Ok(product) => product,
            Err(err) => panic!("{err}"),
        }
    }
}
