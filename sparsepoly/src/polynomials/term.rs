/// A single non-zero `coefficient * x^exponent` term.
///
/// Terms are only ever built by [`Polynomial`](super::Polynomial), which keeps
/// them ordered and free of zero coefficients; callers get read-only access.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Term {
    pub(crate) coefficient: f64,
    pub(crate) exponent: u64,
}

impl Term {
    #[inline]
    pub(crate) fn new(coefficient: f64, exponent: u64) -> Self {
        Self {
            coefficient,
            exponent,
        }
    }

    /// The term's coefficient; never exactly zero.
    #[inline]
    pub fn coefficient(&self) -> f64 {
        self.coefficient
    }

    /// The term's exponent.
    #[inline]
    pub fn exponent(&self) -> u64 {
        self.exponent
    }

    /// `d/dx` of this term, or `None` for a constant.
    pub(crate) fn derive(&self) -> Option<Term> {
        if self.exponent == 0 {
            return None;
        }
        Some(Term::new(
            self.coefficient * self.exponent as f64,
            self.exponent - 1,
        ))
    }

    #[inline]
    pub(crate) fn evaluate(&self, x: f64) -> f64 {
        self.coefficient * x.powf(self.exponent as f64)
    }
}
