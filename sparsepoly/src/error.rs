use thiserror::Error;

/// Errors raised by polynomial construction and arithmetic.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PolynomialError {
    /// Text input held a token that is not a number, an exponent that is not an
    /// integer, or an odd number of tokens.
    #[error("malformed polynomial text at token {token:?}: {reason}")]
    Format {
        /// the offending token (empty when a pair was left incomplete)
        token: String,
        /// what was expected instead
        reason: &'static str,
    },
    /// A negative exponent was supplied.
    #[error("exponent must be non-negative, got {exponent}")]
    InvalidArgument {
        /// the rejected exponent
        exponent: i64,
    },
    /// A required polynomial operand was absent.
    #[error("missing polynomial operand: {operand}")]
    NullReference {
        /// which operand was missing
        operand: &'static str,
    },
    /// Multiplying two terms produced an exponent larger than `u64::MAX`.
    #[error("exponent overflow multiplying x^{lhs} by x^{rhs}")]
    ExponentOverflow {
        /// exponent of the left-hand term
        lhs: u64,
        /// exponent of the right-hand term
        rhs: u64,
    },
    /// The operation is undefined for the polynomial's current state.
    #[error("invalid polynomial state: {0}")]
    InvalidState(&'static str),
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, PolynomialError>;
