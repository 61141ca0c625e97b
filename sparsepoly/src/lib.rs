#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_debug_implementations, missing_docs, rust_2018_idioms)]
#![deny(unreachable_pub)]

//! sparsepoly
//!
//! Single-variable polynomials with `f64` coefficients, stored as a sparse
//! list of non-zero terms in descending exponent order.
//!
//! ```
//! use sparsepoly::{polynomial_arithmetic, Polynomial};
//!
//! let p = Polynomial::parse("3 5 4 4 5 3 6 2 1 1 9 0").unwrap();
//! assert_eq!(p.to_string(), "3.0x^5 + 4.0x^4 + 5.0x^3 + 6.0x^2 + x + 9.0");
//! assert_eq!(p.evaluate(2.0), 235.0);
//!
//! let twice = polynomial_arithmetic::sum(Some(&p), Some(&p)).unwrap();
//! assert_eq!(twice.get_coefficient(0), 18.0);
//! ```

/// error types
pub mod error;
/// math with polynomials
pub mod polynomials;

pub use error::{PolynomialError, Result};
pub use polynomials::{polynomial_arithmetic, Polynomial, Term};

/// Test utilities.
#[cfg(any(test, feature = "test_utils"))]
#[cfg_attr(docsrs, doc(cfg(feature = "test_utils")))]
pub mod test_utils;
