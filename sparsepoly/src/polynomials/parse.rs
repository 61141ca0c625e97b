use std::str::FromStr;

use tracing::debug;

use super::Polynomial;
use crate::error::{PolynomialError, Result};

impl Polynomial {
    /// Builds a polynomial from whitespace-separated `coefficient exponent` pairs,
    /// e.g. `"3 5 -1 1 9 0"` for `3x^5 - x + 9`. Pairs may come in any order and
    /// repeated exponents are merged. Empty input gives the zero polynomial.
    ///
    /// Every token is checked before any term is added.
    ///
    /// # Errors
    /// - [`PolynomialError::Format`] if a token is not a real number, an exponent
    ///   is not an integer, or the last pair is missing its exponent
    /// - [`PolynomialError::InvalidArgument`] if an exponent is negative
    pub fn parse(text: &str) -> Result<Self> {
        let tokens: Vec<&str> = text.split_whitespace().collect();
        for token in &tokens {
            token
                .parse::<f64>()
                .map_err(|_| format_error(token, "expected a real number"))?;
        }
        if tokens.len() % 2 != 0 {
            return Err(format_error("", "coefficient without an exponent"));
        }

        let pairs = tokens
            .chunks_exact(2)
            .map(|pair| {
                let coefficient = pair[0]
                    .parse::<f64>()
                    .map_err(|_| format_error(pair[0], "expected a real number"))?;
                let exponent = pair[1]
                    .parse::<i64>()
                    .map_err(|_| format_error(pair[1], "expected an integer exponent"))?;
                if exponent < 0 {
                    return Err(PolynomialError::InvalidArgument { exponent });
                }
                Ok((coefficient, exponent))
            })
            .collect::<Result<Vec<_>>>()?;

        let mut polynomial = Polynomial::zero();
        for (coefficient, exponent) in pairs {
            polynomial.add_term(coefficient, exponent)?;
        }
        debug!(
            pairs = tokens.len() / 2,
            terms = polynomial.terms(),
            "parsed polynomial"
        );
        Ok(polynomial)
    }

    /// Renders the polynomial back into the pair format accepted by
    /// [`Polynomial::parse`], highest exponent first. The zero polynomial gives
    /// an empty string.
    pub fn to_token_string(&self) -> String {
        self.iter()
            .map(|term| format!("{:?} {}", term.coefficient(), term.exponent()))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl FromStr for Polynomial {
    type Err = PolynomialError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

fn format_error(token: &str, reason: &'static str) -> PolynomialError {
    PolynomialError::Format {
        token: token.to_string(),
        reason,
    }
}
