use std::fmt::{self, Display, Formatter};

use super::{term::Term, Polynomial};

// Coefficients use the shortest round-trip `f64` form, so whole numbers keep
// their trailing `.0` ("3.0", "-0.5", "1e20").

impl Display for Polynomial {
    /// Conventional notation, highest power first: `3.0x^5 - x^2 + x + 9.0`.
    /// The zero polynomial renders as `0.0`.
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let mut terms = self.iter();
        let leading = match terms.next() {
            Some(term) => term,
            None => return f.write_str("0.0"),
        };
        write_leading(f, leading)?;
        for term in terms {
            write_trailing(f, term)?;
        }
        Ok(())
    }
}

fn write_leading(f: &mut Formatter<'_>, term: &Term) -> fmt::Result {
    if term.exponent == 0 {
        return write!(f, "{:?}", term.coefficient);
    }
    match term.coefficient {
        c if c == 1.0 => f.write_str("x")?,
        c if c == -1.0 => f.write_str("-x")?,
        c => write!(f, "{c:?}x")?,
    }
    write_power(f, term.exponent)
}

fn write_trailing(f: &mut Formatter<'_>, term: &Term) -> fmt::Result {
    f.write_str(if term.coefficient < 0.0 { " - " } else { " + " })?;
    let magnitude = term.coefficient.abs();
    if term.exponent == 0 {
        return write!(f, "{magnitude:?}");
    }
    if magnitude != 1.0 {
        write!(f, "{magnitude:?}")?;
    }
    f.write_str("x")?;
    write_power(f, term.exponent)
}

fn write_power(f: &mut Formatter<'_>, exponent: u64) -> fmt::Result {
    if exponent > 1 {
        write!(f, "^{exponent}")?;
    }
    Ok(())
}

impl Polynomial {
    /// One line per term in ascending exponent order, e.g.
    ///
    /// ```text
    /// constant term 9.0
    /// exponent 1, coefficient 1.0
    /// exponent 5, coefficient 3.0
    /// ```
    ///
    /// The zero polynomial is described as `0.0`.
    pub fn description(&self) -> String {
        if self.is_zero() {
            return "0.0".to_string();
        }
        self.iter()
            .rev()
            .map(|term| match term.exponent {
                0 => format!("constant term {:?}", term.coefficient),
                exponent => format!("exponent {exponent}, coefficient {:?}", term.coefficient),
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}
