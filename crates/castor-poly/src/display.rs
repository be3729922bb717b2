//! Human-readable rendering of dense polynomials.
//!
//! Terms are printed in descending degree joined with ` + ` / ` - `,
//! zero terms are skipped, and a coefficient of magnitude one is
//! omitted on non-constant terms (`x^2`, not `1*x^2`).

use std::fmt::{self, Write as _};

use num_traits::One;

use castor_rings::traits::{Ring, SignedRing, UnitaryRing};
use castor_rings::{Q, Z};

use crate::dense::DensePoly;

/// Coefficient rendering hooks used by the polynomial `Display` impl.
///
/// The sign is handled by the term separator, so implementors only
/// render the magnitude.
pub trait CoefficientDisplay: SignedRing {
    /// Renders the absolute value of the coefficient.
    fn magnitude_str(&self) -> String;

    /// Returns true if the absolute value equals one.
    fn is_unit_magnitude(&self) -> bool;
}

impl CoefficientDisplay for Z {
    fn magnitude_str(&self) -> String {
        self.0.magnitude().to_string()
    }

    fn is_unit_magnitude(&self) -> bool {
        self.abs().is_one()
    }
}

impl CoefficientDisplay for Q {
    /// Integer-valued rationals render without the `/1`.
    fn magnitude_str(&self) -> String {
        let r = self.0.abs().reduced();
        if r.denominator().is_one() {
            r.numerator().to_string()
        } else {
            r.to_string()
        }
    }

    fn is_unit_magnitude(&self) -> bool {
        self.abs().is_one()
    }
}

impl<R: CoefficientDisplay> fmt::Display for DensePoly<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let coeffs = self.coeffs();
        let top = coeffs.len() - 1;
        let mut out = String::new();

        for (i, coeff) in coeffs.iter().enumerate().rev() {
            if coeff.is_zero() && !(i == 0 && top == 0) {
                continue;
            }

            if i != top {
                out.push_str(if coeff.is_negative() { " - " } else { " + " });
            } else if coeff.is_negative() {
                out.push('-');
            }

            let unit = coeff.is_unit_magnitude();
            if !(unit && i > 0) {
                out.push_str(&coeff.magnitude_str());
            }

            if i > 0 {
                if !unit {
                    out.push('*');
                }
                out.push('x');
                if i > 1 {
                    write!(out, "^{i}")?;
                }
            }
        }

        if out.is_empty() {
            out.push('0');
        }
        f.write_str(&out)
    }
}
