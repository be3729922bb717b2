//! Content extraction for rational-coefficient polynomials.

use castor_integers::{ArithmeticError, Integer, Natural, Rational};
use castor_rings::traits::Ring;
use castor_rings::Q;

use crate::dense::DensePoly;

/// Scales a polynomial so its coefficients become coprime integers.
///
/// With `g` the GCD of all numerator magnitudes and `l` the LCM of all
/// denominators, the result is `p * (l/g)`. Zero coefficients do not
/// participate in either accumulator.
///
/// # Errors
///
/// Returns [`ArithmeticError::DivisionByZero`] for the zero polynomial.
pub fn factor_out(p: &DensePoly<Q>) -> Result<DensePoly<Q>, ArithmeticError> {
    if p.is_zero() {
        return Err(ArithmeticError::DivisionByZero(
            "cannot factor out the content of the zero polynomial".to_string(),
        ));
    }

    let mut gcd_num: Option<Natural> = None;
    let mut lcm_den: Option<Natural> = None;

    for c in p.coeffs() {
        if c.is_zero() {
            continue;
        }
        let num = c.0.numerator().magnitude().clone();
        let den = c.0.denominator().clone();
        gcd_num = Some(match gcd_num {
            Some(g) => g.gcd(&num)?,
            None => num,
        });
        lcm_den = Some(match lcm_den {
            Some(l) => l.lcm(&den)?,
            None => den,
        });
    }

    let g = gcd_num.expect("a non-zero polynomial has a non-zero coefficient");
    let l = lcm_den.expect("a non-zero polynomial has a non-zero coefficient");

    let multiplier = Q(Rational::new(Integer::from(l), g)?);
    Ok(p.scale(&multiplier))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn q(num: i64, den: i64) -> Q {
        Q::new(num, den).unwrap()
    }

    #[test]
    fn test_integer_coefficients() {
        // 2 + 4x + 6x^2 scales by 1/2 to 1 + 2x + 3x^2
        let p = DensePoly::new(vec![q(2, 1), q(4, 1), q(6, 1)]);
        let out = factor_out(&p).unwrap();
        assert_eq!(
            out,
            DensePoly::new(vec![q(1, 1), q(2, 1), q(3, 1)])
        );
    }

    #[test]
    fn test_rational_coefficients() {
        // 1/2 + 3/4 x: g = gcd(1, 3) = 1, l = lcm(2, 4) = 4, scale by 4
        let p = DensePoly::new(vec![q(1, 2), q(3, 4)]);
        let out = factor_out(&p).unwrap();
        assert_eq!(out, DensePoly::new(vec![q(2, 1), q(3, 1)]));
    }

    #[test]
    fn test_mixed_with_common_factor() {
        // 2/3 + 4/3 x: g = 2, l = 3, scale by 3/2 gives 1 + 2x
        let p = DensePoly::new(vec![q(2, 3), q(4, 3)]);
        let out = factor_out(&p).unwrap();
        assert_eq!(out, DensePoly::new(vec![q(1, 1), q(2, 1)]));
    }

    #[test]
    fn test_zero_coefficients_are_skipped() {
        // 2 + 0x + 4x^2 scales by 1/2
        let p = DensePoly::new(vec![q(2, 1), q(0, 1), q(4, 1)]);
        let out = factor_out(&p).unwrap();
        assert_eq!(
            out,
            DensePoly::new(vec![q(1, 1), q(0, 1), q(2, 1)])
        );
    }

    #[test]
    fn test_negative_leading() {
        // -4 + 6x: g = 2, l = 1, scale by 1/2 gives -2 + 3x
        let p = DensePoly::new(vec![q(-4, 1), q(6, 1)]);
        let out = factor_out(&p).unwrap();
        assert_eq!(out, DensePoly::new(vec![q(-2, 1), q(3, 1)]));
    }

    #[test]
    fn test_zero_polynomial_fails() {
        assert!(matches!(
            factor_out(&DensePoly::zero()),
            Err(ArithmeticError::DivisionByZero(_))
        ));
    }
}
