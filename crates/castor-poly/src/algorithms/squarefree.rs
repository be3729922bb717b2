//! Square-free part of a polynomial.
//!
//! A polynomial is square-free when it has no repeated factors, which
//! over a field is equivalent to `gcd(f, f') = 1`.

use castor_integers::ArithmeticError;
use castor_rings::ops::AbelianGroup;
use castor_rings::traits::Field;

use crate::algorithms::gcd::{div_rem, poly_gcd};
use crate::dense::DensePoly;

/// Computes the square-free part `f / gcd(f, f')`.
///
/// Degree-0 polynomials are returned unchanged. A vanishing derivative
/// (possible only in positive characteristic) also leaves the input
/// unchanged.
///
/// # Errors
///
/// Propagates [`ArithmeticError`] from the underlying GCD and division.
pub fn squarefree_part<F>(f: &DensePoly<F>) -> Result<DensePoly<F>, ArithmeticError>
where
    F: Field,
    F::MulOp: AbelianGroup<F>,
{
    if f.degree() == 0 {
        return Ok(f.clone());
    }

    let f_prime = f.derivative();
    if f_prime.is_zero() {
        return Ok(f.clone());
    }

    let g = poly_gcd(f, &f_prime)?;
    if g.degree() == 0 {
        return Ok(f.clone());
    }

    let (part, _) = div_rem(f, &g)?;
    Ok(part)
}

/// Returns true if `f` has no repeated factors.
///
/// # Errors
///
/// Propagates [`ArithmeticError`] from the underlying GCD.
pub fn is_squarefree<F>(f: &DensePoly<F>) -> Result<bool, ArithmeticError>
where
    F: Field,
    F::MulOp: AbelianGroup<F>,
{
    if f.degree() == 0 {
        return Ok(true);
    }

    let f_prime = f.derivative();
    if f_prime.is_zero() {
        return Ok(false);
    }

    Ok(poly_gcd(f, &f_prime)?.degree() == 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use castor_rings::traits::UnitaryRing;
    use castor_rings::Q;

    fn q(n: i64) -> Q {
        Q::from_integer(n)
    }

    fn poly(coeffs: &[i64]) -> DensePoly<Q> {
        DensePoly::new(coeffs.iter().map(|&n| q(n)).collect())
    }

    #[test]
    fn test_linear_is_squarefree() {
        assert!(is_squarefree(&poly(&[-1, 1])).unwrap());
    }

    #[test]
    fn test_product_of_distinct_is_squarefree() {
        // (x - 1)(x - 2) = x^2 - 3x + 2
        assert!(is_squarefree(&poly(&[2, -3, 1])).unwrap());
    }

    #[test]
    fn test_square_is_not_squarefree() {
        // (x + 1)^2 = x^2 + 2x + 1
        assert!(!is_squarefree(&poly(&[1, 2, 1])).unwrap());
    }

    #[test]
    fn test_squarefree_part_of_square() {
        // (x + 1)^2 reduces to x + 1
        let part = squarefree_part(&poly(&[1, 2, 1])).unwrap();
        assert_eq!(part, poly(&[1, 1]));
    }

    #[test]
    fn test_squarefree_part_of_cube() {
        // (x + 1)^3 = x^3 + 3x^2 + 3x + 1 reduces to x + 1
        let part = squarefree_part(&poly(&[1, 3, 3, 1])).unwrap();
        assert_eq!(part, poly(&[1, 1]));
    }

    #[test]
    fn test_squarefree_part_keeps_distinct_factors() {
        // (x + 1)^2 (x - 1) = x^3 + x^2 - x - 1 reduces to x^2 - 1
        let part = squarefree_part(&poly(&[-1, -1, 1, 1])).unwrap();
        assert_eq!(part, poly(&[-1, 0, 1]));
        assert!(part.leading_coeff().is_one());
    }

    #[test]
    fn test_constant_unchanged() {
        let c = poly(&[5]);
        assert_eq!(squarefree_part(&c).unwrap(), c);
        assert!(is_squarefree(&c).unwrap());
    }
}
