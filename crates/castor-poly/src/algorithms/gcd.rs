//! Polynomial division and GCD over a field.

use castor_integers::ArithmeticError;
use castor_rings::ops::AbelianGroup;
use castor_rings::traits::Field;

use crate::dense::DensePoly;

/// Divides `a` by `b`, returning `(quotient, remainder)`.
///
/// Long division through the inverse of the divisor's leading
/// coefficient. When `deg a < deg b` the quotient is zero and the
/// remainder is `a`.
///
/// # Errors
///
/// Returns [`ArithmeticError::DivisionByZero`] when `b` is the zero
/// polynomial.
pub fn div_rem<F>(
    a: &DensePoly<F>,
    b: &DensePoly<F>,
) -> Result<(DensePoly<F>, DensePoly<F>), ArithmeticError>
where
    F: Field,
    F::MulOp: AbelianGroup<F>,
{
    if b.is_zero() {
        return Err(ArithmeticError::DivisionByZero(
            "division by the zero polynomial".to_string(),
        ));
    }

    if a.degree() < b.degree() {
        return Ok((DensePoly::zero(), a.clone()));
    }

    let lead_inv = b
        .leading_coeff()
        .inv()
        .expect("leading coefficient of a non-zero divisor is invertible");

    let mut quotient = vec![F::zero(); a.degree() - b.degree() + 1];
    let mut remainder = a.coeffs().to_vec();

    while remainder.len() >= b.coeffs().len() {
        let deg_diff = remainder.len() - b.coeffs().len();
        let coeff = remainder
            .last()
            .expect("remainder is never empty")
            .clone()
            * lead_inv.clone();

        quotient[deg_diff] = coeff.clone();

        for (i, bc) in b.coeffs().iter().enumerate() {
            remainder[deg_diff + i] =
                remainder[deg_diff + i].clone() - coeff.clone() * bc.clone();
        }

        while remainder.len() > 1 && remainder.last().is_some_and(F::is_zero) {
            remainder.pop();
        }

        if remainder.len() == 1 && remainder[0].is_zero() {
            break;
        }
    }

    Ok((DensePoly::new(quotient), DensePoly::new(remainder)))
}

/// Computes the monic GCD of two polynomials by the Euclidean
/// remainder loop.
///
/// # Errors
///
/// Returns [`ArithmeticError::DivisionByZero`] when either input is the
/// zero polynomial.
pub fn poly_gcd<F>(
    a: &DensePoly<F>,
    b: &DensePoly<F>,
) -> Result<DensePoly<F>, ArithmeticError>
where
    F: Field,
    F::MulOp: AbelianGroup<F>,
{
    if a.is_zero() || b.is_zero() {
        return Err(ArithmeticError::DivisionByZero(
            "polynomial gcd of the zero polynomial is undefined".to_string(),
        ));
    }

    let mut p = a.clone();
    let mut q = b.clone();

    while !q.is_zero() {
        let (_, r) = div_rem(&p, &q)?;
        p = q;
        q = r;
    }

    Ok(make_monic(&p))
}

/// Scales a polynomial so its leading coefficient becomes one.
///
/// The zero polynomial is returned unchanged.
#[must_use]
pub fn make_monic<F>(p: &DensePoly<F>) -> DensePoly<F>
where
    F: Field,
    F::MulOp: AbelianGroup<F>,
{
    if p.is_zero() {
        return p.clone();
    }

    let lead_inv = p
        .leading_coeff()
        .inv()
        .expect("leading coefficient of a non-zero polynomial is invertible");
    p.scale(&lead_inv)
}
