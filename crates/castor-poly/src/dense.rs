//! Dense univariate polynomials.
//!
//! Coefficients are stored in ascending-degree order, so `coeffs[i]` is
//! the coefficient of `x^i`. The representation is canonical: trailing
//! zero coefficients are trimmed on construction, and the zero
//! polynomial is the single coefficient `[0]`.

use castor_integers::ArithmeticError;
use castor_rings::ops::Monoid;
use castor_rings::traits::{Ring, UnitaryRing};

/// A dense univariate polynomial with coefficients in `R`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DensePoly<R: Ring> {
    coeffs: Vec<R>,
}

impl<R: Ring> DensePoly<R> {
    /// Creates a polynomial from ascending-degree coefficients.
    ///
    /// Trailing zeros are trimmed; an empty vector produces the zero
    /// polynomial.
    #[must_use]
    pub fn new(mut coeffs: Vec<R>) -> Self {
        while coeffs.len() > 1 && coeffs.last().is_some_and(Ring::is_zero) {
            coeffs.pop();
        }
        if coeffs.is_empty() {
            coeffs.push(R::zero());
        }
        Self { coeffs }
    }

    /// Returns the zero polynomial.
    #[must_use]
    pub fn zero() -> Self {
        Self {
            coeffs: vec![R::zero()],
        }
    }

    /// Returns the constant polynomial `c`.
    #[must_use]
    pub fn constant(c: R) -> Self {
        Self::new(vec![c])
    }

    /// Returns `coeff * x^degree`.
    #[must_use]
    pub fn monomial(coeff: R, degree: usize) -> Self {
        if coeff.is_zero() {
            return Self::zero();
        }
        let mut coeffs = vec![R::zero(); degree];
        coeffs.push(coeff);
        Self { coeffs }
    }

    /// Returns the degree of the polynomial.
    ///
    /// The zero polynomial reports degree 0, like any constant.
    #[must_use]
    pub fn degree(&self) -> usize {
        self.coeffs.len() - 1
    }

    /// Returns true if this is the zero polynomial.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.coeffs.len() == 1 && self.coeffs[0].is_zero()
    }

    /// Returns the leading coefficient.
    #[must_use]
    pub fn leading_coeff(&self) -> &R {
        self.coeffs.last().expect("coefficient vector is never empty")
    }

    /// Returns the coefficient of `x^i`, or zero beyond the degree.
    #[must_use]
    pub fn coeff(&self, i: usize) -> R {
        self.coeffs.get(i).cloned().unwrap_or_else(R::zero)
    }

    /// Returns a reference to the coefficient of `x^i`.
    ///
    /// # Errors
    ///
    /// Returns [`ArithmeticError::IndexOutOfBounds`] when `i` exceeds
    /// the degree.
    pub fn coeff_checked(&self, i: usize) -> Result<&R, ArithmeticError> {
        self.coeffs.get(i).ok_or_else(|| {
            ArithmeticError::IndexOutOfBounds(format!(
                "coefficient index {i} exceeds degree {}",
                self.degree()
            ))
        })
    }

    /// Returns the coefficients in ascending-degree order.
    #[must_use]
    pub fn coeffs(&self) -> &[R] {
        &self.coeffs
    }

    /// Evaluates the polynomial at `point` by Horner's scheme.
    #[must_use]
    pub fn eval(&self, point: &R) -> R {
        let mut acc = R::zero();
        for c in self.coeffs.iter().rev() {
            acc = acc * point.clone() + c.clone();
        }
        acc
    }

    /// Adds two polynomials.
    #[must_use]
    pub fn add(&self, other: &Self) -> Self {
        let (longer, shorter) = if self.coeffs.len() >= other.coeffs.len() {
            (self, other)
        } else {
            (other, self)
        };
        let mut coeffs = longer.coeffs.clone();
        for (i, c) in shorter.coeffs.iter().enumerate() {
            coeffs[i] = coeffs[i].clone() + c.clone();
        }
        Self::new(coeffs)
    }

    /// Negates every coefficient.
    #[must_use]
    pub fn neg(&self) -> Self {
        Self::new(self.coeffs.iter().map(|c| -c.clone()).collect())
    }

    /// Subtracts `other` from this polynomial.
    #[must_use]
    pub fn sub(&self, other: &Self) -> Self {
        self.add(&other.neg())
    }

    /// Multiplies every coefficient by `factor`.
    #[must_use]
    pub fn scale(&self, factor: &R) -> Self {
        if factor.is_zero() {
            return Self::zero();
        }
        Self::new(
            self.coeffs
                .iter()
                .map(|c| c.clone() * factor.clone())
                .collect(),
        )
    }

    /// Multiplies by `x^k`, prepending `k` zero coefficients.
    ///
    /// # Errors
    ///
    /// Returns [`ArithmeticError::AllocationFailure`] if the shifted
    /// coefficient vector cannot be reserved.
    pub fn shift(&self, k: usize) -> Result<Self, ArithmeticError> {
        if self.is_zero() || k == 0 {
            return Ok(self.clone());
        }
        if self.coeffs.len() > usize::MAX - k {
            return Err(ArithmeticError::AllocationFailure(format!(
                "shift by {k} overflows the coefficient count"
            )));
        }
        let len = self.coeffs.len() + k;
        let mut coeffs = Vec::new();
        coeffs.try_reserve_exact(len).map_err(|_| {
            ArithmeticError::AllocationFailure(format!(
                "cannot reserve {len} coefficients for a shifted polynomial"
            ))
        })?;
        coeffs.resize(k, R::zero());
        coeffs.extend(self.coeffs.iter().cloned());
        Ok(Self { coeffs })
    }

    /// Multiplies two polynomials by schoolbook convolution.
    ///
    /// Zero coefficients on either side are skipped.
    ///
    /// # Errors
    ///
    /// Returns [`ArithmeticError::AllocationFailure`] if the product's
    /// coefficient vector cannot be reserved.
    pub fn mul(&self, other: &Self) -> Result<Self, ArithmeticError> {
        if self.is_zero() || other.is_zero() {
            return Ok(Self::zero());
        }

        let len = self.coeffs.len() + other.coeffs.len() - 1;
        let mut coeffs = Vec::new();
        coeffs.try_reserve_exact(len).map_err(|_| {
            ArithmeticError::AllocationFailure(format!(
                "cannot reserve {len} coefficients for a polynomial product"
            ))
        })?;
        coeffs.resize(len, R::zero());

        for (i, a) in self.coeffs.iter().enumerate() {
            if a.is_zero() {
                continue;
            }
            for (j, b) in other.coeffs.iter().enumerate() {
                if b.is_zero() {
                    continue;
                }
                coeffs[i + j] = coeffs[i + j].clone() + a.clone() * b.clone();
            }
        }

        Ok(Self::new(coeffs))
    }

    /// Returns the formal derivative.
    ///
    /// The coefficient of `x^(i-1)` is `i * coeffs[i]`, computed through
    /// scalar multiplication so no `UnitaryRing` bound is needed.
    /// Constants differentiate to the zero polynomial.
    #[must_use]
    pub fn derivative(&self) -> Self {
        if self.coeffs.len() == 1 {
            return Self::zero();
        }
        let coeffs = self
            .coeffs
            .iter()
            .enumerate()
            .skip(1)
            .map(|(i, c)| {
                c.mul_by_scalar(i64::try_from(i).expect("polynomial degree fits in i64"))
            })
            .collect();
        Self::new(coeffs)
    }
}

impl<R> DensePoly<R>
where
    R: UnitaryRing,
    R::MulOp: Monoid<R>,
{
    /// Returns the constant polynomial `1`.
    #[must_use]
    pub fn one() -> Self {
        Self::constant(R::one())
    }

    /// Returns the monic monomial `x`.
    #[must_use]
    pub fn x() -> Self {
        Self {
            coeffs: vec![R::zero(), R::one()],
        }
    }

    /// Raises the polynomial to the `n`-th power by binary
    /// exponentiation.
    ///
    /// # Errors
    ///
    /// Returns [`ArithmeticError::AllocationFailure`] if an intermediate
    /// product cannot be allocated.
    pub fn pow(&self, n: u32) -> Result<Self, ArithmeticError> {
        let mut base = self.clone();
        let mut result = Self::one();
        let mut exp = n;
        while exp > 0 {
            if exp & 1 == 1 {
                result = result.mul(&base)?;
            }
            exp >>= 1;
            if exp > 0 {
                base = base.mul(&base)?;
            }
        }
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use castor_integers::ArithmeticError;
    use castor_rings::Q;

    fn q(n: i64) -> Q {
        Q::from_integer(n)
    }

    fn poly(coeffs: &[i64]) -> DensePoly<Q> {
        DensePoly::new(coeffs.iter().map(|&n| q(n)).collect())
    }

    #[test]
    fn test_new_trims_trailing_zeros() {
        let p = poly(&[1, 2, 0, 0]);
        assert_eq!(p.degree(), 1);
        assert_eq!(p.coeffs().len(), 2);
        // A vector of zeros collapses to the canonical zero polynomial.
        assert!(poly(&[0, 0, 0]).is_zero());
        assert!(DensePoly::<Q>::new(Vec::new()).is_zero());
    }

    #[test]
    fn test_constants_and_monomials() {
        assert!(DensePoly::<Q>::zero().is_zero());
        assert!(DensePoly::<Q>::one().eval(&q(5)) == q(1));
        assert_eq!(DensePoly::constant(q(3)).degree(), 0);

        let m = DensePoly::monomial(q(2), 3); // 2x^3
        assert_eq!(m.degree(), 3);
        assert_eq!(m.coeff(3), q(2));
        assert!(DensePoly::monomial(q(0), 5).is_zero());

        let x = DensePoly::<Q>::x();
        assert_eq!(x.degree(), 1);
        assert_eq!(x.eval(&q(7)), q(7));
    }

    #[test]
    fn test_coeff_is_zero_padded() {
        let p = poly(&[1, 2]);
        assert_eq!(p.coeff(0), q(1));
        assert_eq!(p.coeff(10), q(0));
    }

    #[test]
    fn test_coeff_checked() {
        let p = poly(&[1, 2]);
        assert_eq!(p.coeff_checked(1).unwrap(), &q(2));
        assert!(matches!(
            p.coeff_checked(2),
            Err(ArithmeticError::IndexOutOfBounds(_))
        ));
    }

    #[test]
    fn test_add_sub() {
        let a = poly(&[1, 2, 3]);
        let b = poly(&[4, 5]);
        assert_eq!(a.add(&b), poly(&[5, 7, 3]));
        assert_eq!(a.sub(&b), poly(&[-3, -3, 3]));
        // Leading terms cancel down to the canonical form.
        assert_eq!(a.sub(&poly(&[0, 0, 3])), poly(&[1, 2]));
        assert!(a.sub(&a).is_zero());
    }

    #[test]
    fn test_mul() {
        // (1 + x)(1 - x) = 1 - x^2
        let a = poly(&[1, 1]);
        let b = poly(&[1, -1]);
        assert_eq!(a.mul(&b).unwrap(), poly(&[1, 0, -1]));

        assert!(a.mul(&DensePoly::zero()).unwrap().is_zero());
    }

    #[test]
    fn test_scale() {
        let p = poly(&[1, 2, 3]);
        assert_eq!(p.scale(&q(2)), poly(&[2, 4, 6]));
        assert!(p.scale(&q(0)).is_zero());
    }

    #[test]
    fn test_shift() {
        let p = poly(&[1, 2]);
        // (1 + 2x) * x^2 = x^2 + 2x^3
        assert_eq!(p.shift(2).unwrap(), poly(&[0, 0, 1, 2]));
        assert_eq!(p.shift(0).unwrap(), p);
        assert!(DensePoly::<Q>::zero().shift(4).unwrap().is_zero());
    }

    #[test]
    fn test_derivative() {
        // d/dx (4 + 3x + 2x^2 + x^3) = 3 + 4x + 3x^2
        let p = poly(&[4, 3, 2, 1]);
        assert_eq!(p.derivative(), poly(&[3, 4, 3]));
        assert!(poly(&[7]).derivative().is_zero());
    }

    #[test]
    fn test_eval_horner() {
        // p(x) = 2 - x + x^2, p(3) = 2 - 3 + 9 = 8
        let p = poly(&[2, -1, 1]);
        assert_eq!(p.eval(&q(3)), q(8));
        assert_eq!(p.eval(&q(0)), q(2));
    }

    #[test]
    fn test_pow() {
        // (1 + x)^3 = 1 + 3x + 3x^2 + x^3
        let p = poly(&[1, 1]);
        assert_eq!(p.pow(3).unwrap(), poly(&[1, 3, 3, 1]));
        assert_eq!(p.pow(0).unwrap(), DensePoly::one());
    }
}
