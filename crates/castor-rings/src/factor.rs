//! Quotient rings R/I and the modular fields built from them.

use std::fmt;
use std::marker::PhantomData;

use castor_integers::ArithmeticError;

use crate::ideal::{Ideal, MaximalIdeal, PrincipalIdealZ};
use crate::integers::Z;
use crate::ops::{
    Associative, BinaryOp, Commutative, DistributesOver, HasIdentity, HasInverse, Monoid,
};
use crate::traits::{Field, Ring, UnitaryRing};

/// A quotient ring R/I.
///
/// Each element stores a single coset representative, recomputed through
/// `I::representative` after every arithmetic operation. Since the
/// representative is canonical, coset equality is representative
/// equality.
pub struct FactorRing<R: Ring, I: Ideal<R>> {
    repr: R,
    _ideal: PhantomData<I>,
}

/// A quotient that is a field.
///
/// Same representation as [`FactorRing`]; the field capabilities
/// (inverse, division) become available through the `I: MaximalIdeal<R>`
/// bound rather than through a separate type.
pub type FactorField<R, I> = FactorRing<R, I>;

/// The modular field (or ring, for composite `P`) Z/PZ.
pub type Zp<const P: u64> = FactorField<Z, PrincipalIdealZ<P>>;

/// Coset addition as an operation type.
pub struct FactorAdd<R, I>(PhantomData<(R, I)>);

/// Coset multiplication as an operation type.
pub struct FactorMul<R, I>(PhantomData<(R, I)>);

impl<R: Ring, I: Ideal<R>> FactorRing<R, I> {
    /// Wraps a ring element as the coset containing it.
    #[must_use]
    pub fn new(value: R) -> Self {
        Self {
            repr: I::representative(&value),
            _ideal: PhantomData,
        }
    }

    /// Returns the canonical representative of this coset.
    #[must_use]
    pub fn representative(&self) -> &R {
        &self.repr
    }

    /// Consumes the coset and returns its representative.
    #[must_use]
    pub fn into_representative(self) -> R {
        self.repr
    }
}

impl<R: Ring, I: MaximalIdeal<R>> FactorRing<R, I> {
    /// Computes the multiplicative inverse of this coset.
    ///
    /// # Errors
    ///
    /// Returns [`ArithmeticError::NotInvertible`] if the coset has no
    /// inverse.
    pub fn try_inverse(&self) -> Result<Self, ArithmeticError> {
        I::inverse(&self.repr).map(Self::new)
    }

    /// Divides by another coset via its inverse.
    ///
    /// # Errors
    ///
    /// Returns [`ArithmeticError::DivisionByZero`] for a zero divisor
    /// and [`ArithmeticError::NotInvertible`] for a non-zero divisor
    /// without an inverse.
    pub fn checked_div(&self, other: &Self) -> Result<Self, ArithmeticError> {
        if other.is_zero() {
            return Err(ArithmeticError::DivisionByZero(
                "division by the zero coset".to_string(),
            ));
        }
        Ok(self.clone() * other.try_inverse()?)
    }
}

impl<const N: u64> Zp<N> {
    /// Creates a modular element from a signed value, folding negatives
    /// into `[0, N)`.
    #[must_use]
    pub fn from_signed(value: i64) -> Self {
        Self::new(Z::new(value))
    }
}

impl<R: Ring, I: Ideal<R>> Clone for FactorRing<R, I> {
    fn clone(&self) -> Self {
        Self {
            repr: self.repr.clone(),
            _ideal: PhantomData,
        }
    }
}

impl<R: Ring, I: Ideal<R>> PartialEq for FactorRing<R, I> {
    fn eq(&self, other: &Self) -> bool {
        self.repr == other.repr
    }
}

impl<R: Ring + Eq, I: Ideal<R>> Eq for FactorRing<R, I> {}

impl<R: Ring, I: Ideal<R>> fmt::Debug for FactorRing<R, I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FactorRing({:?})", self.repr)
    }
}

impl<R: Ring + fmt::Display, I: Ideal<R>> fmt::Display for FactorRing<R, I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.repr)
    }
}

impl<R: Ring, I: Ideal<R>> BinaryOp<FactorRing<R, I>> for FactorAdd<R, I> {
    fn apply(lhs: &FactorRing<R, I>, rhs: &FactorRing<R, I>) -> FactorRing<R, I> {
        FactorRing::new(lhs.repr.clone() + rhs.repr.clone())
    }
}

impl<R, I> Associative for FactorAdd<R, I> {}
impl<R, I> Commutative for FactorAdd<R, I> {}

impl<R: Ring, I: Ideal<R>> HasIdentity<FactorRing<R, I>> for FactorAdd<R, I> {
    fn identity() -> FactorRing<R, I> {
        FactorRing::new(R::zero())
    }
}

impl<R: Ring, I: Ideal<R>> HasInverse<FactorRing<R, I>> for FactorAdd<R, I> {
    fn inverse(x: &FactorRing<R, I>) -> Option<FactorRing<R, I>> {
        Some(FactorRing::new(-x.repr.clone()))
    }
}

impl<R: Ring, I: Ideal<R>> BinaryOp<FactorRing<R, I>> for FactorMul<R, I> {
    fn apply(lhs: &FactorRing<R, I>, rhs: &FactorRing<R, I>) -> FactorRing<R, I> {
        FactorRing::new(lhs.repr.clone() * rhs.repr.clone())
    }
}

impl<R, I> Associative for FactorMul<R, I> {}
impl<R, I> Commutative for FactorMul<R, I> {}

impl<R, I> HasIdentity<FactorRing<R, I>> for FactorMul<R, I>
where
    R: UnitaryRing,
    R::MulOp: Monoid<R>,
    I: Ideal<R>,
{
    fn identity() -> FactorRing<R, I> {
        FactorRing::new(R::one())
    }
}

impl<R, I> HasInverse<FactorRing<R, I>> for FactorMul<R, I>
where
    R: UnitaryRing,
    R::MulOp: Monoid<R>,
    I: MaximalIdeal<R>,
{
    fn inverse(x: &FactorRing<R, I>) -> Option<FactorRing<R, I>> {
        I::inverse(&x.repr).ok().map(FactorRing::new)
    }
}

impl<R: Ring, I: Ideal<R>> DistributesOver<FactorRing<R, I>, FactorAdd<R, I>> for FactorMul<R, I> {}

impl<R: Ring, I: Ideal<R>> Ring for FactorRing<R, I> {
    type AddOp = FactorAdd<R, I>;
    type MulOp = FactorMul<R, I>;
}

impl<R, I> UnitaryRing for FactorRing<R, I>
where
    R: UnitaryRing,
    R::MulOp: Monoid<R>,
    I: Ideal<R>,
{
}

impl<R, I> Field for FactorRing<R, I>
where
    R: UnitaryRing,
    R::MulOp: Monoid<R>,
    I: MaximalIdeal<R>,
{
}

impl<R: Ring, I: Ideal<R>> std::ops::Add for FactorRing<R, I> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self::new(self.repr + rhs.repr)
    }
}

impl<R: Ring, I: Ideal<R>> std::ops::Sub for FactorRing<R, I> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self::new(self.repr - rhs.repr)
    }
}

impl<R: Ring, I: Ideal<R>> std::ops::Mul for FactorRing<R, I> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Self::new(self.repr * rhs.repr)
    }
}

impl<R: Ring, I: Ideal<R>> std::ops::Neg for FactorRing<R, I> {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self::new(-self.repr)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type Mod5 = Zp<5>;
    type Mod6 = Zp<6>;
    type Mod7 = Zp<7>;

    #[test]
    fn test_canonical_on_construction() {
        assert_eq!(Mod7::from_signed(9), Mod7::from_signed(2));
        assert_eq!(*Mod5::from_signed(-3).representative(), Z::new(2));
        assert_eq!(*Mod7::from_signed(-3).representative(), Z::new(4));
    }

    #[test]
    fn test_basic_ops() {
        let a = Mod7::from_signed(5);
        let b = Mod7::from_signed(4);

        // 5 + 4 = 9 = 2 (mod 7)
        assert_eq!(a.clone() + b.clone(), Mod7::from_signed(2));
        // 5 - 4 = 1
        assert_eq!(a.clone() - b.clone(), Mod7::from_signed(1));
        // 5 * 4 = 20 = 6 (mod 7)
        assert_eq!(a.clone() * b, Mod7::from_signed(6));
        assert_eq!(-a, Mod7::from_signed(2));
    }

    #[test]
    fn test_inverse() {
        // 3 * 5 = 15 = 1 (mod 7)
        let inv = Mod7::from_signed(3).try_inverse().unwrap();
        assert_eq!(inv, Mod7::from_signed(5));
        assert!(Mod7::from_signed(0).try_inverse().is_err());
    }

    #[test]
    fn test_field_law() {
        for v in 1..13 {
            let a = Zp::<13>::from_signed(v);
            let product = a.clone() * a.try_inverse().unwrap();
            assert!(product.is_one());
        }
    }

    #[test]
    fn test_field_trait_inv() {
        let a = Mod7::from_signed(3);
        assert_eq!(a.inv(), Some(Mod7::from_signed(5)));
        assert_eq!(Mod7::from_signed(0).inv(), None);
    }

    #[test]
    fn test_division() {
        let a = Mod7::from_signed(6);
        let b = Mod7::from_signed(4);
        // 6 / 4 = 6 * 2 = 12 = 5 (mod 7)
        assert_eq!(a.checked_div(&b).unwrap(), Mod7::from_signed(5));
        assert!(matches!(
            a.checked_div(&Mod7::from_signed(0)),
            Err(ArithmeticError::DivisionByZero(_))
        ));
    }

    #[test]
    fn test_composite_modulus() {
        // Z/6Z is a ring but not a field: 2 has no inverse.
        let two = Mod6::from_signed(2);
        assert!(matches!(
            two.try_inverse(),
            Err(ArithmeticError::NotInvertible(_))
        ));
        assert!(matches!(
            Mod6::from_signed(1).checked_div(&two),
            Err(ArithmeticError::NotInvertible(_))
        ));
        // Arithmetic still works.
        assert_eq!(two.clone() * Mod6::from_signed(5), Mod6::from_signed(4));
    }

    #[test]
    fn test_pow() {
        let a = Mod7::from_signed(3);
        // Fermat: a^(p-1) = 1 (mod p)
        assert!(a.pow(6).is_one());
        assert_eq!(a.pow(2), Mod7::from_signed(2));
    }

    #[test]
    fn test_display() {
        assert_eq!(Mod7::from_signed(-3).to_string(), "4");
    }
}
