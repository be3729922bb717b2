//! Element-level algebraic traits.
//!
//! These traits connect a carrier type to the operation types of
//! [`crate::ops`]. A type is a [`Ring`] by naming its addition and
//! multiplication operations; the bounds on those associated types state
//! the required structure, and stronger structures ([`UnitaryRing`],
//! [`Field`]) are expressed as stronger bounds on the same operations
//! rather than new carrier types.

use std::fmt::Debug;
use std::ops::{Add, Mul, Neg, Sub};

use crate::ops::{AbelianGroup, DistributesOver, HasIdentity, HasInverse, Monoid, Semigroup};

/// A ring: an abelian group under addition and a semigroup under
/// multiplication, with multiplication distributing over addition.
///
/// # Laws
///
/// - `AddOp` is associative and commutative with identity `zero()`
/// - Every element has an additive inverse (`neg`)
/// - `MulOp` is associative and distributes over `AddOp`
///
/// The operator supertraits must agree with the operation types:
/// `a + b == AddOp::apply(&a, &b)` and likewise for `*`.
pub trait Ring:
    Clone
    + PartialEq
    + Debug
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Neg<Output = Self>
{
    /// The additive operation.
    type AddOp: AbelianGroup<Self>;

    /// The multiplicative operation.
    type MulOp: Semigroup<Self> + DistributesOver<Self, Self::AddOp>;

    /// The additive identity.
    fn zero() -> Self {
        <Self::AddOp as HasIdentity<Self>>::identity()
    }

    /// Returns true if this is the additive identity.
    fn is_zero(&self) -> bool {
        *self == Self::zero()
    }

    /// Computes self + self + ... (n times).
    fn mul_by_scalar(&self, n: i64) -> Self {
        if n == 0 {
            return Self::zero();
        }

        let mut result = self.clone();
        let abs_n = n.unsigned_abs();

        for _ in 1..abs_n {
            result = result + self.clone();
        }

        if n < 0 {
            -result
        } else {
            result
        }
    }
}

/// A ring whose multiplication is a monoid, so a multiplicative
/// identity exists.
pub trait UnitaryRing: Ring
where
    Self::MulOp: Monoid<Self>,
{
    /// The multiplicative identity.
    fn one() -> Self {
        <Self::MulOp as HasIdentity<Self>>::identity()
    }

    /// Returns true if this is the multiplicative identity.
    fn is_one(&self) -> bool {
        *self == Self::one()
    }

    /// Computes self^n for non-negative n by binary exponentiation.
    fn pow(&self, n: u32) -> Self {
        if n == 0 {
            return Self::one();
        }

        let mut result = Self::one();
        let mut base = self.clone();
        let mut exp = n;

        while exp > 0 {
            if exp & 1 == 1 {
                result = result * base.clone();
            }
            base = base.clone() * base;
            exp >>= 1;
        }

        result
    }
}

/// A unitary ring whose non-zero elements form an abelian group under
/// multiplication.
pub trait Field: UnitaryRing
where
    Self::MulOp: AbelianGroup<Self>,
{
    /// Computes the multiplicative inverse.
    ///
    /// Returns `None` if the element is zero (or otherwise not
    /// invertible).
    fn inv(&self) -> Option<Self> {
        <Self::MulOp as HasInverse<Self>>::inverse(self)
    }

    /// Divides by another element.
    ///
    /// # Panics
    ///
    /// Panics if `other` is not invertible.
    fn field_div(&self, other: &Self) -> Self {
        self.clone() * other.inv().expect("division by non-invertible element")
    }
}

/// A ring with a notion of sign and magnitude.
pub trait SignedRing: Ring {
    /// Returns the absolute value.
    fn abs(&self) -> Self;

    /// Returns the sign: -1, 0, or 1.
    fn signum(&self) -> i8;

    /// Returns true if the element is strictly negative.
    fn is_negative(&self) -> bool {
        self.signum() < 0
    }
}
