//! The field of rational numbers Q.

use std::fmt;

use castor_integers::{ArithmeticError, Rational};
use num_traits::{One, Zero};

use crate::ops::{Associative, BinaryOp, Commutative, DistributesOver, HasIdentity, HasInverse};
use crate::traits::{Field, Ring, SignedRing, UnitaryRing};

/// The field of rational numbers.
///
/// This is a wrapper around `castor_integers::Rational` that ties the
/// arithmetic to the algebraic framework.
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct Q(pub Rational);

/// Rational addition as an operation type.
pub struct QAdd;

/// Rational multiplication as an operation type.
pub struct QMul;

impl BinaryOp<Q> for QAdd {
    fn apply(lhs: &Q, rhs: &Q) -> Q {
        Q(&lhs.0 + &rhs.0)
    }
}

impl Associative for QAdd {}
impl Commutative for QAdd {}

impl HasIdentity<Q> for QAdd {
    fn identity() -> Q {
        Q(Rational::zero())
    }
}

impl HasInverse<Q> for QAdd {
    fn inverse(x: &Q) -> Option<Q> {
        Some(Q(-&x.0))
    }
}

impl BinaryOp<Q> for QMul {
    fn apply(lhs: &Q, rhs: &Q) -> Q {
        Q(&lhs.0 * &rhs.0)
    }
}

impl Associative for QMul {}
impl Commutative for QMul {}

impl HasIdentity<Q> for QMul {
    fn identity() -> Q {
        Q(Rational::one())
    }
}

impl HasInverse<Q> for QMul {
    fn inverse(x: &Q) -> Option<Q> {
        x.0.recip().ok().map(Q)
    }
}

impl DistributesOver<Q, QAdd> for QMul {}

impl Q {
    /// Creates a new rational from numerator and denominator.
    ///
    /// # Errors
    ///
    /// Returns [`ArithmeticError::DivisionByZero`] if the denominator is
    /// zero.
    pub fn new(num: i64, den: i64) -> Result<Self, ArithmeticError> {
        Rational::from_i64(num, den).map(Self)
    }

    /// Creates a rational from an integer.
    #[must_use]
    pub fn from_integer(n: i64) -> Self {
        Self(Rational::from(n))
    }

    /// Returns the inner Rational.
    #[must_use]
    pub fn into_inner(self) -> Rational {
        self.0
    }

    /// Returns a reference to the inner Rational.
    #[must_use]
    pub fn as_inner(&self) -> &Rational {
        &self.0
    }
}

impl Ring for Q {
    type AddOp = QAdd;
    type MulOp = QMul;
}

impl UnitaryRing for Q {}

impl Field for Q {}

impl SignedRing for Q {
    fn abs(&self) -> Self {
        Self(self.0.abs())
    }

    fn signum(&self) -> i8 {
        self.0.signum()
    }
}

impl std::ops::Add for Q {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl std::ops::Sub for Q {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

impl std::ops::Mul for Q {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Self(self.0 * rhs.0)
    }
}

impl std::ops::Neg for Q {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self(-self.0)
    }
}

impl From<i64> for Q {
    fn from(value: i64) -> Self {
        Self::from_integer(value)
    }
}

impl From<Rational> for Q {
    fn from(value: Rational) -> Self {
        Self(value)
    }
}

impl fmt::Display for Q {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
