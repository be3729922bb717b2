//! Arbitrary precision rational numbers.
//!
//! Fractions of an [`Integer`] numerator over a [`Natural`] denominator.
//! Reduction to lowest terms happens where the arithmetic calls for it,
//! never behind the caller's back: a freshly constructed `10/20` stays
//! `10/20` until [`Rational::reduced`] is asked for.

use num_traits::{One, Zero};
use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};
use std::str::FromStr;

use crate::error::ArithmeticError;
use crate::integer::Integer;
use crate::natural::Natural;

/// An arbitrary precision rational number.
///
/// The sign lives entirely in the numerator; the denominator is a strictly
/// positive [`Natural`]. The fraction is not kept in lowest terms
/// automatically; equality compares values by cross-multiplication, so
/// `10/20 == 1/2` even though the two are stored differently.
#[derive(Clone)]
pub struct Rational {
    numerator: Integer,
    denominator: Natural,
}

impl PartialEq for Rational {
    fn eq(&self, other: &Self) -> bool {
        if self.denominator == other.denominator {
            return self.numerator == other.numerator;
        }
        &self.numerator * &Integer::from(other.denominator.clone())
            == &other.numerator * &Integer::from(self.denominator.clone())
    }
}

impl Eq for Rational {}

impl Rational {
    /// Creates a new rational from numerator and denominator.
    ///
    /// # Errors
    ///
    /// Returns [`ArithmeticError::DivisionByZero`] if the denominator is
    /// zero.
    pub fn new(numerator: Integer, denominator: Natural) -> Result<Self, ArithmeticError> {
        if denominator.is_zero() {
            return Err(ArithmeticError::DivisionByZero(format!(
                "{numerator} / 0 is not a rational number"
            )));
        }
        Ok(Self {
            numerator,
            denominator,
        })
    }

    /// Creates a rational from an integer (denominator = 1).
    #[must_use]
    pub fn from_integer(n: Integer) -> Self {
        Self {
            numerator: n,
            denominator: Natural::one(),
        }
    }

    /// Creates a rational from i64 numerator and denominator.
    ///
    /// A negative denominator folds its sign into the numerator.
    ///
    /// # Errors
    ///
    /// Returns [`ArithmeticError::DivisionByZero`] if the denominator is
    /// zero.
    pub fn from_i64(numerator: i64, denominator: i64) -> Result<Self, ArithmeticError> {
        let numerator = if denominator < 0 {
            -Integer::new(numerator)
        } else {
            Integer::new(numerator)
        };
        Self::new(numerator, Natural::from(denominator.unsigned_abs()))
    }

    /// Returns the numerator.
    #[must_use]
    pub fn numerator(&self) -> &Integer {
        &self.numerator
    }

    /// Returns the denominator.
    #[must_use]
    pub fn denominator(&self) -> &Natural {
        &self.denominator
    }

    /// Returns true if the value is a whole number.
    ///
    /// Only a literal denominator of 1 counts; `4/2` must be reduced
    /// first.
    #[must_use]
    pub fn is_integer(&self) -> bool {
        self.denominator.is_one()
    }

    /// Returns this fraction in lowest terms.
    ///
    /// Zero reduces to `0/1`.
    #[must_use]
    pub fn reduced(&self) -> Self {
        if self.numerator.is_zero() {
            return Self::zero();
        }
        let g = self
            .numerator
            .magnitude()
            .gcd(&self.denominator)
            .expect("denominator is never zero");
        if g.is_one() {
            return self.clone();
        }
        let magnitude = self
            .numerator
            .magnitude()
            .checked_div(&g)
            .expect("gcd of nonzero operands is nonzero");
        let denominator = self
            .denominator
            .checked_div(&g)
            .expect("gcd of nonzero operands is nonzero");
        Self {
            numerator: Integer::from_parts(magnitude, self.numerator.is_negative()),
            denominator,
        }
    }

    /// Reduces this fraction to lowest terms in place.
    pub fn reduce(&mut self) {
        *self = self.reduced();
    }

    /// Returns the reciprocal in lowest terms.
    ///
    /// # Errors
    ///
    /// Returns [`ArithmeticError::DivisionByZero`] if the rational is
    /// zero.
    pub fn recip(&self) -> Result<Self, ArithmeticError> {
        if self.numerator.is_zero() {
            return Err(ArithmeticError::DivisionByZero(
                "zero has no reciprocal".to_string(),
            ));
        }
        let numerator = Integer::from_parts(
            self.denominator.clone(),
            self.numerator.is_negative(),
        );
        Ok(Self {
            numerator,
            denominator: self.numerator.magnitude().clone(),
        }
        .reduced())
    }

    /// Divides `self` by `other`.
    ///
    /// The result is in lowest terms.
    ///
    /// # Errors
    ///
    /// Returns [`ArithmeticError::DivisionByZero`] if `other` is zero.
    pub fn checked_div(&self, other: &Self) -> Result<Self, ArithmeticError> {
        if other.numerator.is_zero() {
            return Err(ArithmeticError::DivisionByZero(format!(
                "cannot divide {self} by zero"
            )));
        }
        let magnitude = self.numerator.magnitude() * other.denominator();
        let numerator = Integer::from_parts(
            magnitude,
            self.numerator.is_negative() != other.numerator.is_negative(),
        );
        let denominator = &self.denominator * other.numerator.magnitude();
        Ok(Self {
            numerator,
            denominator,
        }
        .reduced())
    }

    /// Returns the absolute value.
    #[must_use]
    pub fn abs(&self) -> Self {
        Self {
            numerator: self.numerator.abs(),
            denominator: self.denominator.clone(),
        }
    }

    /// Returns the sign: -1, 0, or 1.
    #[must_use]
    pub fn signum(&self) -> i8 {
        self.numerator.signum()
    }

    /// Returns true if negative.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.numerator.is_negative()
    }
}

impl Zero for Rational {
    fn zero() -> Self {
        Self {
            numerator: Integer::zero(),
            denominator: Natural::one(),
        }
    }

    fn is_zero(&self) -> bool {
        self.numerator.is_zero()
    }
}

impl One for Rational {
    fn one() -> Self {
        Self {
            numerator: Integer::one(),
            denominator: Natural::one(),
        }
    }

    fn is_one(&self) -> bool {
        !self.numerator.is_negative() && self.numerator.magnitude() == &self.denominator
    }
}

impl Default for Rational {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Debug for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Rational({self})")
    }
}

impl fmt::Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.numerator, self.denominator)
    }
}

impl FromStr for Rational {
    type Err = ArithmeticError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split_once('/') {
            Some((num, den)) => {
                let numerator: Integer = num.parse()?;
                let denominator: Natural = den.parse()?;
                Self::new(numerator, denominator)
            }
            None => {
                let numerator: Integer = s.parse()?;
                Ok(Self::from_integer(numerator))
            }
        }
    }
}

// Arithmetic operations
impl Add for Rational {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        &self + &rhs
    }
}

impl Add<&Rational> for Rational {
    type Output = Self;

    fn add(self, rhs: &Rational) -> Self::Output {
        &self + rhs
    }
}

impl Add for &Rational {
    type Output = Rational;

    fn add(self, rhs: Self) -> Self::Output {
        let denominator = self
            .denominator
            .lcm(&rhs.denominator)
            .expect("denominators are never zero");
        let left_scale = denominator
            .checked_div(&self.denominator)
            .expect("lcm is divisible by each denominator");
        let right_scale = denominator
            .checked_div(&rhs.denominator)
            .expect("lcm is divisible by each denominator");
        let numerator = &self.numerator * &Integer::from(left_scale)
            + &rhs.numerator * &Integer::from(right_scale);
        Rational {
            numerator,
            denominator,
        }
        .reduced()
    }
}

impl Sub for Rational {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        &self + &(-rhs)
    }
}

impl Sub<&Rational> for Rational {
    type Output = Self;

    fn sub(self, rhs: &Rational) -> Self::Output {
        &self + &(-rhs)
    }
}

impl Sub for &Rational {
    type Output = Rational;

    fn sub(self, rhs: Self) -> Self::Output {
        self + &(-rhs)
    }
}

impl Mul for Rational {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        &self * &rhs
    }
}

impl Mul<&Rational> for Rational {
    type Output = Self;

    fn mul(self, rhs: &Rational) -> Self::Output {
        &self * rhs
    }
}

impl Mul for &Rational {
    type Output = Rational;

    fn mul(self, rhs: Self) -> Self::Output {
        let numerator = &self.numerator * &rhs.numerator;
        let denominator = &self.denominator * &rhs.denominator;
        Rational {
            numerator,
            denominator,
        }
        .reduced()
    }
}

impl Neg for Rational {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self {
            numerator: -self.numerator,
            denominator: self.denominator,
        }
    }
}

impl Neg for &Rational {
    type Output = Rational;

    fn neg(self) -> Self::Output {
        Rational {
            numerator: -&self.numerator,
            denominator: self.denominator.clone(),
        }
    }
}

impl From<Integer> for Rational {
    fn from(n: Integer) -> Self {
        Self::from_integer(n)
    }
}

impl From<i64> for Rational {
    fn from(n: i64) -> Self {
        Self::from_integer(Integer::new(n))
    }
}
