//! Arbitrary precision signed integers.
//!
//! This module layers a sign over [`Natural`], with truncating division
//! and a remainder that is always non-negative.

use num_traits::{One, Zero};
use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};
use std::str::FromStr;

use crate::error::ArithmeticError;
use crate::natural::Natural;

/// An arbitrary precision signed integer.
///
/// Stored as a magnitude and a sign flag. Zero is never negative; every
/// constructor normalizes `-0` to `0`, so equality is derived.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Integer {
    magnitude: Natural,
    negative: bool,
}

impl Integer {
    /// Creates a new integer from an i64.
    #[must_use]
    pub fn new(value: i64) -> Self {
        Self::from_parts(Natural::from(value.unsigned_abs()), value < 0)
    }

    /// Assembles an integer from magnitude and sign, normalizing zero.
    #[must_use]
    pub fn from_parts(magnitude: Natural, negative: bool) -> Self {
        let negative = negative && !magnitude.is_zero();
        Self {
            magnitude,
            negative,
        }
    }

    /// Returns the magnitude.
    #[must_use]
    pub fn magnitude(&self) -> &Natural {
        &self.magnitude
    }

    /// Returns the absolute value.
    #[must_use]
    pub fn abs(&self) -> Self {
        Self {
            magnitude: self.magnitude.clone(),
            negative: false,
        }
    }

    /// Returns the sign: -1, 0, or 1.
    #[must_use]
    pub fn signum(&self) -> i8 {
        if self.magnitude.is_zero() {
            0
        } else if self.negative {
            -1
        } else {
            1
        }
    }

    /// Returns true if this integer is negative.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.negative
    }

    /// Divides `self` by `other`, truncating toward zero.
    ///
    /// The quotient magnitude is `|self| / |other|` and the sign is the
    /// product of the operand signs, so `-7 / 2 == -3`.
    ///
    /// # Errors
    ///
    /// Returns [`ArithmeticError::DivisionByZero`] if `other` is zero.
    pub fn checked_div(&self, other: &Self) -> Result<Self, ArithmeticError> {
        if other.magnitude.is_zero() {
            return Err(ArithmeticError::DivisionByZero(format!(
                "{self} / 0 is undefined"
            )));
        }
        if self.magnitude < other.magnitude {
            return Ok(Self::zero());
        }
        let magnitude = self.magnitude.checked_div(&other.magnitude)?;
        Ok(Self::from_parts(magnitude, self.negative != other.negative))
    }

    /// Computes the Euclidean remainder of `self` modulo `other`.
    ///
    /// The result is always in `0..|other|`, so `-7 mod 3 == 2`. Note the
    /// deliberate mismatch with [`checked_div`](Self::checked_div): for a
    /// negative dividend, `a != b * (a / b) + (a mod b)` in general.
    ///
    /// # Errors
    ///
    /// Returns [`ArithmeticError::DivisionByZero`] if `other` is zero.
    pub fn checked_rem(&self, other: &Self) -> Result<Self, ArithmeticError> {
        if other.magnitude.is_zero() {
            return Err(ArithmeticError::DivisionByZero(format!(
                "{self} mod 0 is undefined"
            )));
        }
        if self.magnitude < other.magnitude {
            if self.negative {
                let magnitude = other.magnitude.checked_sub(&self.magnitude)?;
                return Ok(Self::from_parts(magnitude, false));
            }
            return Ok(self.abs());
        }
        let quotient = self.checked_div(other)?;
        let r = self.clone() - other.clone() * quotient;
        if r.negative {
            let magnitude = other.magnitude.checked_sub(&r.magnitude)?;
            return Ok(Self::from_parts(magnitude, false));
        }
        Ok(r)
    }

    /// Computes the greatest common divisor of the magnitudes.
    ///
    /// The result is always non-negative.
    ///
    /// # Errors
    ///
    /// Returns [`ArithmeticError::DivisionByZero`] if both operands are
    /// zero.
    pub fn gcd(&self, other: &Self) -> Result<Self, ArithmeticError> {
        let magnitude = self.magnitude.gcd(&other.magnitude)?;
        Ok(Self::from_parts(magnitude, false))
    }

    /// Computes the least common multiple of the magnitudes.
    ///
    /// # Errors
    ///
    /// Returns [`ArithmeticError::DivisionByZero`] if either operand is
    /// zero.
    pub fn lcm(&self, other: &Self) -> Result<Self, ArithmeticError> {
        let magnitude = self.magnitude.lcm(&other.magnitude)?;
        Ok(Self::from_parts(magnitude, false))
    }
}

impl Ord for Integer {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.negative, other.negative) {
            (false, true) => Ordering::Greater,
            (true, false) => Ordering::Less,
            (false, false) => self.magnitude.cmp(&other.magnitude),
            (true, true) => other.magnitude.cmp(&self.magnitude),
        }
    }
}

impl PartialOrd for Integer {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Zero for Integer {
    fn zero() -> Self {
        Self {
            magnitude: Natural::zero(),
            negative: false,
        }
    }

    fn is_zero(&self) -> bool {
        self.magnitude.is_zero()
    }
}

impl One for Integer {
    fn one() -> Self {
        Self {
            magnitude: Natural::one(),
            negative: false,
        }
    }

    fn is_one(&self) -> bool {
        !self.negative && self.magnitude.is_one()
    }
}

impl Default for Integer {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Debug for Integer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Integer({self})")
    }
}

impl fmt::Display for Integer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.negative {
            write!(f, "-")?;
        }
        write!(f, "{}", self.magnitude)
    }
}

impl FromStr for Integer {
    type Err = ArithmeticError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some(rest) = s.strip_prefix('-') {
            let magnitude: Natural = rest.parse()?;
            Ok(Self::from_parts(magnitude, true))
        } else {
            let magnitude: Natural = s.parse()?;
            Ok(Self::from_parts(magnitude, false))
        }
    }
}

// Arithmetic operations
impl Add for Integer {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        &self + &rhs
    }
}

impl Add<&Integer> for Integer {
    type Output = Self;

    fn add(self, rhs: &Integer) -> Self::Output {
        &self + rhs
    }
}

impl Add for &Integer {
    type Output = Integer;

    fn add(self, rhs: Self) -> Self::Output {
        if self.negative == rhs.negative {
            return Integer::from_parts(&self.magnitude + &rhs.magnitude, self.negative);
        }
        match self.magnitude.cmp(&rhs.magnitude) {
            Ordering::Equal => Integer::zero(),
            Ordering::Greater => {
                let magnitude = self
                    .magnitude
                    .checked_sub(&rhs.magnitude)
                    .expect("larger magnitude minus smaller cannot underflow");
                Integer::from_parts(magnitude, self.negative)
            }
            Ordering::Less => {
                let magnitude = rhs
                    .magnitude
                    .checked_sub(&self.magnitude)
                    .expect("larger magnitude minus smaller cannot underflow");
                Integer::from_parts(magnitude, rhs.negative)
            }
        }
    }
}

impl Sub for Integer {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        &self + &(-rhs)
    }
}

impl Sub<&Integer> for Integer {
    type Output = Self;

    fn sub(self, rhs: &Integer) -> Self::Output {
        &self + &(-rhs)
    }
}

impl Sub for &Integer {
    type Output = Integer;

    fn sub(self, rhs: Self) -> Self::Output {
        self + &(-rhs)
    }
}

impl Mul for Integer {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        &self * &rhs
    }
}

impl Mul<&Integer> for Integer {
    type Output = Self;

    fn mul(self, rhs: &Integer) -> Self::Output {
        &self * rhs
    }
}

impl Mul for &Integer {
    type Output = Integer;

    fn mul(self, rhs: Self) -> Self::Output {
        if self.is_zero() || rhs.is_zero() {
            return Integer::zero();
        }
        Integer::from_parts(&self.magnitude * &rhs.magnitude, self.negative != rhs.negative)
    }
}

impl Neg for Integer {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self::from_parts(self.magnitude, !self.negative)
    }
}

impl Neg for &Integer {
    type Output = Integer;

    fn neg(self) -> Self::Output {
        Integer::from_parts(self.magnitude.clone(), !self.negative)
    }
}

impl From<Natural> for Integer {
    fn from(magnitude: Natural) -> Self {
        Self {
            magnitude,
            negative: false,
        }
    }
}

impl From<i64> for Integer {
    fn from(value: i64) -> Self {
        Self::new(value)
    }
}

impl From<i32> for Integer {
    fn from(value: i32) -> Self {
        Self::new(i64::from(value))
    }
}
