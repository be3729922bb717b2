//! Arbitrary precision natural numbers.
//!
//! This module provides the base layer of the exact arithmetic tower: an
//! unsigned integer stored as a vector of decimal digits, least significant
//! digit first. All fallible operations return [`ArithmeticError`] rather
//! than panicking.

use num_traits::{One, Zero};
use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Mul};
use std::str::FromStr;

use crate::error::ArithmeticError;

/// An arbitrary precision natural number.
///
/// Digits are stored least significant first, base 10. The representation
/// is always canonical: no trailing zero digits except for the number zero
/// itself, which is stored as the single digit `[0]`. Every constructor
/// and every operation preserves this form, so equality is plain
/// digit-vector equality.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Natural {
    digits: Vec<u8>,
}

impl Natural {
    /// Creates a natural number from a little-endian digit vector.
    ///
    /// # Errors
    ///
    /// Returns [`ArithmeticError::OutOfRange`] if any digit is outside
    /// `0..=9`.
    pub fn from_digits(digits: Vec<u8>) -> Result<Self, ArithmeticError> {
        if let Some(&d) = digits.iter().find(|&&d| d > 9) {
            return Err(ArithmeticError::OutOfRange(format!(
                "digit {d} is not a decimal digit"
            )));
        }
        Ok(Self::from_trimmed(digits))
    }

    /// Canonicalizes a digit vector by stripping trailing zeros.
    ///
    /// An empty vector canonicalizes to zero.
    fn from_trimmed(mut digits: Vec<u8>) -> Self {
        while digits.len() > 1 && digits.last() == Some(&0) {
            digits.pop();
        }
        if digits.is_empty() {
            digits.push(0);
        }
        Self { digits }
    }

    /// Returns the digits, least significant first.
    #[must_use]
    pub fn digits(&self) -> &[u8] {
        &self.digits
    }

    /// Returns the number of decimal digits.
    #[must_use]
    pub fn len(&self) -> usize {
        self.digits.len()
    }

    /// Returns true if the number is zero.
    ///
    /// Named for symmetry with `len`; zero occupies one digit but has an
    /// empty value.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.digits == [0]
    }

    /// Subtracts `other` from `self`.
    ///
    /// # Errors
    ///
    /// Returns [`ArithmeticError::Underflow`] if `other > self`.
    pub fn checked_sub(&self, other: &Self) -> Result<Self, ArithmeticError> {
        match self.cmp(other) {
            Ordering::Less => Err(ArithmeticError::Underflow(format!(
                "cannot subtract {other} from {self}"
            ))),
            Ordering::Equal => Ok(Self::zero()),
            Ordering::Greater => {
                let mut digits = Vec::with_capacity(self.digits.len());
                let mut borrow = 0i8;
                for (i, &d) in self.digits.iter().enumerate() {
                    let s = i8::try_from(other.digits.get(i).copied().unwrap_or(0))
                        .expect("digit fits in i8");
                    let mut diff = i8::try_from(d).expect("digit fits in i8") - s - borrow;
                    if diff < 0 {
                        diff += 10;
                        borrow = 1;
                    } else {
                        borrow = 0;
                    }
                    digits.push(u8::try_from(diff).expect("borrow keeps diff in 0..=9"));
                }
                Ok(Self::from_trimmed(digits))
            }
        }
    }

    /// Multiplies by a single decimal digit.
    ///
    /// # Errors
    ///
    /// Returns [`ArithmeticError::OutOfRange`] if `digit > 9`.
    pub fn mul_digit(&self, digit: u8) -> Result<Self, ArithmeticError> {
        if digit > 9 {
            return Err(ArithmeticError::OutOfRange(format!(
                "multiplier {digit} is not a decimal digit"
            )));
        }
        if digit == 0 || self.is_zero() {
            return Ok(Self::zero());
        }
        let mut digits = Vec::with_capacity(self.digits.len() + 1);
        let mut carry = 0u32;
        for &d in &self.digits {
            let product = u32::from(d) * u32::from(digit) + carry;
            digits.push(u8::try_from(product % 10).expect("remainder below 10"));
            carry = product / 10;
        }
        while carry > 0 {
            digits.push(u8::try_from(carry % 10).expect("remainder below 10"));
            carry /= 10;
        }
        Ok(Self::from_trimmed(digits))
    }

    /// Multiplies by `10^k` by prepending `k` zero digits.
    ///
    /// Zero stays zero regardless of `k`.
    ///
    /// # Errors
    ///
    /// Returns [`ArithmeticError::AllocationFailure`] if the shifted
    /// number would not fit in memory.
    pub fn mul_pow10(&self, k: usize) -> Result<Self, ArithmeticError> {
        if self.is_zero() || k == 0 {
            return Ok(self.clone());
        }
        if self.digits.len() > usize::MAX - k {
            return Err(ArithmeticError::AllocationFailure(format!(
                "shift by {k} digits overflows the addressable size"
            )));
        }
        let mut digits = Vec::new();
        digits
            .try_reserve_exact(self.digits.len() + k)
            .map_err(|e| {
                ArithmeticError::AllocationFailure(format!(
                    "cannot reserve {} digits: {e}",
                    self.digits.len() + k
                ))
            })?;
        digits.resize(k, 0);
        digits.extend_from_slice(&self.digits);
        Ok(Self { digits })
    }

    /// Divides `self` by `other`, discarding the remainder.
    ///
    /// Long division over the decimal digits: each quotient digit is found
    /// by trying multipliers from 9 down and keeping the first whose
    /// product fits under the running remainder.
    ///
    /// # Errors
    ///
    /// Returns [`ArithmeticError::DivisionByZero`] if `other` is zero.
    pub fn checked_div(&self, other: &Self) -> Result<Self, ArithmeticError> {
        if other.is_zero() {
            return Err(ArithmeticError::DivisionByZero(format!(
                "{self} / 0 is undefined"
            )));
        }
        if self < other {
            return Ok(Self::zero());
        }
        let mut quotient = Vec::with_capacity(self.digits.len());
        let mut current = Self::zero();
        for &d in self.digits.iter().rev() {
            current = current.mul_pow10(1)?;
            current = current + Self::from_trimmed(vec![d]);
            let mut q = 0u8;
            if current >= *other {
                for candidate in (1..=9u8).rev() {
                    let product = other.mul_digit(candidate)?;
                    if let Ok(rest) = current.checked_sub(&product) {
                        q = candidate;
                        current = rest;
                        break;
                    }
                }
            }
            quotient.push(q);
        }
        quotient.reverse();
        Ok(Self::from_trimmed(quotient))
    }

    /// Computes the remainder of `self` divided by `other`.
    ///
    /// Defined as `self - other * (self / other)`.
    ///
    /// # Errors
    ///
    /// Returns [`ArithmeticError::DivisionByZero`] if `other` is zero.
    pub fn checked_rem(&self, other: &Self) -> Result<Self, ArithmeticError> {
        if other.is_zero() {
            return Err(ArithmeticError::DivisionByZero(format!(
                "{self} % 0 is undefined"
            )));
        }
        if self < other {
            return Ok(self.clone());
        }
        let quotient = self.checked_div(other)?;
        self.checked_sub(&(other.clone() * quotient))
    }

    /// Computes the greatest common divisor by the Euclidean algorithm.
    ///
    /// `gcd(a, 0) = a` and `gcd(0, b) = b`.
    ///
    /// # Errors
    ///
    /// Returns [`ArithmeticError::DivisionByZero`] if both operands are
    /// zero; that gcd is undefined.
    pub fn gcd(&self, other: &Self) -> Result<Self, ArithmeticError> {
        if self.is_zero() && other.is_zero() {
            return Err(ArithmeticError::DivisionByZero(
                "gcd(0, 0) is undefined".to_string(),
            ));
        }
        let mut a = self.clone();
        let mut b = other.clone();
        while !b.is_zero() {
            let r = a.checked_rem(&b)?;
            a = b;
            b = r;
        }
        Ok(a)
    }

    /// Computes the least common multiple as `(a * b) / gcd(a, b)`.
    ///
    /// # Errors
    ///
    /// Returns [`ArithmeticError::DivisionByZero`] if either operand is
    /// zero.
    pub fn lcm(&self, other: &Self) -> Result<Self, ArithmeticError> {
        if self.is_zero() || other.is_zero() {
            return Err(ArithmeticError::DivisionByZero(
                "lcm with a zero operand is undefined".to_string(),
            ));
        }
        let g = self.gcd(other)?;
        (self.clone() * other.clone()).checked_div(&g)
    }
}

impl Ord for Natural {
    fn cmp(&self, other: &Self) -> Ordering {
        match self.digits.len().cmp(&other.digits.len()) {
            Ordering::Equal => {
                for (a, b) in self.digits.iter().rev().zip(other.digits.iter().rev()) {
                    match a.cmp(b) {
                        Ordering::Equal => {}
                        unequal => return unequal,
                    }
                }
                Ordering::Equal
            }
            unequal => unequal,
        }
    }
}

impl PartialOrd for Natural {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Zero for Natural {
    fn zero() -> Self {
        Self { digits: vec![0] }
    }

    fn is_zero(&self) -> bool {
        self.digits == [0]
    }
}

impl One for Natural {
    fn one() -> Self {
        Self { digits: vec![1] }
    }

    fn is_one(&self) -> bool {
        self.digits == [1]
    }
}

impl Default for Natural {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Debug for Natural {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Natural({self})")
    }
}

impl fmt::Display for Natural {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &d in self.digits.iter().rev() {
            write!(f, "{d}")?;
        }
        Ok(())
    }
}

impl FromStr for Natural {
    type Err = ArithmeticError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(ArithmeticError::InvalidFormat(
                "empty string is not a number".to_string(),
            ));
        }
        let mut digits = Vec::with_capacity(s.len());
        for c in s.chars().rev() {
            let d = c.to_digit(10).ok_or_else(|| {
                ArithmeticError::InvalidFormat(format!("unexpected character {c:?} in {s:?}"))
            })?;
            digits.push(u8::try_from(d).expect("decimal digit fits in u8"));
        }
        Ok(Self::from_trimmed(digits))
    }
}

// Arithmetic operations
impl Add for Natural {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        &self + &rhs
    }
}

impl Add<&Natural> for Natural {
    type Output = Self;

    fn add(self, rhs: &Natural) -> Self::Output {
        &self + rhs
    }
}

impl Add for &Natural {
    type Output = Natural;

    fn add(self, rhs: Self) -> Self::Output {
        let (longer, shorter) = if self.digits.len() >= rhs.digits.len() {
            (self, rhs)
        } else {
            (rhs, self)
        };
        let mut digits = Vec::with_capacity(longer.digits.len() + 1);
        let mut carry = 0u8;
        for (i, &d) in longer.digits.iter().enumerate() {
            let sum = d + shorter.digits.get(i).copied().unwrap_or(0) + carry;
            digits.push(sum % 10);
            carry = sum / 10;
        }
        if carry > 0 {
            digits.push(carry);
        }
        Natural::from_trimmed(digits)
    }
}

impl Mul for Natural {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        &self * &rhs
    }
}

impl Mul<&Natural> for Natural {
    type Output = Self;

    fn mul(self, rhs: &Natural) -> Self::Output {
        &self * rhs
    }
}

impl Mul for &Natural {
    type Output = Natural;

    fn mul(self, rhs: Self) -> Self::Output {
        if self.is_zero() || rhs.is_zero() {
            return Natural::zero();
        }
        let mut digits = vec![0u8; self.digits.len() + rhs.digits.len()];
        for (i, &a) in self.digits.iter().enumerate() {
            let mut carry = 0u64;
            let mut j = 0;
            while j < rhs.digits.len() || carry > 0 {
                let b = rhs.digits.get(j).copied().unwrap_or(0);
                let cell = u64::from(digits[i + j]) + u64::from(a) * u64::from(b) + carry;
                digits[i + j] = u8::try_from(cell % 10).expect("remainder below 10");
                carry = cell / 10;
                j += 1;
            }
        }
        Natural::from_trimmed(digits)
    }
}

impl From<u64> for Natural {
    fn from(mut value: u64) -> Self {
        let mut digits = Vec::new();
        loop {
            digits.push(u8::try_from(value % 10).expect("remainder below 10"));
            value /= 10;
            if value == 0 {
                break;
            }
        }
        Self { digits }
    }
}

impl From<u32> for Natural {
    fn from(value: u32) -> Self {
        Self::from(u64::from(value))
    }
}
