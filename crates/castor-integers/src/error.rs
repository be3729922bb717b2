//! Error types for exact arithmetic.

use thiserror::Error;

/// Errors raised by the exact arithmetic tower.
///
/// Every failure is fatal to the attempted operation: the caller either
/// receives a fully valid result or one of these variants, never a
/// partially constructed value.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ArithmeticError {
    /// A string could not be parsed as a number.
    #[error("invalid format: {0}")]
    InvalidFormat(String),

    /// Division, remainder, gcd or lcm with a zero operand where the
    /// result is undefined.
    #[error("division by zero: {0}")]
    DivisionByZero(String),

    /// Subtraction would produce a negative natural number.
    #[error("underflow: {0}")]
    Underflow(String),

    /// A digit multiplier outside `0..=9`.
    #[error("out of range: {0}")]
    OutOfRange(String),

    /// No modular inverse exists for the element.
    #[error("not invertible: {0}")]
    NotInvertible(String),

    /// A result would exceed the addressable size, or the allocation for
    /// it could not be reserved.
    #[error("allocation failure: {0}")]
    AllocationFailure(String),

    /// Coefficient index past the end of a polynomial.
    #[error("index out of bounds: {0}")]
    IndexOutOfBounds(String),
}
