//! Polynomial algorithms over field coefficients.

pub mod gcd;
pub mod squarefree;
