//! # Castor
//!
//! The computational core of the Castor Computer Algebra System.
//!
//! Castor provides exact arithmetic and the algebraic scaffolding a CAS
//! builds on, without any expression or parsing layer beyond the lexer.
//!
//! ## Features
//!
//! - **Arbitrary Precision**: decimal `Natural`, sign-magnitude
//!   `Integer`, explicitly reduced `Rational`
//! - **Algebraic Structures**: declarative operation types composed into
//!   `Ring`, `UnitaryRing` and `Field`
//! - **Quotients**: `FactorRing` over any ideal, modular fields `Zp<P>`
//! - **Polynomials**: dense univariate arithmetic with field algorithms
//! - **Lexing**: LaTeX tokenization over an Aho-Corasick matcher
//!
//! ## Quick Start
//!
//! ```rust
//! use castor::prelude::*;
//!
//! let p = DensePoly::new(vec![Q::from_integer(1), Q::from_integer(2), Q::from_integer(1)]);
//! assert_eq!(p.to_string(), "x^2 + 2*x + 1");
//! assert_eq!(p.eval(&Q::from_integer(3)), Q::from_integer(16));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use castor_integers as integers;
pub use castor_lexer as lexer;
pub use castor_poly as poly;
pub use castor_rings as rings;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use castor_integers::{ArithmeticError, Integer, Natural, Rational};
    pub use castor_lexer::{LexError, Token, TokenKind, Tokenizer};
    pub use castor_poly::DensePoly;
    pub use castor_rings::{Field, Ring, SignedRing, UnitaryRing, Zp, Q, Z};
}
