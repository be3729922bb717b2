//! # castor-lexer
//!
//! LaTeX expression tokenizer for Castor CAS.
//!
//! This crate provides:
//! - `Token` and `TokenKind` definitions (`token`)
//! - An arena-indexed Aho-Corasick matcher (`automaton`)
//! - The whitespace-skipping `Tokenizer` over a fixed symbol table
//!   (`tokenizer`)
//!
//! The lexer is independent of the algebraic crates: it only splits
//! text, leaving grammar concerns to a parser.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod automaton;
pub mod error;
pub mod token;
pub mod tokenizer;

pub use automaton::AhoCorasick;
pub use error::LexError;
pub use token::{Token, TokenKind};
pub use tokenizer::Tokenizer;
