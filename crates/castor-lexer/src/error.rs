//! Lexer error type.

use thiserror::Error;

/// Errors produced while tokenizing an input string or building the
/// pattern automaton.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexError {
    /// A character that starts neither a symbol, a number nor a
    /// variable.
    #[error("unexpected character '{found}' at offset {offset}")]
    UnexpectedCharacter {
        /// The offending character.
        found: char,
        /// Byte offset of the character in the input.
        offset: usize,
    },

    /// An empty pattern was added to the automaton.
    #[error("cannot add an empty pattern to the automaton")]
    EmptyPattern,
}
