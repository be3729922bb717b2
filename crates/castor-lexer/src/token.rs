//! Token definitions for the LaTeX lexer.

use std::fmt;

/// The classification of a single lexeme.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum TokenKind {
    /// The `\frac` command.
    Frac,
    /// The `\sqrt` command.
    Sqrt,
    /// The `\gcd` command.
    Gcd,
    /// The `\lcm` command.
    Lcm,
    /// `{`
    LBrace,
    /// `}`
    RBrace,
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Multiply,
    /// `/`
    Divide,
    /// `^`
    Power,
    /// `%`
    Modulo,
    /// `|`
    Pipe,
    /// `,`
    Comma,
    /// A run of ASCII digits of any length.
    Number,
    /// A run of ASCII letters.
    Variable,
    /// A symbol that is recognized but not classified, such as `=`.
    Unknown,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Frac => "FRAC",
            Self::Sqrt => "SQRT",
            Self::Gcd => "GCD",
            Self::Lcm => "LCM",
            Self::LBrace => "LBRACE",
            Self::RBrace => "RBRACE",
            Self::LParen => "LPAREN",
            Self::RParen => "RPAREN",
            Self::Plus => "PLUS",
            Self::Minus => "MINUS",
            Self::Multiply => "MULTIPLY",
            Self::Divide => "DIVIDE",
            Self::Power => "POWER",
            Self::Modulo => "MODULO",
            Self::Pipe => "PIPE",
            Self::Comma => "COMMA",
            Self::Number => "NUMBER",
            Self::Variable => "VARIABLE",
            Self::Unknown => "UNKNOWN",
        };
        f.write_str(name)
    }
}

/// A classified lexeme with its source position.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Token {
    /// The token classification.
    pub kind: TokenKind,
    /// The matched text.
    pub lexeme: String,
    /// Byte offset of the lexeme in the input.
    pub offset: usize,
}

impl Token {
    /// Creates a token from its parts.
    #[must_use]
    pub fn new(kind: TokenKind, lexeme: impl Into<String>, offset: usize) -> Self {
        Self {
            kind,
            lexeme: lexeme.into(),
            offset,
        }
    }
}
