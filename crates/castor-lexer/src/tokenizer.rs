//! The LaTeX expression tokenizer.

use crate::automaton::AhoCorasick;
use crate::error::LexError;
use crate::token::{Token, TokenKind};

/// The fixed symbol table recognized by the automaton.
///
/// `=` is recognized but left unclassified.
const SYMBOL_TABLE: &[(&str, TokenKind)] = &[
    ("\\frac", TokenKind::Frac),
    ("\\sqrt", TokenKind::Sqrt),
    ("\\gcd", TokenKind::Gcd),
    ("\\lcm", TokenKind::Lcm),
    ("{", TokenKind::LBrace),
    ("}", TokenKind::RBrace),
    ("(", TokenKind::LParen),
    (")", TokenKind::RParen),
    ("+", TokenKind::Plus),
    ("-", TokenKind::Minus),
    ("*", TokenKind::Multiply),
    ("/", TokenKind::Divide),
    ("^", TokenKind::Power),
    ("%", TokenKind::Modulo),
    ("|", TokenKind::Pipe),
    (",", TokenKind::Comma),
    ("=", TokenKind::Unknown),
];

/// Splits LaTeX expression strings into [`Token`]s.
///
/// The automaton over [`SYMBOL_TABLE`] is built once at construction
/// and reused for every `tokenize` call.
#[derive(Debug)]
pub struct Tokenizer {
    automaton: AhoCorasick,
}

impl Tokenizer {
    /// Builds a tokenizer over the fixed symbol table.
    #[must_use]
    pub fn new() -> Self {
        let mut automaton = AhoCorasick::new();
        for &(pattern, kind) in SYMBOL_TABLE {
            automaton
                .add_pattern(pattern, kind)
                .expect("symbol table patterns are non-empty");
        }
        automaton.build_fail_links();
        Self { automaton }
    }

    /// Tokenizes `text`, skipping ASCII whitespace.
    ///
    /// Symbols are matched first (longest match wins), then digit runs
    /// become [`TokenKind::Number`] and ASCII letter runs become
    /// [`TokenKind::Variable`].
    ///
    /// # Errors
    ///
    /// Returns [`LexError::UnexpectedCharacter`] at the first character
    /// that fits none of the categories.
    pub fn tokenize(&self, text: &str) -> Result<Vec<Token>, LexError> {
        let bytes = text.as_bytes();
        let mut tokens = Vec::new();
        let mut i = 0;

        while i < bytes.len() {
            if bytes[i].is_ascii_whitespace() {
                i += 1;
                continue;
            }

            if let Some((len, kind)) = self.automaton.find_longest_prefix(text, i) {
                tokens.push(Token::new(kind, &text[i..i + len], i));
                i += len;
                continue;
            }

            if bytes[i].is_ascii_digit() {
                let start = i;
                while i < bytes.len() && bytes[i].is_ascii_digit() {
                    i += 1;
                }
                tokens.push(Token::new(TokenKind::Number, &text[start..i], start));
                continue;
            }

            if bytes[i].is_ascii_alphabetic() {
                let start = i;
                while i < bytes.len() && bytes[i].is_ascii_alphabetic() {
                    i += 1;
                }
                tokens.push(Token::new(TokenKind::Variable, &text[start..i], start));
                continue;
            }

            // Only ASCII bytes advance `i`, so it sits on a char boundary.
            return Err(LexError::UnexpectedCharacter {
                found: text[i..]
                    .chars()
                    .next()
                    .expect("offset is inside the input"),
                offset: i,
            });
        }

        Ok(tokens)
    }
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::new()
    }
}
