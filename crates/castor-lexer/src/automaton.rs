//! Arena-indexed Aho-Corasick matcher.
//!
//! Nodes live in a flat `Vec` and refer to each other by index, with
//! node 0 as the trie root. Matching walks byte transitions, so all
//! patterns must be ASCII (the symbol table is).

use std::collections::VecDeque;

use rustc_hash::FxHashMap;

use crate::error::LexError;
use crate::token::TokenKind;

#[derive(Debug, Default)]
struct Node {
    children: FxHashMap<u8, usize>,
    fail: usize,
    output: Option<TokenKind>,
}

/// A multi-pattern matcher over a fixed symbol table.
#[derive(Debug)]
pub struct AhoCorasick {
    nodes: Vec<Node>,
}

impl AhoCorasick {
    /// Creates an empty automaton containing only the root node.
    #[must_use]
    pub fn new() -> Self {
        Self {
            nodes: vec![Node::default()],
        }
    }

    /// Inserts a pattern that reports `kind` when matched.
    ///
    /// # Errors
    ///
    /// Returns [`LexError::EmptyPattern`] for an empty pattern.
    pub fn add_pattern(&mut self, pattern: &str, kind: TokenKind) -> Result<(), LexError> {
        if pattern.is_empty() {
            return Err(LexError::EmptyPattern);
        }
        let mut current = 0;
        for &byte in pattern.as_bytes() {
            current = match self.nodes[current].children.get(&byte) {
                Some(&next) => next,
                None => {
                    let next = self.nodes.len();
                    self.nodes.push(Node::default());
                    self.nodes[current].children.insert(byte, next);
                    next
                }
            };
        }
        self.nodes[current].output = Some(kind);
        Ok(())
    }

    /// Builds the fail links by breadth-first traversal of the trie.
    ///
    /// Must be called after the last `add_pattern`.
    pub fn build_fail_links(&mut self) {
        let mut queue = VecDeque::new();

        let roots: Vec<usize> = self.nodes[0].children.values().copied().collect();
        for child in roots {
            self.nodes[child].fail = 0;
            queue.push_back(child);
        }

        while let Some(current) = queue.pop_front() {
            let transitions: Vec<(u8, usize)> = self.nodes[current]
                .children
                .iter()
                .map(|(&byte, &node)| (byte, node))
                .collect();

            for (byte, child) in transitions {
                queue.push_back(child);

                let mut fail = self.nodes[current].fail;
                while fail != 0 && !self.nodes[fail].children.contains_key(&byte) {
                    fail = self.nodes[fail].fail;
                }
                self.nodes[child].fail =
                    self.nodes[fail].children.get(&byte).copied().unwrap_or(0);
            }
        }
    }

    /// Finds the longest pattern matching at `start`, returning its
    /// byte length and token kind.
    #[must_use]
    pub fn find_longest_prefix(&self, text: &str, start: usize) -> Option<(usize, TokenKind)> {
        let mut current = 0;
        let mut best = None;

        for (i, &byte) in text.as_bytes()[start..].iter().enumerate() {
            match self.nodes[current].children.get(&byte) {
                Some(&next) => current = next,
                None => break,
            }
            if let Some(kind) = self.nodes[current].output {
                best = Some((i + 1, kind));
            }
        }

        best
    }
}

impl Default for AhoCorasick {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn automaton(patterns: &[(&str, TokenKind)]) -> AhoCorasick {
        let mut a = AhoCorasick::new();
        for &(p, k) in patterns {
            a.add_pattern(p, k).unwrap();
        }
        a.build_fail_links();
        a
    }

    #[test]
    fn test_empty_pattern_is_rejected() {
        let mut a = AhoCorasick::new();
        assert_eq!(
            a.add_pattern("", TokenKind::Plus),
            Err(LexError::EmptyPattern)
        );
    }

    #[test]
    fn test_single_pattern_at_start() {
        let a = automaton(&[("\\frac", TokenKind::Frac)]);
        assert_eq!(
            a.find_longest_prefix("\\frac{1}{2}", 0),
            Some((5, TokenKind::Frac))
        );
        assert_eq!(a.find_longest_prefix("frac", 0), None);
    }

    #[test]
    fn test_longest_match_wins() {
        let a = automaton(&[("+", TokenKind::Plus), ("++", TokenKind::Unknown)]);
        assert_eq!(a.find_longest_prefix("++x", 0), Some((2, TokenKind::Unknown)));
        assert_eq!(a.find_longest_prefix("+x", 0), Some((1, TokenKind::Plus)));
    }

    #[test]
    fn test_match_at_offset() {
        let a = automaton(&[("\\gcd", TokenKind::Gcd)]);
        assert_eq!(
            a.find_longest_prefix("1+\\gcd(2,4)", 2),
            Some((4, TokenKind::Gcd))
        );
        assert_eq!(a.find_longest_prefix("1+\\gcd(2,4)", 3), None);
    }

    #[test]
    fn test_partial_prefix_does_not_match() {
        let a = automaton(&[("\\sqrt", TokenKind::Sqrt)]);
        assert_eq!(a.find_longest_prefix("\\sq", 0), None);
    }
}
