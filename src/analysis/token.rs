//! Token types and utilities for text analysis.
//!
//! A [`Token`] is the unit that flows through the analysis pipeline. Besides
//! its text and position it carries a `keyword` flag: a token marked as a
//! keyword is protected from modification by downstream filters.
//!
//! # Token Graphs
//!
//! Tokens stacked on the same position use a `position_increment` of 0. The
//! keyword repeat stage relies on this to place the protected and the
//! unprotected copy of a word at the same position:
//!
//! ```text
//! Input: "term"
//!
//!   Position 0: "term" (keyword, pos_inc=1)
//!   Position 0: "term" (pos_inc=0)
//! ```
//!
//! # Examples
//!
//! ```
//! use vigil::analysis::token::Token;
//!
//! let token = Token::with_offsets("world", 1, 6, 11);
//! assert_eq!(token.text, "world");
//! assert_eq!(token.start_offset, 6);
//! assert_eq!(token.end_offset, 11);
//! assert!(!token.is_keyword());
//!
//! let protected = token.as_keyword();
//! assert!(protected.is_keyword());
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

/// A token represents a single unit of text after tokenization.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// The text content of the token
    pub text: String,

    /// The position of the token in the original token stream (0-based)
    pub position: usize,

    /// The byte offset where this token starts in the original text
    pub start_offset: usize,

    /// The byte offset where this token ends in the original text
    pub end_offset: usize,

    /// Position increment from the previous token (default: 1).
    ///
    /// - 1: next position
    /// - 0: same position as the previous token
    pub position_increment: usize,

    /// How many positions this token spans (default: 1).
    pub position_length: usize,

    /// Whether this token is protected from modification by filters.
    pub keyword: bool,
}

impl Token {
    /// Create a new token with the given text and position.
    pub fn new<S: Into<String>>(text: S, position: usize) -> Self {
        Self::with_offsets(text, position, 0, 0)
    }

    /// Create a new token with text, position, and byte offsets.
    pub fn with_offsets<S: Into<String>>(
        text: S,
        position: usize,
        start_offset: usize,
        end_offset: usize,
    ) -> Self {
        Token {
            text: text.into(),
            position,
            start_offset,
            end_offset,
            position_increment: 1,
            position_length: 1,
            keyword: false,
        }
    }

    /// Get the length of the token text in bytes.
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Check if the token is empty.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Mark this token as a keyword.
    pub fn as_keyword(mut self) -> Self {
        self.keyword = true;
        self
    }

    /// Set the keyword flag.
    pub fn with_keyword(mut self, keyword: bool) -> Self {
        self.keyword = keyword;
        self
    }

    /// Check if this token is protected from modification.
    pub fn is_keyword(&self) -> bool {
        self.keyword
    }

    /// Clone this token with updated text.
    pub fn with_text<S: Into<String>>(&self, text: S) -> Self {
        let mut token = self.clone();
        token.text = text.into();
        token
    }

    /// Set the position increment.
    pub fn with_position_increment(mut self, increment: usize) -> Self {
        self.position_increment = increment;
        self
    }

    /// Set the position length.
    pub fn with_position_length(mut self, length: usize) -> Self {
        self.position_length = length;
        self
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

/// A token stream represents a sequence of tokens from the analysis pipeline.
pub type TokenStream = Box<dyn Iterator<Item = Token> + Send>;

/// Trait for types that can produce a token stream.
pub trait IntoTokenStream {
    /// Convert this type into a token stream.
    fn into_token_stream(self) -> TokenStream;
}

impl IntoTokenStream for Vec<Token> {
    fn into_token_stream(self) -> TokenStream {
        Box::new(self.into_iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_creation() {
        let token = Token::new("hello", 0);
        assert_eq!(token.text, "hello");
        assert_eq!(token.position, 0);
        assert_eq!(token.start_offset, 0);
        assert_eq!(token.end_offset, 0);
        assert_eq!(token.position_increment, 1);
        assert!(!token.is_keyword());
    }

    #[test]
    fn test_keyword_flag() {
        let token = Token::new("term", 0).as_keyword();
        assert!(token.is_keyword());

        let copy = token.with_text("other");
        assert!(copy.is_keyword());
        assert!(!copy.with_keyword(false).is_keyword());
    }

    #[test]
    fn test_token_display() {
        let token = Token::new("hello", 0);
        assert_eq!(format!("{token}"), "hello");
    }

    #[test]
    fn test_token_stream() {
        let tokens = vec![Token::new("hello", 0), Token::new("world", 1)];

        let collected: Vec<_> = tokens.into_token_stream().collect();

        assert_eq!(collected.len(), 2);
        assert_eq!(collected[0].text, "hello");
        assert_eq!(collected[1].text, "world");
    }
}
