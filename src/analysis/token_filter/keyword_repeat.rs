//! Keyword repeat filter implementation.

use super::Filter;

use crate::analysis::token::{Token, TokenStream};
use crate::error::Result;

/// A filter that emits each token twice: first as a protected keyword,
/// then as an ordinary token stacked on the same position.
///
/// Downstream filters that honour the keyword flag leave the first copy
/// alone and transform the second, so the original term survives alongside
/// its transformed forms. Tokens that are already keywords pass through once.
#[derive(Clone, Debug, Default)]
pub struct KeywordRepeatFilter;

impl KeywordRepeatFilter {
    /// Create a new keyword repeat filter.
    pub fn new() -> Self {
        KeywordRepeatFilter
    }

    fn repeat(token: Token) -> Vec<Token> {
        if token.is_keyword() {
            return vec![token];
        }
        let unprotected = token.clone().with_position_increment(0);
        vec![token.as_keyword(), unprotected]
    }
}

impl Filter for KeywordRepeatFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        Ok(Box::new(tokens.flat_map(Self::repeat)))
    }

    fn name(&self) -> &'static str {
        "keyword_repeat"
    }
}
