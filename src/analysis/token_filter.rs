//! Token filter implementations for token transformation.
//!
//! Filters transform the token streams produced by tokenizers. They can
//! modify, remove or add tokens.
//!
//! # Available Filters
//!
//! - [`keyword_repeat::KeywordRepeatFilter`] - Emits every token twice, once protected
//! - [`suffixing_ngram::SuffixingNGramFilter`] - Replaces unprotected tokens with marked n-grams
//!
//! # Filter Chaining
//!
//! ```text
//! Tokenizer → KeywordRepeat → SuffixingNGram → Index
//! ```

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for filters that transform token streams.
///
/// Filters receive a stream of tokens and produce a new stream. A filter is
/// configuration only: every call to [`filter`](Self::filter) returns an
/// independent stream, so one filter value can serve many streams.
///
/// # Examples
///
/// Implementing a custom filter:
///
/// ```
/// use vigil::analysis::token::{Token, TokenStream};
/// use vigil::analysis::token_filter::Filter;
/// use vigil::error::Result;
///
/// struct ReverseFilter;
///
/// impl Filter for ReverseFilter {
///     fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
///         Ok(Box::new(tokens.map(|mut t| {
///             if !t.is_keyword() {
///                 t.text = t.text.chars().rev().collect();
///             }
///             t
///         })))
///     }
///
///     fn name(&self) -> &'static str {
///         "reverse"
///     }
/// }
/// ```
pub trait Filter: Send + Sync {
    /// Apply this filter to a token stream.
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream>;

    /// Get the name of this filter (for debugging and configuration).
    fn name(&self) -> &'static str;
}

pub mod keyword_repeat;
pub mod suffixing_ngram;
