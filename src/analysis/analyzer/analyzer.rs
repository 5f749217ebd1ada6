//! Core analyzer trait definition.
//!
//! # Examples
//!
//! Implementing a custom analyzer:
//!
//! ```
//! use vigil::analysis::analyzer::Analyzer;
//! use vigil::analysis::token::TokenStream;
//! use vigil::error::Result;
//!
//! struct EmptyAnalyzer;
//!
//! impl Analyzer for EmptyAnalyzer {
//!     fn analyze(&self, _text: &str) -> Result<TokenStream> {
//!         Ok(Box::new(std::iter::empty()))
//!     }
//!
//!     fn name(&self) -> &'static str {
//!         "empty"
//!     }
//! }
//! ```

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for analyzers that convert text into processed tokens.
///
/// The trait requires `Send + Sync` so that one analyzer can serve
/// concurrent callers; each call to [`analyze`](Self::analyze) returns an
/// independent stream.
pub trait Analyzer: Send + Sync {
    /// Analyze the given text and return a stream of tokens.
    fn analyze(&self, text: &str) -> Result<TokenStream>;

    /// Get the name of this analyzer (for debugging and configuration).
    fn name(&self) -> &'static str;
}
