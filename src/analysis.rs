//! Text analysis for highlighting.
//!
//! This module provides the tokenizer, token filters and pipeline used to
//! turn a stored query's highlight text into the token stream indexed for
//! partial-match highlighting.

pub mod analyzer;
pub mod token;
pub mod token_filter;
pub mod tokenizer;
