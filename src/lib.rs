//! # Vigil
//!
//! Building blocks for reverse search, where stored queries are matched
//! against incoming documents.
//!
//! ## Features
//!
//! - Immutable stored query definitions with identity-based equality
//! - SHA-256 content fingerprints for change detection
//! - Suffixing n-gram analysis for partial-match highlighting

pub mod analysis;
pub mod cli;
pub mod config;
pub mod error;
pub mod monitor;

pub mod prelude {
    pub use crate::analysis::analyzer::{Analyzer, PipelineAnalyzer};
    pub use crate::analysis::token::{Token, TokenStream};
    pub use crate::analysis::token_filter::Filter;
    pub use crate::analysis::token_filter::keyword_repeat::KeywordRepeatFilter;
    pub use crate::analysis::token_filter::suffixing_ngram::SuffixingNGramFilter;
    pub use crate::analysis::tokenizer::Tokenizer;
    pub use crate::analysis::tokenizer::whitespace::WhitespaceTokenizer;
    pub use crate::config::{AnalysisConfig, SuffixNGramConfig};
    pub use crate::error::{Result, VigilError};
    pub use crate::monitor::{MonitorQuery, QueryFingerprint};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
