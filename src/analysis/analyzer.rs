//! Analyzers combine a tokenizer and filters into a complete pipeline.
//!
//! ```text
//! Raw Text → Tokenizer → Filter 1 → ... → Filter N → Token Stream
//! ```

pub mod analyzer;
pub mod pipeline;

pub use analyzer::Analyzer;
pub use pipeline::PipelineAnalyzer;
