//! Pipeline analyzer that combines a tokenizer and filters.
//!
//! Filters are applied in the order they were added.
//!
//! # Examples
//!
//! The highlight pipeline keeps every original term and adds its marked
//! n-grams:
//!
//! ```
//! use vigil::analysis::analyzer::{Analyzer, PipelineAnalyzer};
//! use vigil::config::SuffixNGramConfig;
//!
//! let analyzer = PipelineAnalyzer::highlight(&SuffixNGramConfig::default()).unwrap();
//! let tokens: Vec<_> = analyzer.analyze("ab").unwrap().map(|t| t.text).collect();
//!
//! assert_eq!(tokens, vec!["ab", "aXX", "abXX", "bXX"]);
//! ```

use std::sync::Arc;

use crate::analysis::analyzer::analyzer::Analyzer;
use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::Filter;
use crate::analysis::token_filter::keyword_repeat::KeywordRepeatFilter;
use crate::analysis::token_filter::suffixing_ngram::SuffixingNGramFilter;
use crate::analysis::tokenizer::Tokenizer;
use crate::analysis::tokenizer::whitespace::WhitespaceTokenizer;
use crate::config::SuffixNGramConfig;
use crate::error::Result;

/// A configurable analyzer that combines a tokenizer with a chain of filters.
#[derive(Clone)]
pub struct PipelineAnalyzer {
    tokenizer: Arc<dyn Tokenizer>,
    filters: Vec<Arc<dyn Filter>>,
    name: String,
}

impl PipelineAnalyzer {
    /// Create a new pipeline analyzer with the given tokenizer.
    pub fn new(tokenizer: Arc<dyn Tokenizer>) -> Self {
        PipelineAnalyzer {
            name: format!("pipeline_{}", tokenizer.name()),
            tokenizer,
            filters: Vec::new(),
        }
    }

    /// The highlight analysis chain: whitespace tokenizer, keyword repeat,
    /// then suffixing n-grams built from `config`.
    pub fn highlight(config: &SuffixNGramConfig) -> Result<Self> {
        let suffix = SuffixingNGramFilter::from_config(config)?;
        Ok(Self::new(Arc::new(WhitespaceTokenizer::new()))
            .add_filter(Arc::new(KeywordRepeatFilter::new()))
            .add_filter(Arc::new(suffix))
            .with_name("highlight"))
    }

    /// Add a filter to the pipeline.
    pub fn add_filter(mut self, filter: Arc<dyn Filter>) -> Self {
        self.filters.push(filter);
        self
    }

    /// Set a custom name for this analyzer.
    pub fn with_name<S: Into<String>>(mut self, name: S) -> Self {
        self.name = name.into();
        self
    }

    /// The configured name of this pipeline.
    pub fn pipeline_name(&self) -> &str {
        &self.name
    }

    /// Get the tokenizer used by this analyzer.
    pub fn tokenizer(&self) -> &Arc<dyn Tokenizer> {
        &self.tokenizer
    }

    /// Get the filters used by this analyzer.
    pub fn filters(&self) -> &[Arc<dyn Filter>] {
        &self.filters
    }
}

impl Analyzer for PipelineAnalyzer {
    fn analyze(&self, text: &str) -> Result<TokenStream> {
        let mut tokens = self.tokenizer.tokenize(text)?;

        for filter in &self.filters {
            tokens = filter.filter(tokens)?;
        }

        Ok(tokens)
    }

    fn name(&self) -> &'static str {
        "pipeline"
    }
}

impl std::fmt::Debug for PipelineAnalyzer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PipelineAnalyzer")
            .field("name", &self.name)
            .field("tokenizer", &self.tokenizer.name())
            .field(
                "filters",
                &self.filters.iter().map(|f| f.name()).collect::<Vec<_>>(),
            )
            .finish()
    }
}
