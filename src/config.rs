//! Configuration for highlight analysis.
//!
//! Configuration is plain serde data with defaults; validation happens when
//! the configured filter is built, not when the file is read.

use std::fs;
use std::path::Path;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Default marker appended to every suffixing n-gram.
pub const DEFAULT_MARKER: &str = "XX";

/// Configuration for the suffixing n-gram filter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SuffixNGramConfig {
    /// String appended to every generated gram.
    pub marker: String,

    /// Minimum gram length in characters (inclusive).
    pub min_gram: usize,

    /// Maximum gram length in characters (inclusive).
    pub max_gram: usize,
}

impl Default for SuffixNGramConfig {
    fn default() -> Self {
        Self {
            marker: DEFAULT_MARKER.to_string(),
            min_gram: 1,
            max_gram: 10,
        }
    }
}

/// Top-level analysis configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Settings for the suffixing n-gram filter.
    pub suffix_ngram: SuffixNGramConfig,
}

impl AnalysisConfig {
    /// Load configuration from a JSON file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        debug!("loading analysis config from {}", path.display());
        let content = fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Parse configuration from a JSON string.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = AnalysisConfig::default();
        assert_eq!(config.suffix_ngram.marker, "XX");
        assert_eq!(config.suffix_ngram.min_gram, 1);
        assert_eq!(config.suffix_ngram.max_gram, 10);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = AnalysisConfig::from_json(r#"{"suffix_ngram": {"max_gram": 3}}"#).unwrap();
        assert_eq!(config.suffix_ngram.marker, "XX");
        assert_eq!(config.suffix_ngram.min_gram, 1);
        assert_eq!(config.suffix_ngram.max_gram, 3);

        let empty = AnalysisConfig::from_json("{}").unwrap();
        assert_eq!(empty, AnalysisConfig::default());
    }

    #[test]
    fn test_invalid_json() {
        assert!(AnalysisConfig::from_json("{not json").is_err());
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"suffix_ngram": {{"marker": "~", "min_gram": 2, "max_gram": 2}}}}"#
        )
        .unwrap();

        let config = AnalysisConfig::from_file(file.path()).unwrap();
        assert_eq!(config.suffix_ngram.marker, "~");
        assert_eq!(config.suffix_ngram.min_gram, 2);
    }
}
