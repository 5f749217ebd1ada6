//! Suffixing n-gram filter implementation.
//!
//! Replaces every unprotected token with all of its character n-grams, each
//! followed by a fixed marker. Highlighting uses the marked grams to match
//! partial terms without colliding with whole-term matches, which survive as
//! the protected copies produced by
//! [`KeywordRepeatFilter`](super::keyword_repeat::KeywordRepeatFilter).
//!
//! # Examples
//!
//! ```
//! use vigil::analysis::token::Token;
//! use vigil::analysis::token_filter::Filter;
//! use vigil::analysis::token_filter::suffixing_ngram::SuffixingNGramFilter;
//!
//! let filter = SuffixingNGramFilter::new("XX", 1, 2).unwrap();
//! let tokens = vec![Token::with_offsets("abc", 0, 0, 3)];
//! let grams: Vec<_> = filter
//!     .filter(Box::new(tokens.into_iter()))
//!     .unwrap()
//!     .map(|t| t.text)
//!     .collect();
//!
//! assert_eq!(grams, vec!["aXX", "abXX", "bXX", "bcXX", "cXX"]);
//! ```

use std::sync::Arc;

use log::debug;

use super::Filter;

use crate::analysis::token::{Token, TokenStream};
use crate::config::SuffixNGramConfig;
use crate::error::{Result, VigilError};

/// A filter that expands unprotected tokens into marked n-grams.
///
/// For a token of `L` characters, grams are generated by start position
/// ascending and, for each start, by length ascending from `min_gram` up to
/// `min(max_gram, L - start)`. Keyword tokens pass through unchanged. Tokens
/// shorter than `min_gram` produce nothing; their position increment is
/// carried over to the next emitted token so later positions do not shift.
#[derive(Clone, Debug)]
pub struct SuffixingNGramFilter {
    marker: Arc<str>,
    min_gram: usize,
    max_gram: usize,
}

impl SuffixingNGramFilter {
    /// Create a new suffixing n-gram filter.
    ///
    /// # Errors
    ///
    /// Returns an error if `min_gram` is 0 or `max_gram` is less than
    /// `min_gram`.
    pub fn new<S: Into<String>>(marker: S, min_gram: usize, max_gram: usize) -> Result<Self> {
        if min_gram == 0 {
            return Err(VigilError::analysis("min_gram must be at least 1"));
        }
        if max_gram < min_gram {
            return Err(VigilError::analysis(format!(
                "max_gram ({max_gram}) must be >= min_gram ({min_gram})"
            )));
        }

        let marker: String = marker.into();
        debug!("suffixing n-gram filter: marker={marker:?} grams={min_gram}..={max_gram}");

        Ok(SuffixingNGramFilter {
            marker: Arc::from(marker),
            min_gram,
            max_gram,
        })
    }

    /// Create a filter from configuration.
    pub fn from_config(config: &SuffixNGramConfig) -> Result<Self> {
        Self::new(config.marker.clone(), config.min_gram, config.max_gram)
    }

    /// The marker appended to every gram.
    pub fn marker(&self) -> &str {
        &self.marker
    }

    /// Minimum gram length in characters.
    pub fn min_gram(&self) -> usize {
        self.min_gram
    }

    /// Maximum gram length in characters.
    pub fn max_gram(&self) -> usize {
        self.max_gram
    }
}

impl Filter for SuffixingNGramFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        Ok(Box::new(SuffixingNGramStream {
            input: tokens,
            marker: Arc::clone(&self.marker),
            min_gram: self.min_gram,
            max_gram: self.max_gram,
            current: None,
            pending_increment: 0,
        }))
    }

    fn name(&self) -> &'static str {
        "suffixing_ngram"
    }
}

/// Lazy output stream of [`SuffixingNGramFilter`].
struct SuffixingNGramStream {
    input: TokenStream,
    marker: Arc<str>,
    min_gram: usize,
    max_gram: usize,
    current: Option<Expansion>,
    /// Increment left behind by tokens that produced no grams.
    pending_increment: usize,
}

/// Cursor over the grams of one source token.
struct Expansion {
    source: Token,
    /// Byte offset of every char boundary in `source.text`, including the end.
    bounds: Vec<usize>,
    start: usize,
    len: usize,
    emitted: bool,
}

impl Expansion {
    fn new(mut source: Token, min_gram: usize, carried_increment: usize) -> Self {
        source.position_increment += carried_increment;
        let bounds = source
            .text
            .char_indices()
            .map(|(i, _)| i)
            .chain(std::iter::once(source.text.len()))
            .collect();
        Expansion {
            source,
            bounds,
            start: 0,
            len: min_gram,
            emitted: false,
        }
    }

    fn next_gram(&mut self, min_gram: usize, max_gram: usize, marker: &str) -> Option<Token> {
        let char_len = self.bounds.len() - 1;

        while self.start < char_len {
            if self.len <= max_gram.min(char_len - self.start) {
                let from = self.bounds[self.start];
                let to = self.bounds[self.start + self.len];
                self.len += 1;
                return Some(self.gram(from, to, marker));
            }
            self.start += 1;
            self.len = min_gram;
        }

        None
    }

    fn gram(&mut self, from: usize, to: usize, marker: &str) -> Token {
        let mut text = String::with_capacity(to - from + marker.len());
        text.push_str(&self.source.text[from..to]);
        text.push_str(marker);

        let start_offset = self.source.start_offset + from;
        let position_increment = if self.emitted {
            0
        } else {
            self.source.position_increment
        };
        self.emitted = true;

        Token {
            text,
            position: self.source.position,
            start_offset,
            end_offset: start_offset + (to - from),
            position_increment,
            position_length: 1,
            keyword: false,
        }
    }
}

impl Iterator for SuffixingNGramStream {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        loop {
            if let Some(expansion) = self.current.as_mut() {
                if let Some(gram) = expansion.next_gram(self.min_gram, self.max_gram, &self.marker)
                {
                    return Some(gram);
                }
                if !expansion.emitted {
                    self.pending_increment = expansion.source.position_increment;
                }
                self.current = None;
            }

            let mut token = self.input.next()?;
            let carried = std::mem::take(&mut self.pending_increment);
            if token.is_keyword() {
                token.position_increment += carried;
                return Some(token);
            }
            self.current = Some(Expansion::new(token, self.min_gram, carried));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(filter: &SuffixingNGramFilter, tokens: Vec<Token>) -> Vec<String> {
        filter
            .filter(Box::new(tokens.into_iter()))
            .unwrap()
            .map(|t| t.text)
            .collect()
    }

    #[test]
    fn test_filter_creation() {
        assert!(SuffixingNGramFilter::new("XX", 1, 10).is_ok());
        assert!(SuffixingNGramFilter::new("XX", 3, 3).is_ok());
        assert!(matches!(
            SuffixingNGramFilter::new("XX", 0, 2),
            Err(VigilError::Analysis(_))
        ));
        assert!(matches!(
            SuffixingNGramFilter::new("XX", 3, 2),
            Err(VigilError::Analysis(_))
        ));
    }

    #[test]
    fn test_tokens_are_suffixed() {
        let filter = SuffixingNGramFilter::new("XX", 1, 10).unwrap();
        let result = texts(&filter, vec![Token::with_offsets("term", 0, 0, 4)]);

        assert_eq!(
            result,
            vec![
                "tXX", "teXX", "terXX", "termXX", "eXX", "erXX", "ermXX", "rXX", "rmXX", "mXX"
            ]
        );
    }

    #[test]
    fn test_keywords_pass_through() {
        let filter = SuffixingNGramFilter::new("XX", 1, 10).unwrap();
        let tokens = vec![
            Token::with_offsets("term", 0, 0, 4).as_keyword(),
            Token::with_offsets("ab", 0, 0, 2).with_position_increment(0),
        ];
        let result: Vec<Token> = filter.filter(Box::new(tokens.into_iter())).unwrap().collect();

        assert_eq!(result.len(), 4);
        assert_eq!(result[0].text, "term");
        assert!(result[0].is_keyword());
        assert_eq!(result[1].text, "aXX");
        assert!(!result[1].is_keyword());
        assert_eq!(result[2].text, "abXX");
        assert_eq!(result[3].text, "bXX");
    }

    #[test]
    fn test_max_gram_truncates() {
        let filter = SuffixingNGramFilter::new("XX", 1, 2).unwrap();
        let result = texts(&filter, vec![Token::new("term", 0)]);

        assert_eq!(
            result,
            vec!["tXX", "teXX", "eXX", "erXX", "rXX", "rmXX", "mXX"]
        );
    }

    #[test]
    fn test_short_tokens_are_dropped() {
        let filter = SuffixingNGramFilter::new("XX", 3, 5).unwrap();
        let result = texts(
            &filter,
            vec![Token::new("ab", 0), Token::new("", 1), Token::new("abc", 2)],
        );

        assert_eq!(result, vec!["abcXX"]);
    }

    #[test]
    fn test_dropped_token_increment_carries_forward() {
        let filter = SuffixingNGramFilter::new("XX", 3, 3).unwrap();
        let tokens = vec![
            Token::new("abc", 0),
            Token::new("to", 1).with_position_increment(2),
            Token::new("a", 2),
            Token::new("xyz", 3),
            Token::new("of", 4),
            Token::new("key", 5).as_keyword(),
        ];
        let result: Vec<Token> = filter.filter(Box::new(tokens.into_iter())).unwrap().collect();

        let texts: Vec<&str> = result.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["abcXX", "xyzXX", "key"]);
        assert_eq!(result[0].position_increment, 1);
        // "to" (2) and "a" (1) were dropped before "xyz" (1)
        assert_eq!(result[1].position_increment, 4);
        // "of" (1) was dropped before the keyword (1)
        assert_eq!(result[2].position_increment, 2);
    }

    #[test]
    fn test_min_gram_skips_short_suffixes() {
        let filter = SuffixingNGramFilter::new("", 2, 3).unwrap();
        let result = texts(&filter, vec![Token::new("abcd", 0)]);

        assert_eq!(result, vec!["ab", "abc", "bc", "bcd", "cd"]);
    }

    #[test]
    fn test_offsets_and_positions() {
        let filter = SuffixingNGramFilter::new("#", 1, 2).unwrap();
        let tokens = vec![Token::with_offsets("日本語", 3, 10, 19)];
        let result: Vec<Token> = filter.filter(Box::new(tokens.into_iter())).unwrap().collect();

        assert_eq!(result.len(), 5);

        assert_eq!(result[0].text, "日#");
        assert_eq!((result[0].start_offset, result[0].end_offset), (10, 13));
        assert_eq!(result[0].position_increment, 1);

        assert_eq!(result[1].text, "日本#");
        assert_eq!((result[1].start_offset, result[1].end_offset), (10, 16));
        assert_eq!(result[1].position_increment, 0);

        assert_eq!(result[3].text, "本語#");
        assert_eq!((result[3].start_offset, result[3].end_offset), (13, 19));

        assert_eq!(result[4].text, "語#");
        assert_eq!((result[4].start_offset, result[4].end_offset), (16, 19));

        assert!(result.iter().all(|t| t.position == 3));
    }

    #[test]
    fn test_streams_are_independent() {
        let filter = SuffixingNGramFilter::new("XX", 1, 1).unwrap();
        let first = texts(&filter, vec![Token::new("ab", 0)]);
        let second = texts(&filter, vec![Token::new("cd", 0)]);

        assert_eq!(first, vec!["aXX", "bXX"]);
        assert_eq!(second, vec!["cXX", "dXX"]);
    }

    #[test]
    fn test_from_config() {
        let config = SuffixNGramConfig {
            marker: "__".to_string(),
            min_gram: 2,
            max_gram: 4,
        };
        let filter = SuffixingNGramFilter::from_config(&config).unwrap();
        assert_eq!(filter.marker(), "__");
        assert_eq!(filter.min_gram(), 2);
        assert_eq!(filter.max_gram(), 4);

        let invalid = SuffixNGramConfig {
            min_gram: 0,
            ..SuffixNGramConfig::default()
        };
        assert!(SuffixingNGramFilter::from_config(&invalid).is_err());
    }

    #[test]
    fn test_filter_name() {
        let filter = SuffixingNGramFilter::new("XX", 1, 10).unwrap();
        assert_eq!(filter.name(), "suffixing_ngram");
    }
}
