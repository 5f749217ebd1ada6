//! Output formatting for CLI commands.

use std::fmt::Write as _;

use serde::{Deserialize, Serialize};

use crate::analysis::token::Token;
use crate::cli::args::{OutputFormat, VigilArgs};
use crate::error::Result;
use crate::monitor::QueryFingerprint;

/// Results that know how to print themselves for humans.
pub trait HumanReadable {
    /// Render the result as plain text.
    fn render_human(&self) -> String;
}

/// One analyzed token.
#[derive(Debug, Serialize, Deserialize)]
pub struct TokenEntry {
    pub text: String,
    pub position: usize,
    pub start_offset: usize,
    pub end_offset: usize,
    pub keyword: bool,
}

impl From<Token> for TokenEntry {
    fn from(token: Token) -> Self {
        TokenEntry {
            text: token.text,
            position: token.position,
            start_offset: token.start_offset,
            end_offset: token.end_offset,
            keyword: token.keyword,
        }
    }
}

/// Result structure for the analyze command.
#[derive(Debug, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub tokens: Vec<TokenEntry>,
}

/// One fingerprinted query.
#[derive(Debug, Serialize, Deserialize)]
pub struct FingerprintEntry {
    pub id: String,
    pub fingerprint: QueryFingerprint,
}

/// Result structure for the fingerprint command.
#[derive(Debug, Serialize, Deserialize)]
pub struct FingerprintResults {
    pub queries: Vec<FingerprintEntry>,
}

/// Result structure for the diff command.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct DiffResult {
    pub added: Vec<String>,
    pub removed: Vec<String>,
    pub changed: Vec<String>,
    pub unchanged_count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unchanged: Option<Vec<String>>,
}

impl HumanReadable for AnalysisResult {
    fn render_human(&self) -> String {
        let mut out = String::new();
        for token in &self.tokens {
            let _ = writeln!(
                out,
                "{:<20} pos={:<3} offsets={}..{}{}",
                token.text,
                token.position,
                token.start_offset,
                token.end_offset,
                if token.keyword { " [keyword]" } else { "" }
            );
        }
        out
    }
}

impl HumanReadable for FingerprintResults {
    fn render_human(&self) -> String {
        let mut out = String::new();
        for entry in &self.queries {
            let _ = writeln!(out, "{}  {}", entry.fingerprint, entry.id);
        }
        out
    }
}

impl HumanReadable for DiffResult {
    fn render_human(&self) -> String {
        let mut out = String::new();
        for id in &self.added {
            let _ = writeln!(out, "+ {id}");
        }
        for id in &self.removed {
            let _ = writeln!(out, "- {id}");
        }
        for id in &self.changed {
            let _ = writeln!(out, "~ {id}");
        }
        if let Some(unchanged) = &self.unchanged {
            for id in unchanged {
                let _ = writeln!(out, "  {id}");
            }
        }
        let _ = writeln!(
            out,
            "{} added, {} removed, {} changed, {} unchanged",
            self.added.len(),
            self.removed.len(),
            self.changed.len(),
            self.unchanged_count
        );
        out
    }
}

/// Render a result in the requested format.
pub fn format_result<T: Serialize + HumanReadable>(
    message: &str,
    result: &T,
    args: &VigilArgs,
) -> Result<String> {
    match args.output_format {
        OutputFormat::Human => {
            let mut out = String::new();
            if args.verbosity() > 1 {
                let _ = writeln!(out, "{message}");
            }
            out.push_str(&result.render_human());
            Ok(out)
        }
        OutputFormat::Json => {
            let json = if args.pretty {
                serde_json::to_string_pretty(result)?
            } else {
                serde_json::to_string(result)?
            };
            Ok(json + "\n")
        }
    }
}

/// Output a result in the specified format.
pub fn output_result<T: Serialize + HumanReadable>(
    message: &str,
    result: &T,
    args: &VigilArgs,
) -> Result<()> {
    print!("{}", format_result(message, result, args)?);
    Ok(())
}
