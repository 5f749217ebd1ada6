//! Command line argument parsing for the Vigil CLI using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

/// Vigil - stored query fingerprints and highlight analysis
#[derive(Parser, Debug, Clone)]
#[command(name = "vigil")]
#[command(about = "Stored query fingerprints and highlight analysis for reverse search")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct VigilArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human", global = true)]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl VigilArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n.saturating_add(1),
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Run highlight analysis over a piece of text
    Analyze(AnalyzeArgs),

    /// Print the content fingerprint of every query in a file
    Fingerprint(FingerprintArgs),

    /// Compare two query files and report which definitions changed
    Diff(DiffArgs),
}

/// Arguments for the analyze command
#[derive(Parser, Debug, Clone)]
pub struct AnalyzeArgs {
    /// Text to analyze
    #[arg(value_name = "TEXT")]
    pub text: String,

    /// Analysis configuration file (JSON)
    #[arg(short, long, value_name = "CONFIG_FILE", env = "VIGIL_CONFIG")]
    pub config: Option<PathBuf>,

    /// Marker appended to every n-gram (overrides the config file)
    #[arg(long)]
    pub marker: Option<String>,

    /// Minimum n-gram length (overrides the config file)
    #[arg(long)]
    pub min_gram: Option<usize>,

    /// Maximum n-gram length (overrides the config file)
    #[arg(long)]
    pub max_gram: Option<usize>,
}

/// Arguments for the fingerprint command
#[derive(Parser, Debug, Clone)]
pub struct FingerprintArgs {
    /// Query file (JSON array or JSONL)
    #[arg(value_name = "QUERY_FILE")]
    pub query_file: PathBuf,
}

/// Arguments for the diff command
#[derive(Parser, Debug, Clone)]
pub struct DiffArgs {
    /// Previous query file (JSON array or JSONL)
    #[arg(value_name = "OLD_FILE")]
    pub old_file: PathBuf,

    /// Current query file (JSON array or JSONL)
    #[arg(value_name = "NEW_FILE")]
    pub new_file: PathBuf,

    /// Also list unchanged query IDs
    #[arg(long)]
    pub show_unchanged: bool,
}

/// Output format options
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputFormat {
    /// Human-readable format
    Human,
    /// JSON format
    Json,
}
