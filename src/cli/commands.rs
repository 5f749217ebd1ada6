//! Command implementations for the Vigil CLI.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use log::{debug, info, warn};

use crate::analysis::analyzer::{Analyzer, PipelineAnalyzer};
use crate::cli::args::*;
use crate::cli::output::*;
use crate::config::AnalysisConfig;
use crate::error::{Result, VigilError};
use crate::monitor::{MonitorQuery, QueryFingerprint};

/// Execute a CLI command.
pub fn execute_command(args: VigilArgs) -> Result<()> {
    match &args.command {
        Command::Analyze(analyze_args) => {
            output_result("Analysis", &analyze_text(analyze_args)?, &args)
        }
        Command::Fingerprint(fingerprint_args) => output_result(
            "Fingerprints",
            &fingerprint_queries(fingerprint_args)?,
            &args,
        ),
        Command::Diff(diff_args) => output_result("Diff", &diff_queries(diff_args)?, &args),
    }
}

/// Run the highlight pipeline over the given text.
pub fn analyze_text(args: &AnalyzeArgs) -> Result<AnalysisResult> {
    let mut config = match &args.config {
        Some(path) => AnalysisConfig::from_file(path)?,
        None => AnalysisConfig::default(),
    };

    if let Some(marker) = &args.marker {
        config.suffix_ngram.marker = marker.clone();
    }
    if let Some(min_gram) = args.min_gram {
        config.suffix_ngram.min_gram = min_gram;
    }
    if let Some(max_gram) = args.max_gram {
        config.suffix_ngram.max_gram = max_gram;
    }

    let analyzer = PipelineAnalyzer::highlight(&config.suffix_ngram)?;
    debug!("analyzing {} bytes with {analyzer:?}", args.text.len());

    let tokens = analyzer.analyze(&args.text)?.map(TokenEntry::from).collect();
    Ok(AnalysisResult { tokens })
}

/// Fingerprint every query in a file.
pub fn fingerprint_queries(args: &FingerprintArgs) -> Result<FingerprintResults> {
    let queries = load_queries(&args.query_file)?;
    info!(
        "fingerprinting {} queries from {}",
        queries.len(),
        args.query_file.display()
    );

    let queries = queries
        .iter()
        .map(|query| FingerprintEntry {
            id: query.id().to_string(),
            fingerprint: query.fingerprint(),
        })
        .collect();

    Ok(FingerprintResults { queries })
}

/// Compare two query files by ID and content fingerprint.
pub fn diff_queries(args: &DiffArgs) -> Result<DiffResult> {
    let old = index_by_id(load_queries(&args.old_file)?);
    let new = index_by_id(load_queries(&args.new_file)?);

    let mut result = DiffResult::default();
    let mut unchanged = Vec::new();

    for (id, fingerprint) in &new {
        match old.get(id) {
            None => result.added.push(id.clone()),
            Some(previous) if previous != fingerprint => result.changed.push(id.clone()),
            Some(_) => unchanged.push(id.clone()),
        }
    }
    result.removed = old
        .keys()
        .filter(|id| !new.contains_key(*id))
        .cloned()
        .collect();

    result.unchanged_count = unchanged.len();
    if args.show_unchanged {
        result.unchanged = Some(unchanged);
    }

    info!(
        "diff: {} added, {} removed, {} changed, {} unchanged",
        result.added.len(),
        result.removed.len(),
        result.changed.len(),
        result.unchanged_count
    );

    Ok(result)
}

/// Load queries from a JSON array or a JSONL file.
pub fn load_queries<P: AsRef<Path>>(path: P) -> Result<Vec<MonitorQuery>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    parse_queries(&content)
        .map_err(|e| VigilError::parse(format!("{}: {e}", path.display())))
}

/// Parse queries from a JSON array or JSONL text.
pub fn parse_queries(content: &str) -> Result<Vec<MonitorQuery>> {
    if content.trim_start().starts_with('[') {
        return Ok(serde_json::from_str(content)?);
    }

    let mut queries = Vec::new();
    for (line_num, line) in content.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let query = serde_json::from_str(line)
            .map_err(|e| VigilError::parse(format!("line {}: {e}", line_num + 1)))?;
        queries.push(query);
    }
    Ok(queries)
}

fn index_by_id(queries: Vec<MonitorQuery>) -> BTreeMap<String, QueryFingerprint> {
    let mut index = BTreeMap::new();
    for query in queries {
        if index
            .insert(query.id().to_string(), query.fingerprint())
            .is_some()
        {
            warn!("duplicate query id {:?}, keeping the last definition", query.id());
        }
    }
    index
}
