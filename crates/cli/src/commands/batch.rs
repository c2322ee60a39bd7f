use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use request_detect::report::BatchReport;
use request_detect::request::Request;
use request_detect::BatchError;

use super::{load_registry, resolve_format};
use crate::output;
use crate::OutputFormat;

pub fn run(
    path: &Path,
    format: Option<OutputFormat>,
    config: Option<PathBuf>,
    no_color: bool,
) -> Result<()> {
    let (config, registry) = load_registry(config)?;
    let format = resolve_format(format, &config);

    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read requests: {}", path.display()))?;
    let entries = parse_requests(&content);
    let invalid = entries.iter().filter(|e| e.is_err()).count();
    tracing::info!(entries = entries.len(), invalid, "classifying batch");

    let results = registry.classify_decoded(entries);
    let report = BatchReport::from_results(&registry.list_detectors(), results);

    match format {
        OutputFormat::Json => output::json::print(&report)?,
        OutputFormat::Text => output::text::print_batch(&report, no_color),
    }

    if !report.failures.is_empty() {
        std::process::exit(1);
    }

    Ok(())
}

/// One JSON request object per line; blank lines are skipped.
/// A line that does not decode becomes an entry-level error.
fn parse_requests(content: &str) -> Vec<Result<Request, BatchError>> {
    content
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(idx, line)| {
            serde_json::from_str::<Request>(line)
                .map_err(|e| BatchError::InvalidRequest(format!("line {}: {e}", idx + 1)))
        })
        .collect()
}
