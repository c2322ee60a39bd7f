pub mod batch;
pub mod classify;
pub mod init;
pub mod list;

use std::path::PathBuf;

use anyhow::Result;
use request_detect::config::{Config, DEFAULT_CONFIG_FILE};
use request_detect::detector::DetectorRegistry;

use crate::OutputFormat;

/// Load config and build the registry from built-in and configured detectors.
fn load_registry(config: Option<PathBuf>) -> Result<(Config, DetectorRegistry)> {
    let path = config.unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE));
    let config = Config::load(&path)?;
    let registry = config.build_registry(request_detect_detectors::all_detectors());
    tracing::debug!(detectors = registry.len(), "registry ready");
    Ok((config, registry))
}

/// CLI flag first, then the config's `output_format`, then text.
fn resolve_format(flag: Option<OutputFormat>, config: &Config) -> OutputFormat {
    flag.unwrap_or_else(|| match config.global.output_format.to_lowercase().as_str() {
        "json" => OutputFormat::Json,
        _ => OutputFormat::Text,
    })
}
