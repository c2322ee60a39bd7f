use std::path::PathBuf;

use anyhow::{bail, Result};
use request_detect::request::{ParamValue, Request};

use super::{load_registry, resolve_format};
use crate::output;
use crate::OutputFormat;

pub fn run(
    query: &str,
    params: &[String],
    detector: Option<String>,
    format: Option<OutputFormat>,
    config: Option<PathBuf>,
    no_color: bool,
) -> Result<()> {
    let (config, registry) = load_registry(config)?;
    let format = resolve_format(format, &config);

    let mut request = Request::from_query_string(query);
    for raw in params {
        let (key, value) = parse_param(raw)?;
        request.params.insert(key, value);
    }

    match detector {
        Some(name) => {
            let matched = registry.evaluate(&name, &request)?;
            match format {
                OutputFormat::Json => output::json::print(&serde_json::json!({
                    "detector": name,
                    "matched": matched,
                }))?,
                OutputFormat::Text => output::text::print_single(&name, matched, no_color),
            }
        }
        None => {
            let classification = registry.classify(&request)?;
            match format {
                OutputFormat::Json => output::json::print(&classification)?,
                OutputFormat::Text => output::text::print_classification(
                    &classification,
                    &registry.list_detectors(),
                    no_color,
                ),
            }
        }
    }

    Ok(())
}

fn parse_param(raw: &str) -> Result<(String, ParamValue)> {
    let Some((key, value)) = raw.split_once('=') else {
        bail!("Invalid --param `{raw}`: expected KEY=VALUE");
    };
    if key.is_empty() {
        bail!("Invalid --param `{raw}`: empty key");
    }
    Ok((key.to_string(), ParamValue::parse_scalar(value)))
}
