use std::path::Path;

use anyhow::{Context, Result};
use request_detect::config::{Config, DEFAULT_CONFIG_FILE};

pub fn run(force: bool) -> Result<()> {
    let path = Path::new(DEFAULT_CONFIG_FILE);
    if write_config(path, force)? {
        println!("Wrote request-detect config to {}", path.display());
    } else {
        eprintln!(
            "{} already exists, pass --force to overwrite it",
            path.display()
        );
    }
    Ok(())
}

/// Write the default config to `path`. Returns false if a file is already
/// there and `force` is not set.
fn write_config(path: &Path, force: bool) -> Result<bool> {
    if path.exists() && !force {
        return Ok(false);
    }
    std::fs::write(path, Config::default_toml())
        .with_context(|| format!("Failed to write config: {}", path.display()))?;
    tracing::debug!(path = %path.display(), force, "wrote default config");
    Ok(true)
}
