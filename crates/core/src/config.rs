use std::collections::{BTreeMap, HashMap};
use std::path::Path;

use anyhow::Context;
use serde::Deserialize;
use tracing::debug;

use crate::detector::{Detector, DetectorRegistry, FlagDetector};

/// Default config file name, looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = ".request-detect.toml";

/// Project-level configuration loaded from `.request-detect.toml`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub global: GlobalConfig,
    #[serde(default)]
    pub detectors: HashMap<String, DetectorConfig>,
    #[serde(default)]
    pub flags: BTreeMap<String, FlagConfig>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GlobalConfig {
    pub output_format: String,
    /// Glob patterns over detector names to disable
    pub exclude: Vec<String>,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            output_format: "text".to_string(),
            exclude: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct DetectorConfig {
    pub enabled: Option<bool>,
}

/// A declarative flag detector: `?<query>=1` or route param `<param>` = true.
#[derive(Debug, Clone, Deserialize)]
pub struct FlagConfig {
    pub query: String,
    pub param: String,
    #[serde(default)]
    pub description: Option<String>,
}

impl Config {
    /// Load config from a TOML file path. Returns default config if file doesn't exist.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config: {}", path.display()))?;
        Ok(config)
    }

    /// Check if a detector is enabled according to config.
    /// An explicit per-detector `enabled` wins over the global exclude list.
    pub fn is_detector_enabled(&self, name: &str) -> bool {
        if let Some(enabled) = self.detectors.get(name).and_then(|d| d.enabled) {
            return enabled;
        }
        !self
            .global
            .exclude
            .iter()
            .any(|pattern| glob::Pattern::new(pattern).is_ok_and(|p| p.matches(name)))
    }

    /// Build the flag detectors declared under `[flags.*]`.
    pub fn flag_detectors(&self) -> Vec<FlagDetector> {
        self.flags
            .iter()
            .map(|(name, flag)| {
                let detector = FlagDetector::new(name, &flag.query, &flag.param);
                match &flag.description {
                    Some(desc) => detector.with_description(desc),
                    None => detector,
                }
            })
            .collect()
    }

    /// Build a registry from the given built-in detectors followed by the
    /// configured flags, leaving out disabled ones. A flag sharing a
    /// built-in's name replaces it.
    pub fn build_registry(&self, builtins: Vec<Box<dyn Detector>>) -> DetectorRegistry {
        let flags = self
            .flag_detectors()
            .into_iter()
            .map(|f| Box::new(f) as Box<dyn Detector>);

        let mut registry = DetectorRegistry::new();
        for detector in builtins.into_iter().chain(flags) {
            if self.is_detector_enabled(detector.name()) {
                registry.register(detector);
            } else {
                debug!(detector = detector.name(), "detector disabled by config");
            }
        }
        registry
    }

    /// Generate default config file content.
    pub fn default_toml() -> &'static str {
        r#"# request-detect configuration

[global]
# Output format: "text", "json"
output_format = "text"
# Glob patterns over detector names to disable
exclude = []

# Per-detector overrides
# [detectors.jsonAction]
# enabled = false

# Extra flag detectors: true when ?<query>=1 or route param <param> is true
# [flags.export]
# query = "export_action"
# param = "exportAction"
# description = "Export download request"
"#
    }
}
