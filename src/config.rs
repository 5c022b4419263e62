use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::{InterRefsError, Result};

/// Conventional name of the settings file read by the `interrefs` binary.
pub const CONFIG_FILENAME: &str = "interrefs.toml";

/// How candidate hrefs are matched against the known documents.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchStrategy {
    /// Probe a url/slug index with the suffixes of each href.
    #[default]
    SuffixIndex,
    /// Compare every href against every known document.
    LinearScan,
}

/// Settings for the inter-references pass.
///
/// Keys follow the host site's upper-case settings convention, so the same
/// table can be shared with the rest of the build configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterRefsConfig {
    /// Site root. Absolute hrefs are internal only when they start with it.
    #[serde(rename = "SITE_URL", alias = "SITEURL", default)]
    pub site_url: String,
    /// Maximum number of forward references kept per document.
    #[serde(
        rename = "FORWARD_REFS",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub forward_refs: Option<usize>,
    /// Maximum number of backward references kept per document.
    #[serde(
        rename = "BACKWARD_REFS",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub backward_refs: Option<usize>,
    /// Matching algorithm used by the resolver.
    #[serde(rename = "MATCH_STRATEGY", default)]
    pub match_strategy: MatchStrategy,
}

impl InterRefsConfig {
    /// Builds a configuration from a host settings table.
    ///
    /// Unknown keys are ignored and absent keys take their defaults. A
    /// `null` cap means "unlimited".
    pub fn from_settings(settings: &serde_json::Map<String, serde_json::Value>) -> Result<Self> {
        let value = serde_json::Value::Object(settings.clone());
        serde_json::from_value(value).map_err(|e| InterRefsError::Config {
            message: format!("invalid settings: {}", e),
        })
    }
}

/// Parses a configuration from TOML text.
pub fn parse_config(contents: &str) -> Result<InterRefsConfig> {
    toml::from_str(contents).map_err(|e| InterRefsError::Config {
        message: format!("failed to parse config: {}", e),
    })
}

/// Loads the configuration from disk.
///
/// If the file does not exist, returns the default configuration: no site
/// root and no caps.
pub fn load_config(config_path: &Path) -> Result<InterRefsConfig> {
    if !config_path.exists() {
        return Ok(InterRefsConfig::default());
    }

    let contents = fs::read_to_string(config_path).map_err(|e| InterRefsError::Config {
        message: format!(
            "failed to read config file '{}': {}",
            config_path.display(),
            e
        ),
    })?;

    toml::from_str(&contents).map_err(|e| InterRefsError::Config {
        message: format!(
            "failed to parse config file '{}': {}",
            config_path.display(),
            e
        ),
    })
}
