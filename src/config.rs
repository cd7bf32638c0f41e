//! # Configuration Module
//!
//! Runtime configuration for mix planning and where it is stored.
//!
//! Automix reads an optional JSON file from the platform config directory:
//! - Linux: `~/.config/automix/config.json`
//! - macOS: `~/Library/Application Support/automix/config.json`
//! - Windows: `%APPDATA%\automix\config.json`
//!
//! Every field is optional:
//!
//! ```json
//! {
//!   "diameter": "weighted",
//!   "link_update": "symmetric",
//!   "parallel": true,
//!   "metric": { "tempo_scale": 6.0, "ring_change_penalty": 1.0 }
//! }
//! ```

use anyhow::{Context, Result};
use clap::ValueEnum;
use log::debug;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::metric::HarmonicMetric;
use crate::paths::LinkUpdate;

/// What "farthest apart" means when picking the mix path.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum DiameterMode {
    /// Every tree edge counts as one step
    #[default]
    Hops,
    /// Tree edges keep their metric weight
    Weighted,
}

/// Settings for one planning run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MixConfig {
    pub diameter: DiameterMode,
    pub link_update: LinkUpdate,
    /// Evaluate the distance matrix on the rayon thread pool
    pub parallel: bool,
    pub metric: HarmonicMetric,
}

impl Default for MixConfig {
    fn default() -> Self {
        Self {
            diameter: DiameterMode::Hops,
            link_update: LinkUpdate::Symmetric,
            parallel: true,
            metric: HarmonicMetric::default(),
        }
    }
}

impl MixConfig {
    /// Reject settings the metric cannot work with.
    ///
    /// # Errors
    ///
    /// See [`HarmonicMetric::validate`].
    pub fn validate(&self) -> crate::error::Result<()> {
        self.metric.validate()
    }
}

/// Returns the platform-appropriate configuration file path.
///
/// The file itself is not created; only its parent lookup can fail.
///
/// # Errors
///
/// Returns an error if the system config directory cannot be determined.
pub fn get_config_path() -> Result<PathBuf> {
    let config_dir = dirs::config_dir().ok_or_else(|| {
        anyhow::anyhow!(
            "Could not determine system config directory. Pass --config to choose a file explicitly."
        )
    })?;
    Ok(config_dir.join("automix").join("config.json"))
}

/// Parse a configuration document.
///
/// # Errors
///
/// Returns an error if `text` is not valid configuration JSON or holds
/// out-of-range metric settings.
pub fn parse(text: &str) -> Result<MixConfig> {
    let config: MixConfig = serde_json::from_str(text).context("Invalid automix configuration")?;
    config.validate().context("Invalid automix configuration")?;
    Ok(config)
}

/// Load configuration.
///
/// An explicit `path` must exist. Without one, the default location is used
/// when present and built-in defaults otherwise.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed.
pub fn load(path: Option<&Path>) -> Result<MixConfig> {
    let path = match path {
        Some(path) => path.to_path_buf(),
        None => match get_config_path() {
            Ok(path) if path.exists() => path,
            _ => {
                debug!("No configuration file, using defaults");
                return Ok(MixConfig::default());
            }
        },
    };

    let text = fs::read_to_string(&path)
        .with_context(|| format!("Failed to read configuration {}", path.display()))?;
    let config = parse(&text).with_context(|| format!("In {}", path.display()))?;
    debug!("Loaded configuration from {}: {config:?}", path.display());
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = MixConfig::default();
        assert_eq!(config.diameter, DiameterMode::Hops);
        assert_eq!(config.link_update, LinkUpdate::Symmetric);
        assert_eq!(config.metric.tempo_scale, 6.0);
    }

    #[test]
    fn test_partial_document_fills_defaults() {
        let config = parse(r#"{ "diameter": "weighted", "metric": { "tempo_scale": 4.0 } }"#).unwrap();
        assert_eq!(config.diameter, DiameterMode::Weighted);
        assert_eq!(config.link_update, LinkUpdate::Symmetric);
        assert!(config.parallel);
        assert_eq!(config.metric.tempo_scale, 4.0);
        assert_eq!(config.metric.ring_change_penalty, 1.0);
    }

    #[test]
    fn test_empty_document_is_default() {
        assert_eq!(parse("{}").unwrap(), MixConfig::default());
    }

    #[test]
    fn test_unknown_mode_rejected() {
        assert!(parse(r#"{ "diameter": "longest" }"#).is_err());
    }

    #[test]
    fn test_zero_tempo_scale_rejected() {
        let err = parse(r#"{ "metric": { "tempo_scale": 0 } }"#).unwrap_err();
        let message = format!("{err:#}");
        assert!(message.contains("Invalid automix configuration"), "{message}");
        assert!(message.contains("tempo_scale must be a positive number"), "{message}");
        assert!(parse(r#"{ "metric": { "tempo_scale": -2.5 } }"#).is_err());
    }

    #[test]
    fn test_load_reports_file_with_bad_metric() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "metric": {{ "tempo_scale": 0.0 }} }}"#).unwrap();
        let message = format!("{:#}", load(Some(file.path())).unwrap_err());
        assert!(message.contains(&file.path().display().to_string()), "{message}");
        assert!(message.contains("tempo_scale"), "{message}");
    }

    #[test]
    fn test_load_explicit_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "link_update": "reference", "parallel": false }}"#).unwrap();
        let config = load(Some(file.path())).unwrap();
        assert_eq!(config.link_update, LinkUpdate::Reference);
        assert!(!config.parallel);
    }

    #[test]
    fn test_load_missing_explicit_file_fails() {
        let dir = tempfile::TempDir::new().unwrap();
        assert!(load(Some(&dir.path().join("missing.json"))).is_err());
    }

    #[test]
    fn test_config_path_structure() {
        if let Ok(path) = get_config_path() {
            assert!(path.ends_with("automix/config.json"));
        }
    }
}
