//! Config document loading and validation
//!
//! The advisor is driven by a JSON ion config:
//!
//! ```json
//! {
//!   "ion_name": "code-grouper",
//!   "version": "1.0.0",
//!   "strategies": ["functional", "layered"],
//!   "analysis": { "min_group_size": 3, "confidence_threshold": 0.5, "max_depth": 5 },
//!   "preserve_patterns": ["**/index.*"],
//!   "ignore_patterns": ["**/node_modules/**", "**/*.test.*"],
//!   "git": { "use_git_mv": true, "generate_rollback": true }
//! }
//! ```
//!
//! Every field is optional and defaulted. A missing file at the default
//! location falls back to defaults; an explicitly requested file must
//! exist. A file that is present but malformed, or that fails validation,
//! is a fatal `GrouperError::Config`.

use crate::errors::GrouperError;
use crate::models::Strategy;
use serde::Deserialize;
use std::path::Path;
use tracing::debug;

/// Default config filename probed next to the invocation.
pub const DEFAULT_CONFIG_FILE: &str = "grouper.config.json";

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GroupingConfig {
    pub ion_name: String,
    pub version: String,
    pub strategies: Vec<Strategy>,
    pub analysis: AnalysisConfig,
    pub preserve_patterns: Vec<String>,
    pub ignore_patterns: Vec<String>,
    pub git: GitConfig,
}

impl Default for GroupingConfig {
    fn default() -> Self {
        Self {
            ion_name: "code-grouper".to_string(),
            version: "1.0.0".to_string(),
            strategies: vec![Strategy::Functional, Strategy::Layered],
            analysis: AnalysisConfig::default(),
            preserve_patterns: Vec::new(),
            ignore_patterns: Vec::new(),
            git: GitConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    pub min_group_size: usize,
    pub confidence_threshold: f64,
    /// Accepted for compatibility with existing ion configs. Transitive
    /// graph traversal is out of scope, so the knob is currently unused.
    pub max_depth: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            min_group_size: 3,
            confidence_threshold: 0.5,
            max_depth: 5,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GitConfig {
    pub use_git_mv: bool,
    pub generate_rollback: bool,
}

impl Default for GitConfig {
    fn default() -> Self {
        Self {
            use_git_mv: true,
            generate_rollback: true,
        }
    }
}

impl GroupingConfig {
    /// Check value ranges after deserialization.
    pub fn validate(&self) -> Result<(), GrouperError> {
        if self.analysis.min_group_size == 0 {
            return Err(GrouperError::Config(
                "analysis.min_group_size must be at least 1".to_string(),
            ));
        }
        let t = self.analysis.confidence_threshold;
        if !(0.0..=1.0).contains(&t) {
            return Err(GrouperError::Config(format!(
                "analysis.confidence_threshold must be within [0, 1], got {t}"
            )));
        }
        if self.analysis.max_depth == 0 {
            return Err(GrouperError::Config(
                "analysis.max_depth must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

/// Load the config document.
///
/// `explicit` distinguishes a user-supplied `--config` path (must exist)
/// from the default probe location (absence means defaults).
pub fn load_config(path: &Path, explicit: bool) -> Result<GroupingConfig, GrouperError> {
    if !path.exists() {
        if explicit {
            return Err(GrouperError::Config(format!(
                "config file not found: {}",
                path.display()
            )));
        }
        debug!("no config at {}, using defaults", path.display());
        return Ok(GroupingConfig::default());
    }

    let content = std::fs::read_to_string(path)
        .map_err(|e| GrouperError::Config(format!("cannot read {}: {e}", path.display())))?;
    let config: GroupingConfig = serde_json::from_str(&content)
        .map_err(|e| GrouperError::Config(format!("cannot parse {}: {e}", path.display())))?;
    config.validate()?;
    debug!("loaded config from {}", path.display());
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_config(dir: &tempfile::TempDir, content: &str) -> std::path::PathBuf {
        let path = dir.path().join("grouper.config.json");
        let mut f = std::fs::File::create(&path).unwrap();
        f.write_all(content.as_bytes()).unwrap();
        path
    }

    #[test]
    fn test_defaults_when_absent() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("grouper.config.json");
        let config = load_config(&path, false).unwrap();
        assert_eq!(config.analysis.min_group_size, 3);
        assert_eq!(config.strategies.len(), 2);
        assert!(config.git.use_git_mv);
    }

    #[test]
    fn test_explicit_missing_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.json");
        let err = load_config(&path, true).unwrap_err();
        assert!(matches!(err, GrouperError::Config(_)));
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(&dir, r#"{"analysis": {"min_group_size": 2}}"#);
        let config = load_config(&path, true).unwrap();
        assert_eq!(config.analysis.min_group_size, 2);
        assert_eq!(config.analysis.confidence_threshold, 0.5);
    }

    #[test]
    fn test_malformed_config_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(&dir, "{ not json");
        assert!(matches!(
            load_config(&path, true),
            Err(GrouperError::Config(_))
        ));
    }

    #[test]
    fn test_threshold_out_of_range_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(&dir, r#"{"analysis": {"confidence_threshold": 1.5}}"#);
        assert!(matches!(
            load_config(&path, true),
            Err(GrouperError::Config(_))
        ));
    }
}
