//! forgepool.toml configuration parser.

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Top-level `forgepool.toml` configuration.
///
/// Every section and field is optional; omitted values fall back to the
/// built-in defaults, so an empty file is a valid configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PoolConfig {
    pub reuse: ReuseConfig,
    pub worker: WorkerConfig,
}

/// Node-reuse settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ReuseConfig {
    /// Master switch: when false, every node is terminated at end of build.
    pub enabled: bool,
    /// Host-wide cap on live worker nodes. Omitted means "derive from the
    /// host's parallel units". Values <= 0 disable reuse entirely.
    pub threshold: Option<i64>,
}

impl Default for ReuseConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            threshold: None,
        }
    }
}

/// Worker-process settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkerConfig {
    /// Executable name the census matches against the OS process table.
    pub process_name: String,
}

impl Default for WorkerConfig {
    fn default() -> Self {
        Self {
            process_name: "forge-worker".to_string(),
        }
    }
}

impl PoolConfig {
    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: PoolConfig = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn to_toml_string(&self) -> anyhow::Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_yields_defaults() {
        let config: PoolConfig = toml::from_str("").unwrap();
        assert!(config.reuse.enabled);
        assert_eq!(config.reuse.threshold, None);
        assert_eq!(config.worker.process_name, "forge-worker");
    }

    #[test]
    fn parse_full_config() {
        let toml_str = r#"
[reuse]
enabled = false
threshold = 6

[worker]
process_name = "my-worker"
"#;
        let config: PoolConfig = toml::from_str(toml_str).unwrap();
        assert!(!config.reuse.enabled);
        assert_eq!(config.reuse.threshold, Some(6));
        assert_eq!(config.worker.process_name, "my-worker");
    }

    #[test]
    fn partial_section_keeps_other_defaults() {
        let toml_str = r#"
[reuse]
threshold = 2
"#;
        let config: PoolConfig = toml::from_str(toml_str).unwrap();
        assert!(config.reuse.enabled);
        assert_eq!(config.reuse.threshold, Some(2));
        assert_eq!(config.worker.process_name, "forge-worker");
    }

    #[test]
    fn from_file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("forgepool.toml");

        let mut config = PoolConfig::default();
        config.reuse.threshold = Some(4);
        std::fs::write(&path, config.to_toml_string().unwrap()).unwrap();

        let loaded = PoolConfig::from_file(&path).unwrap();
        assert!(loaded.reuse.enabled);
        assert_eq!(loaded.reuse.threshold, Some(4));
    }
}
