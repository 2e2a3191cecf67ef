//! Configuration for minidfs
//!
//! Values are layered: built-in defaults, then an optional TOML file, then
//! `MINIDFS_`-prefixed environment variables (`MINIDFS_DFS__REPLICAS=5`).

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default config file looked up by [`Config::load`]
pub const DEFAULT_CONFIG_FILE: &str = "minidfs.toml";

/// Environment variable prefix
pub const ENV_PREFIX: &str = "MINIDFS";

/// Global configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Replication settings
    #[serde(default)]
    pub dfs: DfsConfig,

    /// Logging level
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Coordinator configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DfsConfig {
    /// Replication factor (number of storage nodes)
    #[serde(default = "default_replicas")]
    pub replicas: usize,

    /// Node ids are `{node_prefix}{n}`, n starting at 1
    #[serde(default = "default_node_prefix")]
    pub node_prefix: String,
}

fn default_replicas() -> usize {
    3
}
fn default_node_prefix() -> String {
    "Node".to_string()
}

impl Default for DfsConfig {
    fn default() -> Self {
        Self {
            replicas: default_replicas(),
            node_prefix: default_node_prefix(),
        }
    }
}

impl DfsConfig {
    pub fn validate(&self) -> crate::Result<()> {
        if self.replicas == 0 {
            return Err(crate::Error::InvalidConfig(
                "replicas must be at least 1".into(),
            ));
        }
        if self.node_prefix.is_empty() {
            return Err(crate::Error::InvalidConfig(
                "node_prefix cannot be empty".into(),
            ));
        }
        Ok(())
    }

    /// Id of the node at `index` (0-based)
    pub fn node_id(&self, index: usize) -> String {
        format!("{}{}", self.node_prefix, index + 1)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dfs: DfsConfig::default(),
            log_level: default_log_level(),
        }
    }
}

impl Config {
    /// Load from `minidfs.toml` in the working directory (if present) and the environment.
    pub fn load() -> crate::Result<Self> {
        Self::load_from(DEFAULT_CONFIG_FILE)
    }

    /// Load from the given file (optional) and the environment.
    pub fn load_from(path: impl AsRef<Path>) -> crate::Result<Self> {
        let path = path.as_ref();
        let settings = config::Config::builder()
            .add_source(config::File::from(path).required(false))
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let config: Config = settings.try_deserialize()?;
        config.validate()?;
        tracing::debug!(path = %path.display(), replicas = config.dfs.replicas, "config loaded");
        Ok(config)
    }

    pub fn validate(&self) -> crate::Result<()> {
        self.dfs.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_toml(contents: &str) -> NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.dfs.replicas, 3);
        assert_eq!(config.dfs.node_prefix, "Node");
        assert_eq!(config.log_level, "info");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_node_id() {
        let dfs = DfsConfig::default();
        assert_eq!(dfs.node_id(0), "Node1");
        assert_eq!(dfs.node_id(2), "Node3");
    }

    #[test]
    fn test_load_from_file() {
        let file = write_toml(
            r#"
log_level = "debug"

[dfs]
replicas = 5
node_prefix = "replica-"
"#,
        );
        let config = Config::load_from(file.path()).unwrap();
        assert_eq!(config.dfs.replicas, 5);
        assert_eq!(config.dfs.node_prefix, "replica-");
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from(dir.path().join("absent.toml")).unwrap();
        assert_eq!(config.dfs.replicas, 3);
    }

    #[test]
    fn test_load_default_location() {
        // no minidfs.toml ships with the crate, so defaults apply
        let config = Config::load().unwrap();
        assert_eq!(config.dfs.node_prefix, "Node");
        assert!(config.dfs.replicas >= 1);
    }

    #[test]
    fn test_zero_replicas_rejected() {
        let file = write_toml("[dfs]\nreplicas = 0\n");
        let err = Config::load_from(file.path()).unwrap_err();
        assert!(matches!(err, crate::Error::InvalidConfig(_)));
    }

    #[test]
    fn test_empty_prefix_rejected() {
        let dfs = DfsConfig {
            replicas: 2,
            node_prefix: String::new(),
        };
        assert!(dfs.validate().is_err());
    }
}
