//! Store configuration.

use crate::error::{Result, StoreError};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_NODE_COUNT: usize = 4;
pub const DEFAULT_REPLICATION_FACTOR: usize = 3;
pub const DEFAULT_MAX_FILES: usize = 100;
pub const DEFAULT_MAX_NAME_LEN: usize = 63;
pub const DEFAULT_MAX_PAYLOAD_LEN: usize = 255;

/// Upper bounds accepted by [`StoreConfig::validate`].
pub const MAX_NODE_COUNT: usize = 4096;
pub const MAX_REPLICATION_FACTOR: usize = MAX_NODE_COUNT;
pub const MAX_FILES_LIMIT: usize = 1 << 20;
pub const MAX_NAME_LEN_LIMIT: usize = 4096;
pub const MAX_PAYLOAD_LEN_LIMIT: usize = 16 << 20;

/// Sizing of a [`ReplicatedStore`](crate::cluster::service::ReplicatedStore).
///
/// All values are fixed for the lifetime of the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Number of storage nodes, ids `0..node_count`.
    pub node_count: usize,
    /// Target number of replicas per file.
    pub replication_factor: usize,
    /// Capacity of the file catalog.
    pub max_files: usize,
    /// Maximum file name length in bytes.
    pub max_name_len: usize,
    /// Maximum payload length in bytes.
    pub max_payload_len: usize,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            node_count: DEFAULT_NODE_COUNT,
            replication_factor: DEFAULT_REPLICATION_FACTOR,
            max_files: DEFAULT_MAX_FILES,
            max_name_len: DEFAULT_MAX_NAME_LEN,
            max_payload_len: DEFAULT_MAX_PAYLOAD_LEN,
        }
    }
}

impl StoreConfig {
    /// Load configuration from a JSON file. Missing fields take their defaults.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| StoreError::Config(format!("Failed to read config file: {}", e)))?;

        let config: Self = serde_json::from_str(&content)
            .map_err(|e| StoreError::Config(format!("Failed to parse config: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        let checks = [
            ("node_count", self.node_count, "At least one node is required"),
            (
                "replication_factor",
                self.replication_factor,
                "Replication factor must be non-zero",
            ),
            ("max_files", self.max_files, "File table must hold at least one file"),
            ("max_name_len", self.max_name_len, "File names must allow at least one byte"),
        ];

        for (field, value, reason) in checks {
            if value == 0 {
                return Err(StoreError::InvalidConfig {
                    field: field.to_string(),
                    reason: reason.to_string(),
                });
            }
        }

        let ceilings = [
            ("node_count", self.node_count, MAX_NODE_COUNT),
            ("replication_factor", self.replication_factor, MAX_REPLICATION_FACTOR),
            ("max_files", self.max_files, MAX_FILES_LIMIT),
            ("max_name_len", self.max_name_len, MAX_NAME_LEN_LIMIT),
            ("max_payload_len", self.max_payload_len, MAX_PAYLOAD_LEN_LIMIT),
        ];

        for (field, value, limit) in ceilings {
            if value > limit {
                return Err(StoreError::InvalidConfig {
                    field: field.to_string(),
                    reason: format!("{} exceeds the limit of {}", value, limit),
                });
            }
        }

        if self.replication_factor > self.node_count {
            tracing::warn!(
                "Replication factor {} exceeds node count {}; every file will stay degraded",
                self.replication_factor,
                self.node_count
            );
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config_is_valid() {
        let config = StoreConfig::default();

        assert_eq!(config.node_count, 4);
        assert_eq!(config.replication_factor, 3);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_nodes_rejected() {
        let config = StoreConfig {
            node_count: 0,
            ..Default::default()
        };

        assert!(matches!(
            config.validate(),
            Err(StoreError::InvalidConfig { field, .. }) if field == "node_count"
        ));
    }

    #[test]
    fn test_oversized_values_rejected() {
        let config = StoreConfig {
            max_files: usize::MAX,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(StoreError::InvalidConfig { field, .. }) if field == "max_files"
        ));

        let config = StoreConfig {
            node_count: MAX_NODE_COUNT + 1,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(StoreError::InvalidConfig { field, .. }) if field == "node_count"
        ));

        let config = StoreConfig {
            replication_factor: usize::MAX,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(StoreError::InvalidConfig { field, .. }) if field == "replication_factor"
        ));
    }

    #[test]
    fn test_store_rejects_huge_catalog_without_allocating() {
        let config = StoreConfig {
            max_files: usize::MAX,
            ..Default::default()
        };

        assert!(matches!(
            crate::cluster::service::ReplicatedStore::new(config),
            Err(StoreError::InvalidConfig { .. })
        ));
    }

    #[test]
    fn test_limits_are_inclusive() {
        let config = StoreConfig {
            node_count: MAX_NODE_COUNT,
            max_files: MAX_FILES_LIMIT,
            ..Default::default()
        };

        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_replication_above_node_count_allowed() {
        let config = StoreConfig {
            node_count: 2,
            replication_factor: 3,
            ..Default::default()
        };

        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_from_file_partial() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"node_count": 6, "max_files": 10}}"#).unwrap();

        let config = StoreConfig::from_file(file.path()).unwrap();

        assert_eq!(config.node_count, 6);
        assert_eq!(config.max_files, 10);
        assert_eq!(config.replication_factor, DEFAULT_REPLICATION_FACTOR);
    }

    #[test]
    fn test_from_file_invalid() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();

        assert!(matches!(
            StoreConfig::from_file(file.path()),
            Err(StoreError::Config(_))
        ));

        let missing = StoreConfig::from_file(Path::new("/nonexistent/replica-store.json"));
        assert!(matches!(missing, Err(StoreError::Config(_))));
    }
}
