use crate::config::StoreConfig;
use crate::error::{Result, StoreError};
use crate::membership::registry::NodeRegistry;
use crate::storage::catalog::FileCatalog;
use crate::storage::healing;
use crate::storage::placement::PlacementEngine;
use crate::storage::query;

use super::protocol::{
    CreateReport, FileListing, HealReport, NodeStatus, ReadOutcome, ReplicaStatus,
};

/// The whole store: node pool plus file catalog.
///
/// Every mutating operation takes `&mut self`, so a node transition together
/// with the invalidation and healing it triggers runs as one exclusive step
/// against a single registry snapshot.
#[derive(Debug, Clone)]
pub struct ReplicatedStore {
    config: StoreConfig,
    nodes: NodeRegistry,
    files: FileCatalog,
    placement: PlacementEngine,
}

impl ReplicatedStore {
    pub fn new(config: StoreConfig) -> Result<Self> {
        config.validate()?;

        tracing::info!(
            "Initializing store: {} nodes, replication factor {}, {} file slots",
            config.node_count,
            config.replication_factor,
            config.max_files
        );

        Ok(Self {
            nodes: NodeRegistry::new(config.node_count),
            files: FileCatalog::new(config.max_files, config.replication_factor),
            placement: PlacementEngine::new(),
            config,
        })
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    pub fn nodes(&self) -> &NodeRegistry {
        &self.nodes
    }

    pub fn files(&self) -> &FileCatalog {
        &self.files
    }

    /// Stores a new file and places its replicas.
    ///
    /// Succeeds with fewer than `R` replicas when not enough nodes are up;
    /// fails with `NoHealthyNodes` when none is.
    pub fn create_file(&mut self, name: &str, payload: impl Into<Vec<u8>>) -> Result<CreateReport> {
        let payload = payload.into();
        self.validate_name(name)?;
        if payload.len() > self.config.max_payload_len {
            return Err(StoreError::PayloadTooLarge {
                len: payload.len(),
                max: self.config.max_payload_len,
            });
        }

        let created = self
            .files
            .create(name, payload, &self.nodes, &self.placement)?;

        Ok(CreateReport {
            replicas: created.replicas,
            replication_factor: self.config.replication_factor,
        })
    }

    pub fn read_file(&self, name: &str) -> Result<ReadOutcome> {
        query::read(&self.files, &self.nodes, name)
    }

    /// Files in catalog slot order with their active replicas.
    pub fn list_files(&self) -> Vec<FileListing> {
        self.files
            .iter()
            .map(|file| FileListing {
                name: file.name.clone(),
                payload: file.payload.clone(),
                replicas: file
                    .active_nodes()
                    .map(|node| ReplicaStatus {
                        node,
                        healthy: self.nodes.is_healthy(node),
                    })
                    .collect(),
            })
            .collect()
    }

    pub fn list_nodes(&self) -> Vec<NodeStatus> {
        self.nodes
            .list_all()
            .iter()
            .map(|node| NodeStatus {
                node: node.id,
                healthy: node.state.is_up(),
            })
            .collect()
    }

    /// Marks a node down, drops its replica assignments, then heals.
    pub fn fail_node(&mut self, raw_id: usize) -> Result<HealReport> {
        let id = self.nodes.resolve(raw_id)?;
        self.nodes.mark_down(id)?;
        let invalidated = self.files.invalidate_replicas_on_node(id);

        let mut report = self.heal();
        report.invalidated = invalidated;
        Ok(report)
    }

    /// Marks a node up, then heals so degraded files can use it.
    pub fn recover_node(&mut self, raw_id: usize) -> Result<HealReport> {
        let id = self.nodes.resolve(raw_id)?;
        self.nodes.mark_up(id)?;
        Ok(self.heal())
    }

    /// One healing pass over every file. A second call with no state change
    /// in between does nothing.
    pub fn heal(&mut self) -> HealReport {
        healing::heal(&mut self.files, &self.nodes, &self.placement)
    }

    fn validate_name(&self, name: &str) -> Result<()> {
        if name.is_empty() {
            return Err(StoreError::InvalidName("name must not be empty".to_string()));
        }
        if name.len() > self.config.max_name_len {
            return Err(StoreError::InvalidName(format!(
                "name is {} bytes, max {}",
                name.len(),
                self.config.max_name_len
            )));
        }
        Ok(())
    }
}
