use crate::error::{Result, StoreError};
use crate::membership::{registry::NodeRegistry, types::NodeId};
use serde::{Deserialize, Serialize};

use super::catalog::FileCatalog;
use super::types::FileEntry;

/// A successful read: the node that served it and the file content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReadOutcome {
    pub node: NodeId,
    pub payload: Vec<u8>,
}

/// First active replica, in slot order, whose node is up.
pub fn serving_node(file: &FileEntry, nodes: &NodeRegistry) -> Option<NodeId> {
    file.active_nodes().find(|&node| nodes.is_healthy(node))
}

/// Reads `name` from any live replica.
///
/// `NotFound` means the name is unknown; `Unavailable` means the file exists
/// but every active replica is on a failed node.
pub fn read(catalog: &FileCatalog, nodes: &NodeRegistry, name: &str) -> Result<ReadOutcome> {
    let file = catalog.lookup_by_name(name)?;

    if !catalog.active_healthy_replica_exists(file, nodes) {
        tracing::warn!("All replicas of '{}' are on failed nodes", name);
        return Err(StoreError::Unavailable(name.to_string()));
    }

    let node = serving_node(file, nodes).ok_or_else(|| StoreError::Unavailable(name.to_string()))?;
    tracing::debug!("File '{}' read from node {}", name, node);

    Ok(ReadOutcome {
        node,
        payload: file.payload.clone(),
    })
}
