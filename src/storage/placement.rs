//! Placement engine for assigning file replicas to nodes.

use crate::membership::{registry::NodeRegistry, types::NodeId};
use tracing::debug;

use super::types::{FileEntry, ReplicaSlot};

/// Chooses nodes for replicas by scanning healthy nodes in ascending id order.
///
/// The same registry snapshot always yields the same assignment. There is no
/// load awareness; the only spreading rule is one replica per node per file.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlacementEngine;

impl PlacementEngine {
    pub fn new() -> Self {
        Self
    }

    /// Resets all of the file's slots, then fills them with the first
    /// `min(R, healthy)` healthy nodes. Returns the number of replicas placed.
    pub fn place(&self, file: &mut FileEntry, nodes: &NodeRegistry) -> usize {
        file.clear_replicas();

        let mut placed = 0;
        for (slot, node) in file.replicas.iter_mut().zip(nodes.healthy_nodes()) {
            *slot = ReplicaSlot::Active(node);
            placed += 1;
        }

        debug!(
            "Placed {} of {} replicas for '{}'",
            placed,
            file.replication_factor(),
            file.name
        );
        placed
    }

    /// Lowest-id healthy node that does not already hold an active replica of
    /// `file`, if any.
    pub fn choose_recovery_target(&self, file: &FileEntry, nodes: &NodeRegistry) -> Option<NodeId> {
        nodes.healthy_nodes().find(|&node| !file.hosts(node))
    }
}
