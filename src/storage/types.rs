use crate::membership::types::NodeId;
use serde::{Deserialize, Serialize};

/// One replica position of a file.
///
/// `Active` names the node assigned to hold a copy. It says nothing about
/// whether that node is currently healthy.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum ReplicaSlot {
    #[default]
    Empty,
    Active(NodeId),
}

impl ReplicaSlot {
    pub fn node(&self) -> Option<NodeId> {
        match self {
            ReplicaSlot::Active(node) => Some(*node),
            ReplicaSlot::Empty => None,
        }
    }

    pub fn is_active(&self) -> bool {
        matches!(self, ReplicaSlot::Active(_))
    }
}

/// Index of an occupied catalog slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FileHandle(pub usize);

/// A named file with its payload and a fixed number of replica slots.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FileEntry {
    pub name: String,
    pub payload: Vec<u8>,
    pub replicas: Vec<ReplicaSlot>,
}

impl FileEntry {
    /// Creates a file with `replication_factor` empty slots.
    pub fn new(name: String, payload: Vec<u8>, replication_factor: usize) -> Self {
        Self {
            name,
            payload,
            replicas: vec![ReplicaSlot::Empty; replication_factor],
        }
    }

    /// Nodes of active slots, in slot order.
    pub fn active_nodes(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.replicas.iter().filter_map(ReplicaSlot::node)
    }

    pub fn active_count(&self) -> usize {
        self.active_nodes().count()
    }

    pub fn hosts(&self, node: NodeId) -> bool {
        self.active_nodes().any(|n| n == node)
    }

    pub fn replication_factor(&self) -> usize {
        self.replicas.len()
    }

    pub fn is_fully_replicated(&self) -> bool {
        self.active_count() >= self.replication_factor()
    }

    /// Occupies the first empty slot with `node`.
    ///
    /// Returns `false` when every slot is already active.
    pub fn fill_first_empty(&mut self, node: NodeId) -> bool {
        match self.replicas.iter_mut().find(|slot| !slot.is_active()) {
            Some(slot) => {
                *slot = ReplicaSlot::Active(node);
                true
            }
            None => false,
        }
    }

    /// Empties every slot pointing at `node`; returns how many were cleared.
    pub fn invalidate(&mut self, node: NodeId) -> usize {
        let mut cleared = 0;
        for slot in self.replicas.iter_mut() {
            if *slot == ReplicaSlot::Active(node) {
                *slot = ReplicaSlot::Empty;
                cleared += 1;
            }
        }
        cleared
    }

    pub fn clear_replicas(&mut self) {
        self.replicas.fill(ReplicaSlot::Empty);
    }
}
