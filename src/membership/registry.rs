use crate::error::{Result, StoreError};
use tracing::info;

use super::types::{Node, NodeId, NodeState};

/// Fixed-size pool of nodes indexed by their dense id.
///
/// Iteration is always in ascending id order; placement and healing depend on
/// that order for determinism.
#[derive(Debug, Clone)]
pub struct NodeRegistry {
    nodes: Vec<Node>,
}

impl NodeRegistry {
    /// Creates `node_count` nodes, all `Up`.
    pub fn new(node_count: usize) -> Self {
        let nodes = (0..node_count)
            .map(|i| Node {
                id: NodeId(i),
                state: NodeState::Up,
            })
            .collect();

        Self { nodes }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0)
    }

    /// Resolves a caller-supplied id, rejecting anything outside `0..len`.
    pub fn resolve(&self, raw: usize) -> Result<NodeId> {
        if raw < self.nodes.len() {
            Ok(NodeId(raw))
        } else {
            Err(StoreError::InvalidNode {
                node: raw,
                node_count: self.nodes.len(),
            })
        }
    }

    /// Unknown ids are never healthy.
    pub fn is_healthy(&self, id: NodeId) -> bool {
        self.get(id).is_some_and(|node| node.state.is_up())
    }

    pub fn mark_down(&mut self, id: NodeId) -> Result<()> {
        let node = self.node_mut(id)?;
        if node.state == NodeState::Down {
            return Err(StoreError::AlreadyDown(id));
        }
        node.state = NodeState::Down;
        info!("Node {} marked as DOWN", id);
        Ok(())
    }

    pub fn mark_up(&mut self, id: NodeId) -> Result<()> {
        let node = self.node_mut(id)?;
        if node.state == NodeState::Up {
            return Err(StoreError::AlreadyUp(id));
        }
        node.state = NodeState::Up;
        info!("Node {} is now UP", id);
        Ok(())
    }

    /// All nodes by ascending id.
    pub fn list_all(&self) -> &[Node] {
        &self.nodes
    }

    /// Ids of `Up` nodes by ascending id.
    pub fn healthy_nodes(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.nodes
            .iter()
            .filter(|node| node.state.is_up())
            .map(|node| node.id)
    }

    pub fn healthy_count(&self) -> usize {
        self.healthy_nodes().count()
    }

    fn node_mut(&mut self, id: NodeId) -> Result<&mut Node> {
        let node_count = self.nodes.len();
        self.nodes.get_mut(id.0).ok_or(StoreError::InvalidNode {
            node: id.0,
            node_count,
        })
    }
}
