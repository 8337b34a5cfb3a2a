use serde::{Deserialize, Serialize};
use std::fmt;

/// Dense node identifier in `0..node_count`, stable for the store's lifetime.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub usize);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum NodeState {
    Up,
    Down,
}

impl NodeState {
    pub fn is_up(self) -> bool {
        self == NodeState::Up
    }
}

impl fmt::Display for NodeState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeState::Up => write!(f, "UP"),
            NodeState::Down => write!(f, "DOWN"),
        }
    }
}

/// A storage node in the pool.
///
/// Nodes are created once when the registry is built and never removed; only
/// their `state` changes, through explicit failure and recovery.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Node {
    pub id: NodeId,
    pub state: NodeState,
}
