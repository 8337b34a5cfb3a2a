//! Error types for the replicated store.
//!
//! Every fallible operation returns [`StoreError`] through the crate-wide
//! [`Result`] alias. None of these errors is fatal: the caller decides whether
//! to report, retry, or ignore.
//!
//! - **Node transitions**: `InvalidNode`, `AlreadyDown`, `AlreadyUp`
//! - **Catalog**: `DuplicateName`, `CatalogFull`, `NoHealthyNodes`, `InvalidName`, `PayloadTooLarge`
//! - **Reads**: `NotFound`, `Unavailable`
//! - **Configuration**: `InvalidConfig`, `Config`

use crate::membership::types::NodeId;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("Invalid node id {node} (valid range 0..{node_count})")]
    InvalidNode { node: usize, node_count: usize },

    #[error("Node {0} is already DOWN")]
    AlreadyDown(NodeId),

    #[error("Node {0} is already UP")]
    AlreadyUp(NodeId),

    #[error("File with name '{0}' already exists")]
    DuplicateName(String),

    #[error("File table full ({capacity} files), cannot create more files")]
    CatalogFull { capacity: usize },

    #[error("No UP nodes available, file '{0}' cannot be stored")]
    NoHealthyNodes(String),

    #[error("Invalid file name: {0}")]
    InvalidName(String),

    #[error("Payload too large: {len} bytes (max {max})")]
    PayloadTooLarge { len: usize, max: usize },

    #[error("File not found: {0}")]
    NotFound(String),

    #[error("All replicas of '{0}' are on failed nodes, data temporarily unavailable")]
    Unavailable(String),

    #[error("Invalid configuration for {field}: {reason}")]
    InvalidConfig { field: String, reason: String },

    #[error("Configuration error: {0}")]
    Config(String),
}

impl StoreError {
    /// True when the same request may succeed later without caller changes,
    /// e.g. after a node recovers.
    pub fn is_retryable(&self) -> bool {
        matches!(self, StoreError::Unavailable(_))
    }

    /// True for requested state transitions that were already in effect.
    pub fn is_noop(&self) -> bool {
        matches!(self, StoreError::AlreadyDown(_) | StoreError::AlreadyUp(_))
    }
}

pub type Result<T> = std::result::Result<T, StoreError>;
