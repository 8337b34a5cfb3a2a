//! Store Interface Types
//!
//! Plain values returned by [`ReplicatedStore`](super::service::ReplicatedStore)
//! to whatever front end drives it. They are serializable so a front end can
//! emit them as JSON without mapping.

use crate::membership::types::NodeId;
use serde::{Deserialize, Serialize};

pub use crate::storage::healing::{DegradedFile, HealEvent, HealReport};
pub use crate::storage::query::ReadOutcome;

/// Result of a successful file creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateReport {
    /// Replicas placed at creation time.
    pub replicas: usize,
    /// The store's replication factor.
    pub replication_factor: usize,
}

impl CreateReport {
    /// The file was stored with fewer than `replication_factor` copies.
    pub fn degraded(&self) -> bool {
        self.replicas < self.replication_factor
    }
}

/// One active replica of a listed file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplicaStatus {
    pub node: NodeId,
    /// Health of the hosting node at listing time.
    pub healthy: bool,
}

/// A file as shown by listings, with its active replicas in slot order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileListing {
    pub name: String,
    #[serde(with = "payload_text")]
    pub payload: Vec<u8>,
    pub replicas: Vec<ReplicaStatus>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeStatus {
    pub node: NodeId,
    pub healthy: bool,
}

/// Payloads travel as text in JSON. Invalid UTF-8 is replaced with U+FFFD.
mod payload_text {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(payload: &[u8], serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&String::from_utf8_lossy(payload))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<u8>, D::Error> {
        String::deserialize(deserializer).map(String::into_bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn listing(payload: &[u8]) -> FileListing {
        FileListing {
            name: "a".to_string(),
            payload: payload.to_vec(),
            replicas: vec![ReplicaStatus { node: NodeId(1), healthy: true }],
        }
    }

    #[test]
    fn test_listing_payload_is_json_text() {
        let value = serde_json::to_value(listing(b"hi there")).unwrap();

        assert_eq!(value["payload"], "hi there");
        assert_eq!(value["replicas"][0]["node"], 1);

        let back: FileListing = serde_json::from_value(value).unwrap();
        assert_eq!(back, listing(b"hi there"));
    }

    #[test]
    fn test_listing_payload_invalid_utf8_is_lossy() {
        let value = serde_json::to_value(listing(&[b'o', b'k', 0xff])).unwrap();

        assert_eq!(value["payload"], "ok\u{fffd}");
    }
}
