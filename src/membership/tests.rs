//! Node Registry Tests
//!
//! ## Test Scopes
//! - **Data Structures**: id ordering, state display, serialization of node snapshots.
//! - **Transitions**: failure/recovery, repeated transitions, out-of-range ids.
//! - **Ordered Scans**: healthy nodes are yielded by ascending id.

#[cfg(test)]
mod tests {
    use crate::error::StoreError;
    use crate::membership::registry::NodeRegistry;
    use crate::membership::types::{Node, NodeId, NodeState};

    // ============================================================
    // NODE TYPE TESTS
    // ============================================================

    #[test]
    fn test_node_id_ordering() {
        assert!(NodeId(0) < NodeId(1));
        assert_eq!(NodeId(3).to_string(), "3");
    }

    #[test]
    fn test_node_state_display() {
        assert_eq!(NodeState::Up.to_string(), "UP");
        assert_eq!(NodeState::Down.to_string(), "DOWN");
        assert!(NodeState::Up.is_up());
        assert!(!NodeState::Down.is_up());
    }

    #[test]
    fn test_node_serialization() {
        let node = Node {
            id: NodeId(2),
            state: NodeState::Down,
        };

        let json = serde_json::to_string(&node).expect("Serialization failed");
        let restored: Node = serde_json::from_str(&json).expect("Deserialization failed");

        assert_eq!(restored, node);
    }

    // ============================================================
    // REGISTRY INITIALIZATION TESTS
    // ============================================================

    #[test]
    fn test_registry_starts_all_up() {
        let registry = NodeRegistry::new(4);

        assert_eq!(registry.len(), 4);
        assert_eq!(registry.healthy_count(), 4);

        let ids: Vec<usize> = registry.list_all().iter().map(|n| n.id.0).collect();
        assert_eq!(ids, vec![0, 1, 2, 3], "Node ids should be dense and ascending");
    }

    #[test]
    fn test_empty_registry() {
        let registry = NodeRegistry::new(0);

        assert!(registry.is_empty());
        assert_eq!(registry.healthy_nodes().count(), 0);
        assert!(!registry.is_healthy(NodeId(0)));
    }

    // ============================================================
    // TRANSITION TESTS
    // ============================================================

    #[test]
    fn test_mark_down_then_up() {
        let mut registry = NodeRegistry::new(4);

        registry.mark_down(NodeId(1)).unwrap();
        assert!(!registry.is_healthy(NodeId(1)));
        assert_eq!(registry.healthy_count(), 3);

        registry.mark_up(NodeId(1)).unwrap();
        assert!(registry.is_healthy(NodeId(1)));
        assert_eq!(registry.healthy_count(), 4);
    }

    #[test]
    fn test_mark_down_twice_is_reported() {
        let mut registry = NodeRegistry::new(4);

        registry.mark_down(NodeId(0)).unwrap();
        let err = registry.mark_down(NodeId(0)).unwrap_err();

        assert_eq!(err, StoreError::AlreadyDown(NodeId(0)));
        assert!(err.is_noop());
        assert!(!registry.is_healthy(NodeId(0)));
    }

    #[test]
    fn test_mark_up_healthy_node_is_reported() {
        let mut registry = NodeRegistry::new(4);

        let err = registry.mark_up(NodeId(3)).unwrap_err();
        assert_eq!(err, StoreError::AlreadyUp(NodeId(3)));
    }

    #[test]
    fn test_out_of_range_ids() {
        let mut registry = NodeRegistry::new(4);

        assert_eq!(
            registry.resolve(5).unwrap_err(),
            StoreError::InvalidNode { node: 5, node_count: 4 }
        );
        assert_eq!(registry.resolve(3).unwrap(), NodeId(3));

        assert!(matches!(
            registry.mark_down(NodeId(4)),
            Err(StoreError::InvalidNode { node: 4, .. })
        ));
        assert!(!registry.is_healthy(NodeId(4)));
        assert_eq!(registry.healthy_count(), 4, "Failed transition must not change state");
    }

    // ============================================================
    // ORDERED SCAN TESTS
    // ============================================================

    #[test]
    fn test_healthy_nodes_ascending() {
        let mut registry = NodeRegistry::new(5);
        registry.mark_down(NodeId(0)).unwrap();
        registry.mark_down(NodeId(3)).unwrap();

        let healthy: Vec<NodeId> = registry.healthy_nodes().collect();
        assert_eq!(healthy, vec![NodeId(1), NodeId(2), NodeId(4)]);
    }
}
