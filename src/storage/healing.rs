//! Healing Engine
//!
//! Restores files toward the replication factor after a node changes state.
//! Healing only fills empty slots; it never moves or drops an active replica.

use crate::membership::{registry::NodeRegistry, types::NodeId};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use super::catalog::FileCatalog;
use super::placement::PlacementEngine;

/// A replica created by healing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealEvent {
    pub file: String,
    pub node: NodeId,
}

/// A file left below the replication factor after a healing pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DegradedFile {
    pub file: String,
    pub active: usize,
    pub required: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealReport {
    /// Replica slots emptied by the node failure that triggered this pass.
    #[serde(default)]
    pub invalidated: usize,
    pub events: Vec<HealEvent>,
    pub degraded: Vec<DegradedFile>,
}

impl HealReport {
    pub fn is_noop(&self) -> bool {
        self.events.is_empty()
    }
}

/// Runs one healing pass over every file in slot order.
///
/// Per file, keeps adding replicas on the lowest-id eligible node until the
/// file has `R` active replicas or no healthy node without a copy remains.
/// Each iteration either adds a replica or stops, so the loop is bounded by `R`.
pub fn heal(catalog: &mut FileCatalog, nodes: &NodeRegistry, placement: &PlacementEngine) -> HealReport {
    let mut report = HealReport::default();

    for file in catalog.iter_mut() {
        while !file.is_fully_replicated() {
            let Some(target) = placement.choose_recovery_target(file, nodes) else {
                break;
            };
            if !file.fill_first_empty(target) {
                break;
            }

            info!(
                "File '{}' replicated to node {} to maintain fault tolerance",
                file.name, target
            );
            report.events.push(HealEvent {
                file: file.name.clone(),
                node: target,
            });
        }

        if !file.is_fully_replicated() {
            warn!(
                "File '{}' remains degraded: {} of {} replicas",
                file.name,
                file.active_count(),
                file.replication_factor()
            );
            report.degraded.push(DegradedFile {
                file: file.name.clone(),
                active: file.active_count(),
                required: file.replication_factor(),
            });
        }
    }

    report
}
