use crate::cluster::protocol::{CreateReport, FileListing, HealReport, NodeStatus, ReadOutcome};
use crate::membership::types::NodeState;
use std::fmt::Write;

fn state(healthy: bool) -> NodeState {
    if healthy { NodeState::Up } else { NodeState::Down }
}

pub fn render_files(files: &[FileListing]) -> String {
    let mut out = String::from("=== Files & Replicas ===\n");
    for file in files {
        let _ = writeln!(out, "File: {}", file.name);
        let _ = writeln!(out, "  Data: {}", String::from_utf8_lossy(&file.payload));
        out.push_str("  Replicas:");
        for replica in &file.replicas {
            let _ = write!(out, " [node {} {}]", replica.node, state(replica.healthy));
        }
        out.push('\n');
    }
    out.push_str("========================");
    out
}

pub fn render_nodes(nodes: &[NodeStatus]) -> String {
    let mut out = String::from("=== Node Status ===\n");
    for node in nodes {
        let _ = writeln!(out, "Node {} : {}", node.node, state(node.healthy));
    }
    out.push_str("===================");
    out
}

pub fn render_created(report: &CreateReport) -> String {
    if report.degraded() {
        format!(
            "File stored, but only {} replicas created (needed {}).",
            report.replicas, report.replication_factor
        )
    } else {
        format!("File stored with {} replicas.", report.replicas)
    }
}

pub fn render_read(name: &str, outcome: &ReadOutcome) -> String {
    format!(
        "File '{}' read from node {}.\nData: {}",
        name,
        outcome.node,
        String::from_utf8_lossy(&outcome.payload)
    )
}

/// Node transition line, the number of replicas lost to a failure, then one
/// line per healing event and per file left degraded.
pub fn render_transition(headline: &str, report: &HealReport) -> String {
    let mut out = headline.to_string();
    if report.invalidated > 0 {
        let _ = write!(out, "\n[LOST] {} replica(s) invalidated.", report.invalidated);
    }
    for event in &report.events {
        let _ = write!(
            out,
            "\n[HEAL] File '{}' replicated to node {} to maintain fault tolerance.",
            event.file, event.node
        );
    }
    for degraded in &report.degraded {
        let _ = write!(
            out,
            "\n[WARN] File '{}' has {} of {} replicas.",
            degraded.file, degraded.active, degraded.required
        );
    }
    out
}
