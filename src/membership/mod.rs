//! Node Registry
//!
//! Tracks the fixed pool of storage nodes and whether each one is currently
//! able to hold and serve replicas.
//!
//! ## Core Mechanisms
//! - **Dense ids**: nodes are numbered `0..N-1` at startup and never removed.
//! - **Health transitions**: `Up -> Down` on failure, `Down -> Up` on recovery.
//!   Repeating a transition is reported as `AlreadyDown` / `AlreadyUp`.
//! - **Ordered scans**: healthy nodes are always yielded by ascending id.

pub mod registry;
pub mod types;

#[cfg(test)]
mod tests;
