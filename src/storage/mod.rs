//! Replicated File Storage Module
//!
//! Holds the file catalog and the algorithms that decide where copies live.
//!
//! ## Core Concepts
//! - **Catalog**: a fixed-capacity, slot-ordered table of named files, each with `R` replica slots.
//! - **Placement**: on create, replicas go to the first `min(R, healthy)` healthy nodes by ascending id.
//! - **Healing**: after a node fails or recovers, empty slots are refilled on healthy nodes not already holding a copy.
//! - **Query**: a read is served by the first active replica whose node is currently up.

pub mod catalog;
pub mod healing;
pub mod placement;
pub mod query;
pub mod types;
