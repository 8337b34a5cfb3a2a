//! Replicated File Store Model
//!
//! An in-process model of a file store that keeps a target number of copies
//! of every file across a fixed pool of storage nodes, and repairs itself when
//! nodes fail or come back.
//!
//! ## Architecture Modules
//! - **`membership`**: the node registry. Dense node ids and their up/down state.
//! - **`storage`**: the file catalog plus the placement, healing and read algorithms.
//! - **`cluster`**: the `ReplicatedStore` facade that owns both and runs healing
//!   after every node transition.
//! - **`shell`**: a line-based front end that parses commands and renders results.
//! - **`config`** / **`error`**: store sizing and the shared error type.

pub mod cluster;
pub mod config;
pub mod error;
pub mod membership;
pub mod shell;
pub mod storage;
