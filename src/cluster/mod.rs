//! Store Facade
//!
//! [`service::ReplicatedStore`] owns the node registry and the file catalog and
//! exposes the operations a front end calls: create, read, list, fail and
//! recover. Node transitions trigger invalidation and healing here.

pub mod protocol;
pub mod service;
