use crate::error::{Result, StoreError};
use crate::membership::{registry::NodeRegistry, types::NodeId};
use tracing::{debug, info, warn};

use super::placement::PlacementEngine;
use super::types::{FileEntry, FileHandle};

/// Outcome of a successful [`FileCatalog::create`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CreatedFile {
    pub handle: FileHandle,
    pub replicas: usize,
}

/// Bounded table of files.
///
/// Slots are index-stable: files are never removed, so a file keeps its slot
/// for the catalog's lifetime and iteration follows slot order (insertion
/// order), not name order. Slots are allocated as files arrive, up to
/// `capacity`.
#[derive(Debug, Clone)]
pub struct FileCatalog {
    slots: Vec<FileEntry>,
    capacity: usize,
    replication_factor: usize,
}

impl FileCatalog {
    pub fn new(capacity: usize, replication_factor: usize) -> Self {
        Self {
            slots: Vec::new(),
            capacity,
            replication_factor,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn replication_factor(&self) -> usize {
        self.replication_factor
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    fn find(&self, name: &str) -> Option<FileHandle> {
        self.slots
            .iter()
            .position(|file| file.name == name)
            .map(FileHandle)
    }

    /// Exact, case-sensitive lookup.
    pub fn lookup_by_name(&self, name: &str) -> Result<&FileEntry> {
        self.find(name)
            .and_then(|handle| self.get(handle))
            .ok_or_else(|| StoreError::NotFound(name.to_string()))
    }

    pub fn get(&self, handle: FileHandle) -> Option<&FileEntry> {
        self.slots.get(handle.0)
    }

    /// Stores a new file in the next free slot and places its replicas.
    ///
    /// A file that receives no replica at all is not kept: nothing is
    /// stored and `NoHealthyNodes` is returned.
    pub fn create(
        &mut self,
        name: &str,
        payload: Vec<u8>,
        nodes: &NodeRegistry,
        placement: &PlacementEngine,
    ) -> Result<CreatedFile> {
        if self.find(name).is_some() {
            return Err(StoreError::DuplicateName(name.to_string()));
        }

        if self.slots.len() >= self.capacity {
            return Err(StoreError::CatalogFull {
                capacity: self.capacity,
            });
        }
        let index = self.slots.len();

        let mut file = FileEntry::new(name.to_string(), payload, self.replication_factor);
        let replicas = placement.place(&mut file, nodes);

        if replicas == 0 {
            warn!("No UP nodes available, '{}' was not stored", name);
            return Err(StoreError::NoHealthyNodes(name.to_string()));
        }

        if replicas < self.replication_factor {
            warn!(
                "File '{}' stored, but only {} replicas created (needed {})",
                name, replicas, self.replication_factor
            );
        } else {
            info!("File '{}' stored with {} replicas", name, replicas);
        }

        self.slots.push(file);

        Ok(CreatedFile {
            handle: FileHandle(index),
            replicas,
        })
    }

    /// Empties every replica slot that points at `node`, across all files.
    ///
    /// Returns the number of slots cleared. Does not heal.
    pub fn invalidate_replicas_on_node(&mut self, node: NodeId) -> usize {
        let cleared: usize = self.iter_mut().map(|file| file.invalidate(node)).sum();
        debug!("Invalidated {} replicas on node {}", cleared, node);
        cleared
    }

    pub fn count_active_replicas(&self, file: &FileEntry) -> usize {
        file.active_count()
    }

    /// True iff some active replica of `file` sits on a node that is up now.
    pub fn active_healthy_replica_exists(&self, file: &FileEntry, nodes: &NodeRegistry) -> bool {
        file.active_nodes().any(|node| nodes.is_healthy(node))
    }

    /// Files in slot order.
    pub fn iter(&self) -> impl Iterator<Item = &FileEntry> + '_ {
        self.slots.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut FileEntry> + '_ {
        self.slots.iter_mut()
    }
}
