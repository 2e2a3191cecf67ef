//! Storage nodes
//!
//! A node is one replica holder: a map from filename to [`File`]. Nodes do
//! no locking of their own; the coordinator owns them and serializes access.
//! Everything a node does goes through [`StorageNode`], so an unreachable or
//! remote node can be slotted in without touching the coordinator.

pub mod file;
pub mod memory;

pub use file::File;
pub use memory::MemoryNode;

use crate::common::Result;

/// Trait for replica holders
pub trait StorageNode: Send {
    /// Stable label assigned at startup
    fn id(&self) -> &str;

    fn get(&self, name: &str) -> Result<Option<File>>;

    /// Insert or overwrite
    fn set(&mut self, name: &str, file: File) -> Result<()>;

    /// No-op if absent
    fn remove(&mut self, name: &str) -> Result<()>;

    fn keys(&self) -> Result<Vec<String>>;
}
