//! # minidfs
//!
//! An in-memory replicated file store:
//! - A fixed set of storage nodes, each a map from filename to file record
//! - Synchronous full replication: every write and delete touches every node
//! - Reads served by the first node (in index order) holding the file
//! - One coordinator lock serializing all operations
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │              Coordinator                │
//! │   write  → all nodes, index order       │
//! │   read   → first node with the file     │
//! │   delete → all nodes, index order       │
//! │   (single exclusive lock)               │
//! └───────────┬─────────────────────────────┘
//!             │
//!   ┌─────────┴──────────┬──────────────┐
//!   │                    │              │
//! ┌─▼──────────┐   ┌─────▼──────┐   ┌───▼────────┐
//! │ Node1      │   │ Node2      │   │ Node3      │
//! │ name→File  │   │ name→File  │   │ name→File  │
//! └────────────┘   └────────────┘   └────────────┘
//! ```
//!
//! ## Usage
//!
//! ```
//! use minidfs::Dfs;
//!
//! let dfs = Dfs::new(3)?;
//! dfs.write("a.txt", "hello")?;
//! assert_eq!(dfs.read("a.txt")?, "hello");
//!
//! dfs.delete("a.txt")?;
//! assert!(dfs.read("a.txt").unwrap_err().is_not_found());
//! # Ok::<(), minidfs::Error>(())
//! ```

pub mod common;
pub mod coordinator;
pub mod node;

// Re-export commonly used types
pub use common::{Config, DfsConfig, Error, Result};
pub use coordinator::{Dfs, DfsStats, NodeListing};
pub use node::{File, MemoryNode, StorageNode};

/// Current version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
