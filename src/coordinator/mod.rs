//! Replication coordinator
//!
//! The coordinator is responsible for:
//! - Owning the fixed, ordered set of storage nodes
//! - Full synchronous replication of writes and deletes
//! - First-hit lookup in node index order
//! - Serializing every operation behind one lock

pub mod dfs;
pub mod listing;
pub mod stats;

pub use dfs::Dfs;
pub use listing::NodeListing;
pub use stats::DfsStats;
