//! Per-node file listings

use serde::{Deserialize, Serialize};

/// Filenames held by one node, in the node's own order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeListing {
    pub node_id: String,
    pub files: Vec<String>,
}

impl NodeListing {
    pub fn contains(&self, name: &str) -> bool {
        self.files.iter().any(|f| f == name)
    }
}

impl std::fmt::Display for NodeListing {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Node {}:", self.node_id)?;
        for name in &self.files {
            write!(f, "\n{}", name)?;
        }
        Ok(())
    }
}
