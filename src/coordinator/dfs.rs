//! Replication coordinator
//!
//! Owns the fixed, ordered list of storage nodes behind one exclusive lock.
//! Every operation holds the lock for its whole node scan, so calls from
//! different threads form a single sequential history. Readers block
//! readers too.

use crate::common::{DfsConfig, Error, Result};
use crate::coordinator::listing::NodeListing;
use crate::coordinator::stats::{Counters, DfsStats};
use crate::node::{File, MemoryNode, StorageNode};
use bytes::Bytes;
use std::sync::{Mutex, MutexGuard};

type Nodes = Vec<Box<dyn StorageNode>>;

pub struct Dfs {
    nodes: Mutex<Nodes>,
    node_ids: Vec<String>,
    counters: Counters,
}

impl Dfs {
    /// Create a coordinator with `replicas` in-memory nodes named `Node1..NodeN`.
    pub fn new(replicas: usize) -> Result<Self> {
        Self::from_config(&DfsConfig {
            replicas,
            ..Default::default()
        })
    }

    pub fn from_config(config: &DfsConfig) -> Result<Self> {
        config.validate()?;
        let nodes: Nodes = (0..config.replicas)
            .map(|i| Box::new(MemoryNode::new(config.node_id(i))) as Box<dyn StorageNode>)
            .collect();
        Self::with_nodes(nodes)
    }

    /// Build a coordinator over caller-supplied nodes, kept in the given order.
    pub fn with_nodes(nodes: Nodes) -> Result<Self> {
        if nodes.is_empty() {
            return Err(Error::InvalidConfig(
                "at least one storage node is required".into(),
            ));
        }
        let node_ids: Vec<String> = nodes.iter().map(|n| n.id().to_string()).collect();
        for (i, id) in node_ids.iter().enumerate() {
            if node_ids[..i].contains(id) {
                return Err(Error::InvalidConfig(format!("duplicate node id: {}", id)));
            }
        }
        tracing::info!(replicas = nodes.len(), nodes = ?node_ids, "DFS initialized");

        Ok(Self {
            nodes: Mutex::new(nodes),
            node_ids,
            counters: Counters::new(),
        })
    }

    /// Replication factor
    pub fn replicas(&self) -> usize {
        self.node_ids.len()
    }

    /// Node ids in index order
    pub fn node_ids(&self) -> &[String] {
        &self.node_ids
    }

    pub fn stats(&self) -> DfsStats {
        self.counters.snapshot()
    }

    fn lock(&self) -> Result<MutexGuard<'_, Nodes>> {
        self.nodes
            .lock()
            .map_err(|_| Error::Internal("coordinator lock poisoned".into()))
    }

    /// Store `data` under `filename` on every node, in index order.
    ///
    /// A failing node aborts the write; nodes before it keep the new copy.
    pub fn write(&self, filename: &str, data: impl Into<Bytes>) -> Result<()> {
        let mut nodes = self.lock()?;
        let file = File::new(filename, data);
        tracing::debug!(filename, size = file.size(), replicas = nodes.len(), "write");

        for node in nodes.iter_mut() {
            node.set(filename, file.clone())?;
        }

        self.counters.record_write();
        Ok(())
    }

    /// Content held by the lowest-indexed node that has `filename`.
    pub fn read(&self, filename: &str) -> Result<Bytes> {
        self.stat(filename).map(|file| file.data().clone())
    }

    /// Full record held by the lowest-indexed node that has `filename`.
    pub fn stat(&self, filename: &str) -> Result<File> {
        let nodes = self.lock()?;
        let result = lookup(&nodes, filename);
        drop(nodes);

        self.counters.record_read(result.is_ok());
        result
    }

    /// Remove `filename` from every node. Absence is not an error.
    ///
    /// Every node is attempted; the first node error is returned afterwards.
    pub fn delete(&self, filename: &str) -> Result<()> {
        let mut nodes = self.lock()?;
        tracing::debug!(filename, replicas = nodes.len(), "delete");

        let mut first_err = None;
        for node in nodes.iter_mut() {
            if let Err(e) = node.remove(filename) {
                tracing::warn!(node = node.id(), filename, error = %e, "delete failed on node");
                first_err.get_or_insert(e);
            }
        }

        self.counters.record_delete();
        match first_err {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }

    /// Filenames held by each node, in node index order.
    pub fn list(&self) -> Result<Vec<NodeListing>> {
        let nodes = self.lock()?;

        let mut listings = Vec::with_capacity(nodes.len());
        for node in nodes.iter() {
            listings.push(NodeListing {
                node_id: node.id().to_string(),
                files: node.keys()?,
            });
        }

        self.counters.record_list();
        Ok(listings)
    }
}

fn lookup(nodes: &[Box<dyn StorageNode>], filename: &str) -> Result<File> {
    let mut answered = false;
    let mut last_err = None;

    for node in nodes {
        match node.get(filename) {
            Ok(Some(file)) => {
                tracing::debug!(filename, node = node.id(), "read hit");
                return Ok(file);
            }
            Ok(None) => answered = true,
            Err(e) => {
                tracing::warn!(node = node.id(), filename, error = %e, "skipping node on read");
                last_err = Some(e);
            }
        }
    }

    match last_err {
        Some(e) if !answered => Err(e),
        _ => {
            tracing::debug!(filename, "read miss");
            Err(Error::NotFound(filename.to_string()))
        }
    }
}
