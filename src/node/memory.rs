//! In-memory storage node

use crate::common::Result;
use crate::node::{File, StorageNode};
use std::collections::HashMap;

/// In-memory node (default)
///
/// `keys()` reports names in the order they were first inserted; an
/// overwrite keeps the original position.
#[derive(Debug)]
pub struct MemoryNode {
    id: String,
    files: HashMap<String, File>,
    order: Vec<String>,
}

impl MemoryNode {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            files: HashMap::new(),
            order: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

impl StorageNode for MemoryNode {
    fn id(&self) -> &str {
        &self.id
    }

    fn get(&self, name: &str) -> Result<Option<File>> {
        Ok(self.files.get(name).cloned())
    }

    fn set(&mut self, name: &str, file: File) -> Result<()> {
        if self.files.insert(name.to_string(), file).is_none() {
            self.order.push(name.to_string());
        }
        Ok(())
    }

    fn remove(&mut self, name: &str) -> Result<()> {
        if self.files.remove(name).is_some() {
            self.order.retain(|k| k != name);
        }
        Ok(())
    }

    fn keys(&self) -> Result<Vec<String>> {
        Ok(self.order.clone())
    }
}
