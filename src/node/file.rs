//! File record stored on every replica

use crate::common::blake3_hash;
use bytes::Bytes;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A named payload as held by a storage node.
///
/// Never mutated after construction: an overwrite stores a new `File`
/// under the same name.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct File {
    name: String,
    data: Bytes,
    last_modified: DateTime<Utc>,
    checksum: String,
}

impl File {
    pub fn new(name: impl Into<String>, data: impl Into<Bytes>) -> Self {
        let data = data.into();
        Self {
            name: name.into(),
            checksum: blake3_hash(&data),
            data,
            last_modified: Utc::now(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn data(&self) -> &Bytes {
        &self.data
    }

    pub fn last_modified(&self) -> DateTime<Utc> {
        self.last_modified
    }

    /// BLAKE3 hex digest of the payload
    pub fn checksum(&self) -> &str {
        &self.checksum
    }

    pub fn size(&self) -> u64 {
        self.data.len() as u64
    }
}
