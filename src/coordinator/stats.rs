//! Operation counters for the coordinator

use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};

/// Live counters, updated without taking the coordinator lock
#[derive(Debug, Default)]
pub struct Counters {
    writes: AtomicU64,
    reads: AtomicU64,
    read_misses: AtomicU64,
    deletes: AtomicU64,
    lists: AtomicU64,
}

impl Counters {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_write(&self) {
        self.writes.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_read(&self, hit: bool) {
        self.reads.fetch_add(1, Ordering::Relaxed);
        if !hit {
            self.read_misses.fetch_add(1, Ordering::Relaxed);
        }
    }

    pub fn record_delete(&self) {
        self.deletes.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_list(&self) {
        self.lists.fetch_add(1, Ordering::Relaxed);
    }

    pub fn snapshot(&self) -> DfsStats {
        DfsStats {
            writes: self.writes.load(Ordering::Relaxed),
            reads: self.reads.load(Ordering::Relaxed),
            read_misses: self.read_misses.load(Ordering::Relaxed),
            deletes: self.deletes.load(Ordering::Relaxed),
            lists: self.lists.load(Ordering::Relaxed),
        }
    }
}

/// Point-in-time copy of [`Counters`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DfsStats {
    pub writes: u64,
    pub reads: u64,
    pub read_misses: u64,
    pub deletes: u64,
    pub lists: u64,
}

impl DfsStats {
    /// Fraction of reads that found the file (1.0 when nothing was read)
    pub fn hit_ratio(&self) -> f64 {
        if self.reads == 0 {
            return 1.0;
        }
        (self.reads - self.read_misses) as f64 / self.reads as f64
    }
}

impl std::fmt::Display for DfsStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "writes:      {}", self.writes)?;
        writeln!(f, "reads:       {}", self.reads)?;
        writeln!(f, "read misses: {}", self.read_misses)?;
        writeln!(f, "deletes:     {}", self.deletes)?;
        write!(f, "lists:       {}", self.lists)
    }
}
