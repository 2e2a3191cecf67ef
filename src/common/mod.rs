//! Common utilities and types shared across minidfs

pub mod config;
pub mod error;
pub mod utils;

pub use config::{Config, DfsConfig};
pub use error::{Error, Result};
pub use utils::{blake3_hash, format_bytes};
