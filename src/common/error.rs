//! Error types for minidfs

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    // === Lookup Errors ===
    #[error("File not found: {0}")]
    NotFound(String),

    // === Node Errors ===
    #[error("Node {node} unavailable: {reason}")]
    NodeUnavailable { node: String, reason: String },

    // === Config Errors ===
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Config error: {0}")]
    Config(#[from] config::ConfigError),

    // === Generic ===
    #[error("Internal error: {0}")]
    Internal(String),
}

impl Error {
    /// Did the lookup simply miss?
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound(_))
    }

    /// Is this a node-level failure that a caller could retry?
    pub fn is_retryable(&self) -> bool {
        matches!(self, Error::NodeUnavailable { .. })
    }
}
