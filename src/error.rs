//! Error types for Corkboard
//!
//! Provides a unified error type for all operations.

use thiserror::Error;

/// Result type alias using BoardError
pub type Result<T> = std::result::Result<T, BoardError>;

/// Unified error type for Corkboard operations
#[derive(Debug, Error)]
pub enum BoardError {
    // -------------------------------------------------------------------------
    // I/O Errors
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // -------------------------------------------------------------------------
    // Protocol Errors
    // -------------------------------------------------------------------------
    #[error("Protocol error: {0}")]
    Protocol(String),

    // -------------------------------------------------------------------------
    // Store Errors
    // -------------------------------------------------------------------------
    /// A board name exceeded the structural limit. There is no recovery
    /// path once this is violated; callers treat it as fatal.
    #[error("board name too long: {len} bytes (max {max})")]
    NameTooLong { len: usize, max: usize },
}
