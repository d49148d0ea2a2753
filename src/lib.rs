//! # Corkboard
//!
//! A minimal message-board service:
//! - Named boards holding ordered sequences of text posts
//! - CRUD over an HTTP/1.1-flavored text protocol on raw TCP
//! - Strictly iterative server (one client at a time)
//! - Companion CLI client
//!
//! ## Architecture Overview
//!
//! ```text
//! raw bytes ──► codec::decode_request ──► router::dispatch ──► BoardStore
//!                                               │
//! raw bytes ◄── codec::encode_response ◄── StatusCode + body
//! ```
//!
//! The client runs the mirror image: CLI intent → `encode_request` →
//! network → `decode_response` → printed headers and body.

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod protocol;
pub mod store;
pub mod router;
pub mod network;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{BoardError, Result};
pub use config::Config;
pub use store::BoardStore;

// =============================================================================
// Version Info
// =============================================================================

/// Current version of Corkboard
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
