//! Store Module
//!
//! In-memory board/post store.
//!
//! ## Responsibilities
//! - Own the ordered collection of boards (most-recently-created first)
//! - Own each board's ordered sequence of posts (oldest first)
//! - Create/read/update/delete with defined ordering and outcomes
//!
//! ## Data Structure Choice
//! Plain `Vec`s owned exclusively by the store. Delete-by-position is index
//! removal; later display ids shift down to stay contiguous 1..N. The store
//! lives for one process run and is never serialized.

mod boards;

pub use boards::BoardStore;

use bytes::Bytes;

/// Board names are limited to 20 bytes. Exceeding this is a structural
/// violation, surfaced as an error rather than an outcome.
pub const MAX_BOARD_NAME: usize = 20;

/// One piece of text content inside a board. Content is an opaque byte
/// string, not validated further.
#[derive(Debug, Clone, PartialEq)]
pub struct Post {
    pub content: Bytes,
}

/// Named, ordered container of posts. Posts carry no persistent id; their
/// display id is the 1-based position in the current sequence, recomputed
/// on every read, update and delete.
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    pub name: String,
    pub posts: Vec<Post>,
}

/// Outcome of a store operation, translated 1:1 into a status code by the
/// router.
#[derive(Debug, Clone, PartialEq)]
pub enum StoreOutcome {
    /// 200, with a body for the read operations
    Ok(Option<Bytes>),

    /// 201
    Created,

    /// 404
    NotFound,

    /// 409
    Conflict,
}
