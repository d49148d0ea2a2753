//! BoardStore implementation
//!
//! Single-threaded, mutated only from the connection loop. No locking:
//! the server is strictly serial, so no two operations ever overlap.

use bytes::{BufMut, Bytes, BytesMut};

use super::{Board, Post, StoreOutcome, MAX_BOARD_NAME};
use crate::error::{BoardError, Result};

/// The in-memory board collection
#[derive(Debug, Default)]
pub struct BoardStore {
    /// Most-recently-created board first
    boards: Vec<Board>,
}

impl BoardStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self { boards: Vec::new() }
    }

    /// Number of live boards
    pub fn board_count(&self) -> usize {
        self.boards.len()
    }

    // =========================================================================
    // Board Operations
    // =========================================================================

    /// Create a board. New boards are prepended, so `list_boards` observes
    /// exact reverse-creation order.
    ///
    /// A name over [`MAX_BOARD_NAME`] bytes is an `Err`, not an outcome:
    /// the caller decides to terminate (there is no recovery once the
    /// structural limit is violated).
    pub fn create_board(&mut self, name: &str) -> Result<StoreOutcome> {
        if name.len() > MAX_BOARD_NAME {
            return Err(BoardError::NameTooLong {
                len: name.len(),
                max: MAX_BOARD_NAME,
            });
        }

        if self.find(name).is_some() {
            return Ok(StoreOutcome::Conflict);
        }

        self.boards.insert(
            0,
            Board {
                name: name.to_owned(),
                posts: Vec::new(),
            },
        );
        Ok(StoreOutcome::Created)
    }

    /// Delete a board and, atomically with it, all of its posts.
    pub fn delete_board(&mut self, name: &str) -> StoreOutcome {
        match self.boards.iter().position(|b| b.name == name) {
            Some(index) => {
                self.boards.remove(index);
                StoreOutcome::Ok(None)
            }
            None => StoreOutcome::NotFound,
        }
    }

    /// List board names, newest first, one per line. An empty store is
    /// `NotFound`.
    pub fn list_boards(&self) -> StoreOutcome {
        if self.boards.is_empty() {
            return StoreOutcome::NotFound;
        }

        let mut body = BytesMut::new();
        for board in &self.boards {
            body.put_slice(board.name.as_bytes());
            body.put_u8(b'\n');
        }
        StoreOutcome::Ok(Some(body.freeze()))
    }

    // =========================================================================
    // Post Operations
    // =========================================================================

    /// Append a post to an existing board.
    pub fn create_post(&mut self, board_name: &str, content: Bytes) -> StoreOutcome {
        match self.find_mut(board_name) {
            Some(board) => {
                board.posts.push(Post { content });
                StoreOutcome::Created
            }
            None => StoreOutcome::NotFound,
        }
    }

    /// List a board's posts: a `[name]` header line, then one
    /// `<id>. <content>` line per post in creation order, ids recomputed
    /// 1-based.
    pub fn list_posts(&self, board_name: &str) -> StoreOutcome {
        let Some(board) = self.find(board_name) else {
            return StoreOutcome::NotFound;
        };

        let mut body = BytesMut::new();
        body.put_slice(format!("[{}]\n", board.name).as_bytes());
        for (position, post) in board.posts.iter().enumerate() {
            body.put_slice(format!("{}. ", position + 1).as_bytes());
            body.put_slice(&post.content);
            body.put_u8(b'\n');
        }
        StoreOutcome::Ok(Some(body.freeze()))
    }

    /// Replace a post's content in place.
    pub fn update_post(&mut self, board_name: &str, id: u64, content: Bytes) -> StoreOutcome {
        let Some(board) = self.find_mut(board_name) else {
            return StoreOutcome::NotFound;
        };

        match index_for(id, board.posts.len()) {
            Some(index) => {
                board.posts[index].content = content;
                StoreOutcome::Ok(None)
            }
            None => StoreOutcome::NotFound,
        }
    }

    /// Remove a post. Display ids of later posts shift down by one; ids
    /// are never stable across mutations.
    pub fn delete_post(&mut self, board_name: &str, id: u64) -> StoreOutcome {
        let Some(board) = self.find_mut(board_name) else {
            return StoreOutcome::NotFound;
        };

        match index_for(id, board.posts.len()) {
            Some(index) => {
                board.posts.remove(index);
                StoreOutcome::Ok(None)
            }
            None => StoreOutcome::NotFound,
        }
    }

    // =========================================================================
    // Lookup Helpers
    // =========================================================================

    /// Name lookup is case-sensitive byte equality.
    fn find(&self, name: &str) -> Option<&Board> {
        self.boards.iter().find(|b| b.name == name)
    }

    fn find_mut(&mut self, name: &str) -> Option<&mut Board> {
        self.boards.iter_mut().find(|b| b.name == name)
    }
}

/// Map a 1-based display id onto an index. 0 and anything past the end of
/// the sequence is never found.
fn index_for(id: u64, len: usize) -> Option<usize> {
    if id == 0 || id > len as u64 {
        None
    } else {
        Some((id - 1) as usize)
    }
}
