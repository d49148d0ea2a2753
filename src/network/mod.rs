//! Network Module
//!
//! TCP transport on both sides of the protocol.
//!
//! ## Architecture
//! - Strictly iterative server: one accepted connection at a time,
//!   processed to completion before the next accept
//! - No locking anywhere: the store is only ever touched from this one
//!   thread of control
//! - Client opens one connection per session and performs a single
//!   request/response exchange

mod server;
mod connection;
mod client;

pub use server::Server;
pub use connection::Connection;
pub use client::Client;
