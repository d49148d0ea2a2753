//! Connection Handler
//!
//! Handles one client connection: read a message, decode, dispatch,
//! encode, write, repeat until the client stops sending.

use std::io::{Read, Write};
use std::net::TcpStream;

use crate::error::Result;
use crate::protocol::{self, Response};
use crate::router;
use crate::store::BoardStore;

/// Handles a single client connection.
///
/// Borrows the store mutably for its whole lifetime; the server never
/// holds two connections at once.
pub struct Connection<'a> {
    /// TCP stream, read and written directly. Framing has no terminator:
    /// one read is assumed to deliver one complete message.
    stream: TcpStream,

    /// The shared board store
    store: &'a mut BoardStore,

    /// Fixed receive buffer size
    recv_buffer_bytes: usize,

    /// Peer address for logging
    peer_addr: String,
}

impl<'a> Connection<'a> {
    /// Create a new connection handler
    pub fn new(
        stream: TcpStream,
        store: &'a mut BoardStore,
        recv_buffer_bytes: usize,
    ) -> Result<Self> {
        let peer_addr = stream
            .peer_addr()
            .map(|a| a.to_string())
            .unwrap_or_else(|_| "unknown".to_string());

        // Disable Nagle's algorithm for low latency
        stream.set_nodelay(true)?;

        Ok(Self {
            stream,
            store,
            recv_buffer_bytes,
            peer_addr,
        })
    }

    /// Handle the connection (blocking until closed).
    ///
    /// A closed connection or failed read ends the session and the server
    /// moves on to the next client. A failed write is fatal to the
    /// process, as is the name-over-limit condition from the store — both
    /// propagate as `Err`.
    pub fn handle(&mut self) -> Result<()> {
        tracing::debug!("Connection established from {}", self.peer_addr);

        let mut buffer = vec![0u8; self.recv_buffer_bytes];

        loop {
            let n = match self.stream.read(&mut buffer) {
                Ok(0) => {
                    tracing::debug!("Client {} disconnected", self.peer_addr);
                    return Ok(());
                }
                Ok(n) => n,
                Err(e) => {
                    tracing::debug!("Read from {} failed, closing session: {}", self.peer_addr, e);
                    return Ok(());
                }
            };

            let response = match protocol::decode_request(&buffer[..n]) {
                Ok(request) => {
                    tracing::trace!(
                        "Request from {}: {:?} {:?}",
                        self.peer_addr,
                        request.method,
                        request.target
                    );
                    router::dispatch(self.store, &request)?
                }
                Err(e) => {
                    // Declared body length did not fit the message
                    tracing::warn!("Malformed request from {}: {}", self.peer_addr, e);
                    Response::bad_request()
                }
            };

            let encoded = protocol::encode_response(&response);
            self.stream.write_all(&encoded)?;
        }
    }

    /// Get the peer address string
    pub fn peer_addr(&self) -> &str {
        &self.peer_addr
    }
}
