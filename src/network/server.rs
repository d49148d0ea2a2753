//! TCP Server
//!
//! Strictly iterative accept loop over the board store.

use std::net::{SocketAddr, TcpListener};

use super::Connection;
use crate::config::Config;
use crate::error::Result;
use crate::store::BoardStore;

/// Iterative TCP server: accepts one client at a time and serves that
/// connection's requests sequentially to completion before the next
/// accept. A slow or silent client stalls the whole service.
pub struct Server {
    config: Config,
    listener: TcpListener,
    store: BoardStore,
}

impl Server {
    /// Bind the listen socket and build an empty store. The store's whole
    /// lifecycle is bounded by this process run.
    pub fn bind(config: Config) -> Result<Self> {
        let listener = TcpListener::bind(&config.listen_addr)?;
        Ok(Self {
            config,
            listener,
            store: BoardStore::new(),
        })
    }

    /// The bound address (useful when binding port 0)
    pub fn local_addr(&self) -> Result<SocketAddr> {
        Ok(self.listener.local_addr()?)
    }

    /// Accept-and-serve loop (blocking, never returns normally).
    ///
    /// Accept failures, write failures and structural store violations are
    /// fatal and surface as `Err`; a client that merely disconnects ends
    /// only its own session.
    pub fn run(mut self) -> Result<()> {
        tracing::info!("Listening on {}", self.listener.local_addr()?);

        loop {
            let (stream, peer) = self.listener.accept()?;
            tracing::debug!("Accepted connection from {}", peer);

            let mut connection =
                Connection::new(stream, &mut self.store, self.config.recv_buffer_bytes)?;
            connection.handle()?;
        }
    }
}
