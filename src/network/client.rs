//! Client Session
//!
//! Connects to a server and performs a single request/response exchange.

use std::io::{Read, Write};
use std::net::{TcpStream, ToSocketAddrs};
use std::time::Duration;

use bytes::Bytes;

use crate::config::Config;
use crate::error::{BoardError, Result};
use crate::protocol::{self, Request, Response};

/// One client session on one TCP connection
pub struct Client {
    stream: TcpStream,

    /// Host string as given on the command line, echoed into the `Host:`
    /// header
    host: String,

    recv_buffer_bytes: usize,
}

impl Client {
    /// Resolve the host and connect.
    ///
    /// The outbound write carries a fixed send timeout; there is no read
    /// timeout, so a connected but silent server hangs the client. That is
    /// a known limitation, not a handled case.
    pub fn connect(host: &str, port: u16, config: &Config) -> Result<Self> {
        let addr = (host, port)
            .to_socket_addrs()?
            .next()
            .ok_or_else(|| BoardError::Protocol(format!("no address found for host {host}")))?;

        let stream = TcpStream::connect(addr)?;
        stream.set_write_timeout(Some(Duration::from_millis(config.send_timeout_ms)))?;

        Ok(Self {
            stream,
            host: host.to_string(),
            recv_buffer_bytes: config.recv_buffer_bytes,
        })
    }

    /// Send one request and read one response.
    ///
    /// Returns the decoded response together with the raw bytes — the CLI
    /// prints the raw head section verbatim, so re-encoding would not do.
    pub fn send(&mut self, request: &Request) -> Result<(Response, Bytes)> {
        let encoded = protocol::encode_request(request, &self.host)?;
        self.stream.write_all(&encoded)?;

        let mut buffer = vec![0u8; self.recv_buffer_bytes];
        let n = self.stream.read(&mut buffer)?;
        let raw = Bytes::copy_from_slice(&buffer[..n]);

        let response = protocol::decode_response(&raw)?;
        Ok((response, raw))
    }
}
