//! Configuration for Corkboard
//!
//! Centralized configuration with sensible defaults.

/// Main configuration for a Corkboard instance
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Network Configuration
    // -------------------------------------------------------------------------
    /// TCP listen address (server side)
    pub listen_addr: String,

    /// Receive buffer size in bytes. One read from this buffer is assumed
    /// to deliver one complete message; messages larger than the buffer
    /// are not supported.
    pub recv_buffer_bytes: usize,

    /// Client-side send timeout (milliseconds). The client has no read
    /// timeout; a silent server hangs it indefinitely.
    pub send_timeout_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: "0.0.0.0:8080".to_string(),
            recv_buffer_bytes: 1024,
            send_timeout_ms: 5000,
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the TCP listen address
    pub fn listen_addr(mut self, addr: impl Into<String>) -> Self {
        self.config.listen_addr = addr.into();
        self
    }

    /// Set the receive buffer size (in bytes)
    pub fn recv_buffer_bytes(mut self, size: usize) -> Self {
        self.config.recv_buffer_bytes = size;
        self
    }

    /// Set the client send timeout (in milliseconds)
    pub fn send_timeout_ms(mut self, ms: u64) -> Self {
        self.config.send_timeout_ms = ms;
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
