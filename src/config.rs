//! Configuration consumed by the client lifecycle.
//!
//! [`Transport`] selects the socket flavour and carries exactly the endpoint
//! data that flavour needs; [`ClientConfig`] bundles the transport with the
//! delivery knobs a [`Client`](crate::Client) honours.

use std::path::PathBuf;
use std::time::Duration;

/// Default timeout applied to connect, read, and write operations.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);
/// Default maximum retry attempts recorded in the configuration.
pub const DEFAULT_RETRY_COUNT: u32 = 3;
/// Default delay between retry attempts recorded in the configuration.
pub const DEFAULT_RETRY_DELAY: Duration = Duration::from_secs(1);

/// Transport targeted by the client.
#[derive(Clone, Debug)]
pub enum Transport {
    /// Unix domain socket transport.
    Unix(UnixTransport),
    /// TCP transport addressed by numeric IPv4 host and port.
    Tcp(TcpTransport),
}

/// Unix domain socket configuration.
#[derive(Clone, Debug)]
pub struct UnixTransport {
    /// Path to the agent's socket file.
    pub path: PathBuf,
}

/// TCP transport configuration.
#[derive(Clone, Debug)]
pub struct TcpTransport {
    /// Dotted-quad IPv4 address of the agent. Hostnames are not resolved.
    pub host: String,
    /// TCP port number.
    pub port: u16,
}

/// Configuration object describing how a client reaches the agent.
#[derive(Clone, Debug)]
pub struct ClientConfig {
    pub transport: Transport,
    /// Authentication token attached to TCP-transported entries. Ignored for
    /// Unix-domain transport, which relies on filesystem permissions.
    pub shared_secret: Option<String>,
    /// Timeout applied symmetrically to the socket's read and write
    /// directions, and to TCP connection establishment.
    pub timeout: Duration,
    /// Maximum retry attempts. Stored for callers and future policy layers;
    /// the send path does not currently consult it.
    pub retry_count: u32,
    /// Delay between retry attempts. Stored but, like `retry_count`, not
    /// currently applied by the send path.
    pub retry_delay: Duration,
}

impl ClientConfig {
    /// Build a configuration for `transport` with default timeout and retry
    /// settings and no shared secret.
    pub fn new(transport: Transport) -> Self {
        Self {
            transport,
            shared_secret: None,
            timeout: DEFAULT_TIMEOUT,
            retry_count: DEFAULT_RETRY_COUNT,
            retry_delay: DEFAULT_RETRY_DELAY,
        }
    }

    /// Override the socket timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Attach a shared secret for TCP authentication.
    pub fn with_shared_secret(mut self, secret: impl Into<String>) -> Self {
        self.shared_secret = Some(secret.into());
        self
    }

    /// Override the stored retry settings.
    pub fn with_retry(mut self, count: u32, delay: Duration) -> Self {
        self.retry_count = count;
        self.retry_delay = delay;
        self
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
