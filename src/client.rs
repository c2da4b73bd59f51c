//! Client orchestration: lifecycle, connection state, and the send path.

use std::path::PathBuf;

use log::warn;

use crate::agent;
use crate::config::{ClientConfig, TcpTransport, Transport, UnixTransport};
use crate::entry::Entry;
use crate::error::ClientError;
use crate::serialise::serialise_entry;
use crate::transport::{Connection, connect_transport};

/// Synchronous client delivering entries to a LogFlux agent.
///
/// A client is created once per destination, connected, used for any number
/// of sends, and closed by its owner. There is no internal locking, so a
/// client must not be shared across threads without external coordination,
/// and no automatic reconnection: after a failure the caller decides whether
/// to call [`connect`](Client::connect) again.
#[derive(Debug)]
pub struct Client {
    config: ClientConfig,
    connection: Option<Connection>,
}

impl Client {
    /// Create a client for the Unix-domain socket at `path`, with default
    /// timeout and retry settings. The path must not be empty.
    pub fn unix(path: impl Into<PathBuf>) -> Result<Self, ClientError> {
        let path = path.into();
        if path.as_os_str().is_empty() {
            return Err(ClientError::invalid("socket path must not be empty"));
        }
        Ok(Self::with_config(ClientConfig::new(Transport::Unix(
            UnixTransport { path },
        ))))
    }

    /// Create a client for the agent listening on TCP `host:port`, with
    /// default timeout and retry settings.
    ///
    /// The shared secret is loaded from the agent's runtime directory on a
    /// best-effort basis; a failure to find one is logged and ignored, since
    /// the agent may be remote and the secret supplied via
    /// [`ClientConfig::with_shared_secret`].
    pub fn tcp(host: impl Into<String>, port: u16) -> Result<Self, ClientError> {
        let host = host.into();
        if host.is_empty() {
            return Err(ClientError::invalid("tcp host must not be empty"));
        }
        if port == 0 {
            return Err(ClientError::invalid("tcp port must not be zero"));
        }
        let mut config = ClientConfig::new(Transport::Tcp(TcpTransport { host, port }));
        match agent::load_shared_secret() {
            Ok(secret) => config.shared_secret = Some(secret),
            Err(err) => warn!("shared secret not loaded: {err}"),
        }
        Ok(Self::with_config(config))
    }

    /// Create a client from a full configuration object.
    pub fn with_config(config: ClientConfig) -> Self {
        Self {
            config,
            connection: None,
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Open the configured socket and apply the configured timeout to both
    /// directions. Returns success immediately when already connected. On
    /// failure the partially opened socket is dropped and the client remains
    /// disconnected.
    pub fn connect(&mut self) -> Result<(), ClientError> {
        if self.connection.is_some() {
            return Ok(());
        }
        let connection = connect_transport(&self.config.transport, self.config.timeout)?;
        self.connection = Some(connection);
        Ok(())
    }

    /// Report whether the client holds a live connection handle.
    pub fn is_connected(&self) -> bool {
        self.connection.is_some()
    }

    /// Build a default entry from `message` and send it. The temporary
    /// entry is released regardless of the outcome.
    pub fn send_log(&mut self, message: &str) -> Result<(), ClientError> {
        let entry = Entry::new(message)?;
        self.send_entry(&entry)
    }

    /// Serialise `entry` and write it, newline-terminated, to the connected
    /// socket.
    ///
    /// The shared secret is attached only when the configured transport is
    /// TCP; Unix-domain delivery relies on filesystem permissions instead.
    /// A write failure reports [`ClientError::Connection`] but leaves the
    /// connection handle in place.
    pub fn send_entry(&mut self, entry: &Entry) -> Result<(), ClientError> {
        let Some(connection) = self.connection.as_mut() else {
            return Err(ClientError::NotConnected);
        };

        let shared_secret = match self.config.transport {
            Transport::Tcp(_) => self.config.shared_secret.as_deref(),
            Transport::Unix(_) => None,
        };

        let mut payload = serialise_entry(entry, shared_secret);
        payload.push('\n');

        connection
            .write_all(payload.as_bytes())
            .and_then(|()| connection.flush())
            .map_err(|err| ClientError::connection(format!("send failed: {err}")))
    }

    /// Send `entries` in order, stopping at the first failure.
    ///
    /// There is no atomicity: entries before the failing one have already
    /// been delivered and entries after it are not attempted. An empty batch
    /// is rejected as an invalid parameter.
    pub fn send_batch(&mut self, entries: &[Entry]) -> Result<(), ClientError> {
        if entries.is_empty() {
            return Err(ClientError::invalid("batch must contain at least one entry"));
        }
        if self.connection.is_none() {
            return Err(ClientError::NotConnected);
        }
        for entry in entries {
            self.send_entry(entry)?;
        }
        Ok(())
    }

    /// Close the connection if one is open. Safe to call repeatedly and on
    /// a never-connected client.
    pub fn close(&mut self) {
        self.connection = None;
    }
}

impl Drop for Client {
    fn drop(&mut self) {
        self.close();
    }
}
