//! Synchronous client SDK for shipping structured log entries to a LogFlux
//! agent over a stream socket.
//!
//! The agent listens on a Unix-domain socket (local delivery, authenticated
//! by filesystem permissions) or a TCP port (remote delivery, authenticated
//! by a shared secret read from the agent's runtime directory). Entries are
//! serialised as newline-delimited JSON and written synchronously on the
//! caller's thread; delivery is best-effort, with no internal queue,
//! persistence, or automatic reconnection.
//!
//! ```no_run
//! use logflux_client::{Client, Entry, Level};
//!
//! # fn main() -> Result<(), logflux_client::ClientError> {
//! let mut client = Client::unix("/tmp/logflux-agent.sock")?;
//! client.connect()?;
//!
//! client.send_log("application started")?;
//!
//! let mut entry = Entry::new("cache warmed")?;
//! entry.set_level(Level::Notice);
//! entry.add_label("component", "cache");
//! client.send_entry(&entry)?;
//!
//! client.close();
//! # Ok(())
//! # }
//! ```

mod agent;
mod client;
mod config;
mod entry;
mod error;
mod level;
mod serialise;
mod transport;

pub use agent::{agent_running, load_shared_secret};
pub use client::Client;
pub use config::{
    ClientConfig, DEFAULT_RETRY_COUNT, DEFAULT_RETRY_DELAY, DEFAULT_TIMEOUT, TcpTransport,
    Transport, UnixTransport,
};
pub use entry::{DEFAULT_SOURCE, Entry};
pub use error::ClientError;
pub use level::{EntryType, Level};
pub use serialise::serialise_entry;
