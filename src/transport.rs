//! Transport primitives: establishing and writing to the agent socket.

use std::io::{self, Write};
use std::net::{Ipv4Addr, SocketAddr, TcpStream};
use std::os::unix::net::UnixStream;
use std::time::Duration;

use crate::config::{TcpTransport, Transport, UnixTransport};
use crate::error::ClientError;

/// Capacity of `sockaddr_un.sun_path`; longer paths cannot be addressed.
const UNIX_PATH_CAPACITY: usize = 108;

/// Active socket connection held by a connected client.
#[derive(Debug)]
pub enum Connection {
    Tcp(TcpStream),
    Unix(UnixStream),
}

impl Connection {
    /// Apply `timeout` to both the read and write directions of the socket.
    pub fn set_timeouts(&self, timeout: Duration) -> io::Result<()> {
        match self {
            Connection::Tcp(stream) => {
                stream.set_read_timeout(Some(timeout))?;
                stream.set_write_timeout(Some(timeout))
            }
            Connection::Unix(stream) => {
                stream.set_read_timeout(Some(timeout))?;
                stream.set_write_timeout(Some(timeout))
            }
        }
    }

    /// Write a full buffer to the socket.
    pub fn write_all(&mut self, buf: &[u8]) -> io::Result<()> {
        match self {
            Connection::Tcp(stream) => stream.write_all(buf),
            Connection::Unix(stream) => stream.write_all(buf),
        }
    }

    /// Flush the underlying writer.
    pub fn flush(&mut self) -> io::Result<()> {
        match self {
            Connection::Tcp(stream) => stream.flush(),
            Connection::Unix(stream) => stream.flush(),
        }
    }
}

fn connect_tcp(config: &TcpTransport, timeout: Duration) -> Result<TcpStream, ClientError> {
    // Numeric IPv4 only; the agent protocol does not use DNS resolution.
    let ip: Ipv4Addr = config
        .host
        .parse()
        .map_err(|_| ClientError::connection(format!("invalid IPv4 address: {}", config.host)))?;
    let addr = SocketAddr::from((ip, config.port));
    TcpStream::connect_timeout(&addr, timeout)
        .map_err(|err| ClientError::connection(format!("connect to {addr} failed: {err}")))
}

fn connect_unix(config: &UnixTransport) -> Result<UnixStream, ClientError> {
    let path_len = config.path.as_os_str().len();
    if path_len >= UNIX_PATH_CAPACITY {
        return Err(ClientError::invalid(format!(
            "socket path exceeds address capacity ({path_len} bytes)"
        )));
    }
    UnixStream::connect(&config.path).map_err(|err| {
        ClientError::connection(format!(
            "connect to {} failed: {err}",
            config.path.display()
        ))
    })
}

/// Establish a socket connection using the provided transport definition.
///
/// `timeout` bounds TCP connection establishment and is then applied to both
/// socket directions for either flavour. Any failure drops the partially
/// opened socket; the caller observes only the error.
pub fn connect_transport(
    transport: &Transport,
    timeout: Duration,
) -> Result<Connection, ClientError> {
    let connection = match transport {
        Transport::Tcp(config) => Connection::Tcp(connect_tcp(config, timeout)?),
        Transport::Unix(config) => Connection::Unix(connect_unix(config)?),
    };
    connection
        .set_timeouts(timeout)
        .map_err(|_| ClientError::Timeout)?;
    Ok(connection)
}
