//! Error taxonomy shared by every fallible operation in the SDK.
//!
//! The taxonomy is deliberately flat: each failure maps to exactly one
//! variant and carries at most a short context string. Callers match on the
//! variant; the `Display` implementation supplies the human-readable text.

/// Errors reported by client, entry, and discovery operations.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// A required argument was absent, empty, or outside its enumerated range.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// Allocation failure. Retained as part of the public taxonomy; the safe
    /// implementation does not produce it on its own paths.
    #[error("memory allocation failed")]
    Memory,

    /// Socket creation, connect, or send failure at the OS level.
    #[error("connection error: {0}")]
    Connection(String),

    /// The read/write timeout could not be applied to the socket.
    #[error("failed to apply socket timeout")]
    Timeout,

    /// Malformed or unreadable secret-file content.
    #[error("format error: {0}")]
    Format(String),

    /// An operation requiring an active connection was invoked on a
    /// disconnected client.
    #[error("client is not connected")]
    NotConnected,
}

impl ClientError {
    pub(crate) fn invalid(context: impl Into<String>) -> Self {
        Self::InvalidParameter(context.into())
    }

    pub(crate) fn connection(context: impl Into<String>) -> Self {
        Self::Connection(context.into())
    }
}
