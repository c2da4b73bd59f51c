use std::fmt;
use std::str::FromStr;

use crate::error::ClientError;

/// Severity of a log entry, in syslog order from most to least urgent.
///
/// The numeric discriminants are part of the wire contract and must not be
/// reordered.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Level {
    Emergency = 0,
    Alert = 1,
    Critical = 2,
    Error = 3,
    Warning = 4,
    Notice = 5,
    Info = 6,
    Debug = 7,
}

impl Default for Level {
    fn default() -> Self {
        Self::Info
    }
}

impl Level {
    /// Numeric value used on the wire.
    pub fn as_u8(self) -> u8 {
        self as u8
    }
}

impl TryFrom<u8> for Level {
    type Error = ClientError;

    // Spelled `Level::…` rather than `Self::…`: the `Error` variant would
    // otherwise collide with the trait's associated `Error` type.
    fn try_from(value: u8) -> Result<Self, ClientError> {
        match value {
            0 => Ok(Level::Emergency),
            1 => Ok(Level::Alert),
            2 => Ok(Level::Critical),
            3 => Ok(Level::Error),
            4 => Ok(Level::Warning),
            5 => Ok(Level::Notice),
            6 => Ok(Level::Info),
            7 => Ok(Level::Debug),
            other => Err(ClientError::invalid(format!("level out of range: {other}"))),
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Level::Emergency => "emergency",
            Level::Alert => "alert",
            Level::Critical => "critical",
            Level::Error => "error",
            Level::Warning => "warning",
            Level::Notice => "notice",
            Level::Info => "info",
            Level::Debug => "debug",
        };
        f.write_str(s)
    }
}

impl FromStr for Level {
    type Err = ClientError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "emergency" => Ok(Self::Emergency),
            "alert" => Ok(Self::Alert),
            "critical" => Ok(Self::Critical),
            "error" => Ok(Self::Error),
            "warning" | "warn" => Ok(Self::Warning),
            "notice" => Ok(Self::Notice),
            "info" => Ok(Self::Info),
            "debug" => Ok(Self::Debug),
            other => Err(ClientError::invalid(format!("unknown level: {other}"))),
        }
    }
}

/// Kind of payload an entry carries.
///
/// Discriminants start at 1 and are part of the wire contract.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EntryType {
    Log = 1,
    Metric = 2,
    Trace = 3,
    Event = 4,
    Audit = 5,
}

impl Default for EntryType {
    fn default() -> Self {
        Self::Log
    }
}

impl EntryType {
    /// Numeric value used on the wire.
    pub fn as_u8(self) -> u8 {
        self as u8
    }
}

impl TryFrom<u8> for EntryType {
    type Error = ClientError;

    fn try_from(value: u8) -> Result<Self, ClientError> {
        match value {
            1 => Ok(Self::Log),
            2 => Ok(Self::Metric),
            3 => Ok(Self::Trace),
            4 => Ok(Self::Event),
            5 => Ok(Self::Audit),
            other => Err(ClientError::invalid(format!(
                "entry type out of range: {other}"
            ))),
        }
    }
}

impl fmt::Display for EntryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            EntryType::Log => "log",
            EntryType::Metric => "metric",
            EntryType::Trace => "trace",
            EntryType::Event => "event",
            EntryType::Audit => "audit",
        };
        f.write_str(s)
    }
}

impl FromStr for EntryType {
    type Err = ClientError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "log" => Ok(Self::Log),
            "metric" => Ok(Self::Metric),
            "trace" => Ok(Self::Trace),
            "event" => Ok(Self::Event),
            "audit" => Ok(Self::Audit),
            other => Err(ClientError::invalid(format!("unknown entry type: {other}"))),
        }
    }
}
