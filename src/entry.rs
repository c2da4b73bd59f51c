//! Log entry representation for the LogFlux client.
//!
//! This module defines the [`Entry`] struct that captures one structured log
//! record together with its metadata: a unique identifier, severity, entry
//! kind, timestamp, and caller-defined labels.

use std::time::SystemTime;

use uuid::Uuid;

use crate::error::ClientError;
use crate::level::{EntryType, Level};

/// Source tag stamped on entries that do not set one explicitly.
pub const DEFAULT_SOURCE: &str = "rust-sdk";

/// One structured log record destined for the agent.
///
/// Labels are append-only: adding the same key twice keeps both pairs, in
/// insertion order. The agent decides how duplicates are interpreted.
#[derive(Clone, Debug)]
pub struct Entry {
    id: String,
    message: String,
    source: String,
    level: Level,
    entry_type: EntryType,
    timestamp: SystemTime,
    labels: Vec<(String, String)>,
}

impl Entry {
    /// Construct an entry from `message`, defaulting every other field.
    ///
    /// A fresh UUID v4 identifier is generated and the timestamp is taken
    /// from the clock at the moment of construction. The message must not be
    /// empty.
    pub fn new(message: impl Into<String>) -> Result<Self, ClientError> {
        let message = message.into();
        if message.is_empty() {
            return Err(ClientError::invalid("entry message must not be empty"));
        }
        Ok(Self {
            id: Uuid::new_v4().to_string(),
            message,
            source: DEFAULT_SOURCE.to_owned(),
            level: Level::default(),
            entry_type: EntryType::default(),
            timestamp: SystemTime::now(),
            labels: Vec::new(),
        })
    }

    /// Unique identifier generated at construction.
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn level(&self) -> Level {
        self.level
    }

    pub fn entry_type(&self) -> EntryType {
        self.entry_type
    }

    pub fn timestamp(&self) -> SystemTime {
        self.timestamp
    }

    /// Labels in insertion order, duplicates included.
    pub fn labels(&self) -> &[(String, String)] {
        &self.labels
    }

    /// Replace the severity.
    pub fn set_level(&mut self, level: Level) -> &mut Self {
        self.level = level;
        self
    }

    /// Replace the entry kind.
    pub fn set_type(&mut self, entry_type: EntryType) -> &mut Self {
        self.entry_type = entry_type;
        self
    }

    /// Replace the source tag.
    pub fn set_source(&mut self, source: impl Into<String>) -> &mut Self {
        self.source = source.into();
        self
    }

    /// Overwrite the stored timestamp unconditionally.
    pub fn set_timestamp(&mut self, timestamp: SystemTime) -> &mut Self {
        self.timestamp = timestamp;
        self
    }

    /// Append a label. Existing labels with the same key are kept.
    pub fn add_label(
        &mut self,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> &mut Self {
        self.labels.push((key.into(), value.into()));
        self
    }
}

#[cfg(test)]
#[path = "entry_tests.rs"]
mod tests;
