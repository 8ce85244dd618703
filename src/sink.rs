//! Log sinks
//!
//! A sink is the single destination the gate forwards encoded records to.
//! The host decides which one is attached; the gate only holds a reference.

use log::Level;
use std::fmt::Write;
use std::sync::{Mutex, PoisonError};

/// `log` target used by [`FacadeSink`]
pub const LOG_TARGET: &str = "ldap3";

/// Destination for encoded records
pub trait LogSink: Send + Sync {
    /// Whether the sink currently accepts records at `level`
    fn is_enabled_for(&self, level: Level) -> bool;

    /// Write one encoded record
    ///
    /// Failures are the sink's own business. The gate does not retry.
    fn write(&self, level: Level, message: &[u8]);
}

/// Sink that accepts nothing and discards everything
///
/// Attached by default, so a host that never configures logging gets no
/// output and no errors.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl LogSink for NullSink {
    fn is_enabled_for(&self, _level: Level) -> bool {
        false
    }

    fn write(&self, _level: Level, _message: &[u8]) {}
}

/// Sink forwarding to the `log` facade under the `ldap3` target
#[derive(Debug, Default, Clone, Copy)]
pub struct FacadeSink;

impl LogSink for FacadeSink {
    fn is_enabled_for(&self, level: Level) -> bool {
        log::log_enabled!(target: LOG_TARGET, level)
    }

    fn write(&self, level: Level, message: &[u8]) {
        log::log!(target: LOG_TARGET, level, "{}", render_bytes(message));
    }
}

/// Render encoded bytes as text
///
/// Valid UTF-8 is kept as is; every other byte becomes a `\xNN` escape, so
/// legacy encodings keep their byte values.
pub fn render_bytes(message: &[u8]) -> String {
    let mut out = String::with_capacity(message.len());
    for chunk in message.utf8_chunks() {
        out.push_str(chunk.valid());
        for byte in chunk.invalid() {
            let _ = write!(out, "\\x{:02x}", byte);
        }
    }
    out
}

/// A record captured by [`MemorySink`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SinkRecord {
    /// Severity the record was written at
    pub level: Level,
    /// Encoded message bytes
    pub message: Vec<u8>,
}

impl SinkRecord {
    /// Message rendered as text, see [`render_bytes`]
    pub fn text(&self) -> String {
        render_bytes(&self.message)
    }
}

/// Sink that keeps every accepted record in memory
///
/// Records at a severity less severe than `max_level` are refused.
#[derive(Debug)]
pub struct MemorySink {
    max_level: Level,
    records: Mutex<Vec<SinkRecord>>,
}

impl MemorySink {
    /// Create a sink accepting records up to and including `max_level`
    pub fn new(max_level: Level) -> Self {
        Self {
            max_level,
            records: Mutex::new(Vec::new()),
        }
    }

    /// Snapshot of the captured records
    pub fn records(&self) -> Vec<SinkRecord> {
        self.records
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Captured messages as text
    pub fn messages(&self) -> Vec<String> {
        self.records().iter().map(SinkRecord::text).collect()
    }

    /// Drain the captured records
    pub fn take(&self) -> Vec<SinkRecord> {
        std::mem::take(&mut *self.records.lock().unwrap_or_else(PoisonError::into_inner))
    }
}

impl Default for MemorySink {
    fn default() -> Self {
        Self::new(Level::Trace)
    }
}

impl LogSink for MemorySink {
    fn is_enabled_for(&self, level: Level) -> bool {
        level <= self.max_level
    }

    fn write(&self, level: Level, message: &[u8]) {
        self.records
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(SinkRecord {
                level,
                message: message.to_vec(),
            });
    }
}
