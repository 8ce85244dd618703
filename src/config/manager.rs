//! Process-wide gate
//!
//! One [`Gate`] shared by every call site in the process. It is created
//! lazily on first use with the no-op sink attached and the default
//! thresholds, and lives for the rest of the process.

use log::Level;
use once_cell::sync::Lazy;
use std::fmt;
use std::sync::Arc;

use crate::common::Result;
use crate::gate::{Gate, GateConfig};
use crate::encoding::TextEncoding;
use crate::sink::{LogSink, NullSink};
use crate::verbosity::Verbosity;

// Global instance
static GATE: Lazy<Gate> = Lazy::new(|| Gate::new(Arc::new(NullSink)));

/// Force creation of the process-wide gate
///
/// Called implicitly by every other function here. The initialization record
/// goes to the no-op sink, so it is only observable through the `log`
/// facade when the host installs [`FacadeSink`](crate::sink::FacadeSink)
/// with [`initialize_with_sink`].
pub fn initialize() -> &'static Gate {
    &GATE
}

/// Attach `sink` and announce the available verbosity levels on it
///
/// Returns the previously attached sink.
pub fn initialize_with_sink(sink: Arc<dyn LogSink>) -> Arc<dyn LogSink> {
    let previous = GATE.set_sink(sink);
    GATE.announce();
    previous
}

/// Current process-wide configuration
pub fn current_config() -> GateConfig {
    GATE.config()
}

/// Current verbosity threshold
pub fn verbosity_threshold() -> Verbosity {
    GATE.config().verbosity
}

/// Current activation threshold
pub fn activation_threshold() -> Level {
    GATE.config().activation
}

/// Current text encoding
pub fn text_encoding() -> TextEncoding {
    GATE.config().encoding
}

/// Whether a record at `verbosity` would be written
///
/// Call sites use this to skip building expensive messages.
#[inline]
pub fn is_enabled(verbosity: Verbosity) -> bool {
    GATE.is_enabled(verbosity)
}

/// Write a record through the process-wide gate
///
/// Usually reached through [`gate_log!`](crate::gate_log).
pub fn emit(verbosity: Verbosity, args: fmt::Arguments<'_>) {
    GATE.emit(verbosity, args);
}

/// Set the activation threshold from a raw `log::Level` value
pub fn set_activation_threshold(level: usize) -> Result<()> {
    GATE.set_activation_threshold(level)
}

/// Set the activation threshold from a typed level
pub fn set_activation_level(level: Level) -> Result<()> {
    GATE.set_activation_level(level)
}

/// Set the verbosity threshold
pub fn set_verbosity_threshold(level: impl Into<u32>) -> Result<()> {
    GATE.set_verbosity_threshold(level)
}

/// Set the text encoding
pub fn set_text_encoding(label: &str) -> Result<()> {
    GATE.set_text_encoding(label)
}

/// Redirect output to `sink`, returning the previous sink
pub fn set_sink(sink: Arc<dyn LogSink>) -> Arc<dyn LogSink> {
    GATE.set_sink(sink)
}

/// Reattach the no-op sink, returning the previous sink
pub fn reset_sink() -> Arc<dyn LogSink> {
    GATE.set_sink(Arc::new(NullSink))
}
