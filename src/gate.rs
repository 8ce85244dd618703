//! The logging gate
//!
//! A [`Gate`] decides whether a diagnostic record is written. Two thresholds
//! must both be satisfied:
//!
//! - the record's [`Verbosity`] must not exceed the verbosity threshold, and
//! - the sink must be enabled for the activation threshold (a `log::Level`).
//!
//! Configuration and sink are kept together in one immutable snapshot that
//! is replaced as a whole, so readers never see a half-applied change.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use ldap_log::{Gate, MemorySink, Verbosity};
//!
//! let sink = Arc::new(MemorySink::default());
//! let gate = Gate::new(sink.clone());
//! gate.set_verbosity_threshold(Verbosity::Basic).unwrap();
//!
//! if gate.is_enabled(Verbosity::Basic) {
//!     gate.emit(Verbosity::Basic, format_args!("bind to <{}>", "cn=admin"));
//! }
//! assert!(sink.messages().contains(&"BASIC:bind to <cn=admin>".to_string()));
//! ```

use log::Level;
use std::fmt;
use std::sync::{Arc, PoisonError, RwLock};

use crate::common::{GateError, Result};
use crate::config::defaults;
use crate::encoding::{encode_lossy, TextEncoding};
use crate::sink::LogSink;
use crate::verbosity::Verbosity;

/// Gate configuration
///
/// Always complete and valid; only the validated setters produce new values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GateConfig {
    /// Severity records are written at, and checked against the sink
    pub activation: Level,
    /// Most detailed verbosity that is still emitted
    pub verbosity: Verbosity,
    /// Encoding applied to every record
    pub encoding: TextEncoding,
}

impl Default for GateConfig {
    fn default() -> Self {
        Self {
            activation: defaults::ACTIVATION_LEVEL,
            verbosity: defaults::VERBOSITY_LEVEL,
            encoding: defaults::text_encoding(),
        }
    }
}

impl GateConfig {
    fn allows(&self, verbosity: Verbosity, sink: &dyn LogSink) -> bool {
        verbosity <= self.verbosity && sink.is_enabled_for(self.activation)
    }
}

/// Configuration plus sink, swapped as one unit
struct GateState {
    config: GateConfig,
    sink: Arc<dyn LogSink>,
}

impl GateState {
    fn is_enabled(&self, verbosity: Verbosity) -> bool {
        self.config.allows(verbosity, self.sink.as_ref())
    }

    fn emit(&self, verbosity: Verbosity, args: fmt::Arguments<'_>) {
        if !self.is_enabled(verbosity) {
            return;
        }

        let record = format_record(verbosity, args);
        let encoded = encode_lossy(&record, self.config.encoding);
        self.sink.write(self.config.activation, &encoded);
    }
}

/// Two-axis logging gate
pub struct Gate {
    state: RwLock<Arc<GateState>>,
}

impl Gate {
    /// Create a gate with default thresholds writing to `sink`
    ///
    /// The sink receives one informational record announcing the available
    /// verbosity levels, if it accepts `Info`.
    pub fn new(sink: Arc<dyn LogSink>) -> Self {
        let gate = Self::with_config(GateConfig::default(), sink);
        gate.announce();
        gate
    }

    /// Create a gate from an explicit configuration, without announcement
    pub fn with_config(config: GateConfig, sink: Arc<dyn LogSink>) -> Self {
        Self {
            state: RwLock::new(Arc::new(GateState { config, sink })),
        }
    }

    fn snapshot(&self) -> Arc<GateState> {
        let state = self.state.read().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(&state)
    }

    /// Replace the state, deriving the new one from the current one under the write lock
    ///
    /// Returns the previous and the installed state.
    fn replace<F>(&self, update: F) -> (Arc<GateState>, Arc<GateState>)
    where
        F: FnOnce(&GateState) -> GateState,
    {
        let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
        let previous = Arc::clone(&state);
        let current = Arc::new(update(&previous));
        *state = Arc::clone(&current);
        (previous, current)
    }

    /// Report a rejected activation value under the current configuration
    pub(crate) fn reject_activation(&self, value: &dyn fmt::Display) -> GateError {
        self.snapshot().emit(
            Verbosity::Error,
            format_args!("invalid library log activation level <{}> ", value),
        );
        GateError::InvalidActivationLevel(value.to_string())
    }

    /// Report a rejected verbosity value under the current configuration
    pub(crate) fn reject_verbosity(&self, value: &dyn fmt::Display) -> GateError {
        self.snapshot().emit(
            Verbosity::Error,
            format_args!("unable to set verbosity level to <{}>", value),
        );
        GateError::InvalidVerbosityLevel(value.to_string())
    }

    /// Write the initialization record listing every verbosity level
    ///
    /// Written at `Info`, and only if the sink accepts `Info`.
    pub fn announce(&self) {
        let state = self.snapshot();
        if !state.sink.is_enabled_for(Level::Info) {
            return;
        }

        let names: Vec<&str> = Verbosity::ALL.iter().map(|v| v.as_str()).collect();
        let message = format!(
            "{} library initialized - logging emitted with loglevel set to {} - available verbosity levels are: {}",
            defaults::LIBRARY_NAME,
            state.config.activation,
            names.join(", ")
        );
        state
            .sink
            .write(Level::Info, &encode_lossy(&message, state.config.encoding));
    }

    /// Current configuration
    pub fn config(&self) -> GateConfig {
        self.snapshot().config
    }

    /// Whether a record at `verbosity` would be written
    #[inline]
    pub fn is_enabled(&self, verbosity: Verbosity) -> bool {
        self.snapshot().is_enabled(verbosity)
    }

    /// Format, encode and write one record
    ///
    /// Does nothing, not even formatting, when the record would be filtered.
    pub fn emit(&self, verbosity: Verbosity, args: fmt::Arguments<'_>) {
        self.snapshot().emit(verbosity, args);
    }

    /// Set the activation threshold from a raw `log::Level` value (1 = error .. 5 = trace)
    ///
    /// A rejected value is reported through the current configuration before
    /// the error is returned.
    pub fn set_activation_threshold(&self, level: usize) -> Result<()> {
        let Some(activation) = Level::iter().find(|l| *l as usize == level) else {
            return Err(self.reject_activation(&level));
        };

        self.replace(|state| GateState {
            config: GateConfig { activation, ..state.config },
            sink: Arc::clone(&state.sink),
        });
        Ok(())
    }

    /// Set the activation threshold from a typed level
    pub fn set_activation_level(&self, level: Level) -> Result<()> {
        self.set_activation_threshold(level as usize)
    }

    /// Set the verbosity threshold
    ///
    /// On success the new level is confirmed at `ERROR` verbosity under the new
    /// configuration. A rejected value is reported under the old one.
    pub fn set_verbosity_threshold(&self, level: impl Into<u32>) -> Result<()> {
        let level = level.into();
        let Some(verbosity) = Verbosity::from_value(level) else {
            return Err(self.reject_verbosity(&level));
        };

        let (_, current) = self.replace(|state| GateState {
            config: GateConfig { verbosity, ..state.config },
            sink: Arc::clone(&state.sink),
        });
        current.emit(Verbosity::Error, format_args!("verbosity level set to {}", verbosity));
        Ok(())
    }

    /// Set the text encoding from a label such as `"ascii"`, `"utf-8"` or `"latin1"`
    pub fn set_text_encoding(&self, label: &str) -> Result<()> {
        let encoding = match TextEncoding::for_label(label) {
            Ok(encoding) => encoding,
            Err(err) => {
                self.snapshot().emit(
                    Verbosity::Error,
                    format_args!("unable to set text encoding to <{}>", label),
                );
                return Err(err);
            }
        };

        self.replace(|state| GateState {
            config: GateConfig { encoding, ..state.config },
            sink: Arc::clone(&state.sink),
        });
        Ok(())
    }

    /// Attach a new sink, returning the previous one
    pub fn set_sink(&self, sink: Arc<dyn LogSink>) -> Arc<dyn LogSink> {
        let (previous, _) = self.replace(|state| GateState {
            config: state.config,
            sink,
        });
        Arc::clone(&previous.sink)
    }
}

impl fmt::Debug for Gate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Gate").field("config", &self.config()).finish()
    }
}

/// Render a record as `<VERBOSITY>:<message>`
pub fn format_record(verbosity: Verbosity, args: fmt::Arguments<'_>) -> String {
    format!("{}:{}", verbosity.as_str(), args)
}
