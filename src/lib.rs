//! ldap-log: a logging gate for library diagnostics
//!
//! The library never installs a logging backend of its own. Records pass
//! through a gate with two independent thresholds before they reach the
//! single sink the host attached:
//!
//! - a [`Verbosity`] threshold (`NONE < ERROR < BASIC < PROTOCOL < NETWORK`)
//!   selecting which categories of detail are produced, and
//! - an activation threshold from the host's `log::Level` scale, checked
//!   against the sink and used as the severity of every written record.
//!
//! The default sink discards everything, so a host that never configures
//! logging pays for nothing but a threshold comparison.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use ldap_log::{config, gate_log, gate_log_enabled, FacadeSink, Verbosity};
//!
//! config::set_sink(Arc::new(FacadeSink));
//! config::set_verbosity_threshold(Verbosity::Protocol).unwrap();
//!
//! if gate_log_enabled!(Verbosity::Protocol) {
//!     gate_log!(Verbosity::Protocol, "BIND request <{}> sent", "cn=admin");
//! }
//! ```

#[macro_use]
mod macros;

// Public modules
pub mod common;
pub mod config;
pub mod encoding;
pub mod gate;
pub mod sink;
pub mod verbosity;

// Re-export commonly used structures and functions for convenience
pub use common::{GateError, Result, init_logger};
pub use config::GateSettings;
pub use encoding::{encode_lossy, TextEncoding};
pub use gate::{format_record, Gate, GateConfig};
pub use sink::{render_bytes, FacadeSink, LogSink, MemorySink, NullSink, SinkRecord};
pub use verbosity::{resolve_verbosity_name, Verbosity};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
