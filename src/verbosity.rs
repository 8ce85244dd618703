//! Verbosity levels
//!
//! The library's own category-of-detail scale. It is independent of the
//! host's `log::Level`: a record must pass both to be written.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::common::{GateError, Result};

/// Category of detail a diagnostic message belongs to (least to most detailed)
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Verbosity {
    /// Nothing at all
    None = 0,
    /// Errors only
    Error = 10,
    /// Basic lifecycle events (open, bind, unbind)
    Basic = 20,
    /// Protocol-level exchanges
    Protocol = 30,
    /// Raw network traffic
    Network = 40,
}

impl Verbosity {
    /// All ranks, in ascending order
    pub const ALL: [Verbosity; 5] = [
        Verbosity::None,
        Verbosity::Error,
        Verbosity::Basic,
        Verbosity::Protocol,
        Verbosity::Network,
    ];

    /// Numeric rank
    #[inline]
    pub const fn value(self) -> u32 {
        self as u32
    }

    /// Canonical name
    pub const fn as_str(self) -> &'static str {
        match self {
            Verbosity::None => "NONE",
            Verbosity::Error => "ERROR",
            Verbosity::Basic => "BASIC",
            Verbosity::Protocol => "PROTOCOL",
            Verbosity::Network => "NETWORK",
        }
    }

    /// Create from a raw rank (returns None if not one of the five ranks)
    pub const fn from_value(value: u32) -> Option<Self> {
        match value {
            0 => Some(Verbosity::None),
            10 => Some(Verbosity::Error),
            20 => Some(Verbosity::Basic),
            30 => Some(Verbosity::Protocol),
            40 => Some(Verbosity::Network),
            _ => None,
        }
    }
}

impl From<Verbosity> for u32 {
    fn from(verbosity: Verbosity) -> Self {
        verbosity.value()
    }
}

impl fmt::Display for Verbosity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Verbosity {
    type Err = GateError;

    /// Accepts a canonical name (any case) or a numeric rank
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let s = s.trim();
        if let Ok(value) = s.parse::<u32>() {
            return Verbosity::from_value(value)
                .ok_or_else(|| GateError::InvalidVerbosityLevel(s.to_string()));
        }

        Verbosity::ALL
            .into_iter()
            .find(|v| v.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| GateError::InvalidVerbosityLevel(s.to_string()))
    }
}

/// Map a raw verbosity rank to its canonical name
///
/// Fails with [`GateError::InvalidVerbosity`] for anything outside the
/// enumeration, which always indicates a programming error at the call site.
pub fn resolve_verbosity_name(level: u32) -> Result<&'static str> {
    Verbosity::from_value(level)
        .map(Verbosity::as_str)
        .ok_or(GateError::InvalidVerbosity(level))
}
