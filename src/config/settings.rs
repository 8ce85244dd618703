//! Host settings
//!
//! Loads gate settings from an optional JSON file and `LDAP_LOG_*`
//! environment variables, then applies them through the validated setters.
//!
//! Priority, lowest first:
//! 1. Current gate configuration (fields left unset are not touched)
//! 2. Settings file
//! 3. Environment variables (`LDAP_LOG_ACTIVATION`, `LDAP_LOG_VERBOSITY`, `LDAP_LOG_ENCODING`)

use config::{Config, Environment, File, FileFormat};
use log::Level;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::common::{GateError, Result};
use crate::config::defaults;
use crate::gate::Gate;
use crate::verbosity::Verbosity;

/// Settings a host can provide without code
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GateSettings {
    /// `log::Level` name (`error` .. `trace`) or its numeric value
    pub activation: Option<String>,
    /// Verbosity name (`NONE` .. `NETWORK`) or its numeric rank
    pub verbosity: Option<String>,
    /// Encoding label
    pub encoding: Option<String>,
}

impl GateSettings {
    /// Load settings from `path` (if given and present) and the environment
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut builder = Config::builder();

        if let Some(path) = path {
            log::debug!("Loading gate settings from {}", path.display());
            builder = builder.add_source(
                File::from(path)
                    .format(FileFormat::Json)
                    .required(false),
            );
        }

        builder = builder.add_source(Environment::with_prefix(defaults::ENV_PREFIX));

        Ok(builder.build()?.try_deserialize::<Self>()?)
    }

    /// Load settings from a JSON file only, ignoring the environment
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            GateError::Settings(format!("Failed to read settings file {}: {}", path.display(), e))
        })?;

        Ok(serde_json::from_str(&content)?)
    }

    /// Load settings from the environment only
    pub fn from_env() -> Result<Self> {
        Self::load(None)
    }

    /// Whether no field is set
    pub fn is_empty(&self) -> bool {
        self.activation.is_none() && self.verbosity.is_none() && self.encoding.is_none()
    }

    /// Apply to `gate`: activation, then encoding, then verbosity
    ///
    /// Stops at the first rejected value. Earlier fields stay applied.
    pub fn apply_to(&self, gate: &Gate) -> Result<()> {
        if let Some(ref activation) = self.activation {
            let Some(level) = parse_activation(activation) else {
                return Err(gate.reject_activation(activation));
            };
            gate.set_activation_threshold(level)?;
        }

        if let Some(ref encoding) = self.encoding {
            gate.set_text_encoding(encoding)?;
        }

        if let Some(ref verbosity) = self.verbosity {
            // Unknown numbers still go through the gate so it reports them
            let rank = match verbosity.parse::<Verbosity>() {
                Ok(v) => v.value(),
                Err(_) => match verbosity.trim().parse::<u32>() {
                    Ok(raw) => raw,
                    Err(_) => return Err(gate.reject_verbosity(verbosity)),
                },
            };
            gate.set_verbosity_threshold(rank)?;
        }

        Ok(())
    }

    /// Apply to the process-wide gate
    pub fn apply(&self) -> Result<()> {
        self.apply_to(crate::config::initialize())
    }
}

/// Parse a level name or number into a raw activation value
///
/// Names resolve to their `log::Level` value. Numbers are passed through
/// unchecked so the gate's own validation decides.
fn parse_activation(value: &str) -> Option<usize> {
    let value = value.trim();
    if let Ok(raw) = value.parse::<usize>() {
        return Some(raw);
    }
    value.parse::<Level>().ok().map(|level| level as usize)
}
