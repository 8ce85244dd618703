//! Default configuration values
//!
//! Single source of truth for the gate's defaults and for the names used by
//! the settings loader.

use log::Level;

use crate::encoding::TextEncoding;
use crate::verbosity::Verbosity;

/// Library name used in the initialization record
pub const LIBRARY_NAME: &str = "ldap3";

/// Environment variable prefix for all settings (`LDAP_LOG_VERBOSITY`, ...)
pub const ENV_PREFIX: &str = "LDAP_LOG";

/// Default activation threshold
pub const ACTIVATION_LEVEL: Level = Level::Debug;

/// Default verbosity threshold
pub const VERBOSITY_LEVEL: Verbosity = Verbosity::None;

/// Default text encoding label
pub const TEXT_ENCODING_STR: &str = "ascii";

/// Default text encoding (7-bit safe)
pub fn text_encoding() -> TextEncoding {
    TextEncoding::Ascii
}
