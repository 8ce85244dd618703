//! Configuration module
//!
//! Process-wide gate configuration: defaults, the shared gate instance and
//! its validated setters, and settings loaded from files and environment
//! variables.

pub mod defaults;
mod manager;
mod settings;

pub use self::defaults::ENV_PREFIX;
pub use self::manager::{
    activation_threshold, current_config, emit, initialize, initialize_with_sink, is_enabled,
    reset_sink, set_activation_level, set_activation_threshold, set_sink, set_text_encoding,
    set_verbosity_threshold, text_encoding, verbosity_threshold,
};
pub use self::settings::GateSettings;
