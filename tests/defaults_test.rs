//! Process-wide defaults
//!
//! Kept in its own test binary so nothing has touched the shared gate yet.

use log::Level;
use ldap_log::{config, TextEncoding, Verbosity};

/// Test the configuration the shared gate starts with
#[test]
fn test_defaults_at_load() {
    let current = config::current_config();
    assert_eq!(current.activation, Level::Debug);
    assert_eq!(current.verbosity, Verbosity::None);
    assert_eq!(current.encoding, TextEncoding::Ascii);

    // Nothing but NONE passes the verbosity threshold, and the no-op sink refuses even that
    assert!(!config::is_enabled(Verbosity::Error));
    assert!(!config::is_enabled(Verbosity::None));
}
