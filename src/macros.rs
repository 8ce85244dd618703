//! Call-site macros for the process-wide gate

/// Emit a record through the process-wide gate
///
/// Arguments are only formatted when the record passes both thresholds.
///
/// # Example
///
/// ```
/// use ldap_log::{gate_log, Verbosity};
///
/// let dn = "cn=admin,o=test";
/// gate_log!(Verbosity::Basic, "start BIND operation via <{}>", dn);
/// ```
#[macro_export]
macro_rules! gate_log {
    ($verbosity:expr, $($arg:tt)+) => {
        $crate::config::emit($verbosity, format_args!($($arg)+))
    };
}

/// Check whether a record at the given verbosity would be emitted
///
/// Use it to guard building expensive messages, such as dumps of raw PDUs.
///
/// # Example
///
/// ```
/// use ldap_log::{gate_log, gate_log_enabled, Verbosity};
///
/// let payload = vec![0x30u8, 0x0c, 0x02, 0x01, 0x01];
/// if gate_log_enabled!(Verbosity::Network) {
///     let hex: Vec<String> = payload.iter().map(|b| format!("{:02x}", b)).collect();
///     gate_log!(Verbosity::Network, "sent {} bytes: {}", payload.len(), hex.join(" "));
/// }
/// ```
#[macro_export]
macro_rules! gate_log_enabled {
    ($verbosity:expr) => {
        $crate::config::is_enabled($verbosity)
    };
}
