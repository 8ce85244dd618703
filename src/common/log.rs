//! Host-side logger helpers
//!
//! The gate never installs a logger by itself. Hosts that want the
//! [`FacadeSink`](crate::sink::FacadeSink) output on stderr can use this.

/// Initialize `env_logger` as the global `log` backend
///
/// `RUST_LOG` takes precedence over `level`. Returns `false` when a global
/// logger was already installed.
///
/// # Parameters
///
/// * `level` - Default filter, e.g. `"debug"` or `"ldap3=trace"`
pub fn init_logger(level: &str) -> bool {
    let env = env_logger::Env::default()
        .filter_or("RUST_LOG", level);

    env_logger::try_init_from_env(env).is_ok()
}
