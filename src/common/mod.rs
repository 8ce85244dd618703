//! Common module
//!
//! This module contains shared error types and host-side logging helpers.

pub mod error;
pub mod log;

// Re-export commonly used types and functions
pub use error::{GateError, Result};
pub use log::init_logger;
