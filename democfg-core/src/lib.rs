//! democfg Core Library
//!
//! This crate provides the configuration record types for democfg, the
//! JSON codec they implement, and the shared error type.

pub mod config;
pub mod error;

pub use config::{ConfigHeader, JsonRecord};
pub use error::{Error, Result};

/// democfg version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
