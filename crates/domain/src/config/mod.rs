//! Configuration module for DNS Dispatch
//!
//! This module contains all configuration structures organized by concern:
//! - `root`: Main configuration and CLI overrides
//! - `transport`: Local (UDP loopback) and remote (DoH) transport targets
//! - `query`: Timeout and address-family strategy
//! - `logging`: Logging settings
//! - `errors`: Configuration errors

pub mod errors;
pub mod logging;
pub mod query;
pub mod root;
pub mod transport;

pub use errors::ConfigError;
pub use logging::LoggingConfig;
pub use query::{FamilyStrategy, QueryConfig};
pub use root::{CliOverrides, Config};
pub use transport::{LocalTransportConfig, RemoteTransportConfig};
