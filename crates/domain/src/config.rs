//! Configuration module for Ferrous MockDNS
//!
//! - `root`: Main configuration and CLI overrides
//! - `server`: Listen address and enabled transports
//! - `records`: Record file, auto-reload and responder profile
//! - `logging`: Logging settings
//! - `errors`: Configuration errors

pub mod errors;
pub mod logging;
pub mod records;
pub mod root;
pub mod server;

pub use errors::ConfigError;
pub use logging::LoggingConfig;
pub use records::{RecordsConfig, ResponderProfile};
pub use root::{CliOverrides, Config};
pub use server::ServerConfig;
