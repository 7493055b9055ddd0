//! Logging setup for embedders and the CLI.
//!
//! The library itself only talks to the `log` facade; this module is the one
//! place that picks `env_logger` as the backend.

mod init;

pub use init::{init_logging, LoggingConfig};
