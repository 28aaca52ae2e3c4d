//! Logging setup.
//!
//! The engine itself only talks to the `log` facade. Hosts that want output
//! on stderr call [`init_logging`] once; hosts with their own logger skip it.

mod init;

pub use init::{LoggingConfig, init_logging};
