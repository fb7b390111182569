//! Logging utilities
//!
//! Load and layout paths log through the `log` facade; binaries pick the
//! backend. [`init`] wires up `env_logger` for tools that do not need
//! their own configuration.

pub use log::{debug, error, info, trace, warn};

/// Initialize the logging system from the environment.
pub fn init() {
    env_logger::init();
}
