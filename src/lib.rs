// change - replace every literal occurrence of a string in a file, in place

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod file;
pub mod report;
pub mod substitution;

use anyhow::{anyhow, Result};
use tracing::debug;

pub use config::ChangeConfig;
pub use error::{ChangeError, ChangeResult};
pub use report::Outcome;

pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

/// Initialize the tracing subscriber
///
/// Logs always go to stderr; stdout carries only the outcome line.
/// RUST_LOG overrides `config.default_log_filter`.
pub fn init_with_logger(config: &ChangeConfig) -> Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.default_log_filter))
        .map_err(|e| anyhow!("Invalid log filter: {}", e))?;

    fmt::Subscriber::builder()
        .with_ansi(config.log_ansi)
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .try_init()
        .map_err(|e| anyhow!("Failed to initialize logger: {}", e))?;

    debug!("Initialized change v{}", version());
    Ok(())
}
