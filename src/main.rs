use anyhow::{Context, Result};
use std::io;
use std::process::ExitCode;
use tracing::debug;

use change::{commands::run, ChangeConfig};

fn main() -> Result<ExitCode> {
    let config = ChangeConfig::default();

    // Logging is diagnostic only; a broken RUST_LOG must not stop the change
    if let Err(e) = change::init_with_logger(&config) {
        eprintln!("Warning: {}", e);
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();

    let outcome = run(std::env::args_os(), &config, &mut out)
        .context("Failed to write outcome to stdout")?;

    match outcome.error() {
        Some(err) => debug!("Finished after failure: {:?}", err),
        None => debug!("Finished successfully"),
    }

    // The outcome line is the only signal; the exit status is always zero
    Ok(ExitCode::SUCCESS)
}
