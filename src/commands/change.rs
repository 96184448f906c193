use std::ffi::OsString;
use std::io::{self, Write};
use tracing::{debug, info, warn};

use crate::cli::{parse_args, Invocation};
use crate::config::ChangeConfig;
use crate::error::ChangeResult;
use crate::file::{read_file, write_file};
use crate::report::Outcome;
use crate::substitution::Substitution;

/// Run the read, substitute and write stages for a parsed invocation.
///
/// Each stage short-circuits the rest on failure. Nothing is rolled back.
pub fn execute(invocation: &Invocation, config: &ChangeConfig) -> ChangeResult<usize> {
    let path = invocation.filename.as_path();

    let content = read_file(path)?;

    let substitution =
        Substitution::new(invocation.search_bytes(), invocation.replacement_bytes())?;
    let result = substitution.apply(&content);
    let replacements = result.replacements;

    if !result.changed() {
        debug!("No occurrences found, writing content back unchanged");
    }

    write_file(path, &result.content, config.file_mode)?;

    Ok(replacements)
}

/// Parse `args`, run the pipeline and print the outcome line to `out`.
///
/// Every failure is turned into an outcome; only a failure writing to `out`
/// itself is returned as an error.
pub fn run<I, T>(args: I, config: &ChangeConfig, out: &mut impl Write) -> io::Result<Outcome>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let outcome = match parse_args(args) {
        Ok(invocation) => {
            debug!(
                "Replacing {:?} with {:?} in {}",
                invocation.search,
                invocation.replacement,
                invocation.filename.display()
            );

            match execute(&invocation, config) {
                Ok(replacements) => {
                    info!(
                        "Replaced {} occurrence(s) in {}",
                        replacements,
                        invocation.filename.display()
                    );
                    Outcome::Changed {
                        search: invocation.search,
                        replacement: invocation.replacement,
                        filename: invocation.filename,
                        replacements,
                    }
                }
                Err(err) => {
                    match err.path() {
                        Some(path) => warn!("Change failed for {}: {}", path.display(), err),
                        None => warn!("Change failed: {}", err),
                    }
                    Outcome::Failed(err)
                }
            }
        }
        Err(err) => Outcome::Failed(err),
    };

    outcome.report(out)?;
    Ok(outcome)
}
