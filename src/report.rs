use std::ffi::OsString;
use std::fmt;
use std::io::{self, Write};
use std::path::PathBuf;

use crate::error::ChangeError;

/// Final outcome of one invocation, printed as a single line
#[derive(Debug)]
pub enum Outcome {
    /// Every stage completed
    Changed {
        search: OsString,
        replacement: OsString,
        filename: PathBuf,
        replacements: usize,
    },
    /// A stage failed; later stages were skipped
    Failed(ChangeError),
}

impl Outcome {
    pub fn error(&self) -> Option<&ChangeError> {
        match self {
            Outcome::Failed(err) => Some(err),
            Outcome::Changed { .. } => None,
        }
    }

    /// Write the outcome line to `out`
    pub fn report(&self, out: &mut impl Write) -> io::Result<()> {
        writeln!(out, "{}", self)?;
        out.flush()
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Changed {
                search,
                replacement,
                filename,
                ..
            } => write!(
                f,
                "Occurrences of '{}' changed to '{}' in {}",
                search.to_string_lossy(),
                replacement.to_string_lossy(),
                filename.display()
            ),
            Outcome::Failed(err) => write!(f, "{}", err),
        }
    }
}

impl From<ChangeError> for Outcome {
    fn from(err: ChangeError) -> Self {
        Outcome::Failed(err)
    }
}
