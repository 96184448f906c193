use clap::Parser;
use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::{ChangeError, ChangeResult};

/// Name used in the usage line when argv[0] is unavailable
pub const PROGRAM_NAME: &str = "change";

const END_OF_OPTIONS: &str = "--";

/// One invocation: a target file, the text to find and its replacement
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(
    name = "change",
    disable_help_flag = true,
    disable_version_flag = true,
    disable_help_subcommand = true
)]
pub struct Invocation {
    /// File to rewrite in place
    #[arg(value_name = "filename")]
    pub filename: PathBuf,

    /// Literal text to search for, taken as raw bytes
    #[arg(value_name = "string_to_replace")]
    pub search: OsString,

    /// Text written in place of every match
    #[arg(value_name = "replacement")]
    pub replacement: OsString,

    // Anything past the third value is accepted and ignored
    #[arg(hide = true)]
    pub ignored: Vec<OsString>,
}

impl Invocation {
    pub fn search_bytes(&self) -> &[u8] {
        self.search.as_encoded_bytes()
    }

    pub fn replacement_bytes(&self) -> &[u8] {
        self.replacement.as_encoded_bytes()
    }
}

/// Parse a full argument vector, program name first.
///
/// Every value after the program name is positional, `--` and `-x` included.
/// Any parse failure is reported as a usage error.
pub fn parse_args<I, T>(args: I) -> ChangeResult<Invocation>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut args = args.into_iter().map(Into::into);
    let argv0 = args.next();
    let program = program_name(argv0.as_deref().map(Path::new));

    // Escape everything so clap never reads a value as a flag or as its own `--`
    let escaped = argv0
        .into_iter()
        .chain(std::iter::once(OsString::from(END_OF_OPTIONS)))
        .chain(args);

    Invocation::try_parse_from(escaped).map_err(|e| {
        debug!("Argument parsing failed: {}", e.kind());
        ChangeError::usage(program)
    })
}

/// File name of argv[0], falling back to the default program name
pub fn program_name(argv0: Option<&Path>) -> String {
    argv0
        .and_then(Path::file_name)
        .map(OsStr::to_string_lossy)
        .filter(|name| !name.is_empty())
        .map(|name| name.into_owned())
        .unwrap_or_else(|| PROGRAM_NAME.to_string())
}
