// Runtime settings for a change invocation
// Defaults are fixed; library callers may override them in-process

use crate::file::DEFAULT_FILE_MODE;

/// Filter used when RUST_LOG is not set
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Configuration for the change pipeline
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeConfig {
    /// Permission bits for a file created by the write-back
    pub file_mode: u32,
    /// Log filter applied when RUST_LOG is absent
    pub default_log_filter: String,
    /// Whether log lines carry ANSI colors
    pub log_ansi: bool,
}

impl Default for ChangeConfig {
    fn default() -> Self {
        Self {
            file_mode: DEFAULT_FILE_MODE,
            default_log_filter: DEFAULT_LOG_FILTER.to_string(),
            log_ansi: false,
        }
    }
}
