use std::env;
use std::path::PathBuf;

use crate::error::ShellError;
use crate::flags::Flags;
use crate::path::normalize;

/// Runtime settings resolved from the command-line flags.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Absolute directory the shell starts in.
    pub start_dir: PathBuf,
    /// Filter used when `RUST_LOG` is not set.
    pub log_filter: String,
    /// Completion, hints and highlighting in the line editor.
    pub editor_helper: bool,
}

impl Settings {
    pub fn from_flags(flags: &Flags) -> Result<Self, ShellError> {
        let process_dir = env::current_dir()?;
        let start_dir = match &flags.directory {
            Some(dir) => normalize(&process_dir.join(dir)),
            None => process_dir,
        };

        if !start_dir.is_dir() {
            return Err(ShellError::InvalidStartDir(start_dir));
        }

        Ok(Settings {
            start_dir,
            log_filter: if flags.debug { "debug" } else { "warn" }.to_string(),
            editor_helper: !flags.plain,
        })
    }
}
