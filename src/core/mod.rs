use std::fs;
use std::path::Path;

use crate::input::Terminal;

pub mod dirs;
pub mod files;
pub mod suffix;
pub mod verb;

pub use dirs::DirOps;
pub use files::FileOps;

/// `given`, or the user's reply to `prompt` when it is absent.
pub(crate) fn ask(term: &mut dyn Terminal, given: Option<&str>, prompt: &str) -> String {
    match given {
        Some(value) => value.to_string(),
        None => term.read_line(prompt),
    }
}

/// Whether anything, including a dangling symlink, sits at `path`.
pub(crate) fn entry_exists(path: &Path) -> bool {
    fs::symlink_metadata(path).is_ok()
}
