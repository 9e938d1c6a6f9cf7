use std::fs;
use std::path::{is_separator, Path};

use rustyline::completion::Pair;

use crate::path::SEPARATOR;

/// Completes argument tokens with entry names, relative to the shell's
/// working directory rather than the process's.
#[derive(Debug, Clone, Copy, Default)]
pub struct EntryCompleter;

impl EntryCompleter {
    pub fn new() -> Self {
        Self
    }

    pub fn complete_entry(&self, cwd: &Path, partial: &str) -> Vec<Pair> {
        let (dir_part, prefix) = match partial.rfind(is_separator) {
            Some(idx) => partial.split_at(idx + 1),
            None => ("", partial),
        };
        let search_dir = cwd.join(dir_part);

        let Ok(entries) = fs::read_dir(&search_dir) else {
            return Vec::new();
        };

        let mut matches: Vec<Pair> = entries
            .filter_map(Result::ok)
            .filter_map(|entry| {
                let name = entry.file_name().to_str()?.to_string();
                if !name.starts_with(prefix) {
                    return None;
                }
                let suffix = if entry.path().is_dir() { SEPARATOR } else { "" };
                Some(Pair {
                    display: format!("{}{}", name, suffix),
                    replacement: format!("{}{}{}", dir_part, name, suffix),
                })
            })
            .collect();

        matches.sort_by(|a, b| a.display.cmp(&b.display));
        matches
    }
}
