use std::borrow::Cow;
use std::path::{Path, PathBuf};

use rustyline::{
    completion::{Completer, Pair},
    highlight::{CmdKind, Highlighter},
    hint::Hinter,
    validate::Validator,
    Context, Helper,
};

mod command;
mod path;

use crate::core::verb::ARG_SEPARATOR;
use crate::highlight::SyntaxHighlighter;
use command::VerbCompleter;
use path::EntryCompleter;

/// rustyline helper: completion, hints and highlighting for command lines.
#[derive(Clone)]
pub struct ShellHelper {
    cwd: PathBuf,
    verbs: VerbCompleter,
    entries: EntryCompleter,
    highlighter: SyntaxHighlighter,
}

impl Default for ShellHelper {
    fn default() -> Self {
        Self::new()
    }
}

impl ShellHelper {
    pub fn new() -> Self {
        ShellHelper {
            cwd: PathBuf::new(),
            verbs: VerbCompleter::new(),
            entries: EntryCompleter::new(),
            highlighter: SyntaxHighlighter::new(),
        }
    }

    pub fn set_working_dir(&mut self, dir: &Path) {
        self.cwd = dir.to_path_buf();
    }

    fn candidates(&self, line: &str, pos: usize) -> (usize, Vec<Pair>) {
        let up_to_cursor = &line[..pos];

        match up_to_cursor.rfind(ARG_SEPARATOR) {
            Some(idx) => {
                let token = up_to_cursor[idx + 1..].trim_start();
                (pos - token.len(), self.entries.complete_entry(&self.cwd, token))
            }
            None => {
                let token = up_to_cursor.trim_start();
                (pos - token.len(), self.verbs.complete_verb(token))
            }
        }
    }
}

impl Helper for ShellHelper {}

impl Highlighter for ShellHelper {
    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        Cow::Owned(self.highlighter.highlight_line(line))
    }

    fn highlight_char(&self, _line: &str, _pos: usize, _kind: CmdKind) -> bool {
        true
    }

    fn highlight_hint<'h>(&self, hint: &'h str) -> Cow<'h, str> {
        Cow::Owned(self.highlighter.highlight_hint(hint))
    }
}

impl Hinter for ShellHelper {
    type Hint = String;

    fn hint(&self, line: &str, pos: usize, _ctx: &Context<'_>) -> Option<String> {
        if pos < line.len() || line.contains(ARG_SEPARATOR) {
            return None;
        }
        self.verbs.hint(line.trim_start())
    }
}

impl Validator for ShellHelper {}

impl Completer for ShellHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        Ok(self.candidates(line, pos))
    }
}
