use std::io::Write;
use std::path::Path;

use tracing::warn;

use crate::error::ShellError;

mod completer;
mod editor;
pub mod help;
mod scripted;

pub use completer::ShellHelper;
pub use editor::EditorSource;
pub use scripted::ScriptedSource;

/// One read from a [`LineSource`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Line {
    Text(String),
    Interrupted,
    Eof,
}

/// Where the shell's input lines come from. Implementations show the
/// prompt themselves and live as long as the shell does, so no buffered
/// input is lost between prompts.
pub trait LineSource {
    fn read_line(&mut self, prompt: &str) -> Result<Line, ShellError>;

    /// Tells the source which directory names are relative to.
    fn set_working_dir(&mut self, _dir: &Path) {}
}

/// What command handlers see of the user: a way to ask for a line and a
/// way to print one.
pub trait Terminal {
    /// Prompts and returns the reply without its terminator. End of input
    /// reads as an empty string.
    fn read_line(&mut self, prompt: &str) -> String;

    fn say(&mut self, message: &str);
}

/// A [`LineSource`] paired with an output stream.
pub struct Console<S, W> {
    source: S,
    out: W,
}

impl<S: LineSource, W: Write> Console<S, W> {
    pub fn new(source: S, out: W) -> Self {
        Self { source, out }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }

    pub fn output(&self) -> &W {
        &self.out
    }

    /// Raw read for the command prompt, where interrupts and end of input
    /// mean something.
    pub fn next_line(&mut self, prompt: &str) -> Result<Line, ShellError> {
        self.source.read_line(prompt)
    }
}

impl<S: LineSource, W: Write> Terminal for Console<S, W> {
    fn read_line(&mut self, prompt: &str) -> String {
        match self.source.read_line(prompt) {
            Ok(Line::Text(line)) => line,
            Ok(Line::Interrupted) | Ok(Line::Eof) => String::new(),
            Err(e) => {
                warn!(error = %e, "failed to read a line");
                String::new()
            }
        }
    }

    fn say(&mut self, message: &str) {
        if let Err(e) = writeln!(self.out, "{}", message) {
            warn!(error = %e, "failed to write output");
        }
    }
}
