use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

mod executor;

use crate::{
    core::verb::{CommandLine, Verb},
    error::ShellError,
    input::{help, Console, Line, LineSource, Terminal},
    path::WorkingDir,
};

use executor::CommandHandler;

pub const PROMPT: &str = "Enter input (use '>' to give multiple input values at once): ";
pub const INVALID_COMMAND: &str = "Invalid command. Please enter a supported command.";
pub const INTERRUPT_HINT: &str = "Use 'exit' to exit the shell";

/// Whether the REPL keeps going after a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

pub struct Shell<S, W> {
    console: Console<S, W>,
    dir: WorkingDir,
}

impl<S: LineSource, W: Write> Shell<S, W> {
    pub fn new(source: S, out: W, start_dir: impl Into<PathBuf>) -> Self {
        Shell {
            console: Console::new(source, out),
            dir: WorkingDir::new(start_dir),
        }
    }

    pub fn cwd(&self) -> &Path {
        self.dir.cwd()
    }

    pub fn console(&self) -> &Console<S, W> {
        &self.console
    }

    /// Shows the menu, then reads and dispatches lines until `exit` or end
    /// of input.
    pub fn run(&mut self) -> Result<(), ShellError> {
        info!(cwd = ?self.dir.cwd(), "shell started");
        help::show(&mut self.console);
        self.console.say("");

        while self.step()? == Flow::Continue {}

        info!("shell finished");
        Ok(())
    }

    /// One trip through the prompt. Handler failures are printed and never
    /// end the loop; only a broken line source does.
    pub fn step(&mut self) -> Result<Flow, ShellError> {
        self.console.source_mut().set_working_dir(self.dir.cwd());

        let line = match self.console.next_line(PROMPT)? {
            Line::Text(line) => line,
            Line::Interrupted => {
                self.console.say(INTERRUPT_HINT);
                return Ok(Flow::Continue);
            }
            Line::Eof => {
                debug!("end of input");
                return Ok(Flow::Exit);
            }
        };

        let Some(command) = CommandLine::parse(&line) else {
            debug!(line = %line, "unknown verb");
            self.console.say(INVALID_COMMAND);
            return Ok(Flow::Continue);
        };

        if command.verb == Verb::Exit {
            return Ok(Flow::Exit);
        }

        if let Err(e) = self.execute_command(&command) {
            debug!(verb = %command.verb, error = ?e, "command failed");
            self.console.say(&e.to_string());
        }
        Ok(Flow::Continue)
    }
}
