use std::io::Write;

use tracing::debug;

use crate::core::verb::{CommandLine, Verb};
use crate::core::{DirOps, FileOps};
use crate::error::OpResult;
use crate::input::{help, LineSource, Terminal};

pub(crate) trait CommandHandler {
    fn execute_command(&mut self, command: &CommandLine) -> OpResult<()>;
}

impl<S: LineSource, W: Write> CommandHandler for super::Shell<S, W> {
    fn execute_command(&mut self, command: &CommandLine) -> OpResult<()> {
        debug!(verb = %command.verb, "dispatching");
        let (first, second) = (command.arg(0), command.arg(1));

        match command.verb {
            Verb::Exit => Ok(()),
            Verb::List => {
                self.dirs().list();
                Ok(())
            }
            Verb::Path => {
                let cwd = self.dir.cwd().display().to_string();
                self.console.say(&cwd);
                Ok(())
            }
            Verb::Info => {
                help::show(&mut self.console);
                self.console.say("");
                Ok(())
            }
            Verb::Chdir => self.dir.change_dir(&mut self.console, first),
            Verb::Prevdir => self.dir.parent_dir(),

            Verb::MakeFile => self.files().create(first),
            Verb::DeleteFile => self.files().delete(first),
            Verb::RenameFile => self.files().rename(first, second),
            Verb::ReadFile => self.files().read(first).map(drop),
            Verb::WriteFile => self.files().write_line(first, second),
            Verb::ClearFile => self.files().clear(first),
            Verb::CopyFile => {
                let written = self.files().copy(first, second)?;
                debug!(name = %written, "copy finished");
                Ok(())
            }
            Verb::MoveFile => self.files().move_to(first, second),

            Verb::MakeDir => self.dirs().make(first),
            // confirmation is only ever given programmatically
            Verb::DeleteDir => self.dirs().delete(first, None),
            Verb::RenameDir => self.dirs().rename(first, second),
            Verb::MoveDir => self.dirs().move_to(first, second),
        }
    }
}

impl<S: LineSource, W: Write> super::Shell<S, W> {
    fn files(&mut self) -> FileOps<'_> {
        FileOps::new(&self.dir, &mut self.console)
    }

    fn dirs(&mut self) -> DirOps<'_> {
        DirOps::new(&self.dir, &mut self.console)
    }
}
