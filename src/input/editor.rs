use std::path::Path;

use rustyline::{config::Configurer, error::ReadlineError, history::FileHistory, Editor};

use super::{Line, LineSource, ShellHelper};
use crate::error::ShellError;

/// Interactive input through a single rustyline editor. History is kept
/// for the session only.
pub struct EditorSource {
    editor: Editor<ShellHelper, FileHistory>,
}

impl EditorSource {
    pub fn new(with_helper: bool) -> Result<Self, ShellError> {
        let mut editor = Editor::<ShellHelper, FileHistory>::new()?;

        if with_helper {
            editor.set_helper(Some(ShellHelper::new()));
        }
        editor.set_auto_add_history(true);

        Ok(Self { editor })
    }
}

impl LineSource for EditorSource {
    fn read_line(&mut self, prompt: &str) -> Result<Line, ShellError> {
        match self.editor.readline(prompt) {
            Ok(line) => Ok(Line::Text(line)),
            Err(ReadlineError::Interrupted) => Ok(Line::Interrupted),
            Err(ReadlineError::Eof) => Ok(Line::Eof),
            Err(e) => Err(e.into()),
        }
    }

    fn set_working_dir(&mut self, dir: &Path) {
        if let Some(helper) = self.editor.helper_mut() {
            helper.set_working_dir(dir);
        }
    }
}
