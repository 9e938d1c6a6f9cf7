use std::collections::VecDeque;

use super::{Line, LineSource};
use crate::error::ShellError;

/// Replays a fixed list of lines and remembers every prompt it was shown.
#[derive(Debug, Default, Clone)]
pub struct ScriptedSource {
    lines: VecDeque<String>,
    prompts: Vec<String>,
}

impl ScriptedSource {
    pub fn new<I, T>(lines: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
            prompts: Vec::new(),
        }
    }

    pub fn prompts(&self) -> &[String] {
        &self.prompts
    }

    pub fn remaining(&self) -> usize {
        self.lines.len()
    }
}

impl LineSource for ScriptedSource {
    fn read_line(&mut self, prompt: &str) -> Result<Line, ShellError> {
        self.prompts.push(prompt.to_string());
        Ok(self.lines.pop_front().map_or(Line::Eof, Line::Text))
    }
}
