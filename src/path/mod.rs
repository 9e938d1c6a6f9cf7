use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::error::{OpError, OpResult};
use crate::input::Terminal;

mod normalize;

pub use normalize::normalize;

/// Host path separator, fixed at compile time.
pub const SEPARATOR: &str = std::path::MAIN_SEPARATOR_STR;

/// The shell's own current directory. Every handler resolves names
/// against it; the process working directory is never changed.
#[derive(Debug, Clone)]
pub struct WorkingDir {
    current: PathBuf,
}

impl WorkingDir {
    pub fn new(start: impl Into<PathBuf>) -> Self {
        Self {
            current: start.into(),
        }
    }

    pub fn cwd(&self) -> &Path {
        &self.current
    }

    /// `cwd` followed by `name`, without normalisation. An absolute `name`
    /// is returned as is.
    pub fn join(&self, name: &str) -> PathBuf {
        self.current.join(name)
    }

    /// Like [`join`](Self::join), but rejects names no host accepts.
    pub fn resolve(&self, name: &str) -> OpResult<PathBuf> {
        if name.is_empty() || name.contains('\0') {
            return Err(OpError::InvalidPath(name.to_string()));
        }
        Ok(self.join(name))
    }

    /// `chdir`: prompts when `path` is absent, then enters the normalised
    /// target if it is an existing directory.
    pub fn change_dir(&mut self, term: &mut dyn Terminal, path: Option<&str>) -> OpResult<()> {
        let path = match path {
            Some(p) => p.to_string(),
            None => term.read_line("Enter path: "),
        };

        if path.contains('\0') {
            return Err(OpError::Refused("invalid path".to_string()));
        }

        self.enter(normalize(&self.current.join(&path)))
    }

    /// `prevdir`: moves one level up. A no-op at the filesystem root.
    pub fn parent_dir(&mut self) -> OpResult<()> {
        match self.current.parent() {
            Some(parent) => {
                let parent = parent.to_path_buf();
                self.enter(parent)
            }
            None => {
                debug!(cwd = ?self.current, "already at the root");
                Ok(())
            }
        }
    }

    fn enter(&mut self, target: PathBuf) -> OpResult<()> {
        if !target.is_dir() {
            return Err(OpError::NotFound("directory not existing"));
        }
        info!(from = ?self.current, to = ?target, "changing directory");
        self.current = target;
        Ok(())
    }
}
