use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failures that stop the shell itself: startup problems and a broken
/// line editor. Handler failures never turn into one of these.
#[derive(Debug, Error)]
pub enum ShellError {
    #[error("Readline error: {0}")]
    Readline(#[from] rustyline::error::ReadlineError),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Ctrl-C error: {0}")]
    CtrlC(#[from] ctrlc::Error),

    #[error("start directory is not a directory: {}", .0.display())]
    InvalidStartDir(PathBuf),
}

/// Outcome of a failed command handler. `Display` is the exact line the
/// shell prints for it.
#[derive(Debug, Error)]
pub enum OpError {
    #[error("Invalid path: {0}")]
    InvalidPath(String),

    #[error("{0}")]
    NotFound(&'static str),

    #[error("{0}")]
    AlreadyExists(&'static str),

    /// The operation was refused or failed with a message of its own.
    #[error("{0}")]
    Refused(String),

    #[error("Deletion cancelled.")]
    Cancelled,

    /// Raw host error, printed verbatim.
    #[error("{0}")]
    Io(#[from] io::Error),
}

pub type OpResult<T> = Result<T, OpError>;
