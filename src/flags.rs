use std::path::PathBuf;

use clap::Parser;

/// fmsh - interactive shell for everyday file and folder chores
#[derive(Parser, Debug, Clone, Default)]
#[command(name = "fmsh", version, about)]
pub struct Flags {
    /// Start in this directory instead of the current one
    #[arg(short = 'C', long = "directory", value_name = "DIR")]
    pub directory: Option<PathBuf>,

    /// Enable debug output on stderr
    #[arg(short, long)]
    pub debug: bool,

    /// Disable completion, hints and highlighting
    #[arg(long)]
    pub plain: bool,
}
