use std::fmt;

/// Splits a command line into verb and arguments.
pub const ARG_SEPARATOR: char = '>';

/// The closed set of commands the shell understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verb {
    Exit,
    List,
    Path,
    Info,
    Chdir,
    Prevdir,
    MakeFile,
    DeleteFile,
    RenameFile,
    ReadFile,
    WriteFile,
    ClearFile,
    CopyFile,
    MoveFile,
    MakeDir,
    DeleteDir,
    RenameDir,
    MoveDir,
}

impl Verb {
    /// Every verb, in menu order.
    pub const ALL: [Verb; 18] = [
        Verb::Exit,
        Verb::List,
        Verb::Path,
        Verb::Info,
        Verb::Chdir,
        Verb::Prevdir,
        Verb::MakeFile,
        Verb::DeleteFile,
        Verb::RenameFile,
        Verb::ReadFile,
        Verb::WriteFile,
        Verb::ClearFile,
        Verb::CopyFile,
        Verb::MoveFile,
        Verb::MakeDir,
        Verb::DeleteDir,
        Verb::RenameDir,
        Verb::MoveDir,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Verb::Exit => "exit",
            Verb::List => "list",
            Verb::Path => "path",
            Verb::Info => "info",
            Verb::Chdir => "chdir",
            Verb::Prevdir => "prevdir",
            Verb::MakeFile => "make file",
            Verb::DeleteFile => "delete file",
            Verb::RenameFile => "rename file",
            Verb::ReadFile => "read file",
            Verb::WriteFile => "write file",
            Verb::ClearFile => "clear file",
            Verb::CopyFile => "copy file",
            Verb::MoveFile => "move file",
            Verb::MakeDir => "make dir",
            Verb::DeleteDir => "delete dir",
            Verb::RenameDir => "rename dir",
            Verb::MoveDir => "move dir",
        }
    }

    /// Number of tokens the verb consumes, itself included.
    pub fn arity(self) -> usize {
        match self {
            Verb::Exit | Verb::List | Verb::Path | Verb::Info | Verb::Prevdir => 1,
            Verb::Chdir
            | Verb::MakeFile
            | Verb::DeleteFile
            | Verb::ReadFile
            | Verb::ClearFile
            | Verb::MakeDir
            | Verb::DeleteDir => 2,
            Verb::RenameFile
            | Verb::WriteFile
            | Verb::CopyFile
            | Verb::MoveFile
            | Verb::RenameDir
            | Verb::MoveDir => 3,
        }
    }

    /// Case-sensitive match of an already trimmed token.
    pub fn parse(token: &str) -> Option<Verb> {
        Verb::ALL.into_iter().find(|verb| verb.as_str() == token)
    }

    /// Whether some verb starts with `partial`.
    pub fn is_prefix(partial: &str) -> bool {
        Verb::ALL
            .iter()
            .any(|verb| verb.as_str().starts_with(partial))
    }
}

impl fmt::Display for Verb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A validated command: the verb plus up to three positional arguments.
/// Missing or blank arguments are `None`; the handler prompts for them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandLine {
    pub verb: Verb,
    args: [Option<String>; 3],
}

impl CommandLine {
    /// Splits on `>`, trims every token and checks the verb. Tokens past
    /// the verb's arity are dropped. `None` means the verb is unknown.
    pub fn parse(line: &str) -> Option<CommandLine> {
        let mut tokens = line.split(ARG_SEPARATOR).map(str::trim);
        let verb = Verb::parse(tokens.next()?)?;

        let mut args: [Option<String>; 3] = Default::default();
        for slot in args.iter_mut().take(verb.arity() - 1) {
            *slot = tokens
                .next()
                .filter(|token| !token.is_empty())
                .map(str::to_string);
        }

        Some(CommandLine { verb, args })
    }

    /// Positional argument `index`, counting from zero after the verb.
    pub fn arg(&self, index: usize) -> Option<&str> {
        self.args.get(index).and_then(|arg| arg.as_deref())
    }
}
