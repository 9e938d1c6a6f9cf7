use std::fs::{self, File, OpenOptions};
use std::io::{self, BufRead, BufReader, Write};
use std::path::Path;

use tracing::debug;

use super::{ask, entry_exists, suffix};
use crate::error::{OpError, OpResult};
use crate::input::Terminal;
use crate::path::WorkingDir;

/// File handlers. Names are resolved against the shell's working
/// directory; absent arguments are prompted for.
pub struct FileOps<'a> {
    wd: &'a WorkingDir,
    term: &'a mut dyn Terminal,
}

impl<'a> FileOps<'a> {
    pub fn new(wd: &'a WorkingDir, term: &'a mut dyn Terminal) -> Self {
        Self { wd, term }
    }

    /// `make file`: creates an empty file, never touching an existing one.
    pub fn create(&mut self, name: Option<&str>) -> OpResult<()> {
        let name = ask(self.term, name, "Enter file name: ");
        let path = self.wd.resolve(&name)?;

        match OpenOptions::new().write(true).create_new(true).open(&path) {
            Ok(_) => {
                self.term.say("new file created");
                Ok(())
            }
            Err(e) if e.kind() == io::ErrorKind::AlreadyExists => {
                Err(OpError::AlreadyExists("File name already exists"))
            }
            Err(e) => Err(e.into()),
        }
    }

    /// `clear file`: truncates to zero bytes.
    pub fn clear(&mut self, name: Option<&str>) -> OpResult<()> {
        let name = ask(self.term, name, "Enter file name: ");
        let path = self.wd.resolve(&name)?;

        if !entry_exists(&path) {
            return Err(OpError::NotFound("file not existing"));
        }
        if is_symlink(&path) {
            return Err(OpError::Refused("cannot clear a symbolic link".to_string()));
        }
        truncate(&path)?;
        Ok(())
    }

    /// `delete file`: truncates, then unlinks. A symlink is only unlinked;
    /// whatever it points to stays untouched.
    pub fn delete(&mut self, name: Option<&str>) -> OpResult<()> {
        let name = ask(self.term, name, "Enter file name: ");
        let path = self.wd.resolve(&name)?;

        if !entry_exists(&path) {
            return Err(OpError::NotFound("File not existing"));
        }
        if !is_symlink(&path) {
            truncate(&path)?;
        }
        fs::remove_file(&path)?;

        self.term.say("File deleted");
        Ok(())
    }

    /// `rename file`: refuses to replace an existing target.
    pub fn rename(&mut self, old: Option<&str>, new: Option<&str>) -> OpResult<()> {
        let old = ask(self.term, old, "Enter file name: ");
        let from = self.wd.resolve(&old)?;
        if !from.is_file() {
            return Err(OpError::NotFound("File not existing"));
        }

        let new = ask(self.term, new, "Enter new file name: ");
        let to = self.wd.resolve(&new)?;
        if entry_exists(&to) {
            debug!(from = ?from, to = ?to, "rename target exists");
            return Err(OpError::Refused("file renaming failed".to_string()));
        }

        match fs::rename(&from, &to) {
            Ok(()) => {
                self.term.say("file renamed");
                Ok(())
            }
            Err(e) => {
                debug!(from = ?from, to = ?to, error = %e, "rename failed");
                Err(OpError::Refused("file renaming failed".to_string()))
            }
        }
    }

    /// `read file`: prints every line and returns them concatenated
    /// without terminators.
    pub fn read(&mut self, name: Option<&str>) -> OpResult<String> {
        let name = ask(self.term, name, "Enter file name: ");
        let path = self.wd.resolve(&name)?;

        self.print_lines(&path).map_err(|e| {
            debug!(path = ?path, error = %e, "read failed");
            OpError::NotFound("file not found")
        })
    }

    fn print_lines(&mut self, path: &Path) -> io::Result<String> {
        let mut reader = BufReader::new(File::open(path)?);
        let mut collected = String::new();
        let mut buf = Vec::new();

        while reader.read_until(b'\n', &mut buf)? > 0 {
            if buf.last() == Some(&b'\n') {
                buf.pop();
                if buf.last() == Some(&b'\r') {
                    buf.pop();
                }
            }
            let line = String::from_utf8_lossy(&buf);
            self.term.say(&line);
            collected.push_str(&line);
            buf.clear();
        }

        Ok(collected)
    }

    /// `write file`: appends `text` as a new line, with no trailing
    /// newline.
    pub fn write_line(&mut self, name: Option<&str>, text: Option<&str>) -> OpResult<()> {
        let name = ask(self.term, name, "Enter file name: ");
        let path = self.wd.resolve(&name)?;
        if !entry_exists(&path) {
            return Err(OpError::NotFound("File not existing"));
        }

        let text = ask(self.term, text, "Enter text: ");
        let existing_lines = count_lines(&path).unwrap_or(0);

        let mut file = OpenOptions::new().append(true).open(&path)?;
        if existing_lines != 0 {
            file.write_all(b"\n")?;
        }
        file.write_all(text.as_bytes())?;
        Ok(())
    }

    /// `copy file`: copies to `target`, overwriting it, or to the first
    /// free name of the auto-suffix series. Returns the name used.
    pub fn copy(&mut self, source: Option<&str>, target: Option<&str>) -> OpResult<String> {
        let source = ask(self.term, source, "Enter file name: ");
        let from = self.wd.resolve(&source)?;
        if !from.is_file() {
            return Err(OpError::NotFound("File not found"));
        }

        let chosen = match target {
            Some(target) => target.to_string(),
            None => suffix::unique_name(&source, |name| entry_exists(&self.wd.join(name))),
        };
        let to = self.wd.resolve(&chosen)?;

        let mut input = File::open(&from).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => OpError::NotFound("File not found"),
            _ => e.into(),
        })?;

        if target.is_some() {
            match OpenOptions::new().write(true).create_new(true).open(&to) {
                Ok(_) => {}
                Err(e) if e.kind() == io::ErrorKind::AlreadyExists => {
                    self.term.say("file name already exists");
                    if same_file(&from, &to)? {
                        debug!(path = ?from, "copy onto itself skipped");
                        return Ok(chosen);
                    }
                }
                Err(e) => return Err(e.into()),
            }
        }

        let mut output = File::create(&to)?;
        let bytes = io::copy(&mut input, &mut output)?;
        debug!(from = ?from, to = ?to, bytes, "file copied");

        Ok(chosen)
    }

    /// `move file`: moves into `target_dir`. When the name is taken there,
    /// a suffixed copy is moved instead and the source removed.
    pub fn move_to(&mut self, name: Option<&str>, target_dir: Option<&str>) -> OpResult<()> {
        let name = ask(self.term, name, "Enter file name: ");
        let target_dir = ask(self.term, target_dir, "Enter path to move the file into: ");
        self.move_entry(&name, &target_dir)
    }

    fn move_entry(&mut self, name: &str, target_dir: &str) -> OpResult<()> {
        let from = self.wd.resolve(name)?;
        let dir = self.wd.resolve(target_dir)?;
        let file_name = from
            .file_name()
            .ok_or_else(|| OpError::InvalidPath(name.to_string()))?;
        let to = dir.join(file_name);

        if !entry_exists(&from) || !dir.is_dir() {
            return Err(OpError::NotFound("file or path not found error"));
        }

        if entry_exists(&to) {
            if same_file(&from, &to)? {
                return Err(OpError::AlreadyExists("file is already in that folder"));
            }
            debug!(from = ?from, to = ?to, "destination taken, moving a copy instead");
            let copy_name = self.copy(Some(name), None)?;
            self.move_entry(&copy_name, target_dir)?;
            fs::remove_file(&from)?;
            return Ok(());
        }

        fs::rename(&from, &to).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => OpError::NotFound("file or path not found error"),
            _ => e.into(),
        })?;
        debug!(from = ?from, to = ?to, "file moved");
        Ok(())
    }
}

fn is_symlink(path: &Path) -> bool {
    fs::symlink_metadata(path).is_ok_and(|meta| meta.file_type().is_symlink())
}

fn truncate(path: &Path) -> io::Result<()> {
    OpenOptions::new()
        .write(true)
        .truncate(true)
        .open(path)
        .map(drop)
}

fn count_lines(path: &Path) -> io::Result<usize> {
    let reader = BufReader::new(File::open(path)?);
    Ok(reader.split(b'\n').take_while(Result::is_ok).count())
}

fn same_file(a: &Path, b: &Path) -> io::Result<bool> {
    Ok(fs::canonicalize(a)? == fs::canonicalize(b)?)
}
