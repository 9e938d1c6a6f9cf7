use std::fs;
use std::io;
use std::path::{is_separator, Path, PathBuf};

use tracing::debug;

use super::{ask, entry_exists};
use crate::error::{OpError, OpResult};
use crate::input::Terminal;
use crate::path::{normalize, WorkingDir};

const CONFIRM_PROMPT: &str = "The folder is not empty. Are you sure you want to delete it? (Y/N): ";

/// Directory handlers.
pub struct DirOps<'a> {
    wd: &'a WorkingDir,
    term: &'a mut dyn Terminal,
}

impl<'a> DirOps<'a> {
    pub fn new(wd: &'a WorkingDir, term: &'a mut dyn Terminal) -> Self {
        Self { wd, term }
    }

    /// `list`: one name per line, in the order the host returns them. An
    /// unreadable directory lists as empty.
    pub fn list(&mut self) {
        let Ok(entries) = fs::read_dir(self.wd.cwd()) else {
            debug!(cwd = ?self.wd.cwd(), "cannot enumerate working directory");
            return;
        };

        for entry in entries.filter_map(Result::ok) {
            self.term.say(&entry.file_name().to_string_lossy());
        }
    }

    /// `make dir`
    pub fn make(&mut self, name: Option<&str>) -> OpResult<()> {
        let name = ask(self.term, name, "enter folder name: ");
        let path = self.wd.resolve(&name)?;

        if entry_exists(&path) {
            return Err(OpError::AlreadyExists("folder name already exists"));
        }
        fs::create_dir(&path)?;
        Ok(())
    }

    /// `delete dir`: removes the folder and everything below it. A
    /// non-empty folder needs confirmation unless `confirm` says otherwise
    /// (anything but an absent value or `n`).
    pub fn delete(&mut self, path: Option<&str>, confirm: Option<&str>) -> OpResult<()> {
        let path = ask(self.term, path, "enter path to folder to delete: ");

        let folder = if path.contains(is_separator) {
            let folder = self.wd.resolve(&path)?;
            let meta = fs::symlink_metadata(&folder)
                .map_err(|_| OpError::NotFound("The specified path does not exist."))?;
            if !meta.is_dir() {
                return Err(OpError::Refused(
                    "The specified path is not a directory.".to_string(),
                ));
            }
            folder
        } else {
            self.child_dir(&path).ok_or(OpError::NotFound(
                "The specified path does not exist or is not a directory.",
            ))?
        };

        self.guard_working_dir(&folder)?;
        self.remove_tree(&folder, confirm)
    }

    fn remove_tree(&mut self, folder: &Path, confirm: Option<&str>) -> OpResult<()> {
        let is_empty = fs::read_dir(folder)?.next().is_none();

        if !is_empty {
            let needs_prompt = match confirm {
                Some(answer) => answer.eq_ignore_ascii_case("n"),
                None => true,
            };
            if needs_prompt {
                let reply = self.term.read_line(CONFIRM_PROMPT);
                if !reply.trim().eq_ignore_ascii_case("y") {
                    return Err(OpError::Cancelled);
                }
            }

            for entry in fs::read_dir(folder)? {
                let entry = entry?;
                // file_type does not follow symlinks, so links are unlinked
                // rather than descended into
                if entry.file_type()?.is_dir() {
                    self.remove_tree(&entry.path(), confirm)?;
                } else {
                    fs::remove_file(entry.path())?;
                }
            }
        }

        fs::remove_dir(folder).map_err(|e| {
            debug!(path = ?folder, error = %e, "remove_dir failed");
            OpError::Refused(format!("Failed to delete the folder: {}", folder.display()))
        })?;
        debug!(path = ?folder, "folder deleted");
        Ok(())
    }

    /// `rename dir`: both names are taken relative to the working
    /// directory, and the new one must be free.
    pub fn rename(&mut self, old: Option<&str>, new: Option<&str>) -> OpResult<()> {
        let old = ask(self.term, old, "enter starting folder name: ");
        let from = self.wd.resolve(&old)?;
        if !from.is_dir() {
            return Err(OpError::NotFound(
                "Starting directory does not exist or is not a directory.",
            ));
        }

        let new = ask(self.term, new, "enter target folder name: ");
        let to = self.wd.resolve(&new)?;
        if entry_exists(&to) {
            return Err(OpError::AlreadyExists("Target name already exists."));
        }

        self.guard_working_dir(&from)?;
        fs::rename(&from, &to)?;
        debug!(from = ?from, to = ?to, "folder renamed");
        Ok(())
    }

    /// `move dir`: moves a child of the working directory, or a folder
    /// given by path, into `target`.
    pub fn move_to(&mut self, source: Option<&str>, target: Option<&str>) -> OpResult<()> {
        let source = ask(self.term, source, "enter starting path: ");

        let from = match self.child_dir(&source) {
            Some(path) => path,
            None if source.contains(is_separator) => {
                let path = normalize(&self.wd.resolve(&source)?);
                if !path.is_dir() {
                    return Err(OpError::NotFound(
                        "The specified starting path does not exist or is not a directory.",
                    ));
                }
                path
            }
            None => {
                return Err(OpError::Refused(
                    "Invalid starting path. Please provide a valid directory name or path."
                        .to_string(),
                ))
            }
        };

        let target = ask(self.term, target, "enter target path: ");
        let dir = self.wd.resolve(&target)?;
        let name = from
            .file_name()
            .ok_or_else(|| OpError::InvalidPath(source.clone()))?;
        let to = dir.join(name);

        if !dir.is_dir() {
            return Err(OpError::NotFound("path not found"));
        }
        if entry_exists(&to) {
            return Err(OpError::AlreadyExists("folder name already exist in path"));
        }

        self.guard_working_dir(&from)?;
        fs::rename(&from, &to).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => OpError::NotFound("path not found"),
            io::ErrorKind::AlreadyExists => {
                OpError::AlreadyExists("folder name already exist in path")
            }
            _ => e.into(),
        })?;
        debug!(from = ?from, to = ?to, "folder moved");
        Ok(())
    }

    /// A child directory of the working directory named exactly `name`.
    /// Symlinks and the `.`/`..` pseudo-entries never match.
    fn child_dir(&self, name: &str) -> Option<PathBuf> {
        fs::read_dir(self.wd.cwd())
            .ok()?
            .filter_map(Result::ok)
            .find(|entry| {
                entry.file_name() == name && entry.file_type().is_ok_and(|t| t.is_dir())
            })
            .map(|entry| entry.path())
    }

    /// The working directory must survive the operation.
    fn guard_working_dir(&self, folder: &Path) -> OpResult<()> {
        let (Ok(cwd), Ok(folder)) = (fs::canonicalize(self.wd.cwd()), fs::canonicalize(folder))
        else {
            return Ok(());
        };

        if cwd.starts_with(&folder) {
            return Err(OpError::Refused(
                "The current directory is inside that folder.".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::testing::{printed, scripted, TestConsole};
    use crate::path::SEPARATOR;
    use tempfile::TempDir;

    fn setup(lines: &[&str]) -> (TempDir, WorkingDir, TestConsole) {
        let temp = tempfile::tempdir().expect("tempdir");
        let wd = WorkingDir::new(temp.path());
        (temp, wd, scripted(lines))
    }

    fn build_tree(root: &Path) {
        let deep = root.join("a").join("b").join("c");
        fs::create_dir_all(&deep).expect("mkdir");
        fs::write(root.join("top.txt"), "t").expect("write");
        fs::write(root.join("a").join("mid.txt"), "m").expect("write");
        fs::write(deep.join("leaf.txt"), "l").expect("write");
    }

    #[test]
    fn test_list_prints_every_child() {
        let (temp, wd, mut term) = setup(&[]);
        fs::write(temp.path().join("one.txt"), "").expect("write");
        fs::create_dir(temp.path().join("two")).expect("mkdir");

        DirOps::new(&wd, &mut term).list();
        let out = printed(&term);
        let mut names: Vec<&str> = out.lines().collect();
        names.sort();
        assert_eq!(names, vec!["one.txt", "two"]);
    }

    #[test]
    fn test_list_unreadable_is_empty() {
        let (temp, _wd, mut term) = setup(&[]);
        let wd = WorkingDir::new(temp.path().join("gone"));
        DirOps::new(&wd, &mut term).list();
        assert_eq!(printed(&term), "");
    }

    #[test]
    fn test_make_and_make_again() {
        let (temp, wd, mut term) = setup(&[]);
        let mut ops = DirOps::new(&wd, &mut term);

        ops.make(Some("d")).expect("make");
        assert!(temp.path().join("d").is_dir());

        let err = ops.make(Some("d")).expect_err("exists");
        assert_eq!(err.to_string(), "folder name already exists");
    }

    #[test]
    fn test_make_prompts_for_name() {
        let (temp, wd, mut term) = setup(&["asked"]);
        DirOps::new(&wd, &mut term).make(None).expect("make");
        assert!(temp.path().join("asked").is_dir());
        assert_eq!(term.source().prompts(), ["enter folder name: "]);
    }

    #[test]
    fn test_delete_empty_without_prompt() {
        let (temp, wd, mut term) = setup(&[]);
        fs::create_dir(temp.path().join("d")).expect("mkdir");

        DirOps::new(&wd, &mut term)
            .delete(Some("d"), Some("n"))
            .expect("delete");
        assert!(!temp.path().join("d").exists());
        assert!(term.source().prompts().is_empty());
    }

    #[test]
    fn test_delete_tree_with_auto_confirm() {
        let (temp, wd, mut term) = setup(&[]);
        let root = temp.path().join("d");
        build_tree(&root);

        DirOps::new(&wd, &mut term)
            .delete(Some("d"), Some("y"))
            .expect("delete");
        assert!(!root.exists());
        assert!(term.source().prompts().is_empty());
    }

    #[test]
    fn test_delete_declined_leaves_tree() {
        let (temp, wd, mut term) = setup(&["n"]);
        let root = temp.path().join("d");
        fs::create_dir(&root).expect("mkdir");
        fs::write(root.join("x.txt"), "x").expect("write");

        let err = DirOps::new(&wd, &mut term)
            .delete(Some("d"), Some("n"))
            .expect_err("declined");
        assert!(matches!(err, OpError::Cancelled));
        assert_eq!(err.to_string(), "Deletion cancelled.");
        assert!(root.join("x.txt").is_file());
        assert_eq!(term.source().prompts(), [CONFIRM_PROMPT]);
    }

    #[test]
    fn test_delete_confirmed_interactively_at_every_level() {
        let (temp, wd, mut term) = setup(&["Y", "y", "y", "y"]);
        let root = temp.path().join("d");
        build_tree(&root);

        DirOps::new(&wd, &mut term)
            .delete(Some("d"), None)
            .expect("delete");
        assert!(!root.exists());
        // d, a, a/b and a/b/c are all non-empty
        assert_eq!(term.source().prompts().len(), 4);
    }

    #[test]
    fn test_delete_by_path() {
        let (temp, wd, mut term) = setup(&[]);
        fs::create_dir_all(temp.path().join("outer").join("inner")).expect("mkdir");

        let path = format!("outer{}inner", SEPARATOR);
        DirOps::new(&wd, &mut term)
            .delete(Some(&path), None)
            .expect("delete");
        assert!(!temp.path().join("outer").join("inner").exists());
        assert!(temp.path().join("outer").is_dir());
    }

    #[test]
    fn test_delete_by_path_errors() {
        let (temp, wd, mut term) = setup(&[]);
        fs::write(temp.path().join("f.txt"), "").expect("write");
        let mut ops = DirOps::new(&wd, &mut term);

        let missing = format!("nope{}deeper", SEPARATOR);
        let err = ops.delete(Some(&missing), None).expect_err("missing");
        assert_eq!(err.to_string(), "The specified path does not exist.");

        let file = temp.path().join("f.txt");
        let file = file.to_str().expect("utf-8 temp path");
        let err = ops.delete(Some(file), None).expect_err("a file");
        assert_eq!(err.to_string(), "The specified path is not a directory.");
    }

    #[test]
    fn test_delete_unknown_child() {
        let (temp, wd, mut term) = setup(&[]);
        fs::write(temp.path().join("f.txt"), "").expect("write");
        let mut ops = DirOps::new(&wd, &mut term);

        for name in ["missing", "f.txt", ".", ".."] {
            let err = ops.delete(Some(name), Some("y")).expect_err(name);
            assert_eq!(
                err.to_string(),
                "The specified path does not exist or is not a directory."
            );
        }
        assert!(temp.path().exists());
    }

    #[test]
    fn test_delete_refuses_ancestor_of_working_dir() {
        let temp = tempfile::tempdir().expect("tempdir");
        let inner = temp.path().join("outer").join("inner");
        fs::create_dir_all(&inner).expect("mkdir");
        let wd = WorkingDir::new(&inner);
        let mut term = scripted(&[]);

        let path = format!("..{}..{}outer", SEPARATOR, SEPARATOR);
        let err = DirOps::new(&wd, &mut term)
            .delete(Some(&path), Some("y"))
            .expect_err("ancestor");
        assert!(matches!(err, OpError::Refused(_)));
        assert!(inner.is_dir());
    }

    #[cfg(unix)]
    #[test]
    fn test_delete_does_not_follow_symlinks() {
        let (temp, wd, mut term) = setup(&[]);
        let outside = temp.path().join("outside");
        fs::create_dir(&outside).expect("mkdir");
        fs::write(outside.join("keep.txt"), "k").expect("write");

        let doomed = temp.path().join("doomed");
        fs::create_dir(&doomed).expect("mkdir");
        std::os::unix::fs::symlink(&outside, doomed.join("link")).expect("symlink");

        DirOps::new(&wd, &mut term)
            .delete(Some("doomed"), Some("y"))
            .expect("delete");
        assert!(!doomed.exists());
        assert!(outside.join("keep.txt").is_file());
    }

    #[test]
    fn test_rename() {
        let (temp, wd, mut term) = setup(&[]);
        fs::create_dir(temp.path().join("old")).expect("mkdir");
        fs::write(temp.path().join("old").join("f"), "x").expect("write");

        DirOps::new(&wd, &mut term)
            .rename(Some("old"), Some("new"))
            .expect("rename");
        assert!(!temp.path().join("old").exists());
        assert!(temp.path().join("new").join("f").is_file());
    }

    #[test]
    fn test_rename_errors() {
        let (temp, wd, mut term) = setup(&[]);
        fs::create_dir(temp.path().join("a")).expect("mkdir");
        fs::create_dir(temp.path().join("b")).expect("mkdir");
        let mut ops = DirOps::new(&wd, &mut term);

        let err = ops.rename(Some("missing"), Some("c")).expect_err("missing");
        assert_eq!(
            err.to_string(),
            "Starting directory does not exist or is not a directory."
        );

        let err = ops.rename(Some("a"), Some("b")).expect_err("taken");
        assert_eq!(err.to_string(), "Target name already exists.");
        assert!(temp.path().join("a").is_dir());
    }

    #[test]
    fn test_move_child_into_sibling() {
        let (temp, wd, mut term) = setup(&[]);
        fs::create_dir(temp.path().join("src")).expect("mkdir");
        fs::write(temp.path().join("src").join("f"), "x").expect("write");
        fs::create_dir(temp.path().join("dest")).expect("mkdir");

        DirOps::new(&wd, &mut term)
            .move_to(Some("src"), Some("dest"))
            .expect("move");
        assert!(!temp.path().join("src").exists());
        assert!(temp.path().join("dest").join("src").join("f").is_file());
    }

    #[test]
    fn test_move_by_absolute_path() {
        let (temp, wd, mut term) = setup(&[]);
        let source = temp.path().join("nested").join("src");
        fs::create_dir_all(&source).expect("mkdir");
        fs::create_dir(temp.path().join("dest")).expect("mkdir");

        let source_arg = source.to_str().expect("utf-8 temp path");
        DirOps::new(&wd, &mut term)
            .move_to(Some(source_arg), Some("dest"))
            .expect("move");
        assert!(temp.path().join("dest").join("src").is_dir());
        assert!(!source.exists());
    }

    #[test]
    fn test_move_errors() {
        let (temp, wd, mut term) = setup(&[]);
        fs::create_dir(temp.path().join("src")).expect("mkdir");
        fs::create_dir_all(temp.path().join("dest").join("src")).expect("mkdir");
        let mut ops = DirOps::new(&wd, &mut term);

        let err = ops.move_to(Some("nope"), Some("dest")).expect_err("bad source");
        assert_eq!(
            err.to_string(),
            "Invalid starting path. Please provide a valid directory name or path."
        );

        let missing = format!("nope{}deeper", SEPARATOR);
        let err = ops.move_to(Some(&missing), Some("dest")).expect_err("bad path");
        assert_eq!(
            err.to_string(),
            "The specified starting path does not exist or is not a directory."
        );

        let err = ops.move_to(Some("src"), Some("nowhere")).expect_err("no target");
        assert_eq!(err.to_string(), "path not found");

        let err = ops.move_to(Some("src"), Some("dest")).expect_err("taken");
        assert_eq!(err.to_string(), "folder name already exist in path");
        assert!(temp.path().join("src").is_dir());
    }
}
