//! Append-only trace file with size-based rotation.
//!
//! When the live file grows past the configured size it is shifted to
//! `<file>.1`, existing backups move up by one (`.1` → `.2`, ...) and the
//! oldest one beyond the retention count is removed.

use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Rotation limits for a [`RotatingFile`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rotation {
    pub max_bytes: u64,
    pub backups: usize,
}

impl Default for Rotation {
    fn default() -> Self {
        Self {
            max_bytes: 10 * 1024 * 1024,
            backups: 3,
        }
    }
}

pub struct RotatingFile {
    path: PathBuf,
    rotation: Rotation,
    /// Opened on first write.
    handle: Mutex<Option<File>>,
}

impl RotatingFile {
    pub const fn new(path: PathBuf, rotation: Rotation) -> Self {
        Self {
            path,
            rotation,
            handle: Mutex::new(None),
        }
    }

    /// Appends `line` and a newline, rotating first if the file is full.
    pub fn append_line(&self, line: &str) -> io::Result<()> {
        let mut handle = self
            .handle
            .lock()
            .map_err(|e| io::Error::other(format!("trace file lock poisoned: {e}")))?;

        let full = fs::metadata(&self.path).is_ok_and(|m| m.len() >= self.rotation.max_bytes);
        if full {
            *handle = None;
            self.rotate()?;
        }

        let file = match handle.take() {
            Some(file) => file,
            None => OpenOptions::new().create(true).append(true).open(&self.path)?,
        };
        let file = handle.insert(file);

        writeln!(file, "{line}")?;
        file.flush()
    }

    fn backup(&self, index: usize) -> PathBuf {
        let mut name = self.path.as_os_str().to_os_string();
        name.push(format!(".{index}"));
        PathBuf::from(name)
    }

    fn rotate(&self) -> io::Result<()> {
        if self.rotation.backups == 0 {
            return remove_if_present(&self.path);
        }

        remove_if_present(&self.backup(self.rotation.backups))?;
        for index in (1..self.rotation.backups).rev() {
            let from = self.backup(index);
            if from.exists() {
                fs::rename(&from, self.backup(index + 1))?;
            }
        }
        fs::rename(&self.path, self.backup(1))
    }
}

fn remove_if_present(path: &Path) -> io::Result<()> {
    match fs::remove_file(path) {
        Err(e) if e.kind() != io::ErrorKind::NotFound => Err(e),
        _ => Ok(()),
    }
}

impl std::fmt::Debug for RotatingFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RotatingFile")
            .field("path", &self.path)
            .field("rotation", &self.rotation)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(path: &Path) -> Vec<String> {
        fs::read_to_string(path)
            .unwrap()
            .lines()
            .map(str::to_string)
            .collect()
    }

    #[test]
    fn appends_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("trace.json");
        let file = RotatingFile::new(path.clone(), Rotation::default());

        file.append_line("{\"a\":1}").unwrap();
        file.append_line("{\"b\":2}").unwrap();

        assert_eq!(lines(&path), ["{\"a\":1}", "{\"b\":2}"]);
    }

    #[test]
    fn rotates_and_keeps_newest_backups() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("trace.json");
        let file = RotatingFile::new(
            path.clone(),
            Rotation {
                max_bytes: 4,
                backups: 2,
            },
        );

        for line in ["one", "two", "three", "four"] {
            file.append_line(line).unwrap();
        }

        assert_eq!(lines(&path), ["four"]);
        assert_eq!(lines(&file.backup(1)), ["three"]);
        assert_eq!(lines(&file.backup(2)), ["two"]);
        assert!(!file.backup(3).exists());
    }

    #[test]
    fn zero_backups_truncates() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("trace.json");
        let file = RotatingFile::new(
            path.clone(),
            Rotation {
                max_bytes: 1,
                backups: 0,
            },
        );

        file.append_line("old").unwrap();
        file.append_line("new").unwrap();

        assert_eq!(lines(&path), ["new"]);
        assert!(!file.backup(1).exists());
    }
}
