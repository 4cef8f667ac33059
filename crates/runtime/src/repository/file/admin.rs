//! Append-only admin log file.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::repository::{AdminLog, RepositoryError, Result};

/// One entry per line. Line breaks inside a message are flattened to spaces.
pub struct FileAdminLog {
    path: PathBuf,
    writer: Mutex<()>,
}

impl FileAdminLog {
    pub fn new(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        Ok(Self {
            path,
            writer: Mutex::new(()),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl AdminLog for FileAdminLog {
    fn append(&self, message: &str) -> Result<()> {
        let _guard = self.writer.lock().map_err(|_| RepositoryError::LockPoisoned)?;

        let line = message.replace(['\r', '\n'], " ");
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        writeln!(file, "{line}")?;
        Ok(())
    }

    fn entries(&self) -> Result<Vec<String>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(&self.path)?;
        Ok(content.lines().map(str::to_owned).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_append_and_read_back() {
        let dir = tempfile::tempdir().unwrap();
        let log = FileAdminLog::new(dir.path().join("logs/admin.log")).unwrap();
        assert!(log.entries().unwrap().is_empty());

        log.append("battle started: 1").unwrap();
        log.append("Battle 1\nlogged").unwrap();

        let reopened = FileAdminLog::new(log.path()).unwrap();
        assert_eq!(
            reopened.entries().unwrap(),
            vec!["battle started: 1", "Battle 1 logged"]
        );
    }
}
