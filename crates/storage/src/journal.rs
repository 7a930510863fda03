use signsense_events::{CommitSink, SignCommit};
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::{Result, StorageError};

/// Append-only text log of committed signs, one label per line.
///
/// The file handle is scoped to each append: opened, written, flushed, and
/// closed before the call returns.
#[derive(Debug, Clone)]
pub struct SignJournal {
    path: PathBuf,
}

impl SignJournal {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append one committed label.
    pub fn append(&self, label: &str) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        file.write_all(label.as_bytes())?;
        file.write_all(b"\n")?;
        file.flush()?;
        Ok(())
    }

    /// Labels currently in the journal, oldest first. A missing file reads
    /// as an empty journal.
    pub fn read_labels(&self) -> Result<Vec<String>> {
        match fs::read_to_string(&self.path) {
            Ok(contents) => Ok(contents.lines().map(str::to_string).collect()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Vec::new()),
            Err(e) => Err(StorageError::Io(e)),
        }
    }
}

impl CommitSink for SignJournal {
    type Error = StorageError;

    fn record(&self, commit: &SignCommit) -> Result<()> {
        self.append(&commit.label)
    }
}
