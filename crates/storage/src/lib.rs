//! Persistence for committed signs.
//!
//! Two backends, both implementing [`CommitSink`]: the plain-text journal
//! (the canonical output log, one label per line) and a SQLite history
//! database for queryable sessions.

mod journal;

pub use journal::SignJournal;

use chrono::Utc;
use rusqlite::Connection;
use signsense_events::{CommitSink, SignCommit};
use std::path::Path;
use std::sync::Mutex;
use uuid::Uuid;

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),
    #[error("not found: {0}")]
    NotFound(String),
}

pub type Result<T> = std::result::Result<T, StorageError>;

/// A commit row as stored in the history database.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedCommit {
    pub id: String,
    pub label: String,
    /// Session-clock timestamp carried from the pipeline.
    pub ts_ms: u64,
    /// Wall-clock insert time, ms since epoch.
    pub recorded_at: i64,
}

pub struct Database {
    conn: Mutex<Connection>,
}

impl Database {
    pub fn open(path: &Path) -> Result<Self> {
        let conn = Connection::open(path)?;
        let db = Self {
            conn: Mutex::new(conn),
        };
        db.init_schema()?;
        Ok(db)
    }

    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let db = Self {
            conn: Mutex::new(conn),
        };
        db.init_schema()?;
        Ok(db)
    }

    fn init_schema(&self) -> Result<()> {
        let conn = self.conn.lock().expect("database mutex poisoned");
        conn.execute_batch(
            r#"
            CREATE TABLE IF NOT EXISTS commits (
                id TEXT PRIMARY KEY,
                label TEXT NOT NULL,
                ts_ms INTEGER NOT NULL,
                recorded_at INTEGER NOT NULL
            );

            CREATE INDEX IF NOT EXISTS idx_commits_recorded_at ON commits(recorded_at DESC);
            "#,
        )?;
        Ok(())
    }

    pub fn record_commit(&self, commit: &SignCommit) -> Result<RecordedCommit> {
        let row = RecordedCommit {
            id: Uuid::new_v4().to_string(),
            label: commit.label.clone(),
            ts_ms: commit.ts_ms,
            recorded_at: Utc::now().timestamp_millis(),
        };
        let conn = self.conn.lock().expect("database mutex poisoned");
        conn.execute(
            "INSERT INTO commits (id, label, ts_ms, recorded_at) VALUES (?1, ?2, ?3, ?4)",
            (&row.id, &row.label, row.ts_ms as i64, row.recorded_at),
        )?;
        tracing::debug!(label = %row.label, id = %row.id, "commit recorded");
        Ok(row)
    }

    /// Most recent commits first, capped at `limit`.
    pub fn list_commits(&self, limit: usize) -> Result<Vec<RecordedCommit>> {
        let conn = self.conn.lock().expect("database mutex poisoned");
        let mut stmt = conn.prepare(
            "SELECT id, label, ts_ms, recorded_at FROM commits
             ORDER BY recorded_at DESC, rowid DESC LIMIT ?1",
        )?;
        let rows = stmt.query_map([limit as i64], |row| {
            Ok(RecordedCommit {
                id: row.get(0)?,
                label: row.get(1)?,
                ts_ms: row.get::<_, i64>(2)? as u64,
                recorded_at: row.get(3)?,
            })
        })?;

        let mut commits = Vec::new();
        for row in rows {
            commits.push(row?);
        }
        Ok(commits)
    }

    pub fn count_commits(&self) -> Result<usize> {
        let conn = self.conn.lock().expect("database mutex poisoned");
        let count: i64 = conn.query_row("SELECT COUNT(*) FROM commits", [], |row| row.get(0))?;
        Ok(count as usize)
    }

    pub fn delete_commit(&self, id: &str) -> Result<()> {
        let conn = self.conn.lock().expect("database mutex poisoned");
        let affected = conn.execute("DELETE FROM commits WHERE id = ?1", [id])?;
        if affected == 0 {
            return Err(StorageError::NotFound(format!("commit {id}")));
        }
        Ok(())
    }

    pub fn clear_commits(&self) -> Result<()> {
        let conn = self.conn.lock().expect("database mutex poisoned");
        conn.execute("DELETE FROM commits", [])?;
        Ok(())
    }
}

impl CommitSink for Database {
    type Error = StorageError;

    fn record(&self, commit: &SignCommit) -> Result<()> {
        self.record_commit(commit).map(|_| ())
    }
}
