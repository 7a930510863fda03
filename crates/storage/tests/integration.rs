//! Integration tests for the storage crate.
//!
//! Journal tests go through real files; database tests use in-memory SQLite
//! except where persistence across reopen is the point.

use signsense_events::{CommitSink, SignCommit};
use signsense_storage::{Database, SignJournal, StorageError};
use tempfile::tempdir;

fn commit(label: &str, ts_ms: u64) -> SignCommit {
    SignCommit::new(label, ts_ms)
}

mod journal {
    use super::*;

    #[test]
    fn test_append_writes_one_label_per_line() {
        let dir = tempdir().unwrap();
        let journal = SignJournal::new(dir.path().join("signs.txt"));

        journal.append("Hello").unwrap();
        journal.append("Yes").unwrap();

        let contents = std::fs::read_to_string(journal.path()).unwrap();
        assert_eq!(contents, "Hello\nYes\n");
    }

    #[test]
    fn test_append_creates_parent_directory() {
        let dir = tempdir().unwrap();
        let journal = SignJournal::new(dir.path().join("logs").join("signs.txt"));

        journal.append("Wow").unwrap();
        assert_eq!(journal.read_labels().unwrap(), vec!["Wow"]);
    }

    #[test]
    fn test_missing_file_reads_empty() {
        let dir = tempdir().unwrap();
        let journal = SignJournal::new(dir.path().join("absent.txt"));
        assert!(journal.read_labels().unwrap().is_empty());
    }

    #[test]
    fn test_appends_survive_reopen() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("signs.txt");

        SignJournal::new(&path).append("Hello").unwrap();
        SignJournal::new(&path).append("No").unwrap();

        let labels = SignJournal::new(&path).read_labels().unwrap();
        assert_eq!(labels, vec!["Hello", "No"]);
    }

    #[test]
    fn test_commit_sink_records_label() {
        let dir = tempdir().unwrap();
        let journal = SignJournal::new(dir.path().join("signs.txt"));

        journal.record(&commit("I Love You", 3_000)).unwrap();

        assert_eq!(journal.read_labels().unwrap(), vec!["I Love You"]);
    }
}

mod database {
    use super::*;

    fn create_test_db() -> Database {
        Database::open_in_memory().expect("failed to create in-memory database")
    }

    #[test]
    fn test_record_and_list() {
        let db = create_test_db();
        let row = db.record_commit(&commit("Hello", 3_100)).unwrap();

        let commits = db.list_commits(10).unwrap();
        assert_eq!(commits.len(), 1);
        assert_eq!(commits[0].id, row.id);
        assert_eq!(commits[0].label, "Hello");
        assert_eq!(commits[0].ts_ms, 3_100);
    }

    #[test]
    fn test_list_empty() {
        let db = create_test_db();
        assert!(db.list_commits(10).unwrap().is_empty());
    }

    #[test]
    fn test_list_newest_first() {
        let db = create_test_db();
        for label in ["Hello", "Yes", "No"] {
            db.record_commit(&commit(label, 0)).unwrap();
        }

        let commits = db.list_commits(10).unwrap();
        let labels: Vec<&str> = commits.iter().map(|c| c.label.as_str()).collect();
        assert_eq!(labels, vec!["No", "Yes", "Hello"]);
    }

    #[test]
    fn test_list_respects_limit() {
        let db = create_test_db();
        for i in 0..5 {
            db.record_commit(&commit("Yes", i * 1_000)).unwrap();
        }
        assert_eq!(db.list_commits(3).unwrap().len(), 3);
    }

    #[test]
    fn test_count() {
        let db = create_test_db();
        assert_eq!(db.count_commits().unwrap(), 0);
        db.record_commit(&commit("Wow", 0)).unwrap();
        db.record_commit(&commit("Wow", 5_000)).unwrap();
        assert_eq!(db.count_commits().unwrap(), 2);
    }

    #[test]
    fn test_delete() {
        let db = create_test_db();
        let row = db.record_commit(&commit("Hello", 0)).unwrap();

        db.delete_commit(&row.id).unwrap();
        assert_eq!(db.count_commits().unwrap(), 0);
    }

    #[test]
    fn test_delete_nonexistent() {
        let db = create_test_db();
        let result = db.delete_commit("no-such-id");
        assert!(matches!(result, Err(StorageError::NotFound(_))));
    }

    #[test]
    fn test_clear() {
        let db = create_test_db();
        for _ in 0..4 {
            db.record_commit(&commit("No", 0)).unwrap();
        }
        db.clear_commits().unwrap();
        assert!(db.list_commits(10).unwrap().is_empty());
    }

    #[test]
    fn test_commits_survive_reopen() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("history.db");

        {
            let db = Database::open(&path).unwrap();
            db.record_commit(&commit("Hello", 1_000)).unwrap();
        }

        let db = Database::open(&path).unwrap();
        let commits = db.list_commits(10).unwrap();
        assert_eq!(commits.len(), 1);
        assert_eq!(commits[0].label, "Hello");
    }

    #[test]
    fn test_commit_sink_impl() {
        let db = create_test_db();
        db.record(&commit("Yes", 4_500)).unwrap();
        assert_eq!(db.count_commits().unwrap(), 1);
    }
}

/// Both sinks behind the same seam, the way the replay loop uses them.
#[test]
fn test_sinks_are_interchangeable() {
    fn persist<S: CommitSink>(sink: &S, c: &SignCommit) -> Result<(), S::Error> {
        sink.record(c)
    }

    let dir = tempdir().unwrap();
    let journal = SignJournal::new(dir.path().join("signs.txt"));
    let db = Database::open_in_memory().unwrap();

    let c = commit("Hello", 3_000);
    persist(&journal, &c).unwrap();
    persist(&db, &c).unwrap();

    assert_eq!(journal.read_labels().unwrap(), vec!["Hello"]);
    assert_eq!(db.count_commits().unwrap(), 1);
}
