//! Shared event contracts between the pipeline and its frontends.
//!
//! Defining the DTOs in one crate keeps producers and consumers from
//! drifting apart on field names. Also provides the `EventBus` trait for
//! decoupled event emission and the `CommitSink` seam for persistence.

mod bus;

pub use bus::{EmittedEvent, EventBus, EventBusRef, InMemoryEventBus, NullEventBus};

use serde::{Deserialize, Serialize};

/// A finalized sign: the candidate label held through the full dwell window.
///
/// Producers: the gesture stabilizer.
/// Consumers: the journal, the history database, any frontend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignCommit {
    /// Committed sign label.
    pub label: String,
    /// Session-clock timestamp (ms) of the frame that crossed the dwell
    /// threshold.
    pub ts_ms: u64,
}

impl SignCommit {
    pub fn new(label: impl Into<String>, ts_ms: u64) -> Self {
        Self {
            label: label.into(),
            ts_ms,
        }
    }
}

/// Persistence seam for commits.
///
/// Implemented by the storage layer so the pipeline stays decoupled from any
/// particular backing store.
pub trait CommitSink: Send {
    type Error: std::error::Error + Send + Sync + 'static;

    fn record(&self, commit: &SignCommit) -> Result<(), Self::Error>;
}

/// Event names as constants to prevent typos.
pub mod event_names {
    /// A sign was committed.
    pub const SIGN_COMMITTED: &str = "sign:committed";
    /// The tracked hand left the frame (stabilizer reset to idle).
    pub const HAND_LOST: &str = "sign:hand_lost";
}
