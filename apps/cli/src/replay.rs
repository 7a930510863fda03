//! Replay a recorded prediction stream through the stabilizer.
//!
//! The headless counterpart of the live camera viewer: the landmark model
//! and classifier already ran when the stream was recorded, so each line
//! carries a frame timestamp plus the top prediction, if any.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use anyhow::Context;
use serde::Deserialize;
use signsense_application::Stabilizer;
use signsense_classifier::SignPrediction;
use signsense_events::{event_names, CommitSink, EventBus};
use signsense_storage::{Database, SignJournal};

/// One line of the replay file.
#[derive(Debug, Deserialize)]
struct FrameRecord {
    /// Frame timestamp (ms) on the session clock.
    t_ms: u64,
    /// Predicted label; absent or empty means no hand in the frame.
    #[serde(default)]
    label: Option<String>,
    /// Class probability of the label.
    #[serde(default)]
    confidence: Option<f32>,
}

impl FrameRecord {
    fn prediction(&self) -> Option<SignPrediction> {
        match self.label.as_deref() {
            Some(label) if !label.is_empty() => {
                Some(SignPrediction::new(label, self.confidence.unwrap_or(1.0)))
            }
            _ => None,
        }
    }
}

/// Bus that narrates emissions through tracing, for headless runs.
struct LogEventBus;

impl EventBus for LogEventBus {
    fn emit(&self, topic: &str, payload: serde_json::Value) {
        tracing::info!(topic, %payload, "event");
    }
}

pub fn run(input: &Path, journal_path: &Path, db_path: Option<&Path>) -> anyhow::Result<()> {
    let file = File::open(input).with_context(|| format!("opening {}", input.display()))?;
    let journal = SignJournal::new(journal_path);
    let db = db_path.map(|p| Database::open(p)).transpose()?;
    let bus = LogEventBus;

    let mut stabilizer = Stabilizer::new();
    let mut frames = 0usize;
    let mut commits = 0usize;

    for (lineno, line) in BufReader::new(file).lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let record: FrameRecord = serde_json::from_str(&line)
            .with_context(|| format!("bad frame record on line {}", lineno + 1))?;
        let prediction = record.prediction();
        let out = stabilizer.update(prediction.as_ref(), record.t_ms)?;
        frames += 1;

        if let Some(message) = &out.display_message {
            tracing::debug!(t_ms = record.t_ms, message = %message, "overlay message active");
        }
        if let Some(commit) = out.commit {
            journal.record(&commit)?;
            if let Some(db) = &db {
                db.record(&commit)?;
            }
            bus.emit(
                event_names::SIGN_COMMITTED,
                serde_json::json!({ "label": commit.label, "ts_ms": commit.ts_ms }),
            );
            println!("{:>8.1}s  {}", commit.ts_ms as f64 / 1000.0, commit.label);
            commits += 1;
        }
    }

    tracing::info!(
        frames,
        commits,
        journal = %journal_path.display(),
        "replay finished"
    );
    Ok(())
}
