//! Temporal stabilization of per-frame sign predictions.
//!
//! Raw classifier output flips freely from frame to frame. The stabilizer
//! turns that stream into discrete commits: a label must stay the top
//! prediction for a full dwell window before it is recorded, and losing the
//! hand (or the confidence gate) at any point drops straight back to idle.

use serde::{Deserialize, Serialize};
use signsense_classifier::SignPrediction;
use signsense_events::SignCommit;

use crate::constants::{CONFIDENCE_THRESHOLD, DWELL_DURATION_MS, MESSAGE_DURATION_MS};

/// Tuning knobs for the stabilizer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StabilizerConfig {
    /// Continuous hold (ms) required before a candidate commits.
    pub dwell_ms: u64,
    /// Lifetime (ms) of the recorded-confirmation message.
    pub message_ms: u64,
    /// Strict lower bound on class probability for a prediction to count.
    pub confidence_threshold: f32,
}

impl Default for StabilizerConfig {
    fn default() -> Self {
        Self {
            dwell_ms: DWELL_DURATION_MS,
            message_ms: MESSAGE_DURATION_MS,
            confidence_threshold: CONFIDENCE_THRESHOLD,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum StabilizerError {
    #[error("confidence {0} outside [0, 1]")]
    InvalidConfidence(f32),
}

/// What one `update` call produced.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StabilizerOutput {
    /// Transient message to overlay, if one is active.
    pub display_message: Option<String>,
    /// Commit fired by this frame, if the dwell threshold was crossed.
    pub commit: Option<SignCommit>,
}

#[derive(Debug)]
struct Candidate {
    label: String,
    since_ms: u64,
}

#[derive(Debug)]
struct Message {
    text: String,
    since_ms: u64,
}

/// Per-frame debounce state machine. One instance per tracked stream; the
/// caller owns it and feeds it every frame in order.
#[derive(Debug, Default)]
pub struct Stabilizer {
    config: StabilizerConfig,
    candidate: Option<Candidate>,
    message: Option<Message>,
}

impl Stabilizer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: StabilizerConfig) -> Self {
        Self {
            config,
            candidate: None,
            message: None,
        }
    }

    pub fn config(&self) -> StabilizerConfig {
        self.config
    }

    /// Label currently accumulating dwell time, if any.
    pub fn candidate_label(&self) -> Option<&str> {
        self.candidate.as_ref().map(|c| c.label.as_str())
    }

    /// Advance the state machine by one frame.
    ///
    /// `now_ms` is the frame timestamp on the session clock; frames must
    /// arrive in order. A prediction below the confidence gate is treated
    /// exactly like an absent hand: all state is dropped, including an active
    /// message, even mid-dwell for the same label.
    pub fn update(
        &mut self,
        prediction: Option<&SignPrediction>,
        now_ms: u64,
    ) -> Result<StabilizerOutput, StabilizerError> {
        if let Some(p) = prediction {
            if !(0.0..=1.0).contains(&p.confidence) {
                return Err(StabilizerError::InvalidConfidence(p.confidence));
            }
        }

        let Some(p) = prediction
            .filter(|p| !p.label.is_empty() && p.is_confident(self.config.confidence_threshold))
        else {
            self.candidate = None;
            self.message = None;
            return Ok(StabilizerOutput::default());
        };

        let mut commit = None;
        match &self.candidate {
            Some(c) if c.label == p.label => {
                if now_ms.saturating_sub(c.since_ms) >= self.config.dwell_ms {
                    tracing::debug!(label = %p.label, ts_ms = now_ms, "dwell reached, committing");
                    commit = Some(SignCommit::new(p.label.clone(), now_ms));
                    self.message = Some(Message {
                        text: format!("Character Recorded: {}", p.label),
                        since_ms: now_ms,
                    });
                    self.candidate = None;
                }
            }
            _ => {
                // New or changed label restarts the dwell timer.
                self.candidate = Some(Candidate {
                    label: p.label.clone(),
                    since_ms: now_ms,
                });
            }
        }

        let display_message = match &self.message {
            Some(m) if now_ms.saturating_sub(m.since_ms) < self.config.message_ms => {
                Some(m.text.clone())
            }
            Some(_) => {
                self.message = None;
                None
            }
            None => None,
        };

        Ok(StabilizerOutput {
            display_message,
            commit,
        })
    }

    /// Drop all pending state.
    pub fn reset(&mut self) {
        self.candidate = None;
        self.message = None;
    }
}
