//! Per-frame recognition pipeline, from hand landmarks to committed signs.
//!
//! Owns the classifier seam and the stabilizer state and exposes a single
//! entry point per frame. One caller owns the pipeline and feeds it frames
//! in order from a blocking acquisition loop.

mod overlay;
mod stabilizer;

pub use overlay::{build_overlay, OverlayText};
pub use stabilizer::{Stabilizer, StabilizerConfig, StabilizerError, StabilizerOutput};

use std::sync::Arc;

use signsense_classifier::{ClassifierError, SignClassifier, SignPrediction};
use signsense_events::{event_names, EventBusRef, NullEventBus, SignCommit};
use signsense_landmarks::{HandDetector, HandLandmarks, LandmarkError};

#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("landmark error: {0}")]
    Landmark(#[from] LandmarkError),
    #[error("classifier error: {0}")]
    Classifier(#[from] ClassifierError),
    #[error("stabilizer error: {0}")]
    Stabilizer(#[from] StabilizerError),
}

/// Everything one frame produced, for rendering and persistence.
#[derive(Debug, Clone)]
pub struct FrameOutcome {
    /// Top classifier prediction for the frame, before the confidence gate.
    pub prediction: Option<SignPrediction>,
    /// Transient confirmation message, if active.
    pub display_message: Option<String>,
    /// Commit fired by this frame.
    pub commit: Option<SignCommit>,
}

/// Frame-by-frame recognition pipeline.
pub struct SignPipeline {
    classifier: Box<dyn SignClassifier>,
    stabilizer: Stabilizer,
    bus: EventBusRef,
    hand_present: bool,
}

impl SignPipeline {
    pub fn new(classifier: Box<dyn SignClassifier>) -> Self {
        Self::with_bus(classifier, Arc::new(NullEventBus))
    }

    pub fn with_bus(classifier: Box<dyn SignClassifier>, bus: EventBusRef) -> Self {
        Self {
            classifier,
            stabilizer: Stabilizer::new(),
            bus,
            hand_present: false,
        }
    }

    pub fn set_stabilizer_config(&mut self, config: StabilizerConfig) {
        self.stabilizer = Stabilizer::with_config(config);
    }

    pub fn stabilizer_config(&self) -> StabilizerConfig {
        self.stabilizer.config()
    }

    /// Process one frame's detection.
    pub fn process_frame(
        &mut self,
        hand: Option<&HandLandmarks>,
        now_ms: u64,
    ) -> Result<FrameOutcome, PipelineError> {
        let prediction = match hand {
            Some(hand) => {
                let features = hand.feature_vector();
                self.classifier.scores(&features)?.top_prediction()
            }
            None => None,
        };
        self.process_prediction(prediction, now_ms)
    }

    /// Tail of the pipeline, for callers that already hold predictions
    /// (e.g. replaying a recorded stream).
    pub fn process_prediction(
        &mut self,
        prediction: Option<SignPrediction>,
        now_ms: u64,
    ) -> Result<FrameOutcome, PipelineError> {
        let out = self.stabilizer.update(prediction.as_ref(), now_ms)?;

        let threshold = self.stabilizer.config().confidence_threshold;
        let present = prediction
            .as_ref()
            .map(|p| !p.label.is_empty() && p.is_confident(threshold))
            .unwrap_or(false);
        if self.hand_present && !present {
            self.bus
                .emit(event_names::HAND_LOST, serde_json::json!({ "ts_ms": now_ms }));
        }
        self.hand_present = present;

        if let Some(commit) = &out.commit {
            self.bus.emit(
                event_names::SIGN_COMMITTED,
                serde_json::json!({ "label": commit.label, "ts_ms": commit.ts_ms }),
            );
        }

        Ok(FrameOutcome {
            prediction,
            display_message: out.display_message,
            commit: out.commit,
        })
    }

    /// Blocking acquisition loop: pull detections until the source is
    /// exhausted, handing each outcome to `on_frame`.
    pub fn run<D, F>(&mut self, detector: &mut D, mut on_frame: F) -> Result<(), PipelineError>
    where
        D: HandDetector,
        F: FnMut(&FrameOutcome),
    {
        tracing::info!(detector = detector.name(), "starting frame loop");
        while let Some(detection) = detector.next_detection()? {
            let outcome = self.process_frame(detection.hand.as_ref(), detection.t_ms)?;
            on_frame(&outcome);
        }
        Ok(())
    }

    /// Reset stabilizer state for a fresh session.
    pub fn reset(&mut self) {
        self.stabilizer.reset();
        self.hand_present = false;
    }
}
