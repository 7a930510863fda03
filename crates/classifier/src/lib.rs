//! Sign classification seam.
//!
//! The trained model is an opaque external collaborator: it receives the
//! normalized feature vector and returns a class-probability distribution.
//! This crate defines that contract plus the per-frame prediction types the
//! rest of the pipeline consumes.

mod labels;
mod model;

pub use labels::Sign;
pub use model::{is_available, model_path, models_dir};

use serde::{Deserialize, Serialize};
use signsense_landmarks::FEATURE_LEN;

#[derive(Debug, thiserror::Error)]
pub enum ClassifierError {
    #[error("model not loaded")]
    ModelNotLoaded,
    #[error("inference failed: {0}")]
    Inference(String),
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

pub type Result<T> = std::result::Result<T, ClassifierError>;

/// The top prediction for a single frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignPrediction {
    /// Predicted sign label.
    pub label: String,
    /// Class probability of that label, in [0, 1].
    pub confidence: f32,
}

impl SignPrediction {
    pub fn new(label: impl Into<String>, confidence: f32) -> Self {
        Self {
            label: label.into(),
            confidence,
        }
    }

    /// Whether the prediction clears the confidence gate. The gate is strict:
    /// a probability exactly at the threshold does not count.
    pub fn is_confident(&self, threshold: f32) -> bool {
        self.confidence > threshold
    }
}

/// Full class-probability distribution for one feature vector.
#[derive(Debug, Clone)]
pub struct SignScores {
    labels: Vec<String>,
    probabilities: Vec<f32>,
}

impl SignScores {
    /// Pair up labels with their probabilities. Lengths must match.
    pub fn new(labels: Vec<String>, probabilities: Vec<f32>) -> Result<Self> {
        if labels.len() != probabilities.len() {
            return Err(ClassifierError::InvalidInput(format!(
                "{} labels vs {} probabilities",
                labels.len(),
                probabilities.len()
            )));
        }
        Ok(Self {
            labels,
            probabilities,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// The arg-max class and its probability.
    pub fn top(&self) -> Option<(&str, f32)> {
        self.probabilities
            .iter()
            .enumerate()
            .max_by(|(_, a), (_, b)| a.total_cmp(b))
            .map(|(i, p)| (self.labels[i].as_str(), *p))
    }

    /// The arg-max as a [`SignPrediction`], if any class is present.
    pub fn top_prediction(&self) -> Option<SignPrediction> {
        self.top()
            .map(|(label, confidence)| SignPrediction::new(label, confidence))
    }
}

/// Trained sign classifier over normalized landmark features.
pub trait SignClassifier: Send + Sync {
    fn name(&self) -> &'static str;

    /// Score one feature vector. See
    /// [`signsense_landmarks::feature_vector`] for the input layout.
    fn scores(&self, features: &[f32; FEATURE_LEN]) -> Result<SignScores>;
}
