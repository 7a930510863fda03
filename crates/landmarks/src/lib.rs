//! Hand-landmark data model and the detector seam.
//!
//! The actual landmark extraction model is an external collaborator; this
//! crate defines the per-frame contract it must satisfy and the pure feature
//! transform applied to its output.

mod features;

pub use features::{feature_vector, PixelBox, FEATURE_LEN};

use serde::{Deserialize, Serialize};

/// Number of landmarks the hand model reports per detected hand.
pub const NUM_LANDMARKS: usize = 21;

#[derive(Debug, thiserror::Error)]
pub enum LandmarkError {
    #[error("expected {NUM_LANDMARKS} landmarks, got {0}")]
    WrongLandmarkCount(usize),
    #[error("detector failure: {0}")]
    Detector(String),
}

pub type Result<T> = std::result::Result<T, LandmarkError>;

/// A single landmark in normalized image coordinates ([0, 1] on both axes).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HandLandmark {
    pub x: f32,
    pub y: f32,
}

/// One detected hand: a fixed set of [`NUM_LANDMARKS`] normalized points.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HandLandmarks {
    points: [HandLandmark; NUM_LANDMARKS],
}

impl HandLandmarks {
    pub fn new(points: [HandLandmark; NUM_LANDMARKS]) -> Self {
        Self { points }
    }

    /// Build from a slice, rejecting anything but exactly [`NUM_LANDMARKS`]
    /// points.
    pub fn from_slice(points: &[HandLandmark]) -> Result<Self> {
        let points: [HandLandmark; NUM_LANDMARKS] = points
            .try_into()
            .map_err(|_| LandmarkError::WrongLandmarkCount(points.len()))?;
        Ok(Self { points })
    }

    pub fn points(&self) -> &[HandLandmark; NUM_LANDMARKS] {
        &self.points
    }

    /// Minimum (x, y) over all landmarks.
    pub fn min_corner(&self) -> (f32, f32) {
        self.points.iter().fold((f32::INFINITY, f32::INFINITY), |(mx, my), p| {
            (mx.min(p.x), my.min(p.y))
        })
    }

    /// Maximum (x, y) over all landmarks.
    pub fn max_corner(&self) -> (f32, f32) {
        self.points
            .iter()
            .fold((f32::NEG_INFINITY, f32::NEG_INFINITY), |(mx, my), p| {
                (mx.max(p.x), my.max(p.y))
            })
    }

    /// Classifier input features for this hand. See [`feature_vector`].
    pub fn feature_vector(&self) -> [f32; FEATURE_LEN] {
        feature_vector(self)
    }

    /// Pixel-space bounding box of the hand in a `width` x `height` frame,
    /// expanded by `margin` pixels on every side.
    pub fn bounding_box(&self, width: u32, height: u32, margin: i32) -> PixelBox {
        features::bounding_box(self, width, height, margin)
    }
}

/// One camera frame's detection result.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Detection {
    /// Landmarks of the tracked hand, if one was found in the frame.
    pub hand: Option<HandLandmarks>,
    /// Frame timestamp in milliseconds on the session clock.
    pub t_ms: u64,
}

/// Per-frame source of hand detections.
///
/// Implemented over the external landmark model in live mode and over
/// recorded fixtures in tests.
pub trait HandDetector: Send {
    fn name(&self) -> &'static str;

    /// Pull the next frame's detection. `None` means the stream is exhausted.
    fn next_detection(&mut self) -> Result<Option<Detection>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spread_hand() -> HandLandmarks {
        let mut points = [HandLandmark { x: 0.5, y: 0.5 }; NUM_LANDMARKS];
        points[0] = HandLandmark { x: 0.2, y: 0.3 };
        points[1] = HandLandmark { x: 0.8, y: 0.7 };
        HandLandmarks::new(points)
    }

    #[test]
    fn test_from_slice_wrong_count() {
        let points = vec![HandLandmark { x: 0.0, y: 0.0 }; 5];
        let result = HandLandmarks::from_slice(&points);
        assert!(matches!(result, Err(LandmarkError::WrongLandmarkCount(5))));
    }

    #[test]
    fn test_from_slice_exact_count() {
        let points = vec![HandLandmark { x: 0.1, y: 0.2 }; NUM_LANDMARKS];
        let hand = HandLandmarks::from_slice(&points).unwrap();
        assert_eq!(hand.points().len(), NUM_LANDMARKS);
    }

    #[test]
    fn test_corners() {
        let hand = spread_hand();
        assert_eq!(hand.min_corner(), (0.2, 0.3));
        assert_eq!(hand.max_corner(), (0.8, 0.7));
    }

    #[test]
    fn test_serde_roundtrip() {
        let hand = spread_hand();
        let json = serde_json::to_string(&hand).unwrap();
        let back: HandLandmarks = serde_json::from_str(&json).unwrap();
        assert_eq!(back, hand);
    }
}
