//! Classifier input features computed from hand landmarks.
//!
//! The transform matches the one the classifier was trained against: every
//! landmark is shifted by the hand's minimum y/x and the result is flattened
//! in (y, x) interleaved order.

use crate::{HandLandmarks, NUM_LANDMARKS};

/// Length of the classifier input vector (two values per landmark).
pub const FEATURE_LEN: usize = NUM_LANDMARKS * 2;

/// Compute the normalized feature vector for one hand.
///
/// Output layout: `[y0 - min_y, x0 - min_x, y1 - min_y, x1 - min_x, ...]`.
/// The ordering is part of the classifier contract and must not change.
pub fn feature_vector(hand: &HandLandmarks) -> [f32; FEATURE_LEN] {
    let (min_x, min_y) = hand.min_corner();
    let mut out = [0.0f32; FEATURE_LEN];
    for (i, p) in hand.points().iter().enumerate() {
        out[2 * i] = p.y - min_y;
        out[2 * i + 1] = p.x - min_x;
    }
    out
}

/// Axis-aligned box in pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelBox {
    pub x1: i32,
    pub y1: i32,
    pub x2: i32,
    pub y2: i32,
}

/// Landmark extent scaled to a `width` x `height` frame, grown by `margin`
/// pixels on every side.
pub(crate) fn bounding_box(hand: &HandLandmarks, width: u32, height: u32, margin: i32) -> PixelBox {
    let (min_x, min_y) = hand.min_corner();
    let (max_x, max_y) = hand.max_corner();
    PixelBox {
        x1: (min_x * width as f32) as i32 - margin,
        y1: (min_y * height as f32) as i32 - margin,
        x2: (max_x * width as f32) as i32 + margin,
        y2: (max_y * height as f32) as i32 + margin,
    }
}
