//! Overlay text instructions for the surrounding viewer.
//!
//! The pipeline stays rendering-agnostic: it only says what to draw and
//! where, in frame pixel coordinates.

use signsense_landmarks::PixelBox;

use super::FrameOutcome;

/// Fixed position of the exit hint.
const EXIT_HINT_POS: (i32, i32) = (100, 50);
/// Fixed position of the recorded-confirmation message.
const MESSAGE_POS: (i32, i32) = (100, 100);
/// Vertical offset of the label above the hand box.
const LABEL_OFFSET_PX: i32 = 10;

pub const EXIT_HINT: &str = "Press q to exit!";

/// One piece of text to draw at a pixel position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverlayText {
    pub text: String,
    pub x: i32,
    pub y: i32,
}

impl OverlayText {
    fn new(text: impl Into<String>, (x, y): (i32, i32)) -> Self {
        Self {
            text: text.into(),
            x,
            y,
        }
    }
}

/// Build the overlay for one frame.
///
/// `hand_box` is the pixel bounding box of the detected hand, when there is
/// one; the predicted label (or "Inconclusive" below the gate) is anchored
/// just above it.
pub fn build_overlay(
    outcome: &FrameOutcome,
    hand_box: Option<PixelBox>,
    confidence_threshold: f32,
) -> Vec<OverlayText> {
    let mut texts = vec![OverlayText::new(EXIT_HINT, EXIT_HINT_POS)];

    if let Some(message) = &outcome.display_message {
        texts.push(OverlayText::new(message.clone(), MESSAGE_POS));
    }

    if let (Some(prediction), Some(bbox)) = (&outcome.prediction, hand_box) {
        let text = if prediction.is_confident(confidence_threshold) {
            format!("{} {:.2}", prediction.label, prediction.confidence)
        } else {
            "Inconclusive".to_string()
        };
        texts.push(OverlayText::new(text, (bbox.x1, bbox.y1 - LABEL_OFFSET_PX)));
    }

    texts
}

#[cfg(test)]
mod tests {
    use super::*;
    use signsense_classifier::SignPrediction;

    fn outcome(
        prediction: Option<SignPrediction>,
        display_message: Option<String>,
    ) -> FrameOutcome {
        FrameOutcome {
            prediction,
            display_message,
            commit: None,
        }
    }

    fn hand_box() -> PixelBox {
        PixelBox {
            x1: 200,
            y1: 150,
            x2: 400,
            y2: 350,
        }
    }

    #[test]
    fn test_idle_frame_shows_only_exit_hint() {
        let texts = build_overlay(&outcome(None, None), None, 0.5);
        assert_eq!(texts.len(), 1);
        assert_eq!(texts[0].text, EXIT_HINT);
    }

    #[test]
    fn test_confident_label_anchored_above_box() {
        let out = outcome(Some(SignPrediction::new("Hello", 0.87)), None);
        let texts = build_overlay(&out, Some(hand_box()), 0.5);

        assert_eq!(texts.len(), 2);
        assert_eq!(texts[1].text, "Hello 0.87");
        assert_eq!((texts[1].x, texts[1].y), (200, 140));
    }

    #[test]
    fn test_inconclusive_below_gate() {
        let out = outcome(Some(SignPrediction::new("Hello", 0.3)), None);
        let texts = build_overlay(&out, Some(hand_box()), 0.5);
        assert_eq!(texts[1].text, "Inconclusive");
    }

    #[test]
    fn test_message_included_while_active() {
        let out = outcome(None, Some("Character Recorded: Yes".to_string()));
        let texts = build_overlay(&out, None, 0.5);

        assert_eq!(texts.len(), 2);
        assert_eq!(texts[1].text, "Character Recorded: Yes");
        assert_eq!((texts[1].x, texts[1].y), MESSAGE_POS);
    }

    #[test]
    fn test_prediction_without_box_is_skipped() {
        let out = outcome(Some(SignPrediction::new("Wow", 0.9)), None);
        let texts = build_overlay(&out, None, 0.5);
        assert_eq!(texts.len(), 1);
    }
}
