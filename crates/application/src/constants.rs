/// Minimum continuous hold (ms) before a candidate label is committed
pub const DWELL_DURATION_MS: u64 = 3_000;

/// How long (ms) the recorded-confirmation message stays on screen
pub const MESSAGE_DURATION_MS: u64 = 1_000;

/// Class probability must strictly exceed this for a prediction to count
pub const CONFIDENCE_THRESHOLD: f32 = 0.5;

/// Pixels added around the landmark extent when drawing the hand box
pub const BOX_MARGIN_PX: i32 = 10;
