mod constants;
mod pipeline;

pub use constants::*;
pub use pipeline::{
    build_overlay, FrameOutcome, OverlayText, PipelineError, SignPipeline, Stabilizer,
    StabilizerConfig, StabilizerError, StabilizerOutput,
};
