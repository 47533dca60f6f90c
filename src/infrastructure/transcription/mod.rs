//! Transcription adapters

pub mod normalize;
mod siliconflow;

pub use siliconflow::SiliconFlowTranscriber;
