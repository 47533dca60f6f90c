//! Application layer - Use cases and port interfaces
//!
//! Contains the core business operations and trait definitions
//! for external system interactions.

pub mod generate;
pub mod ports;
pub mod transcribe;

// Re-export use cases
pub use generate::{GenerateBriefingUseCase, GenerateError};
pub use transcribe::{TranscribeAudioUseCase, TranscribeError};
