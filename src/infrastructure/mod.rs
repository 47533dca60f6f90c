//! Infrastructure layer - Adapter implementations
//!
//! Contains concrete implementations of the port interfaces,
//! integrating with the SiliconFlow API and local configuration storage.

pub mod config;
pub mod generation;
pub mod transcription;

// Re-export adapters
pub use config::XdgConfigStore;
pub use generation::SiliconFlowGenerator;
pub use transcription::SiliconFlowTranscriber;
