//! Transcription domain module

mod transcript;

pub use transcript::Transcript;
