//! Audio domain module

mod clip;

pub use clip::{AudioClip, AudioFormat, ACCEPTED_EXTENSIONS};
