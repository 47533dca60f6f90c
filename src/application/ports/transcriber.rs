//! Speech-to-text port interface

use async_trait::async_trait;

use crate::domain::audio::AudioClip;
use crate::domain::credential::Credential;
use crate::domain::failure::ClassifiedError;

/// Port for speech-to-text transcription
#[async_trait]
pub trait Transcriber: Send + Sync {
    /// Transcribe an audio clip to plain text.
    ///
    /// One request, one response; failures are classified at this boundary
    /// and returned as data. An empty string is a successful result meaning
    /// no speech was recognized — callers check for blank text separately.
    async fn transcribe(
        &self,
        clip: &AudioClip,
        credential: &Credential,
    ) -> Result<String, ClassifiedError>;
}
