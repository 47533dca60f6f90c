//! Transcribe audio use case

use thiserror::Error;

use crate::domain::audio::AudioClip;
use crate::domain::failure::ClassifiedError;
use crate::domain::session::SessionState;
use crate::domain::transcription::Transcript;

use super::ports::Transcriber;

/// Errors from the transcribe use case
#[derive(Debug, Error)]
pub enum TranscribeError {
    #[error("Not authenticated. Provide an API key before transcribing.")]
    NotAuthenticated,

    #[error(transparent)]
    Failed(#[from] ClassifiedError),
}

/// One-shot audio transcription use case
pub struct TranscribeAudioUseCase<T: Transcriber> {
    transcriber: T,
}

impl<T: Transcriber> TranscribeAudioUseCase<T> {
    pub fn new(transcriber: T) -> Self {
        Self { transcriber }
    }

    /// Transcribe a clip and record the result in the session.
    ///
    /// An empty transcript is a successful outcome (silence, or nothing
    /// recognized); callers distinguish it from failure by inspecting the
    /// returned transcript, not the error channel.
    pub async fn execute(
        &self,
        session: &mut SessionState,
        clip: &AudioClip,
    ) -> Result<Transcript, TranscribeError> {
        let credential = session
            .credential()
            .cloned()
            .ok_or(TranscribeError::NotAuthenticated)?;

        let text = self.transcriber.transcribe(clip, &credential).await?;

        let transcript = Transcript::new(text);
        session.set_transcript(transcript.clone());
        Ok(transcript)
    }
}
