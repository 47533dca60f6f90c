//! SiliconFlow speech-to-text adapter

use std::io::Write;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use tempfile::NamedTempFile;

use crate::application::ports::Transcriber;
use crate::domain::audio::AudioClip;
use crate::domain::credential::Credential;
use crate::domain::failure::{classify, ClassifiedError};

use super::normalize;

/// Speech-to-text model identifier
const DEFAULT_MODEL: &str = "FunAudioLLM/SenseVoiceSmall";

/// SiliconFlow API base URL
pub const API_BASE_URL: &str = "https://api.siliconflow.cn/v1";

/// Target language hint sent with every request
const DEFAULT_LANGUAGE: &str = "zh";

/// Per-request timeout
const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

/// SiliconFlow transcription adapter
pub struct SiliconFlowTranscriber {
    base_url: String,
    model: String,
    language: String,
    client: reqwest::Client,
}

impl SiliconFlowTranscriber {
    /// Create an adapter against the production endpoint
    pub fn new() -> Self {
        Self::with_base_url(API_BASE_URL)
    }

    /// Create an adapter against a custom base URL
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            model: DEFAULT_MODEL.to_string(),
            language: DEFAULT_LANGUAGE.to_string(),
            client: reqwest::Client::new(),
        }
    }

    /// Override the model identifier
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Override the language hint
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    /// Build the transcription endpoint URL
    fn endpoint(&self) -> String {
        format!(
            "{}/audio/transcriptions",
            self.base_url.trim_end_matches('/')
        )
    }
}

impl Default for SiliconFlowTranscriber {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Transcriber for SiliconFlowTranscriber {
    async fn transcribe(
        &self,
        clip: &AudioClip,
        credential: &Credential,
    ) -> Result<String, ClassifiedError> {
        // Stage the clip on disk for the duration of this one call. The
        // guard removes the file on every exit path, early returns included.
        let staged = stage_clip(clip).map_err(classify)?;

        let bytes = tokio::fs::read(staged.path()).await.map_err(classify)?;
        let part = Part::bytes(bytes)
            .file_name(clip.file_name())
            .mime_str(clip.format().mime())
            .map_err(classify)?;
        let form = Form::new()
            .part("file", part)
            .text("model", self.model.clone())
            .text("language", self.language.clone());

        let response = self
            .client
            .post(self.endpoint())
            .bearer_auth(credential.as_str())
            .timeout(REQUEST_TIMEOUT)
            .multipart(form)
            .send()
            .await
            .map_err(classify)?;

        let status = response.status();
        let body = response.text().await.map_err(classify)?;

        if !status.is_success() {
            return Err(classify(format!("HTTP {status}: {body}")));
        }

        Ok(normalize::extract_text(&body))
    }
}

/// Write the clip to a scoped temporary file named after its format.
fn stage_clip(clip: &AudioClip) -> std::io::Result<NamedTempFile> {
    let mut file = tempfile::Builder::new()
        .prefix("voice-brief-")
        .suffix(&format!(".{}", clip.format().extension()))
        .tempfile()?;
    file.write_all(clip.data())?;
    file.flush()?;
    Ok(file)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::audio::AudioFormat;

    #[test]
    fn endpoint_joins_base_url() {
        let transcriber = SiliconFlowTranscriber::with_base_url("http://localhost:9000/");
        assert_eq!(
            transcriber.endpoint(),
            "http://localhost:9000/audio/transcriptions"
        );
    }

    #[test]
    fn default_endpoint_targets_siliconflow() {
        let transcriber = SiliconFlowTranscriber::new();
        assert_eq!(
            transcriber.endpoint(),
            "https://api.siliconflow.cn/v1/audio/transcriptions"
        );
    }

    #[test]
    fn staged_file_carries_bytes_and_extension() {
        let clip = AudioClip::new(vec![1, 2, 3, 4], AudioFormat::M4a);
        let staged = stage_clip(&clip).unwrap();

        let written = std::fs::read(staged.path()).unwrap();
        assert_eq!(written, vec![1, 2, 3, 4]);
        assert!(staged.path().to_string_lossy().ends_with(".m4a"));
    }

    #[test]
    fn staged_file_is_removed_on_drop() {
        let clip = AudioClip::new(vec![0u8; 8], AudioFormat::Mp3);
        let staged = stage_clip(&clip).unwrap();
        let path = staged.path().to_path_buf();
        assert!(path.exists());

        drop(staged);
        assert!(!path.exists());
    }
}
