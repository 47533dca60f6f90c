//! Briefing generation port interface

use async_trait::async_trait;

use crate::domain::briefing::BriefingPrompt;
use crate::domain::credential::Credential;
use crate::domain::failure::ClassifiedError;
use crate::domain::transcription::Transcript;

/// Port for chat-completion briefing generation
#[async_trait]
pub trait BriefingModel: Send + Sync {
    /// Generate briefing text from a transcript under the given instruction.
    ///
    /// Returns the completion's text verbatim; failures are classified at
    /// this boundary and returned as data.
    async fn generate(
        &self,
        prompt: &BriefingPrompt,
        transcript: &Transcript,
        credential: &Credential,
    ) -> Result<String, ClassifiedError>;
}
