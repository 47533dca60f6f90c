//! Generate briefing use case

use thiserror::Error;

use crate::domain::briefing::{Briefing, BriefingPrompt, BriefingRequest};
use crate::domain::failure::ClassifiedError;
use crate::domain::session::SessionState;

use super::ports::BriefingModel;

/// Errors from the generate use case
#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("Transcript is empty. Nothing to summarize.")]
    BlankTranscript,

    #[error("Not authenticated. Provide an API key before generating.")]
    NotAuthenticated,

    #[error(transparent)]
    Failed(#[from] ClassifiedError),
}

/// One-shot briefing generation use case
pub struct GenerateBriefingUseCase<G: BriefingModel> {
    model: G,
}

impl<G: BriefingModel> GenerateBriefingUseCase<G> {
    pub fn new(model: G) -> Self {
        Self { model }
    }

    /// Generate a briefing for the request and record it in the session.
    ///
    /// A blank transcript is rejected here, before any network call.
    pub async fn execute(
        &self,
        session: &mut SessionState,
        request: &BriefingRequest,
    ) -> Result<Briefing, GenerateError> {
        if request.transcript().is_blank() {
            return Err(GenerateError::BlankTranscript);
        }

        let credential = session
            .credential()
            .cloned()
            .ok_or(GenerateError::NotAuthenticated)?;

        let prompt = BriefingPrompt::build(request.briefing_type(), request.custom_instruction());
        let text = self
            .model
            .generate(&prompt, request.transcript(), &credential)
            .await?;

        let briefing = Briefing::new(text, request.briefing_type());
        session.set_briefing(briefing.clone());
        Ok(briefing)
    }
}
