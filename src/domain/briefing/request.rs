//! Briefing request value object

use crate::domain::transcription::Transcript;

use super::briefing_type::BriefingType;

/// One generation request: the transcript to summarize, the briefing type
/// selecting the template, and an optional free-text requirement.
#[derive(Debug, Clone)]
pub struct BriefingRequest {
    transcript: Transcript,
    briefing_type: BriefingType,
    custom_instruction: Option<String>,
}

impl BriefingRequest {
    /// Create a request without a custom instruction
    pub fn new(transcript: Transcript, briefing_type: BriefingType) -> Self {
        Self {
            transcript,
            briefing_type,
            custom_instruction: None,
        }
    }

    /// Attach a custom instruction; blank input is treated as absent
    pub fn with_custom_instruction(mut self, instruction: impl Into<String>) -> Self {
        let instruction = instruction.into();
        self.custom_instruction = if instruction.trim().is_empty() {
            None
        } else {
            Some(instruction)
        };
        self
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    pub fn briefing_type(&self) -> BriefingType {
        self.briefing_type
    }

    pub fn custom_instruction(&self) -> Option<&str> {
        self.custom_instruction.as_deref()
    }
}
