//! Generated briefing document

use super::briefing_type::BriefingType;

/// A generated briefing, attributed to the type that produced it.
/// Held in session state until cleared or regenerated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Briefing {
    text: String,
    briefing_type: BriefingType,
}

impl Briefing {
    /// Create a briefing from generated text
    pub fn new(text: impl Into<String>, briefing_type: BriefingType) -> Self {
        Self {
            text: text.into(),
            briefing_type,
        }
    }

    /// Get the generated text
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the type that produced this briefing
    pub fn briefing_type(&self) -> BriefingType {
        self.briefing_type
    }

    /// Default export file name, derived from the producing type
    pub fn file_name(&self) -> String {
        format!("briefing-{}.txt", self.briefing_type.as_str())
    }
}
