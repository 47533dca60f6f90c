//! Transcript value object

use std::fmt;

/// User-editable text derived from (or replacing) a speech-to-text result.
///
/// An empty transcript is a legitimate value: the speech endpoint reports
/// silence as success with empty text, which callers must tell apart from a
/// failed call. Use [`Transcript::is_blank`] for that check.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Transcript(String);

impl Transcript {
    /// Create a transcript from text
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    /// Get the transcript text
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the transcript is empty or whitespace-only
    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }

    /// Number of characters (not bytes; transcripts are mostly CJK)
    pub fn char_count(&self) -> usize {
        self.0.chars().count()
    }

    /// Consume and return the text
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for Transcript {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for Transcript {
    fn from(text: String) -> Self {
        Self(text)
    }
}

impl From<&str> for Transcript {
    fn from(text: &str) -> Self {
        Self(text.to_string())
    }
}
