//! Failure classification for external calls
//!
//! Every failure of the speech or chat endpoint is reduced to one of a
//! fixed set of kinds driving the user-facing recovery hint. Classification
//! is a pure function over the failure's display string: an ordered rule
//! table is walked top-to-bottom and the first matching kind wins, so a
//! message containing both "401" and "timeout" classifies as auth.

use std::fmt;

use thiserror::Error;

/// Stable failure kinds for external-call errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Auth,
    Network,
    Format,
    Quota,
    Unknown,
}

impl ErrorKind {
    /// Get the fixed user-facing title for this kind
    pub const fn title(&self) -> &'static str {
        match self {
            Self::Auth => "Authentication failed",
            Self::Network => "Network error",
            Self::Format => "Request rejected",
            Self::Quota => "Quota exceeded",
            Self::Unknown => "Unexpected error",
        }
    }

    /// Get the fixed recovery hint for this kind
    pub const fn suggested_action(&self) -> &'static str {
        match self {
            Self::Auth => "Re-enter your API key",
            Self::Network => "Check your connection and try again",
            Self::Format => "Check the audio file and its format",
            Self::Quota => "Check your account balance",
            Self::Unknown => "Try again; report the issue if it persists",
        }
    }

    /// Get the string identifier for this kind
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Auth => "auth",
            Self::Network => "network",
            Self::Format => "format",
            Self::Quota => "quota",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Normalized failure record for a failed external call
#[derive(Debug, Clone, Error)]
#[error("{title}: {message}")]
pub struct ClassifiedError {
    pub kind: ErrorKind,
    pub title: &'static str,
    pub message: String,
    pub suggested_action: &'static str,
}

/// Ordered rule table; evaluated top-to-bottom, first match wins.
const RULES: &[(ErrorKind, &[&str])] = &[
    (
        ErrorKind::Auth,
        &["401", "unauthorized", "invalid api key", "authentication"],
    ),
    (
        ErrorKind::Network,
        &["connection", "timeout", "network", "dns", "503"],
    ),
    (
        ErrorKind::Format,
        &["400", "bad request", "invalid", "format"],
    ),
    (
        ErrorKind::Quota,
        &["429", "quota", "rate limit", "insufficient"],
    ),
];

/// Classify an arbitrary failure into exactly one kind.
///
/// Total: every input maps to a kind, and the original message is carried
/// verbatim for display.
pub fn classify(failure: impl fmt::Display) -> ClassifiedError {
    let message = failure.to_string();
    let haystack = message.to_lowercase();

    let kind = RULES
        .iter()
        .find(|(_, needles)| needles.iter().any(|needle| haystack.contains(needle)))
        .map(|(kind, _)| *kind)
        .unwrap_or(ErrorKind::Unknown);

    ClassifiedError {
        kind,
        title: kind.title(),
        message,
        suggested_action: kind.suggested_action(),
    }
}
