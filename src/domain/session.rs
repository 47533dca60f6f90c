//! Session state
//!
//! Explicit per-run context passed to each use case; replaces the ambient
//! session globals of a UI framework. Exactly one request is in flight at a
//! time, so all writes are plain last-write-wins assignments.

use crate::domain::briefing::{Briefing, BriefingType};
use crate::domain::credential::Credential;
use crate::domain::error::CredentialError;
use crate::domain::transcription::Transcript;

/// In-memory state for one interactive session
#[derive(Debug, Default)]
pub struct SessionState {
    authenticated: bool,
    credential: Option<Credential>,
    transcript: Option<Transcript>,
    briefing: Option<Briefing>,
    briefing_type: Option<BriefingType>,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a credential has been accepted for this session
    pub fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    /// Credential usable by downstream calls, when authenticated
    pub fn credential(&self) -> Option<&Credential> {
        if self.authenticated {
            self.credential.as_ref()
        } else {
            None
        }
    }

    /// Validate a candidate credential and store it, flagging the session
    /// authenticated. Invalid candidates leave the session untouched.
    pub fn accept_credential(&mut self, candidate: &str) -> Result<(), CredentialError> {
        let credential = Credential::parse(candidate)?;
        self.credential = Some(credential);
        self.authenticated = true;
        Ok(())
    }

    /// Clear the stored credential and authenticated flag. Idempotent.
    pub fn revoke_credential(&mut self) {
        self.credential = None;
        self.authenticated = false;
    }

    pub fn transcript(&self) -> Option<&Transcript> {
        self.transcript.as_ref()
    }

    pub fn set_transcript(&mut self, transcript: Transcript) {
        self.transcript = Some(transcript);
    }

    pub fn briefing(&self) -> Option<&Briefing> {
        self.briefing.as_ref()
    }

    /// Store a generated briefing, recording its type as the last selected
    pub fn set_briefing(&mut self, briefing: Briefing) {
        self.briefing_type = Some(briefing.briefing_type());
        self.briefing = Some(briefing);
    }

    pub fn briefing_type(&self) -> Option<BriefingType> {
        self.briefing_type
    }

    pub fn set_briefing_type(&mut self, briefing_type: BriefingType) {
        self.briefing_type = Some(briefing_type);
    }

    /// Drop transcript and briefing together (the "clear" action)
    pub fn clear_content(&mut self) {
        self.transcript = None;
        self.briefing = None;
    }
}
