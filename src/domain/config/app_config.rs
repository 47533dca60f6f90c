//! Application configuration value object

use serde::{Deserialize, Serialize};

use crate::domain::briefing::BriefingType;

/// Application configuration.
/// All fields are optional to support partial configs and merging.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    pub api_key: Option<String>,
    pub language: Option<String>,
    pub briefing_type: Option<String>,
    pub base_url: Option<String>,
}

impl AppConfig {
    /// Create config with default values
    pub fn defaults() -> Self {
        Self {
            api_key: None,
            language: Some("zh".to_string()),
            briefing_type: Some(BriefingType::default().to_string()),
            base_url: None,
        }
    }

    /// Create an empty config (all None)
    pub fn empty() -> Self {
        Self::default()
    }

    /// Merge this config with another, where other takes precedence.
    /// Only non-None values from other will override this.
    pub fn merge(self, other: Self) -> Self {
        Self {
            api_key: other.api_key.or(self.api_key),
            language: other.language.or(self.language),
            briefing_type: other.briefing_type.or(self.briefing_type),
            base_url: other.base_url.or(self.base_url),
        }
    }

    /// Get the language hint, or "zh" if not set
    pub fn language_or_default(&self) -> &str {
        self.language.as_deref().unwrap_or("zh")
    }

    /// Get the briefing type, or the default if not set/invalid
    pub fn briefing_type_or_default(&self) -> BriefingType {
        self.briefing_type
            .as_ref()
            .and_then(|s| s.parse().ok())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_have_expected_values() {
        let config = AppConfig::defaults();
        assert!(config.api_key.is_none());
        assert_eq!(config.language, Some("zh".to_string()));
        assert_eq!(config.briefing_type, Some("meeting-minutes".to_string()));
        assert!(config.base_url.is_none());
    }

    #[test]
    fn empty_has_all_none() {
        let config = AppConfig::empty();
        assert!(config.api_key.is_none());
        assert!(config.language.is_none());
        assert!(config.briefing_type.is_none());
        assert!(config.base_url.is_none());
    }

    #[test]
    fn merge_other_takes_precedence() {
        let base = AppConfig {
            api_key: Some("sk-base".to_string()),
            language: Some("zh".to_string()),
            ..Default::default()
        };
        let other = AppConfig {
            api_key: Some("sk-other".to_string()),
            language: None,
            briefing_type: Some("daily-report".to_string()),
            ..Default::default()
        };

        let merged = base.merge(other);

        assert_eq!(merged.api_key, Some("sk-other".to_string()));
        assert_eq!(merged.language, Some("zh".to_string()));
        assert_eq!(merged.briefing_type, Some("daily-report".to_string()));
    }

    #[test]
    fn merge_preserves_base_when_other_is_none() {
        let base = AppConfig {
            api_key: Some("sk-key".to_string()),
            base_url: Some("http://localhost:9000".to_string()),
            ..Default::default()
        };
        let merged = base.merge(AppConfig::empty());
        assert_eq!(merged.api_key, Some("sk-key".to_string()));
        assert_eq!(merged.base_url, Some("http://localhost:9000".to_string()));
    }

    #[test]
    fn briefing_type_or_default_parses() {
        let config = AppConfig {
            briefing_type: Some("study-notes".to_string()),
            ..Default::default()
        };
        assert_eq!(config.briefing_type_or_default(), BriefingType::StudyNotes);
    }

    #[test]
    fn briefing_type_or_default_uses_default_on_invalid() {
        let config = AppConfig {
            briefing_type: Some("invalid".to_string()),
            ..Default::default()
        };
        assert_eq!(
            config.briefing_type_or_default(),
            BriefingType::MeetingMinutes
        );
    }

    #[test]
    fn language_or_default() {
        assert_eq!(AppConfig::empty().language_or_default(), "zh");
        let config = AppConfig {
            language: Some("en".to_string()),
            ..Default::default()
        };
        assert_eq!(config.language_or_default(), "en");
    }
}
