//! Briefing prompt value object

use super::briefing_type::BriefingType;

/// Value object representing the complete system instruction for one
/// generation call: the type's section template plus an optional
/// user-supplied requirement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BriefingPrompt {
    content: String,
}

impl BriefingPrompt {
    /// Build a prompt for the given type, appending the custom instruction
    /// as a suffixed directive when present and non-blank.
    pub fn build(briefing_type: BriefingType, custom_instruction: Option<&str>) -> Self {
        let mut content = briefing_type.template().to_string();
        if let Some(custom) = custom_instruction {
            let custom = custom.trim();
            if !custom.is_empty() {
                content.push_str("。要求：");
                content.push_str(custom);
            }
        }
        Self { content }
    }

    /// Get the prompt content
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Consume and return the content
    pub fn into_content(self) -> String {
        self.content
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_uses_type_template() {
        let prompt = BriefingPrompt::build(BriefingType::DailyReport, None);
        assert_eq!(prompt.content(), "整理成工作日报：1完成 2问题 3计划");
    }

    #[test]
    fn build_appends_custom_instruction() {
        let prompt = BriefingPrompt::build(BriefingType::MeetingMinutes, Some("重点突出数据"));
        assert_eq!(
            prompt.content(),
            "整理成会议纪要：1主题 2讨论 3决议 4待办。要求：重点突出数据"
        );
    }

    #[test]
    fn blank_custom_instruction_is_ignored() {
        let with_blank = BriefingPrompt::build(BriefingType::StudyNotes, Some("   "));
        let without = BriefingPrompt::build(BriefingType::StudyNotes, None);
        assert_eq!(with_blank, without);
    }

    #[test]
    fn different_types_different_prompts() {
        let minutes = BriefingPrompt::build(BriefingType::MeetingMinutes, None);
        let report = BriefingPrompt::build(BriefingType::DailyReport, None);
        assert_ne!(minutes.content(), report.content());
    }
}
