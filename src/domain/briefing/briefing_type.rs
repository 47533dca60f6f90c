//! Briefing type value object

use std::fmt;
use std::str::FromStr;

use crate::domain::error::InvalidBriefingTypeError;

/// All available briefing types
pub const ALL_BRIEFING_TYPES: &[BriefingType] = &[
    BriefingType::MeetingMinutes,
    BriefingType::DailyReport,
    BriefingType::StudyNotes,
    BriefingType::NewsSummary,
];

/// Document type selecting the section template sent to the chat model
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BriefingType {
    #[default]
    MeetingMinutes,
    DailyReport,
    StudyNotes,
    NewsSummary,
}

impl BriefingType {
    /// Get the human-readable label for this type
    pub const fn label(&self) -> &'static str {
        match self {
            Self::MeetingMinutes => "会议纪要",
            Self::DailyReport => "工作日报",
            Self::StudyNotes => "学习笔记",
            Self::NewsSummary => "新闻摘要",
        }
    }

    /// Get the instruction template enumerating the expected sections
    pub const fn template(&self) -> &'static str {
        match self {
            Self::MeetingMinutes => "整理成会议纪要：1主题 2讨论 3决议 4待办",
            Self::DailyReport => "整理成工作日报：1完成 2问题 3计划",
            Self::StudyNotes => "整理成学习笔记：1概念 2重点 3思考",
            Self::NewsSummary => "整理成新闻摘要：1事件 2数据 3影响",
        }
    }

    /// Get the string identifier for this type
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::MeetingMinutes => "meeting-minutes",
            Self::DailyReport => "daily-report",
            Self::StudyNotes => "study-notes",
            Self::NewsSummary => "news-summary",
        }
    }
}

impl FromStr for BriefingType {
    type Err = InvalidBriefingTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('_', "-").as_str() {
            "meeting-minutes" => Ok(Self::MeetingMinutes),
            "daily-report" => Ok(Self::DailyReport),
            "study-notes" => Ok(Self::StudyNotes),
            "news-summary" => Ok(Self::NewsSummary),
            _ => Err(InvalidBriefingTypeError {
                input: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for BriefingType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
