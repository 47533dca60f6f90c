//! CLI argument definitions using Clap

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::domain::briefing::BriefingType;

/// VoiceBrief - turn voice recordings into structured briefings
#[derive(Parser, Debug)]
#[command(name = "voice-brief")]
#[command(version)]
#[command(about = "Transcribe audio recordings and generate structured briefings")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Transcribe an audio file and generate a briefing in one pass
    Brief {
        /// Audio file to transcribe (mp3, wav, m4a, webm, ogg)
        audio: PathBuf,

        /// Briefing type
        #[arg(short = 't', long = "type", value_name = "TYPE")]
        briefing_type: Option<BriefingTypeArg>,

        /// Extra requirement appended to the briefing instruction
        #[arg(short = 'r', long, value_name = "TEXT")]
        requirement: Option<String>,

        /// Write the briefing to this file instead of the default name
        #[arg(short = 'o', long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Print the briefing without writing a file
        #[arg(long)]
        no_export: bool,

        /// Language hint for transcription
        #[arg(short = 'l', long, value_name = "LANG")]
        language: Option<String>,
    },

    /// Transcribe an audio file and print the transcript
    Transcribe {
        /// Audio file to transcribe (mp3, wav, m4a, webm, ogg)
        audio: PathBuf,

        /// Language hint for transcription
        #[arg(short = 'l', long, value_name = "LANG")]
        language: Option<String>,
    },

    /// Generate a briefing from transcript text (file or stdin)
    Generate {
        /// Transcript file to read; stdin when omitted
        #[arg(short = 'i', long, value_name = "FILE")]
        input: Option<PathBuf>,

        /// Briefing type
        #[arg(short = 't', long = "type", value_name = "TYPE")]
        briefing_type: Option<BriefingTypeArg>,

        /// Extra requirement appended to the briefing instruction
        #[arg(short = 'r', long, value_name = "TEXT")]
        requirement: Option<String>,

        /// Write the briefing to this file instead of the default name
        #[arg(short = 'o', long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Print the briefing without writing a file
        #[arg(long)]
        no_export: bool,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Config action subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Create config file with defaults
    Init,
    /// Set a config value
    Set {
        /// Config key
        key: String,
        /// Config value
        value: String,
    },
    /// Get a config value
    Get {
        /// Config key
        key: String,
    },
    /// Clear a config value
    Unset {
        /// Config key
        key: String,
    },
    /// List all config values
    List,
    /// Show config file path
    Path,
}

/// Briefing type argument for clap ValueEnum
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum BriefingTypeArg {
    MeetingMinutes,
    DailyReport,
    StudyNotes,
    NewsSummary,
}

impl From<BriefingTypeArg> for BriefingType {
    fn from(arg: BriefingTypeArg) -> Self {
        match arg {
            BriefingTypeArg::MeetingMinutes => BriefingType::MeetingMinutes,
            BriefingTypeArg::DailyReport => BriefingType::DailyReport,
            BriefingTypeArg::StudyNotes => BriefingType::StudyNotes,
            BriefingTypeArg::NewsSummary => BriefingType::NewsSummary,
        }
    }
}

impl From<BriefingType> for BriefingTypeArg {
    fn from(briefing_type: BriefingType) -> Self {
        match briefing_type {
            BriefingType::MeetingMinutes => BriefingTypeArg::MeetingMinutes,
            BriefingType::DailyReport => BriefingTypeArg::DailyReport,
            BriefingType::StudyNotes => BriefingTypeArg::StudyNotes,
            BriefingType::NewsSummary => BriefingTypeArg::NewsSummary,
        }
    }
}

/// Parsed options for the brief pipeline
#[derive(Debug, Clone)]
pub struct BriefOptions {
    pub audio: PathBuf,
    pub briefing_type: BriefingType,
    pub requirement: Option<String>,
    pub output: Option<PathBuf>,
    pub no_export: bool,
    pub language: String,
}

/// Parsed options for transcription only
#[derive(Debug, Clone)]
pub struct TranscribeOptions {
    pub audio: PathBuf,
    pub language: String,
}

/// Parsed options for generation from existing transcript text
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    pub input: Option<PathBuf>,
    pub briefing_type: BriefingType,
    pub requirement: Option<String>,
    pub output: Option<PathBuf>,
    pub no_export: bool,
}

/// Valid config keys
pub const VALID_CONFIG_KEYS: &[&str] = &["api_key", "language", "briefing_type", "base_url"];

/// Check if a config key is valid
pub fn is_valid_config_key(key: &str) -> bool {
    VALID_CONFIG_KEYS.contains(&key)
}
