//! Audio clip value object

use std::fmt;
use std::path::Path;

use crate::domain::error::UnsupportedFormatError;

/// Accepted audio container extensions, checked before any network call
pub const ACCEPTED_EXTENSIONS: &[&str] = &["mp3", "wav", "m4a", "webm", "ogg"];

/// Accepted audio container formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AudioFormat {
    Mp3,
    Wav,
    M4a,
    Webm,
    Ogg,
}

impl AudioFormat {
    /// Get the MIME type string
    pub const fn mime(&self) -> &'static str {
        match self {
            Self::Mp3 => "audio/mpeg",
            Self::Wav => "audio/wav",
            Self::M4a => "audio/mp4",
            Self::Webm => "audio/webm",
            Self::Ogg => "audio/ogg",
        }
    }

    /// Get the file extension
    pub const fn extension(&self) -> &'static str {
        match self {
            Self::Mp3 => "mp3",
            Self::Wav => "wav",
            Self::M4a => "m4a",
            Self::Webm => "webm",
            Self::Ogg => "ogg",
        }
    }

    /// Resolve a format from a file extension
    pub fn from_extension(ext: &str) -> Result<Self, UnsupportedFormatError> {
        match ext.trim().to_lowercase().as_str() {
            "mp3" => Ok(Self::Mp3),
            "wav" => Ok(Self::Wav),
            "m4a" => Ok(Self::M4a),
            "webm" => Ok(Self::Webm),
            "ogg" => Ok(Self::Ogg),
            _ => Err(UnsupportedFormatError {
                input: ext.to_string(),
            }),
        }
    }

    /// Resolve a format from a file path's extension
    pub fn from_path(path: &Path) -> Result<Self, UnsupportedFormatError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .ok_or_else(|| UnsupportedFormatError {
                input: path.to_string_lossy().to_string(),
            })?;
        Self::from_extension(ext)
    }
}

impl fmt::Display for AudioFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.extension())
    }
}

/// Value object holding raw audio bytes and their declared container format.
/// Exists only for the duration of one transcription call.
#[derive(Debug, Clone)]
pub struct AudioClip {
    data: Vec<u8>,
    format: AudioFormat,
}

impl AudioClip {
    /// Create a clip from raw bytes
    pub fn new(data: Vec<u8>, format: AudioFormat) -> Self {
        Self { data, format }
    }

    /// Get the raw audio data
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Get the container format
    pub fn format(&self) -> AudioFormat {
        self.format
    }

    /// Upload file name derived from the format
    pub fn file_name(&self) -> String {
        format!("audio.{}", self.format.extension())
    }

    /// Get the size in bytes
    pub fn size_bytes(&self) -> usize {
        self.data.len()
    }

    /// Get human-readable size
    pub fn human_readable_size(&self) -> String {
        let bytes = self.size_bytes();
        if bytes < 1024 {
            format!("{} B", bytes)
        } else if bytes < 1024 * 1024 {
            format!("{:.1} KB", bytes as f64 / 1024.0)
        } else {
            format!("{:.1} MB", bytes as f64 / (1024.0 * 1024.0))
        }
    }
}
