//! Error types for moodlog

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the moodlog application
#[derive(Debug, Error)]
pub enum MoodlogError {
    #[error("Not a moodlog directory: {0}")]
    NotMoodlogDirectory(PathBuf),

    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Entry data error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl MoodlogError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            MoodlogError::NotMoodlogDirectory(_) => 2,
            MoodlogError::InvalidDate(_) => 3,
            MoodlogError::Json(_) => 4,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            MoodlogError::NotMoodlogDirectory(path) => {
                format!(
                    "Not a moodlog directory: {}\n\n\
                    Suggestions:\n\
                    • Run 'moodlog init' in this directory to create a new tracker\n\
                    • Navigate to an existing moodlog directory\n\
                    • Set MOODLOG_ROOT environment variable to your tracker path",
                    path.display()
                )
            }
            MoodlogError::InvalidDate(date_str) => {
                format!(
                    "Invalid date: '{}'\n\n\
                    Expected formats:\n\
                    • DD-MM-YYYY (e.g., 15-06-2024)\n\
                    • DD-MM-YYYY HH:MM for --at (e.g., '15-06-2024 09:30')\n\n\
                    Examples:\n\
                    moodlog list --from 01-06-2024 --to 30-06-2024\n\
                    moodlog log 4 --at '15-06-2024 09:30'",
                    date_str
                )
            }
            MoodlogError::Json(err) => {
                format!(
                    "Entry data error: {}\n\n\
                    Suggestions:\n\
                    • The mood_entries.json slot may have been edited by hand\n\
                    • Restore it from a backup, or delete it to start with an\n\
                      empty collection (logged moods will be lost)",
                    err
                )
            }
            MoodlogError::Config(msg) => {
                if msg.contains("Invalid storage") {
                    format!(
                        "{}\n\n\
                        Valid storage modes: durable, memory\n\
                        Example: moodlog config storage durable",
                        msg
                    )
                } else {
                    msg.clone()
                }
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using MoodlogError
pub type Result<T> = std::result::Result<T, MoodlogError>;
