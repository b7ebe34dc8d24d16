//! Mood entry record

use chrono::{DateTime, Local, TimeZone};
use serde::{Deserialize, Serialize};

/// One logged mood.
///
/// Entries are immutable value records; the collection is replaced wholesale
/// on every mutation rather than edited in place. Insertion order is the
/// order of recording, which is not necessarily chronological.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoodEntry {
    /// Mood score. Expected range is 1 (worst) to 5 (best); the range is a
    /// convention, not enforced.
    pub mood: i32,

    /// When the mood was logged, in milliseconds since the Unix epoch.
    pub timestamp: i64,

    /// Free-form journal note.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,

    /// Category tags, lowercase, in first-seen order.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

impl MoodEntry {
    pub fn new(mood: i32, timestamp: i64) -> Self {
        MoodEntry {
            mood,
            timestamp,
            note: None,
            tags: None,
        }
    }

    pub fn with_note(mut self, note: String) -> Self {
        self.note = Some(note);
        self
    }

    pub fn with_tags(mut self, tags: Vec<String>) -> Self {
        self.tags = if tags.is_empty() { None } else { Some(tags) };
        self
    }

    /// The entry's timestamp as a local date-time, if it is representable.
    pub fn logged_at(&self) -> Option<DateTime<Local>> {
        Local.timestamp_millis_opt(self.timestamp).single()
    }
}
