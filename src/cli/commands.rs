//! CLI command definitions

use crate::error::{MoodlogError, Result};
use chrono::{Local, NaiveDate, NaiveDateTime, TimeZone};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "moodlog")]
#[command(about = "Terminal mood tracker", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a new mood tracker
    Init {
        /// Directory to initialize (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Storage mode (durable, memory)
        #[arg(short, long, default_value = "durable")]
        storage: String,
    },

    /// Log a mood
    Log {
        /// Mood score, conventionally 1 (worst) to 5 (best)
        mood: i32,

        /// Journal note; #hashtags inside it become tags
        #[arg(short, long)]
        note: Option<String>,

        /// Comma-separated tags (e.g., work,gym)
        #[arg(short, long)]
        tags: Option<String>,

        /// Backfill timestamp as 'DD-MM-YYYY HH:MM' local time (default: now)
        #[arg(long)]
        at: Option<String>,
    },

    /// List logged moods, newest first
    List {
        /// Only entries on or after this date (DD-MM-YYYY)
        #[arg(long)]
        from: Option<String>,

        /// Only entries on or before this date (DD-MM-YYYY)
        #[arg(long)]
        to: Option<String>,

        /// Show at most this many entries
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Show moods logged today
    Today,

    /// View or modify configuration
    Config {
        /// Config key to get or set
        key: Option<String>,

        /// Value to set (if provided, sets the key)
        value: Option<String>,

        /// List all configuration
        #[arg(short, long)]
        list: bool,
    },

    /// Remove all logged moods
    Clear,
}

/// Parse a CLI date in DD-MM-YYYY form
pub fn parse_date(input: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(input, "%d-%m-%Y")
        .map_err(|_| MoodlogError::InvalidDate(input.to_string()))
}

/// Parse a backfill timestamp ('DD-MM-YYYY HH:MM', local time) to epoch millis
pub fn parse_at_millis(input: &str) -> Result<i64> {
    let naive = NaiveDateTime::parse_from_str(input.trim(), "%d-%m-%Y %H:%M")
        .map_err(|_| MoodlogError::InvalidDate(input.to_string()))?;

    // A DST gap can make the wall-clock time nonexistent locally
    Local
        .from_local_datetime(&naive)
        .earliest()
        .map(|dt| dt.timestamp_millis())
        .ok_or_else(|| MoodlogError::InvalidDate(input.to_string()))
}
