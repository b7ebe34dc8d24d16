//! CLI layer - Command-line interface

pub mod commands;
pub mod output;

pub use commands::{parse_at_millis, parse_date, Cli, Commands};
pub use output::{format_entry_list, format_today_list};
