//! Tag extraction and normalization

use regex::Regex;
use std::sync::OnceLock;

/// Regex for matching hashtags: #word, #word-with-dashes, #word_with_underscores
fn tag_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"#([a-zA-Z0-9_-]+)").unwrap())
}

/// Extract all hashtags from a note (case-insensitive, normalized to lowercase)
pub fn extract_tags(text: &str) -> Vec<String> {
    tag_regex()
        .captures_iter(text)
        .map(|cap| cap[1].to_lowercase())
        .collect()
}

/// Parse a comma-separated tag list, trimming whitespace and dropping empties
pub fn parse_tag_list(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(|tag| tag.trim().trim_start_matches('#').to_lowercase())
        .filter(|tag| !tag.is_empty())
        .collect()
}

/// Merge tag sources into one list, de-duplicated, first occurrence wins
pub fn merge_tags(explicit: Vec<String>, from_note: Vec<String>) -> Vec<String> {
    let mut merged = Vec::new();
    for tag in explicit.into_iter().chain(from_note) {
        if !merged.contains(&tag) {
            merged.push(tag);
        }
    }
    merged
}
