//! Output formatting utilities

use crate::domain::MoodEntry;

fn format_entry_line(entry: &MoodEntry) -> String {
    let when = entry
        .logged_at()
        .map(|dt| dt.format("%d-%m-%Y %H:%M").to_string())
        // Timestamp outside the representable local range
        .unwrap_or_else(|| "---------- --:--".to_string());

    let mut line = format!("{}  {}/5", when, entry.mood);

    if let Some(note) = &entry.note {
        line.push_str("  ");
        line.push_str(note);
    }

    if let Some(tags) = &entry.tags {
        if !tags.is_empty() {
            let rendered: Vec<String> = tags.iter().map(|tag| format!("#{}", tag)).collect();
            line.push_str("  ");
            line.push_str(&rendered.join(" "));
        }
    }

    line
}

/// Format a list of entries for display, one line each
pub fn format_entry_list(entries: &[MoodEntry]) -> String {
    if entries.is_empty() {
        return "No moods logged".to_string();
    }

    entries
        .iter()
        .map(format_entry_line)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format the today view for display
pub fn format_today_list(entries: &[MoodEntry]) -> String {
    if entries.is_empty() {
        return "No moods logged today".to_string();
    }

    format_entry_list(entries)
}
