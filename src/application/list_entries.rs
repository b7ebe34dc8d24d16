//! List entries use case

use crate::domain::MoodEntry;
use chrono::NaiveDate;

/// View of the collection for listing: optional local-date range filters,
/// sorted newest first, optionally truncated.
///
/// Operates on a snapshot; the stored collection is never reordered.
pub fn list_entries(
    entries: &[MoodEntry],
    from: Option<NaiveDate>,
    to: Option<NaiveDate>,
    limit: Option<usize>,
) -> Vec<MoodEntry> {
    let mut listed: Vec<MoodEntry> = entries.to_vec();

    // Apply date range filters against the entry's local calendar date
    if let Some(from_date) = from {
        listed.retain(|e| e.logged_at().is_none_or(|dt| dt.date_naive() >= from_date));
    }
    if let Some(to_date) = to {
        listed.retain(|e| e.logged_at().is_none_or(|dt| dt.date_naive() <= to_date));
    }

    // Sort by timestamp descending (newest first)
    listed.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));

    if let Some(n) = limit {
        listed.truncate(n);
    }

    listed
}
