//! Today view use case

use crate::domain::{todays_entries, MoodEntry};
use crate::infrastructure::EntryStore;
use chrono::Local;

/// Entries logged during the current local day, in recording order.
pub fn today_view(store: &EntryStore) -> Vec<MoodEntry> {
    todays_entries(store.entries(), Local::now())
}
