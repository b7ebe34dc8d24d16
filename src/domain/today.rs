//! Today filter: select entries logged within the current local day

use crate::domain::MoodEntry;
use chrono::{DateTime, Local, NaiveTime, TimeZone};

/// Start of the local calendar day containing `now`, in epoch milliseconds.
///
/// Local midnight can be ambiguous or nonexistent on a DST transition day;
/// the earliest valid instant is used.
pub fn today_boundary_millis(now: DateTime<Local>) -> i64 {
    let midnight = now.date_naive().and_time(NaiveTime::MIN);
    Local
        .from_local_datetime(&midnight)
        .earliest()
        .map(|dt| dt.timestamp_millis())
        .unwrap_or_else(|| now.timestamp_millis())
}

/// Entries with `timestamp >= ` local midnight of `now`'s date, in their
/// original relative order.
///
/// There is no upper bound, so entries with future timestamps are included.
/// Pure and deterministic for a fixed collection and fixed `now`; pass
/// `Local::now()` for the live view.
pub fn todays_entries(entries: &[MoodEntry], now: DateTime<Local>) -> Vec<MoodEntry> {
    let boundary = today_boundary_millis(now);
    entries
        .iter()
        .filter(|entry| entry.timestamp >= boundary)
        .cloned()
        .collect()
}
