//! Mood tracker facade over the entry store

use crate::domain::MoodEntry;
use crate::error::Result;
use crate::infrastructure::EntryStore;

/// Hook invoked after an entry has been committed
pub type SaveHook = Box<dyn FnMut(&MoodEntry)>;

/// Construction contract for a `MoodTracker`: optional initial entries and
/// an optional hook fired whenever a new mood is logged.
#[derive(Default)]
pub struct MoodTrackerProps {
    pub entries: Option<Vec<MoodEntry>>,
    pub on_mood_save: Option<SaveHook>,
}

/// Logging facade consumed by the CLI (or any other frontend).
///
/// Wraps an `EntryStore`; logging appends to the collection through the
/// store, so persistence and observer notification have already happened by
/// the time the save hook runs.
pub struct MoodTracker {
    store: EntryStore,
    on_mood_save: Option<SaveHook>,
}

impl MoodTracker {
    /// Build a tracker over the given store. Seed entries, when present,
    /// replace the store's collection.
    pub fn new(mut store: EntryStore, props: MoodTrackerProps) -> Result<Self> {
        if let Some(seed) = props.entries {
            store.set(seed)?;
        }

        Ok(MoodTracker {
            store,
            on_mood_save: props.on_mood_save,
        })
    }

    /// Append one entry to the collection, then fire the save hook.
    pub fn log_mood(&mut self, entry: MoodEntry) -> Result<()> {
        self.store.update(|entries| {
            let mut next = entries.to_vec();
            next.push(entry.clone());
            next
        })?;

        if let Some(hook) = self.on_mood_save.as_mut() {
            hook(&entry);
        }

        Ok(())
    }

    pub fn entries(&self) -> &[MoodEntry] {
        self.store.entries()
    }

    pub fn store_mut(&mut self) -> &mut EntryStore {
        &mut self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_log_mood_appends_in_order() {
        let mut tracker =
            MoodTracker::new(EntryStore::in_memory(), MoodTrackerProps::default()).unwrap();

        tracker.log_mood(MoodEntry::new(3, 10)).unwrap();
        tracker.log_mood(MoodEntry::new(5, 20)).unwrap();

        assert_eq!(
            tracker.entries(),
            &[MoodEntry::new(3, 10), MoodEntry::new(5, 20)]
        );
    }

    #[test]
    fn test_seed_entries_replace_collection() {
        let mut store = EntryStore::in_memory();
        store.set(vec![MoodEntry::new(1, 1)]).unwrap();

        let tracker = MoodTracker::new(
            store,
            MoodTrackerProps {
                entries: Some(vec![MoodEntry::new(4, 2), MoodEntry::new(5, 3)]),
                on_mood_save: None,
            },
        )
        .unwrap();

        assert_eq!(
            tracker.entries(),
            &[MoodEntry::new(4, 2), MoodEntry::new(5, 3)]
        );
    }

    #[test]
    fn test_save_hook_fires_after_commit() {
        let saved: Rc<RefCell<Vec<MoodEntry>>> = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&saved);

        let mut tracker = MoodTracker::new(
            EntryStore::in_memory(),
            MoodTrackerProps {
                entries: None,
                on_mood_save: Some(Box::new(move |entry| sink.borrow_mut().push(entry.clone()))),
            },
        )
        .unwrap();

        let entry = MoodEntry::new(4, 42).with_note("walked the dog".to_string());
        tracker.log_mood(entry.clone()).unwrap();

        assert_eq!(saved.borrow().as_slice(), &[entry]);
    }

    #[test]
    fn test_no_hook_is_fine() {
        let mut tracker =
            MoodTracker::new(EntryStore::in_memory(), MoodTrackerProps::default()).unwrap();

        tracker.log_mood(MoodEntry::new(2, 1)).unwrap();

        assert_eq!(tracker.entries().len(), 1);
    }
}
