//! Observable entry store with durable mirroring

use crate::domain::MoodEntry;
use crate::error::Result;
use crate::infrastructure::slot::{EntrySlot, MemorySlot};

/// Callback receiving the current collection on every commit
pub type Observer = Box<dyn FnMut(&[MoodEntry])>;

/// Handle returned by `subscribe`, used to unsubscribe
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubscriptionId(u64);

/// Single source of truth for the mood-entry collection.
///
/// Every mutation runs synchronously and in a fixed order: serialize the new
/// collection, write it to the slot, publish it to observers in registration
/// order, return. A slot write failure propagates out of `set`/`update`
/// before any observer sees the new value.
///
/// The store is an explicit value with an injected slot; callers (and tests)
/// construct isolated instances rather than sharing a global.
pub struct EntryStore {
    slot: Box<dyn EntrySlot>,
    entries: Vec<MoodEntry>,
    observers: Vec<(SubscriptionId, Observer)>,
    next_id: u64,
}

impl EntryStore {
    /// Open a store over the given slot.
    ///
    /// The slot is read once, here: an unwritten slot yields the empty
    /// collection; a malformed payload is not defensively handled and the
    /// parse error propagates to the caller.
    pub fn open(slot: Box<dyn EntrySlot>) -> Result<Self> {
        let entries = match slot.read()? {
            Some(payload) => serde_json::from_str(&payload)?,
            None => Vec::new(),
        };

        Ok(EntryStore {
            slot,
            entries,
            observers: Vec::new(),
            next_id: 0,
        })
    }

    /// Open a store with no durable medium behind it.
    pub fn in_memory() -> Self {
        EntryStore {
            slot: Box::new(MemorySlot::new()),
            entries: Vec::new(),
            observers: Vec::new(),
            next_id: 0,
        }
    }

    /// The current collection.
    pub fn entries(&self) -> &[MoodEntry] {
        &self.entries
    }

    /// Register an observer. It is invoked immediately with the current
    /// collection, and again after every subsequent commit, until
    /// unsubscribed.
    pub fn subscribe<F>(&mut self, observer: F) -> SubscriptionId
    where
        F: FnMut(&[MoodEntry]) + 'static,
    {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;

        let mut observer: Observer = Box::new(observer);
        observer(&self.entries);
        self.observers.push((id, observer));

        id
    }

    /// Remove an observer. Unknown or already-removed ids are no-ops.
    pub fn unsubscribe(&mut self, id: SubscriptionId) {
        self.observers.retain(|(observer_id, _)| *observer_id != id);
    }

    /// Replace the entire collection: mirror it to the slot, then publish it.
    pub fn set(&mut self, entries: Vec<MoodEntry>) -> Result<()> {
        let payload = serde_json::to_string(&entries)?;
        self.slot.write(&payload)?;

        self.entries = entries;
        self.notify();
        Ok(())
    }

    /// Compute a new collection from the current one and commit it.
    ///
    /// `transform` must be pure. A transform that returns its input
    /// unchanged still rewrites the slot.
    pub fn update<F>(&mut self, transform: F) -> Result<()>
    where
        F: FnOnce(&[MoodEntry]) -> Vec<MoodEntry>,
    {
        let next = transform(&self.entries);
        self.set(next)
    }

    fn notify(&mut self) {
        for (_, observer) in &mut self.observers {
            observer(&self.entries);
        }
    }
}
