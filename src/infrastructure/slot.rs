//! Entry slot: the single durable key-value slot holding the collection

use crate::error::Result;
use std::fs;
use std::path::PathBuf;

/// File name of the durable slot inside the .moodlog directory
pub const ENTRY_SLOT_FILE: &str = "mood_entries.json";

/// A single fixed key-value slot holding the serialized entry collection.
///
/// Two variants exist, selected at construction time: `FileSlot` (durable)
/// and `MemorySlot` (in-process only). The payload is opaque text here; the
/// store owns (de)serialization.
pub trait EntrySlot {
    /// Read the slot payload. `None` means the slot has never been written.
    fn read(&self) -> Result<Option<String>>;

    /// Replace the slot payload.
    fn write(&mut self, payload: &str) -> Result<()>;
}

/// Durable slot backed by a file.
///
/// Shared by every process pointed at the same tracker directory;
/// last writer wins.
#[derive(Debug, Clone)]
pub struct FileSlot {
    path: PathBuf,
}

impl FileSlot {
    pub fn new(path: PathBuf) -> Self {
        FileSlot { path }
    }
}

impl EntrySlot for FileSlot {
    fn read(&self) -> Result<Option<String>> {
        if !self.path.exists() {
            return Ok(None);
        }
        Ok(Some(fs::read_to_string(&self.path)?))
    }

    fn write(&mut self, payload: &str) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(&self.path, payload)?;
        Ok(())
    }
}

/// In-memory slot for the degraded no-durable-medium mode. Never fails;
/// the payload dies with the process.
#[derive(Debug, Clone, Default)]
pub struct MemorySlot {
    payload: Option<String>,
}

impl MemorySlot {
    pub fn new() -> Self {
        MemorySlot::default()
    }
}

impl EntrySlot for MemorySlot {
    fn read(&self) -> Result<Option<String>> {
        Ok(self.payload.clone())
    }

    fn write(&mut self, payload: &str) -> Result<()> {
        self.payload = Some(payload.to_string());
        Ok(())
    }
}
