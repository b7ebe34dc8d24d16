//! File system repository for tracker directories

use crate::error::{MoodlogError, Result};
use crate::infrastructure::slot::{FileSlot, MemorySlot, ENTRY_SLOT_FILE};
use crate::infrastructure::store::EntryStore;
use crate::infrastructure::{Config, StorageMode};
use std::fs;
use std::path::{Path, PathBuf};

/// Handle to a tracker root directory (the one containing .moodlog)
#[derive(Debug, Clone)]
pub struct FileSystemRepository {
    pub root: PathBuf,
}

impl FileSystemRepository {
    /// Create a new repository with the given root directory
    pub fn new(root: PathBuf) -> Self {
        FileSystemRepository { root }
    }

    /// Discover tracker root by walking up from current directory
    /// First checks MOODLOG_ROOT environment variable, then falls back to discovery
    pub fn discover() -> Result<Self> {
        // 1. Check MOODLOG_ROOT environment variable first
        if let Ok(root_path) = std::env::var("MOODLOG_ROOT") {
            let path = PathBuf::from(root_path);
            if Self::has_moodlog_dir(&path) {
                return Ok(FileSystemRepository::new(path));
            } else {
                return Err(MoodlogError::Config(format!(
                    "MOODLOG_ROOT is set to '{}' but no .moodlog directory found. \
                    Run 'moodlog init' in that directory or unset MOODLOG_ROOT.",
                    path.display()
                )));
            }
        }

        // 2. Fall back to walking up from current directory
        let current_dir = std::env::current_dir()?;
        Self::discover_from(&current_dir)
    }

    /// Discover tracker root by walking up from a specific starting directory
    pub fn discover_from(start: &Path) -> Result<Self> {
        let mut current = start.to_path_buf();

        loop {
            if Self::has_moodlog_dir(&current) {
                return Ok(FileSystemRepository::new(current));
            }

            match current.parent() {
                Some(parent) => current = parent.to_path_buf(),
                None => {
                    // Reached filesystem root without finding .moodlog
                    return Err(MoodlogError::NotMoodlogDirectory(start.to_path_buf()));
                }
            }
        }
    }

    /// Check if a path contains a .moodlog directory
    fn has_moodlog_dir(path: &Path) -> bool {
        path.join(".moodlog").is_dir()
    }

    /// Check if .moodlog directory exists
    pub fn is_initialized(&self) -> bool {
        Self::has_moodlog_dir(&self.root)
    }

    /// Create the .moodlog directory
    pub fn initialize(&self) -> Result<()> {
        let moodlog_dir = self.root.join(".moodlog");

        if moodlog_dir.exists() {
            return Err(MoodlogError::Config(format!(
                "Directory already initialized: {}",
                self.root.display()
            )));
        }

        fs::create_dir(&moodlog_dir)?;
        Ok(())
    }

    /// Load configuration from .moodlog/config.toml
    pub fn load_config(&self) -> Result<Config> {
        Config::load_from_dir(&self.root)
    }

    /// Save configuration to .moodlog/config.toml
    pub fn save_config(&self, config: &Config) -> Result<()> {
        config.save_to_dir(&self.root)
    }

    /// Path of the durable entry slot for this tracker
    pub fn entry_slot_path(&self) -> PathBuf {
        self.root.join(".moodlog").join(ENTRY_SLOT_FILE)
    }

    /// Open the entry store for this tracker, with the slot variant picked
    /// by the configured storage mode.
    pub fn open_store(&self) -> Result<EntryStore> {
        let config = self.load_config()?;

        match config.storage {
            StorageMode::Durable => {
                EntryStore::open(Box::new(FileSlot::new(self.entry_slot_path())))
            }
            StorageMode::Memory => EntryStore::open(Box::new(MemorySlot::new())),
        }
    }
}
