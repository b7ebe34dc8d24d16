//! Initialize tracker use case

use crate::error::Result;
use crate::infrastructure::{Config, FileSystemRepository, StorageMode};
use std::fs;
use std::path::Path;

/// Initialize a new mood tracker at the specified path.
pub fn init(path: &Path, storage: StorageMode) -> Result<()> {
    // Create the directory if it doesn't exist
    if !path.exists() {
        fs::create_dir_all(path)?;
    }

    let repo = FileSystemRepository::new(path.to_path_buf());

    // Create .moodlog directory
    repo.initialize()?;

    // Create and save default config
    let config = Config::new(storage);
    repo.save_config(&config)?;

    println!("Initialized mood tracker at {}", path.display());
    println!("Storage: {:?}", storage);

    Ok(())
}
