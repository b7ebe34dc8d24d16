//! Infrastructure layer - Persistence and the observable store

pub mod config;
pub mod repository;
pub mod slot;
pub mod store;

pub use config::{Config, StorageMode};
pub use repository::FileSystemRepository;
pub use slot::{EntrySlot, FileSlot, MemorySlot};
pub use store::{EntryStore, SubscriptionId};
