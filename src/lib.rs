//! moodlog - Terminal mood tracker
//!
//! A command-line mood journal built around an observable entry store:
//! every mutation is mirrored to a durable JSON slot before subscribers are
//! notified, and a pure filter selects the moods logged today.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::MoodlogError;
