//! Configuration module for the quiet gratitude application.

mod debug; // Private: files use crate::config::DEBUG_FLAGS, not crate::config::debug::DEBUG_FLAGS
pub use debug::DEBUG_FLAGS;

pub mod effects;
pub mod navigation;
pub mod persistence;

// Re-export commonly used items
pub use effects::{BURST, BurstConfig};
pub use navigation::{BG_MUSIC_VOLUME, TOTAL_SLIDES, TRANSITION_DELAY};
pub use persistence::{CONFIG_STORAGE_KEY, snapshot_filename};
