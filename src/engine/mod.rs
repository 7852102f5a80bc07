pub mod navigator;
pub mod storage;
pub mod store;

// Re-export key components
pub use navigator::{NavEvent, NavKey, Navigator, Phase};
pub use storage::{MemoryStorage, SnapshotStorage, StorageError};
pub use store::ConfigStore;

#[cfg(not(target_arch = "wasm32"))]
pub use storage::FileStorage;
#[cfg(target_arch = "wasm32")]
pub use storage::LocalStorage;
