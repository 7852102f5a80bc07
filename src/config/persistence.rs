//! Snapshot persistence configuration

/// Name of the single key-value slot holding the serialized config tree.
/// Must match the slot existing browser snapshots were saved under.
pub const CONFIG_STORAGE_KEY: &str = "quiet_gratitude_final_v8";

/// Extension used by the file-backed slot on native builds
pub const SNAPSHOT_EXTENSION: &str = "json";

/// Default directory for native snapshots (overridable with `--data-dir`)
pub const DEFAULT_DATA_DIR: &str = ".";

/// Path for eframe's own UI state (window geometry, view preferences)
pub const APP_STATE_PATH: &str = ".quiet_gratitude_state.json";

/// File name for a given slot key.
/// Example: "quiet_gratitude_final_v8.json"
pub fn snapshot_filename(key: &str) -> String {
    format!("{}.{}", key, SNAPSHOT_EXTENSION)
}
