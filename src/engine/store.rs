use serde_json::Value;
use std::sync::Arc;

use crate::config::CONFIG_STORAGE_KEY;
use crate::domain::media::to_data_url;
use crate::domain::{
    ConfigEdit, ConfigError, MediaList, Photo, PresentationConfig, Video, apply_path,
};
use crate::engine::storage::{SnapshotStorage, StorageError};

#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;

/// Owns the presentation tree and keeps its storage slot in step with it.
///
/// The tree sits behind an `Arc` front buffer. Mutations never touch the
/// current tree: they clone it, edit the clone and swap the pointer, so a
/// snapshot taken with [`ConfigStore::snapshot`] stays valid for as long as
/// its holder keeps it.
pub struct ConfigStore<S: SnapshotStorage> {
    storage: S,
    key: String,
    current: Arc<PresentationConfig>,
    last_persist_error: Option<StorageError>,
}

impl<S: SnapshotStorage> ConfigStore<S> {
    /// Loads from the default slot. Never fails: an absent or unparseable
    /// snapshot yields the built-in default.
    pub fn load(storage: S) -> Self {
        Self::load_from_slot(storage, CONFIG_STORAGE_KEY)
    }

    pub fn load_from_slot(storage: S, key: &str) -> Self {
        let current = Self::read_snapshot(&storage, key);
        Self {
            storage,
            key: key.to_string(),
            current: Arc::new(current),
            last_persist_error: None,
        }
    }

    fn read_snapshot(storage: &S, key: &str) -> PresentationConfig {
        let Some(text) = storage.read(key) else {
            #[cfg(debug_assertions)]
            if DEBUG_FLAGS.print_state_serde {
                log::info!("No snapshot in slot '{}'. Using built-in content.", key);
            }
            return PresentationConfig::default();
        };

        match PresentationConfig::from_snapshot(&text) {
            Ok(config) => {
                #[cfg(debug_assertions)]
                if DEBUG_FLAGS.print_state_serde {
                    log::info!("Loaded snapshot from slot '{}' ({} bytes)", key, text.len());
                }
                config
            }
            Err(e) => {
                log::warn!("Ignoring unreadable snapshot in slot '{}': {}", key, e);
                PresentationConfig::default()
            }
        }
    }

    /// The current tree
    pub fn config(&self) -> &PresentationConfig {
        &self.current
    }

    /// A shared handle to the current tree; later edits do not affect it.
    pub fn snapshot(&self) -> Arc<PresentationConfig> {
        Arc::clone(&self.current)
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// The most recent write failure, cleared by the next successful write.
    pub fn last_persist_error(&self) -> Option<&StorageError> {
        self.last_persist_error.as_ref()
    }

    /// Applies a typed edit. Returns whether the tree changed (and was persisted).
    pub fn apply(&mut self, edit: ConfigEdit) -> bool {
        #[cfg(debug_assertions)]
        if DEBUG_FLAGS.print_config_edits {
            log::info!("Config edit: {:?}", edit);
        }

        let mut next = PresentationConfig::clone(&self.current);
        if !edit.apply_to(&mut next) {
            return false;
        }
        self.commit(next);
        true
    }

    /// Replaces the value at a key path, e.g. `["messages", "intro", "heading"]`.
    ///
    /// Paths must name existing fields; an unknown key or a value of the wrong
    /// shape is an error and nothing is written.
    pub fn update(&mut self, path: &[&str], value: Value) -> Result<(), ConfigError> {
        let next = apply_path(&self.current, path, value)?;
        self.commit(next);
        Ok(())
    }

    /// Appends the list's placeholder entry.
    pub fn add_entry(&mut self, list: MediaList) {
        self.apply(ConfigEdit::AddEntry(list));
    }

    /// Appends a filled-in photo, e.g. one built from a dropped file.
    pub fn add_photo(&mut self, photo: Photo) {
        self.apply(ConfigEdit::AddPhoto(photo));
    }

    pub fn add_video(&mut self, video: Video) {
        self.apply(ConfigEdit::AddVideo(video));
    }

    /// Removes an entry, keeping the order of the rest. Out of range is a no-op.
    pub fn remove_entry(&mut self, list: MediaList, index: usize) -> bool {
        self.apply(ConfigEdit::RemoveEntry(list, index))
    }

    /// Stores uploaded bytes inline as the entry's url.
    pub fn replace_media_from_upload(
        &mut self,
        list: MediaList,
        index: usize,
        bytes: &[u8],
        mime: Option<&str>,
    ) -> bool {
        if index >= list.len(&self.current) {
            return false;
        }
        self.apply(ConfigEdit::SetMediaUrl(list, index, to_data_url(bytes, mime)))
    }

    /// Drops the persisted snapshot and restores the built-in content.
    /// Everything derived from the old tree must be rebuilt by the caller.
    pub fn reset(&mut self) {
        if let Err(e) = self.storage.remove(&self.key) {
            log::warn!("Could not clear snapshot slot '{}': {}", self.key, e);
        }
        self.current = Arc::new(PresentationConfig::default());
        self.last_persist_error = None;
        log::info!("Presentation content reset to defaults");
    }

    fn commit(&mut self, next: PresentationConfig) {
        self.current = Arc::new(next);
        self.persist();
    }

    // Best effort: the in-memory tree stays authoritative if the write fails.
    fn persist(&mut self) {
        let result = self
            .current
            .to_snapshot()
            .map_err(|e| StorageError::Io(e.to_string()))
            .and_then(|text| self.storage.write(&self.key, &text));

        match result {
            Ok(()) => self.last_persist_error = None,
            Err(e) => {
                log::warn!("Could not persist presentation content: {}", e);
                self.last_persist_error = Some(e);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::TextField;
    use crate::engine::storage::MemoryStorage;
    use serde_json::json;

    fn persisted(store: &ConfigStore<MemoryStorage>) -> PresentationConfig {
        let text = store.storage().read(CONFIG_STORAGE_KEY).expect("slot written");
        PresentationConfig::from_snapshot(&text).unwrap()
    }

    #[test]
    fn empty_storage_loads_defaults() {
        let store = ConfigStore::load(MemoryStorage::new());
        assert_eq!(*store.config(), PresentationConfig::default());
        assert!(!store.storage().contains(CONFIG_STORAGE_KEY));
    }

    #[test]
    fn garbage_snapshot_loads_defaults() {
        let mut storage = MemoryStorage::new();
        storage.insert(CONFIG_STORAGE_KEY, "{not json");
        let store = ConfigStore::load(storage);
        assert_eq!(*store.config(), PresentationConfig::default());
    }

    #[test]
    fn update_round_trips_through_storage() {
        let mut store = ConfigStore::load(MemoryStorage::new());
        store
            .update(&["messages", "intro", "heading"], json!("Hi there"))
            .unwrap();

        let reloaded = ConfigStore::load(store.storage().clone());
        assert_eq!(reloaded.config().messages.intro.heading, "Hi there");
        assert_eq!(persisted(&store), *store.config());
    }

    #[test]
    fn bad_path_is_an_error_and_writes_nothing() {
        let mut store = ConfigStore::load(MemoryStorage::new());
        let err = store.update(&["messages", "nope"], json!("x")).unwrap_err();
        assert_eq!(err, ConfigError::InvalidPath("messages.nope".into()));
        assert!(!store.storage().contains(CONFIG_STORAGE_KEY));
    }

    #[test]
    fn snapshots_are_not_aliased_by_later_edits() {
        let mut store = ConfigStore::load(MemoryStorage::new());
        let before = store.snapshot();

        assert!(store.apply(ConfigEdit::SetText(TextField::GalleryTitle, "Moments".into())));

        assert_eq!(before.messages.gallery_title, "Gathered Moments");
        assert_eq!(store.config().messages.gallery_title, "Moments");
    }

    #[test]
    fn add_and_remove_entry_preserve_order() {
        let mut store = ConfigStore::load(MemoryStorage::new());
        let original = store.config().photos.clone();

        store.add_entry(MediaList::Photos);
        let photos = &store.config().photos;
        assert_eq!(photos.len(), original.len() + 1);
        assert_eq!(&photos[..original.len()], &original[..]);
        assert_eq!(photos.last(), Some(&Photo::placeholder()));

        assert!(store.remove_entry(MediaList::Photos, 1));
        let labels: Vec<&str> = store.config().photos.iter().map(|p| p.label.as_str()).collect();
        assert_eq!(labels, vec!["A quiet morning", "Shared laughter", "New Memory"]);

        assert!(!store.remove_entry(MediaList::Photos, 10));
        assert_eq!(store.config().photos.len(), 3);
        assert_eq!(persisted(&store).photos, store.config().photos);
    }

    #[test]
    fn supplied_entries_are_appended_as_given() {
        let mut store = ConfigStore::load(MemoryStorage::new());
        store.add_photo(Photo::new("https://example.com/dawn.jpg", "Dawn"));
        store.add_video(Video::new("https://example.com/walk.mp4", "Evening walk"));

        assert_eq!(store.config().photos.len(), 4);
        assert_eq!(store.config().photos[3].label, "Dawn");
        assert_eq!(store.config().videos.len(), 2);
        assert_eq!(store.config().videos[1].title, "Evening walk");
        assert_eq!(persisted(&store), *store.config());
    }

    #[test]
    fn upload_is_stored_as_data_url() {
        let mut store = ConfigStore::load(MemoryStorage::new());
        assert!(store.replace_media_from_upload(MediaList::Videos, 0, b"abc", Some("video/mp4")));
        assert_eq!(store.config().videos[0].url, "data:video/mp4;base64,YWJj");
        assert_eq!(persisted(&store).videos[0].url, "data:video/mp4;base64,YWJj");

        assert!(!store.replace_media_from_upload(MediaList::Videos, 5, b"abc", None));
    }

    #[test]
    fn reset_restores_defaults_and_clears_slot() {
        let mut store = ConfigStore::load(MemoryStorage::new());
        store.apply(ConfigEdit::AddThought);
        assert!(store.storage().contains(CONFIG_STORAGE_KEY));

        store.reset();
        assert_eq!(*store.config(), PresentationConfig::default());
        assert!(!store.storage().contains(CONFIG_STORAGE_KEY));

        let reloaded = ConfigStore::load(store.storage().clone());
        assert_eq!(*reloaded.config(), PresentationConfig::default());
    }

    #[test]
    fn failed_write_keeps_change_in_memory_and_reports_it() {
        let mut store = ConfigStore::load(MemoryStorage::with_quota(16));
        assert!(store.apply(ConfigEdit::SetText(TextField::ClosingLine1, "Still here".into())));

        assert_eq!(store.config().messages.closing.line1, "Still here");
        assert_eq!(store.last_persist_error(), Some(&StorageError::QuotaExceeded));
        assert!(!store.storage().contains(CONFIG_STORAGE_KEY));
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn edits_survive_a_restart_on_disk() {
        use crate::engine::storage::FileStorage;

        let dir = tempfile::tempdir().unwrap();
        let mut store = ConfigStore::load(FileStorage::new(dir.path()));
        store.apply(ConfigEdit::SetThought(0, "Written to disk".into()));
        store.add_entry(MediaList::Videos);

        let reopened = ConfigStore::load(FileStorage::new(dir.path()));
        assert_eq!(reopened.config(), store.config());
        assert_eq!(reopened.config().messages.thoughts[0], "Written to disk");
        assert_eq!(reopened.config().videos.len(), 2);
    }
}
