use eframe::{Frame, egui};
use serde::{Deserialize, Serialize};

use crate::config::BG_MUSIC_VOLUME;
use crate::domain::{ConfigEdit, MediaList};
use crate::engine::{ConfigStore, NavEvent, Navigator, SnapshotStorage};
use crate::ui::audio::{AudioSurface, default_surface};
use crate::ui::effects::HeartBurst;
use crate::ui::ui_panels::EditorEvent;
use crate::ui::utils::setup_custom_visuals;
use crate::utils::app_time::{AppInstant, now};

#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;

/// The store as the app holds it: storage is chosen per target at startup.
pub type AppStore = ConfigStore<Box<dyn SnapshotStorage>>;

/// View preferences persisted by eframe between sessions.
/// The presentation content lives in its own slot (see `ConfigStore`).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewPrefs {
    pub muted: bool,
}

/// Options decided before the window opens (command line on native)
#[derive(Debug, Clone, Copy, Default)]
pub struct LaunchOptions {
    pub muted: bool,
}

pub struct QuietGratitudeApp {
    pub(super) store: AppStore,
    pub(super) navigator: Navigator,
    pub(super) prefs: ViewPrefs,
    pub(super) audio: Box<dyn AudioSurface>,

    // Editor state
    pub(super) editor_open: bool,
    pub(super) confirm_reset: bool,
    pub(super) armed_upload: Option<(MediaList, usize)>,

    // Effects
    pub(super) bursts: Vec<HeartBurst>,
    /// When the last transition landed; drives the fade-in of the new slide
    pub(super) arrived_at: Option<AppInstant>,
}

impl QuietGratitudeApp {
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        storage: Box<dyn SnapshotStorage>,
        launch: LaunchOptions,
    ) -> Self {
        // Attempt to load the persisted view preferences
        let mut prefs: ViewPrefs = cc
            .storage
            .and_then(|s| eframe::get_value(s, eframe::APP_KEY))
            .unwrap_or_default();

        #[cfg(debug_assertions)]
        if DEBUG_FLAGS.print_state_serde {
            log::info!("View preferences at startup: {:?}", prefs);
        }

        if launch.muted {
            prefs.muted = true;
        }

        Self::with_parts(ConfigStore::load(storage), prefs, default_surface())
    }

    /// Assembles the app from already-built parts.
    pub fn with_parts(store: AppStore, prefs: ViewPrefs, mut audio: Box<dyn AudioSurface>) -> Self {
        audio.set_sources(&store.config().audio);
        audio.set_muted(prefs.muted);

        Self {
            store,
            navigator: Navigator::new(),
            prefs,
            audio,
            editor_open: false,
            confirm_reset: false,
            armed_upload: None,
            bursts: Vec::new(),
            arrived_at: None,
        }
    }

    pub fn navigator(&self) -> &Navigator {
        &self.navigator
    }

    pub fn store(&self) -> &AppStore {
        &self.store
    }

    /// Performs the side effects the navigator asked for.
    pub(super) fn dispatch(&mut self, event: Option<NavEvent>) {
        let Some(event) = event else {
            return;
        };

        match event {
            NavEvent::Started => {
                self.audio.set_sources(&self.store.config().audio);
                self.audio.start_music(BG_MUSIC_VOLUME);
            }
            NavEvent::TransitionStarted { .. } => {
                if !self.prefs.muted {
                    self.audio.play_cue();
                }
            }
            NavEvent::Arrived(_) => {
                self.arrived_at = Some(now());
            }
            // The burst needs the click position, so the caller spawns it
            NavEvent::HiddenRevealed => {}
        }
    }

    pub(super) fn toggle_mute(&mut self) {
        self.prefs.muted = !self.prefs.muted;
        self.audio.set_muted(self.prefs.muted);
    }

    pub(super) fn handle_editor_events(&mut self, events: Vec<EditorEvent>) {
        for event in events {
            match event {
                EditorEvent::Edit(edit) => {
                    let removed = match &edit {
                        ConfigEdit::RemoveEntry(list, index) => Some((*list, *index)),
                        _ => None,
                    };
                    if self.store.apply(edit) {
                        if let Some(removed) = removed {
                            self.armed_upload = follow_removal(self.armed_upload, removed);
                        }
                    }
                }
                EditorEvent::ArmUpload(list, index) => self.armed_upload = Some((list, index)),
                EditorEvent::DisarmUpload => self.armed_upload = None,
            }
        }
        self.audio.set_sources(&self.store.config().audio);
    }

    /// Hard reset: defaults restored and every piece of derived state rebuilt,
    /// exactly as if the app had just been opened.
    pub(super) fn reset_everything(&mut self) {
        self.store.reset();
        self.navigator = Navigator::new();
        self.confirm_reset = false;
        self.armed_upload = None;
        self.bursts.clear();
        self.arrived_at = None;
        self.audio.pause_music();
        self.audio.set_sources(&self.store.config().audio);
    }
}

/// Keeps an armed upload on the same entry after another entry is removed.
/// Removing the armed entry itself disarms it.
fn follow_removal(
    armed: Option<(MediaList, usize)>,
    (removed_list, removed_index): (MediaList, usize),
) -> Option<(MediaList, usize)> {
    let (list, index) = armed?;
    if list != removed_list || removed_index > index {
        Some((list, index))
    } else if removed_index == index {
        None
    } else {
        Some((list, index - 1))
    }
}

impl eframe::App for QuietGratitudeApp {
    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        self.audio.pause_music();

        #[cfg(debug_assertions)]
        if DEBUG_FLAGS.print_shutdown {
            log::info!("Application shutdown complete.");
        }
    }

    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, eframe::APP_KEY, &self.prefs);
    }

    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        setup_custom_visuals(ctx);

        let now = now();
        let landed = self.navigator.tick(now);
        self.dispatch(landed);

        self.handle_global_shortcuts(ctx, now);
        self.handle_dropped_files(ctx);

        if self.editor_open {
            self.render_editor_panel(ctx);
        }
        if self.navigator.has_started() {
            self.render_nav_bar(ctx, now);
        }
        self.render_controls(ctx);
        self.render_central_panel(ctx, now);
        if self.confirm_reset {
            self.render_reset_dialog(ctx);
        }
        self.paint_bursts(ctx, now);

        self.schedule_repaint(ctx, now);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{CONFIG_STORAGE_KEY, TRANSITION_DELAY};
    use crate::domain::presentation::AudioConfig;
    use crate::domain::PresentationConfig;
    use std::cell::RefCell;
    use std::rc::Rc;
    use crate::engine::MemoryStorage;
    use crate::ui::audio::LoggingAudio;

    fn app() -> QuietGratitudeApp {
        let store = ConfigStore::load(Box::new(MemoryStorage::new()) as Box<dyn SnapshotStorage>);
        QuietGratitudeApp::with_parts(store, ViewPrefs::default(), Box::new(LoggingAudio::default()))
    }

    /// Shares a `LoggingAudio` with the test so calls made through the app stay visible.
    #[derive(Clone, Default)]
    struct SharedAudio(Rc<RefCell<LoggingAudio>>);

    impl AudioSurface for SharedAudio {
        fn set_sources(&mut self, audio: &AudioConfig) {
            self.0.borrow_mut().set_sources(audio);
        }
        fn play_cue(&mut self) {
            self.0.borrow_mut().play_cue();
        }
        fn start_music(&mut self, volume: f64) {
            self.0.borrow_mut().start_music(volume);
        }
        fn pause_music(&mut self) {
            self.0.borrow_mut().pause_music();
        }
        fn set_muted(&mut self, muted: bool) {
            self.0.borrow_mut().set_muted(muted);
        }
    }

    fn app_with_audio(muted: bool) -> (QuietGratitudeApp, SharedAudio) {
        let audio = SharedAudio::default();
        let store = ConfigStore::load(Box::new(MemoryStorage::new()) as Box<dyn SnapshotStorage>);
        let app = QuietGratitudeApp::with_parts(store, ViewPrefs { muted }, Box::new(audio.clone()));
        (app, audio)
    }

    fn begin_and_advance(app: &mut QuietGratitudeApp) {
        let begun = app.navigator.begin();
        app.dispatch(begun);
        let started = app.navigator.advance(now());
        app.dispatch(started);
    }

    #[test]
    fn editor_events_reach_the_store() {
        let mut app = app();
        app.handle_editor_events(vec![
            EditorEvent::Edit(ConfigEdit::AddEntry(MediaList::Videos)),
            EditorEvent::ArmUpload(MediaList::Videos, 1),
        ]);
        assert_eq!(app.store().config().videos.len(), 2);
        assert_eq!(app.armed_upload, Some((MediaList::Videos, 1)));

        // Removing the armed entry disarms the upload
        app.handle_editor_events(vec![EditorEvent::Edit(ConfigEdit::RemoveEntry(
            MediaList::Videos,
            1,
        ))]);
        assert_eq!(app.armed_upload, None);
    }

    #[test]
    fn armed_upload_follows_its_entry_when_an_earlier_one_is_removed() {
        let mut app = app();
        app.handle_editor_events(vec![EditorEvent::ArmUpload(MediaList::Photos, 1)]);
        assert_eq!(app.store().config().photos[1].label, "Soft light");

        app.handle_editor_events(vec![EditorEvent::Edit(ConfigEdit::RemoveEntry(
            MediaList::Photos,
            0,
        ))]);
        let (list, index) = app.armed_upload.unwrap();
        assert_eq!(list, MediaList::Photos);
        assert_eq!(app.store().config().photos[index].label, "Soft light");

        // Removals in the other list or after the armed entry leave it alone
        app.handle_editor_events(vec![
            EditorEvent::Edit(ConfigEdit::RemoveEntry(MediaList::Videos, 0)),
            EditorEvent::Edit(ConfigEdit::RemoveEntry(MediaList::Photos, 1)),
        ]);
        assert_eq!(app.armed_upload, Some((MediaList::Photos, 0)));

        // A rejected removal changes nothing
        app.handle_editor_events(vec![EditorEvent::Edit(ConfigEdit::RemoveEntry(
            MediaList::Photos,
            9,
        ))]);
        assert_eq!(app.armed_upload, Some((MediaList::Photos, 0)));
    }

    #[test]
    fn follow_removal_shifts_disarms_or_keeps() {
        let armed = Some((MediaList::Videos, 2));
        assert_eq!(follow_removal(armed, (MediaList::Videos, 0)), Some((MediaList::Videos, 1)));
        assert_eq!(follow_removal(armed, (MediaList::Videos, 2)), None);
        assert_eq!(follow_removal(armed, (MediaList::Videos, 3)), armed);
        assert_eq!(follow_removal(armed, (MediaList::Photos, 0)), armed);
        assert_eq!(follow_removal(None, (MediaList::Photos, 0)), None);
    }

    #[test]
    fn begin_starts_music_at_background_volume() {
        let (mut app, audio) = app_with_audio(false);
        let begun = app.navigator.begin();
        app.dispatch(begun);

        let audio = audio.0.borrow();
        assert!(audio.music_playing);
        assert_eq!(audio.volume, 0.35);
        assert_eq!(audio.sources, Some(AudioConfig::default()));
    }

    #[test]
    fn transition_cue_respects_mute() {
        let (mut unmuted, audio) = app_with_audio(false);
        begin_and_advance(&mut unmuted);
        assert_eq!(audio.0.borrow().cues_played, 1);

        let (mut muted, audio) = app_with_audio(true);
        begin_and_advance(&mut muted);
        assert!(muted.navigator().is_transitioning());
        assert_eq!(audio.0.borrow().cues_played, 0);
        assert!(audio.0.borrow().muted);

        // Requests inside the window are ignored, so no second cue either
        let (mut app, audio) = app_with_audio(false);
        begin_and_advance(&mut app);
        let ignored = app.navigator.advance(now());
        app.dispatch(ignored);
        assert_eq!(audio.0.borrow().cues_played, 1);
    }

    #[test]
    fn reset_pauses_music() {
        let (mut app, audio) = app_with_audio(false);
        begin_and_advance(&mut app);
        assert!(audio.0.borrow().music_playing);

        app.reset_everything();
        assert!(!audio.0.borrow().music_playing);
        assert!(!app.navigator().has_started());
    }

    #[test]
    fn reset_rebuilds_navigation_and_content() {
        let mut app = app();
        let t = now();
        let begun = app.navigator.begin();
        app.dispatch(begun);
        let started = app.navigator.advance(t);
        app.dispatch(started);
        app.navigator.tick(t + TRANSITION_DELAY);
        app.handle_editor_events(vec![EditorEvent::Edit(ConfigEdit::AddThought)]);
        assert!(app.store().storage().read(CONFIG_STORAGE_KEY).is_some());

        app.reset_everything();

        assert_eq!(*app.store().config(), PresentationConfig::default());
        assert!(app.store().storage().read(CONFIG_STORAGE_KEY).is_none());
        assert!(!app.navigator().has_started());
        assert_eq!(app.navigator().current_index(), 0);
    }

    #[test]
    fn mute_toggle_flips_preference() {
        let mut app = app();
        assert!(!app.prefs.muted);
        app.toggle_mute();
        assert!(app.prefs.muted);
        app.toggle_mute();
        assert!(!app.prefs.muted);
    }
}
