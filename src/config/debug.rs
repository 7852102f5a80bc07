//! Debugging feature flags.
//!
//! Toggle individual diagnostics here; keep them `false` by default so release
//! builds remain quiet even when compiled with `--features debug_assertions`.

pub struct DebugFlags {
    /// Emit navigator state changes (transition start/finish, ignored requests).
    pub print_navigation: bool,
    /// Emit every config edit applied by the store.
    pub print_config_edits: bool,
    /// Emit details of snapshot serialization/deserialization.
    pub print_state_serde: bool,
    /// Emit audio surface calls (useful on native where playback is a no-op).
    pub print_audio: bool,
    /// Emit shutdown app messages.
    pub print_shutdown: bool,
}

pub static DEBUG_FLAGS: DebugFlags = DebugFlags {
    print_navigation: false,
    print_config_edits: false,
    print_state_serde: false,
    print_audio: false,
    print_shutdown: false,
};
