// User interface components
pub mod app;
pub mod audio;
pub mod config;
pub mod effects;
pub mod styles;
pub mod ui_panels;
pub mod ui_render;
pub mod ui_text;
pub mod utils;

// Re-export main app
pub use app::{AppStore, LaunchOptions, QuietGratitudeApp, ViewPrefs};
pub use config::UI_CONFIG;
