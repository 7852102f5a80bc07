use eframe::egui::Color32;

pub use crate::ui::ui_text::{UI_TEXT, UiText};

/// UI Colors for consistent theming
#[derive(Clone, Copy, Default)]
pub struct UiColors {
    pub background: Color32,
    pub card: Color32,
    pub text: Color32,
    pub subdued: Color32,
    pub soft_pink: Color32,
    pub warm_rose: Color32,
    pub blush: Color32,
    pub editor_panel: Color32,
    pub danger: Color32,
}

/// Main UI configuration struct that holds all UI-related settings
#[derive(Default, Clone, Copy)]
pub struct UiConfig {
    pub colors: UiColors,
    pub heading_size: f32,
    pub body_size: f32,
    pub editor_width: f32,
    /// Longest url shown verbatim in the editor before it is summarised
    pub max_url_preview_chars: usize,
}

/// Global UI configuration instance
pub static UI_CONFIG: UiConfig = UiConfig {
    colors: UiColors {
        background: Color32::from_rgb(255, 248, 246),
        card: Color32::from_rgb(255, 255, 255),
        text: Color32::from_rgb(90, 74, 78),
        subdued: Color32::from_rgb(160, 146, 150),
        soft_pink: Color32::from_rgb(255, 183, 197), // #FFB7C5
        warm_rose: Color32::from_rgb(224, 122, 143),
        blush: Color32::from_rgb(250, 218, 221), // #FADADD
        editor_panel: Color32::from_rgb(255, 252, 251),
        danger: Color32::from_rgb(230, 110, 110),
    },
    heading_size: 40.0,
    body_size: 20.0,
    editor_width: 340.0,
    max_url_preview_chars: 48,
};
