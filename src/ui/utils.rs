use eframe::egui::{Context, Ui, Visuals};

use crate::domain::media::is_data_url;
use crate::ui::config::UI_CONFIG;
use crate::ui::styles::UiStyleExt;

/// Sets up custom visuals for the entire application
pub fn setup_custom_visuals(ctx: &Context) {
    let mut visuals = Visuals::light();

    visuals.panel_fill = UI_CONFIG.colors.background;
    visuals.window_fill = UI_CONFIG.colors.editor_panel;
    visuals.extreme_bg_color = UI_CONFIG.colors.card;

    visuals.widgets.noninteractive.fg_stroke.color = UI_CONFIG.colors.text;
    visuals.widgets.inactive.fg_stroke.color = UI_CONFIG.colors.warm_rose;
    visuals.widgets.hovered.fg_stroke.color = UI_CONFIG.colors.warm_rose;
    visuals.widgets.active.fg_stroke.color = UI_CONFIG.colors.warm_rose;
    visuals.selection.bg_fill = UI_CONFIG.colors.blush;

    ctx.set_visuals(visuals);
}

/// Creates a section heading with standard spacing
pub fn section_heading(ui: &mut Ui, text: impl Into<String>) {
    ui.add_space(12.0);
    ui.label_header(text);
    ui.add_space(4.0);
}

/// Creates a separator with standard spacing
pub fn spaced_separator(ui: &mut Ui) {
    ui.add_space(10.0);
    ui.separator();
    ui.add_space(10.0);
}

/// Short, display-safe form of a media url.
/// Inline uploads become "inline image/png, 12.3 KB"; long links are cut in the middle.
pub fn url_preview(url: &str, max_chars: usize) -> String {
    if is_data_url(url) {
        let mime = url
            .trim_start_matches("data:")
            .split([';', ','])
            .next()
            .unwrap_or("");
        // Base64 carries 3 bytes per 4 characters
        let payload = url.split_once(',').map(|(_, p)| p.len()).unwrap_or(0);
        return format!("inline {}, {:.1} KB", mime, (payload * 3 / 4) as f64 / 1024.0);
    }

    let chars: Vec<char> = url.chars().collect();
    if chars.len() <= max_chars {
        return url.to_string();
    }
    let half = max_chars.saturating_sub(1) / 2;
    let head: String = chars[..half].iter().collect();
    let tail: String = chars[chars.len() - half..].iter().collect();
    format!("{}…{}", head, tail)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_urls_are_unchanged() {
        assert_eq!(url_preview("https://a.b/c.png", 48), "https://a.b/c.png");
    }

    #[test]
    fn long_urls_are_cut_in_the_middle() {
        let url = "https://example.com/a/very/long/path/to/some/image.png";
        let preview = url_preview(url, 21);
        assert_eq!(preview, "https://ex…/image.png");
    }

    #[test]
    fn data_urls_are_summarised() {
        let preview = url_preview("data:image/png;base64,AAAA", 48);
        assert_eq!(preview, "inline image/png, 0.0 KB");
    }
}
