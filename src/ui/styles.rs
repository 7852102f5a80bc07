use eframe::egui::{Color32, RichText, Ui};
use crate::ui::config::UI_CONFIG;

/// Extension trait to add semantic styling methods directly to `egui::Ui`.
pub trait UiStyleExt {
    /// Renders small, muted text (hints, captions).
    fn label_subdued(&mut self, text: impl Into<String>);

    /// Renders a large italic serif-like slide heading.
    fn slide_heading(&mut self, text: impl Into<String>);

    /// Renders body copy at slide size.
    fn slide_body(&mut self, text: impl Into<String>);

    /// Renders an editor section header.
    fn label_header(&mut self, text: impl Into<String>);

    /// Renders an error message.
    fn label_error(&mut self, text: impl Into<String>);

    /// Renders a caption in the accent color.
    fn label_accent(&mut self, text: impl Into<String>, color: Color32);
}

impl UiStyleExt for Ui {
    fn label_subdued(&mut self, text: impl Into<String>) {
        self.label(RichText::new(text).small().color(UI_CONFIG.colors.subdued));
    }

    fn slide_heading(&mut self, text: impl Into<String>) {
        self.label(
            RichText::new(text)
                .size(UI_CONFIG.heading_size)
                .italics()
                .color(UI_CONFIG.colors.text),
        );
    }

    fn slide_body(&mut self, text: impl Into<String>) {
        self.label(
            RichText::new(text)
                .size(UI_CONFIG.body_size)
                .color(UI_CONFIG.colors.text),
        );
    }

    fn label_header(&mut self, text: impl Into<String>) {
        let text = text.into().to_uppercase();
        self.label(RichText::new(text).small().strong().color(UI_CONFIG.colors.warm_rose));
    }

    fn label_error(&mut self, text: impl Into<String>) {
        self.label(RichText::new(text).small().color(UI_CONFIG.colors.danger));
    }

    fn label_accent(&mut self, text: impl Into<String>, color: Color32) {
        self.label(RichText::new(text).italics().color(color));
    }
}
