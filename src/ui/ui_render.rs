use anyhow::{Context as _, Result};
use eframe::egui::{
    Align, Align2, Button, CentralPanel, Context, DroppedFile, Frame, Id, Key, LayerId, Layout,
    Margin, Order, RichText, ScrollArea, Sense, SidePanel, TopBottomPanel, Ui, Vec2, Window, vec2,
};
use std::time::Duration;

use crate::config::TOTAL_SLIDES;
use crate::domain::media::is_data_url;
use crate::domain::{MediaList, PresentationConfig, Slide};
use crate::engine::{NavKey, Phase};
use crate::ui::config::{UI_CONFIG, UI_TEXT};
use crate::ui::effects::HeartBurst;
use crate::ui::styles::UiStyleExt;
use crate::ui::ui_panels::{ContentPanel, MediaPanel, Panel};
use crate::ui::utils::{spaced_separator, url_preview};
use crate::utils::app_time::{AppInstant, elapsed_between};
use crate::utils::maths_utils::ease_in_out;

use super::app::QuietGratitudeApp;

#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;

/// How long a freshly landed slide takes to fade in
const FADE_IN: Duration = Duration::from_millis(300);

impl QuietGratitudeApp {
    pub(super) fn render_central_panel(&mut self, ctx: &Context, now: AppInstant) {
        let frame = Frame::new()
            .fill(UI_CONFIG.colors.background)
            .inner_margin(Margin::symmetric(48, 32));
        CentralPanel::default().frame(frame).show(ctx, |ui| {
            if !self.navigator.has_started() {
                self.render_start_screen(ui);
                return;
            }

            // The origin slide fades out during a transition, the target fades in after it lands
            let opacity = match self.navigator.phase() {
                Phase::Transitioning { .. } => {
                    1.0 - ease_in_out(self.navigator.transition_progress(now))
                }
                Phase::Idle(_) => self.fade_in_opacity(now),
            };
            ui.set_opacity(opacity);

            let config = self.store.snapshot();
            let slide = self.navigator.current_slide();
            ScrollArea::vertical().id_salt("slide").show(ui, |ui| {
                ui.with_layout(Layout::top_down(Align::Center), |ui| {
                    ui.add_space(24.0);
                    self.render_slide(ui, slide, &config, now);
                });
            });
        });
    }

    fn fade_in_opacity(&self, now: AppInstant) -> f32 {
        match self.arrived_at {
            Some(at) => {
                ease_in_out(elapsed_between(at, now).as_secs_f32() / FADE_IN.as_secs_f32())
            }
            None => 1.0,
        }
    }

    fn render_start_screen(&mut self, ui: &mut Ui) {
        ui.with_layout(Layout::top_down(Align::Center), |ui| {
            ui.add_space(ui.available_height() * 0.3);
            ui.label_accent(UI_TEXT.begin_hint, UI_CONFIG.colors.warm_rose);
            ui.add_space(16.0);
            let begin = Button::new(RichText::new(UI_TEXT.begin_button).size(UI_CONFIG.body_size))
                .fill(UI_CONFIG.colors.blush)
                .min_size(vec2(160.0, 44.0));
            if ui.add(begin).clicked() {
                let event = self.navigator.begin();
                self.dispatch(event);
            }
        });
    }

    fn render_slide(
        &mut self,
        ui: &mut Ui,
        slide: Slide,
        config: &PresentationConfig,
        now: AppInstant,
    ) {
        let messages = &config.messages;
        match slide {
            Slide::Intro => {
                ui.add_space(60.0);
                ui.slide_heading(&messages.intro.heading);
                ui.add_space(12.0);
                ui.label_accent(&messages.intro.subtext, UI_CONFIG.colors.subdued);
            }
            Slide::Appreciation => {
                ui.add_space(40.0);
                ui.slide_body(&messages.appreciation.p1);
                ui.add_space(16.0);
                ui.slide_body(&messages.appreciation.p2);
            }
            Slide::Gallery => {
                ui.slide_heading(&messages.gallery_title);
                ui.add_space(16.0);
                ui.horizontal_wrapped(|ui| {
                    for photo in &config.photos {
                        media_card(ui, &photo.url, &photo.label, UI_TEXT.empty_photo);
                    }
                });
            }
            Slide::Videos => {
                ui.slide_heading(&messages.video_title);
                ui.add_space(16.0);
                ui.horizontal_wrapped(|ui| {
                    for video in &config.videos {
                        media_card(ui, &video.url, &video.title, UI_TEXT.empty_video);
                    }
                });
            }
            Slide::Thoughts => {
                ui.add_space(40.0);
                for line in &messages.thoughts {
                    ui.label_accent(line, UI_CONFIG.colors.text);
                    ui.add_space(10.0);
                }
            }
            Slide::HiddenReveal => self.render_hidden_reveal(ui, config, now),
            Slide::Closing => {
                ui.add_space(60.0);
                ui.slide_heading(&messages.closing.line1);
                ui.add_space(12.0);
                ui.label_accent(&messages.closing.line2, UI_CONFIG.colors.warm_rose);
            }
        }
    }

    fn render_hidden_reveal(&mut self, ui: &mut Ui, config: &PresentationConfig, now: AppInstant) {
        let hidden = &config.messages.hidden;
        ui.add_space(40.0);

        if self.navigator.hidden_revealed() {
            ui.slide_body(&hidden.message);
            ui.add_space(16.0);
            ui.label_accent(&hidden.final_line, UI_CONFIG.colors.warm_rose);
            return;
        }

        let surface = Frame::new()
            .fill(UI_CONFIG.colors.card)
            .stroke((1.0, UI_CONFIG.colors.blush))
            .corner_radius(16.0)
            .inner_margin(Margin::same(32))
            .show(ui, |ui| {
                ui.slide_body(&hidden.prompt);
                ui.add_space(8.0);
                ui.label_subdued(UI_TEXT.hidden_click_hint);
            });

        let response = surface.response.interact(Sense::click());
        if response.clicked() {
            let origin = response
                .interact_pointer_pos()
                .unwrap_or_else(|| response.rect.center());
            if self.navigator.reveal_hidden().is_some() {
                self.bursts.push(HeartBurst::new(origin, now));
            }
        }
    }

    pub(super) fn render_nav_bar(&mut self, ctx: &Context, now: AppInstant) {
        let frame = Frame::new()
            .fill(UI_CONFIG.colors.background)
            .inner_margin(Margin::symmetric(16, 10));
        TopBottomPanel::bottom("nav_bar").frame(frame).show(ctx, |ui| {
            let mut prev = false;
            let mut next = false;
            let mut jump = None;

            ui.horizontal(|ui| {
                // Centre the row: three buttons plus one dot per slide
                let row_width = 2.0 * 36.0 + TOTAL_SLIDES as f32 * 22.0;
                ui.add_space(((ui.available_width() - row_width) / 2.0).max(0.0));

                prev = ui
                    .add_enabled(self.navigator.can_retreat(), Button::new("◀"))
                    .clicked();

                let current = self.navigator.current_index();
                for index in 0..TOTAL_SLIDES {
                    let color = if index == current {
                        UI_CONFIG.colors.warm_rose
                    } else {
                        UI_CONFIG.colors.blush
                    };
                    let dot = Button::new(RichText::new("●").color(color)).frame(false);
                    let hover = Slide::from_index(index).unwrap_or(Slide::FIRST).to_string();
                    let response = ui
                        .add_enabled(!self.navigator.is_transitioning(), dot)
                        .on_hover_text(hover);
                    if response.clicked() {
                        jump = Some(index);
                    }
                }

                next = ui
                    .add_enabled(self.navigator.can_advance(), Button::new("▶"))
                    .clicked();
            });

            let event = if prev {
                self.navigator.retreat(now)
            } else if next {
                self.navigator.advance(now)
            } else if let Some(index) = jump {
                self.navigator.jump_to(index, now)
            } else {
                None
            };
            self.dispatch(event);
        });
    }

    /// Editor toggle and mute button, pinned to the top-right corner.
    pub(super) fn render_controls(&mut self, ctx: &Context) {
        eframe::egui::Area::new(Id::new("controls"))
            .anchor(Align2::RIGHT_TOP, vec2(-16.0, 12.0))
            .order(Order::Foreground)
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    let mute_label = if self.prefs.muted {
                        UI_TEXT.unmute
                    } else {
                        UI_TEXT.mute
                    };
                    if ui.button(mute_label).clicked() {
                        self.toggle_mute();
                    }
                    if ui.selectable_label(self.editor_open, UI_TEXT.editor_toggle).clicked() {
                        self.editor_open = !self.editor_open;
                    }
                });
            });
    }

    pub(super) fn render_editor_panel(&mut self, ctx: &Context) {
        let frame = Frame::new()
            .fill(UI_CONFIG.colors.editor_panel)
            .inner_margin(Margin::symmetric(12, 8));
        let config = self.store.snapshot();
        let mut events = Vec::new();
        let mut reset_clicked = false;

        SidePanel::right("editor_panel")
            .default_width(UI_CONFIG.editor_width)
            .frame(frame)
            .show(ctx, |ui| {
                ui.label_accent(UI_TEXT.editor_heading, UI_CONFIG.colors.warm_rose);
                if let Some(err) = self.store.last_persist_error() {
                    ui.label_error(format!("{}: {}", UI_TEXT.persist_failed, err));
                }

                ScrollArea::vertical().id_salt("editor_scroll").show(ui, |ui| {
                    events.extend(ContentPanel::new(&config).render(ui));
                    spaced_separator(ui);
                    events.extend(
                        MediaPanel::new(MediaList::Photos, &config, self.armed_upload).render(ui),
                    );
                    spaced_separator(ui);
                    events.extend(
                        MediaPanel::new(MediaList::Videos, &config, self.armed_upload).render(ui),
                    );
                    spaced_separator(ui);

                    let reset = Button::new(
                        RichText::new(UI_TEXT.reset_button).color(UI_CONFIG.colors.danger),
                    );
                    reset_clicked = ui.add(reset).clicked();
                    ui.add_space(12.0);
                });
            });

        if !events.is_empty() {
            #[cfg(debug_assertions)]
            if DEBUG_FLAGS.print_config_edits {
                log::info!("[editor] {:?}", events);
            }
            self.handle_editor_events(events);
        }
        if reset_clicked {
            self.confirm_reset = true;
        }
    }

    pub(super) fn render_reset_dialog(&mut self, ctx: &Context) {
        let mut confirmed = false;
        let mut cancelled = false;

        Window::new(UI_TEXT.reset_button)
            .collapsible(false)
            .resizable(false)
            .anchor(Align2::CENTER_CENTER, Vec2::ZERO)
            .show(ctx, |ui| {
                ui.label(UI_TEXT.reset_confirm);
                ui.add_space(8.0);
                ui.horizontal(|ui| {
                    confirmed = ui
                        .button(RichText::new(UI_TEXT.reset_yes).color(UI_CONFIG.colors.danger))
                        .clicked();
                    cancelled = ui.button(UI_TEXT.reset_no).clicked();
                });
            });

        if confirmed {
            self.reset_everything();
        } else if cancelled {
            self.confirm_reset = false;
        }
    }

    pub(super) fn paint_bursts(&mut self, ctx: &Context, now: AppInstant) {
        self.bursts.retain(|burst| !burst.is_finished(now));
        if self.bursts.is_empty() {
            return;
        }
        let painter = ctx.layer_painter(LayerId::new(Order::Foreground, Id::new("heart_bursts")));
        for burst in &self.bursts {
            burst.paint(&painter, now);
        }
    }

    pub(super) fn schedule_repaint(&self, ctx: &Context, now: AppInstant) {
        let fading_in = self
            .arrived_at
            .is_some_and(|at| elapsed_between(at, now) < FADE_IN);

        // Guarantees a frame at the moment the transition lands
        if let Some(left) = self.navigator.remaining(now) {
            ctx.request_repaint_after(left);
        }
        if self.navigator.is_transitioning() || fading_in || !self.bursts.is_empty() {
            ctx.request_repaint();
        }
    }

    pub(super) fn handle_global_shortcuts(&mut self, ctx: &Context, now: AppInstant) {
        let text_focused = ctx.wants_keyboard_input();
        let (keys, escape) = ctx.input(|i| {
            let mut keys = Vec::new();
            if i.key_pressed(Key::ArrowRight) {
                keys.push(NavKey::ArrowRight);
            }
            if i.key_pressed(Key::ArrowLeft) {
                keys.push(NavKey::ArrowLeft);
            }
            if i.key_pressed(Key::Space) {
                keys.push(NavKey::Space);
            }
            if i.key_pressed(Key::Enter) {
                keys.push(NavKey::Enter);
            }
            (keys, i.key_pressed(Key::Escape))
        });

        for key in keys {
            let event = self.navigator.handle_key(key, text_focused, now);
            self.dispatch(event);
        }

        if escape {
            if self.confirm_reset {
                self.confirm_reset = false;
            } else if self.editor_open {
                self.editor_open = false;
                self.armed_upload = None;
            }
        }
    }

    /// Routes the first dropped file to the armed upload slot, if any.
    pub(super) fn handle_dropped_files(&mut self, ctx: &Context) {
        let dropped = ctx.input(|i| i.raw.dropped_files.clone());
        let Some(file) = dropped.first() else {
            return;
        };
        let Some((list, index)) = self.armed_upload.take() else {
            log::info!("Ignoring dropped file '{}': no upload armed", file.name);
            return;
        };

        match read_dropped_file(file) {
            Ok(bytes) => {
                let mime = (!file.mime.is_empty()).then_some(file.mime.as_str());
                if !self.store.replace_media_from_upload(list, index, &bytes, mime) {
                    log::warn!("Upload target {} #{} no longer exists", list, index + 1);
                }
            }
            Err(e) => log::warn!("Upload failed: {:#}", e),
        }
    }
}

/// A photo or video entry on its slide. Media is opened in the browser or
/// system viewer; inline uploads are summarised.
fn media_card(ui: &mut Ui, url: &str, caption: &str, empty_text: &str) {
    Frame::new()
        .fill(UI_CONFIG.colors.card)
        .stroke((1.0, UI_CONFIG.colors.blush))
        .corner_radius(12.0)
        .inner_margin(Margin::same(14))
        .show(ui, |ui| {
            ui.set_width(200.0);
            ui.vertical(|ui| {
                if url.is_empty() {
                    ui.label_subdued(empty_text);
                } else if is_data_url(url) {
                    ui.label_subdued(url_preview(url, UI_CONFIG.max_url_preview_chars));
                } else {
                    ui.hyperlink_to("♥ open", url);
                }
                ui.add_space(6.0);
                ui.label_accent(caption, UI_CONFIG.colors.warm_rose);
            });
        });
}

/// Web drops carry bytes; native drops carry a path to read.
fn read_dropped_file(file: &DroppedFile) -> Result<Vec<u8>> {
    if let Some(bytes) = &file.bytes {
        return Ok(bytes.to_vec());
    }
    match &file.path {
        Some(path) => {
            std::fs::read(path).with_context(|| format!("Failed to read dropped file {:?}", path))
        }
        None => anyhow::bail!("Dropped file '{}' carried no data", file.name),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn dropped_bytes_are_used_directly() {
        let file = DroppedFile {
            name: "heart.png".to_string(),
            bytes: Some(Arc::from(vec![1u8, 2, 3].into_boxed_slice())),
            ..Default::default()
        };
        assert_eq!(read_dropped_file(&file).unwrap(), vec![1, 2, 3]);
    }

    #[test]
    fn dropped_path_is_read_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("clip.webm");
        std::fs::write(&path, [0x1A, 0x45, 0xDF, 0xA3]).unwrap();

        let file = DroppedFile {
            path: Some(path),
            ..Default::default()
        };
        assert_eq!(read_dropped_file(&file).unwrap(), vec![0x1A, 0x45, 0xDF, 0xA3]);
    }

    #[test]
    fn empty_drop_is_an_error() {
        let file = DroppedFile {
            name: "ghost".to_string(),
            ..Default::default()
        };
        let err = read_dropped_file(&file).unwrap_err();
        assert!(err.to_string().contains("ghost"));
    }
}
