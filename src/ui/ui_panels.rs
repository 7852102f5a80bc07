use eframe::egui::{Align, Button, Layout, RichText, TextEdit, Ui};

use crate::domain::media::is_data_url;
use crate::domain::{ConfigEdit, MediaList, PresentationConfig, TextField};
use crate::ui::config::{UI_CONFIG, UI_TEXT};
use crate::ui::styles::UiStyleExt;
use crate::ui::utils::{section_heading, url_preview};

/// Trait for UI panels that can be rendered
pub trait Panel {
    type Event;
    fn render(&mut self, ui: &mut Ui) -> Vec<Self::Event>;
}

#[derive(Debug, Clone, PartialEq)]
pub enum EditorEvent {
    Edit(ConfigEdit),
    /// The next dropped file should replace this entry's url
    ArmUpload(MediaList, usize),
    DisarmUpload,
}

/// Editor for one media list: url, caption, upload and remove per entry, plus "add".
pub struct MediaPanel<'a> {
    list: MediaList,
    config: &'a PresentationConfig,
    armed_upload: Option<(MediaList, usize)>,
}

impl<'a> MediaPanel<'a> {
    pub fn new(
        list: MediaList,
        config: &'a PresentationConfig,
        armed_upload: Option<(MediaList, usize)>,
    ) -> Self {
        Self {
            list,
            config,
            armed_upload,
        }
    }

    fn entry(&self, index: usize) -> (&'a str, &'a str) {
        let config = self.config;
        match self.list {
            MediaList::Photos => {
                let p = &config.photos[index];
                (p.url.as_str(), p.label.as_str())
            }
            MediaList::Videos => {
                let v = &config.videos[index];
                (v.url.as_str(), v.title.as_str())
            }
        }
    }

    fn caption_edit(&self, index: usize, text: String) -> ConfigEdit {
        match self.list {
            MediaList::Photos => ConfigEdit::SetPhotoLabel(index, text),
            MediaList::Videos => ConfigEdit::SetVideoTitle(index, text),
        }
    }

    fn render_entry(&self, ui: &mut Ui, index: usize, events: &mut Vec<EditorEvent>) {
        let (url, caption) = self.entry(index);
        let list = self.list;

        ui.group(|ui| {
            ui.horizontal(|ui| {
                ui.label_subdued(format!("#{}", index + 1));
                ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                    let remove =
                        Button::new(RichText::new("✕").color(UI_CONFIG.colors.danger)).frame(false);
                    if ui.add(remove).clicked() {
                        events.push(EditorEvent::Edit(ConfigEdit::RemoveEntry(list, index)));
                    }
                });
            });

            if is_data_url(url) {
                // Inline uploads are far too long to edit by hand
                ui.horizontal(|ui| {
                    ui.label_subdued(url_preview(url, UI_CONFIG.max_url_preview_chars));
                    if ui.small_button("Clear").clicked() {
                        events.push(EditorEvent::Edit(ConfigEdit::SetMediaUrl(
                            list,
                            index,
                            String::new(),
                        )));
                    }
                });
            } else {
                let mut link = url.to_string();
                let hint = match list {
                    MediaList::Photos => "Photo Link",
                    MediaList::Videos => "Video Link",
                };
                let response = ui.add(
                    TextEdit::singleline(&mut link)
                        .id_salt((list.key(), "url", index))
                        .hint_text(hint)
                        .desired_width(f32::INFINITY),
                );
                if response.changed() {
                    events.push(EditorEvent::Edit(ConfigEdit::SetMediaUrl(list, index, link)));
                }
            }

            let mut text = caption.to_string();
            let hint = match list {
                MediaList::Photos => "Moment Label",
                MediaList::Videos => "Fragment Title",
            };
            let response = ui.add(
                TextEdit::singleline(&mut text)
                    .id_salt((list.key(), "caption", index))
                    .hint_text(hint)
                    .desired_width(f32::INFINITY),
            );
            if response.changed() {
                events.push(EditorEvent::Edit(self.caption_edit(index, text)));
            }

            let armed = self.armed_upload == Some((list, index));
            let label = if armed { UI_TEXT.upload_armed } else { UI_TEXT.upload };
            if ui.selectable_label(armed, label).clicked() {
                events.push(if armed {
                    EditorEvent::DisarmUpload
                } else {
                    EditorEvent::ArmUpload(list, index)
                });
            }
            if armed {
                ui.label_subdued(UI_TEXT.drop_hint);
            }
        });
    }
}

impl<'a> Panel for MediaPanel<'a> {
    type Event = EditorEvent;

    fn render(&mut self, ui: &mut Ui) -> Vec<Self::Event> {
        let mut events = Vec::new();
        let (heading, add_label) = match self.list {
            MediaList::Photos => (UI_TEXT.section_photos, UI_TEXT.add_photo),
            MediaList::Videos => (UI_TEXT.section_videos, UI_TEXT.add_video),
        };
        section_heading(ui, heading);

        for index in 0..self.list.len(self.config) {
            self.render_entry(ui, index, &mut events);
            ui.add_space(4.0);
        }

        if ui.button(add_label).clicked() {
            events.push(EditorEvent::Edit(ConfigEdit::AddEntry(self.list)));
        }
        events
    }
}

/// Editor for every text leaf of the tree, thoughts included.
pub struct ContentPanel<'a> {
    config: &'a PresentationConfig,
}

impl<'a> ContentPanel<'a> {
    pub fn new(config: &'a PresentationConfig) -> Self {
        Self { config }
    }

    fn sections() -> [(&'static str, &'static [TextField]); 6] {
        [
            (UI_TEXT.section_audio, &[TextField::SlideSound, TextField::BgMusic]),
            (UI_TEXT.section_intro, &[TextField::IntroHeading, TextField::IntroSubtext]),
            (UI_TEXT.section_appreciation, &[TextField::AppreciationP1, TextField::AppreciationP2]),
            (UI_TEXT.section_titles, &[TextField::GalleryTitle, TextField::VideoTitle]),
            (
                UI_TEXT.section_hidden,
                &[TextField::HiddenPrompt, TextField::HiddenMessage, TextField::HiddenFinal],
            ),
            (UI_TEXT.section_closing, &[TextField::ClosingLine1, TextField::ClosingLine2]),
        ]
    }

    fn field_label(field: TextField) -> &'static str {
        match field {
            TextField::SlideSound => "Slide sound",
            TextField::BgMusic => "Background music",
            TextField::IntroHeading => "Heading",
            TextField::IntroSubtext => "Subtext",
            TextField::AppreciationP1 => "First paragraph",
            TextField::AppreciationP2 => "Second paragraph",
            TextField::GalleryTitle => "Gallery title",
            TextField::VideoTitle => "Video title",
            TextField::HiddenPrompt => "Prompt",
            TextField::HiddenMessage => "Message",
            TextField::HiddenFinal => "Final line",
            TextField::ClosingLine1 => "First line",
            TextField::ClosingLine2 => "Second line",
        }
    }

    fn render_field(&self, ui: &mut Ui, field: TextField, events: &mut Vec<EditorEvent>) {
        ui.label_subdued(Self::field_label(field));
        let mut text = field.get(self.config).to_string();
        let edit = if field.is_multiline() {
            TextEdit::multiline(&mut text).desired_rows(3)
        } else {
            TextEdit::singleline(&mut text)
        };
        let response = ui.add(edit.id_salt(("text", field.path())).desired_width(f32::INFINITY));
        if response.changed() {
            events.push(EditorEvent::Edit(ConfigEdit::SetText(field, text)));
        }
    }

    fn render_thoughts(&self, ui: &mut Ui, events: &mut Vec<EditorEvent>) {
        section_heading(ui, UI_TEXT.section_thoughts);
        for (index, line) in self.config.messages.thoughts.iter().enumerate() {
            ui.horizontal(|ui| {
                let mut text = line.clone();
                let response = ui.add(
                    TextEdit::singleline(&mut text)
                        .id_salt(("thought", index))
                        .desired_width(ui.available_width() - 28.0),
                );
                if response.changed() {
                    events.push(EditorEvent::Edit(ConfigEdit::SetThought(index, text)));
                }
                let remove =
                    Button::new(RichText::new("✕").color(UI_CONFIG.colors.danger)).frame(false);
                if ui.add(remove).clicked() {
                    events.push(EditorEvent::Edit(ConfigEdit::RemoveThought(index)));
                }
            });
        }
        if ui.button(UI_TEXT.add_thought).clicked() {
            events.push(EditorEvent::Edit(ConfigEdit::AddThought));
        }
    }
}

impl<'a> Panel for ContentPanel<'a> {
    type Event = EditorEvent;

    fn render(&mut self, ui: &mut Ui) -> Vec<Self::Event> {
        let mut events = Vec::new();
        for (heading, fields) in Self::sections() {
            section_heading(ui, heading);
            for field in fields {
                self.render_field(ui, *field, &mut events);
            }
            // Thoughts sit between the titles and the hidden message, as on the slides
            if heading == UI_TEXT.section_titles {
                self.render_thoughts(ui, &mut events);
            }
        }
        events
    }
}
