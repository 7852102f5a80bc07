//! Edits to the presentation tree.
//!
//! The editor panel produces [`ConfigEdit`] commands; [`ConfigEdit::apply_to`]
//! is the only code that mutates a tree in place. [`apply_path`] keeps the
//! older key-path style of update for callers that only have a path, but it
//! fails fast on anything that does not already exist in the tree.

use serde_json::Value;
use std::fmt;

use super::presentation::{NEW_THOUGHT_TEXT, Photo, PresentationConfig, Video};

/// Error types for config edits
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// An empty key path was supplied
    EmptyPath,
    /// The key path does not resolve to an existing field or element
    InvalidPath(String),
    /// The new value does not fit the shape of the field it replaces
    TypeMismatch { path: String, reason: String },
    /// The tree could not be converted to or from its JSON form
    Serialization(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::EmptyPath => write!(f, "Empty config path"),
            ConfigError::InvalidPath(path) => write!(f, "No config field at '{}'", path),
            ConfigError::TypeMismatch { path, reason } => {
                write!(f, "Value does not fit '{}': {}", path, reason)
            }
            ConfigError::Serialization(msg) => write!(f, "Config serialization failed: {}", msg),
        }
    }
}

impl std::error::Error for ConfigError {}

/// The two editable media lists
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum MediaList {
    Photos,
    Videos,
}

impl MediaList {
    pub fn len(self, config: &PresentationConfig) -> usize {
        match self {
            MediaList::Photos => config.photos.len(),
            MediaList::Videos => config.videos.len(),
        }
    }

    pub fn key(self) -> &'static str {
        match self {
            MediaList::Photos => "photos",
            MediaList::Videos => "videos",
        }
    }
}

impl fmt::Display for MediaList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Every scalar text leaf of the tree, audio URLs included.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, strum_macros::EnumIter)]
pub enum TextField {
    SlideSound,
    BgMusic,
    IntroHeading,
    IntroSubtext,
    AppreciationP1,
    AppreciationP2,
    GalleryTitle,
    VideoTitle,
    HiddenPrompt,
    HiddenMessage,
    HiddenFinal,
    ClosingLine1,
    ClosingLine2,
}

impl TextField {
    pub fn get(self, config: &PresentationConfig) -> &str {
        let m = &config.messages;
        match self {
            TextField::SlideSound => &config.audio.slide_sound,
            TextField::BgMusic => &config.audio.bg_music,
            TextField::IntroHeading => &m.intro.heading,
            TextField::IntroSubtext => &m.intro.subtext,
            TextField::AppreciationP1 => &m.appreciation.p1,
            TextField::AppreciationP2 => &m.appreciation.p2,
            TextField::GalleryTitle => &m.gallery_title,
            TextField::VideoTitle => &m.video_title,
            TextField::HiddenPrompt => &m.hidden.prompt,
            TextField::HiddenMessage => &m.hidden.message,
            TextField::HiddenFinal => &m.hidden.final_line,
            TextField::ClosingLine1 => &m.closing.line1,
            TextField::ClosingLine2 => &m.closing.line2,
        }
    }

    fn get_mut(self, config: &mut PresentationConfig) -> &mut String {
        let m = &mut config.messages;
        match self {
            TextField::SlideSound => &mut config.audio.slide_sound,
            TextField::BgMusic => &mut config.audio.bg_music,
            TextField::IntroHeading => &mut m.intro.heading,
            TextField::IntroSubtext => &mut m.intro.subtext,
            TextField::AppreciationP1 => &mut m.appreciation.p1,
            TextField::AppreciationP2 => &mut m.appreciation.p2,
            TextField::GalleryTitle => &mut m.gallery_title,
            TextField::VideoTitle => &mut m.video_title,
            TextField::HiddenPrompt => &mut m.hidden.prompt,
            TextField::HiddenMessage => &mut m.hidden.message,
            TextField::HiddenFinal => &mut m.hidden.final_line,
            TextField::ClosingLine1 => &mut m.closing.line1,
            TextField::ClosingLine2 => &mut m.closing.line2,
        }
    }

    /// Key path of the field in the serialized tree
    pub fn path(self) -> &'static [&'static str] {
        match self {
            TextField::SlideSound => &["audio", "slideSound"],
            TextField::BgMusic => &["audio", "bgMusic"],
            TextField::IntroHeading => &["messages", "intro", "heading"],
            TextField::IntroSubtext => &["messages", "intro", "subtext"],
            TextField::AppreciationP1 => &["messages", "appreciation", "p1"],
            TextField::AppreciationP2 => &["messages", "appreciation", "p2"],
            TextField::GalleryTitle => &["messages", "galleryTitle"],
            TextField::VideoTitle => &["messages", "videoTitle"],
            TextField::HiddenPrompt => &["messages", "hidden", "prompt"],
            TextField::HiddenMessage => &["messages", "hidden", "message"],
            TextField::HiddenFinal => &["messages", "hidden", "final"],
            TextField::ClosingLine1 => &["messages", "closing", "line1"],
            TextField::ClosingLine2 => &["messages", "closing", "line2"],
        }
    }

    /// Long-form fields get a multi-line editor
    pub fn is_multiline(self) -> bool {
        matches!(
            self,
            TextField::AppreciationP1 | TextField::AppreciationP2 | TextField::HiddenMessage
        )
    }
}

/// A single structural edit to the tree.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigEdit {
    SetText(TextField, String),
    SetThought(usize, String),
    AddThought,
    RemoveThought(usize),
    SetPhotoLabel(usize, String),
    SetVideoTitle(usize, String),
    /// Replace the url of an entry in either list (typed link or upload)
    SetMediaUrl(MediaList, usize, String),
    /// Append the list's placeholder entry
    AddEntry(MediaList),
    AddPhoto(Photo),
    AddVideo(Video),
    RemoveEntry(MediaList, usize),
}

impl ConfigEdit {
    /// Applies the edit in place. Returns `false`, leaving the tree untouched,
    /// when the target entry does not exist.
    pub fn apply_to(self, config: &mut PresentationConfig) -> bool {
        match self {
            ConfigEdit::SetText(field, text) => {
                *field.get_mut(config) = text;
                true
            }
            ConfigEdit::SetThought(index, text) => set_at(&mut config.messages.thoughts, index, text),
            ConfigEdit::AddThought => {
                config.messages.thoughts.push(NEW_THOUGHT_TEXT.to_string());
                true
            }
            ConfigEdit::RemoveThought(index) => remove_at(&mut config.messages.thoughts, index),
            ConfigEdit::SetPhotoLabel(index, label) => match config.photos.get_mut(index) {
                Some(photo) => {
                    photo.label = label;
                    true
                }
                None => false,
            },
            ConfigEdit::SetVideoTitle(index, title) => match config.videos.get_mut(index) {
                Some(video) => {
                    video.title = title;
                    true
                }
                None => false,
            },
            ConfigEdit::SetMediaUrl(list, index, url) => {
                let slot = match list {
                    MediaList::Photos => config.photos.get_mut(index).map(|p| &mut p.url),
                    MediaList::Videos => config.videos.get_mut(index).map(|v| &mut v.url),
                };
                match slot {
                    Some(slot) => {
                        *slot = url;
                        true
                    }
                    None => false,
                }
            }
            ConfigEdit::AddEntry(MediaList::Photos) => {
                config.photos.push(Photo::placeholder());
                true
            }
            ConfigEdit::AddEntry(MediaList::Videos) => {
                config.videos.push(Video::placeholder());
                true
            }
            ConfigEdit::AddPhoto(photo) => {
                config.photos.push(photo);
                true
            }
            ConfigEdit::AddVideo(video) => {
                config.videos.push(video);
                true
            }
            ConfigEdit::RemoveEntry(MediaList::Photos, index) => remove_at(&mut config.photos, index),
            ConfigEdit::RemoveEntry(MediaList::Videos, index) => remove_at(&mut config.videos, index),
        }
    }
}

fn set_at<T>(items: &mut [T], index: usize, value: T) -> bool {
    match items.get_mut(index) {
        Some(slot) => {
            *slot = value;
            true
        }
        None => false,
    }
}

// Vec::remove keeps the relative order of the remaining entries
fn remove_at<T>(items: &mut Vec<T>, index: usize) -> bool {
    if index < items.len() {
        items.remove(index);
        true
    } else {
        false
    }
}

/// Returns a copy of `config` with the value at `path` replaced.
///
/// Object keys must already exist and array indices must be in range; the
/// replaced tree must still deserialize. Nothing is created along the way.
pub fn apply_path(
    config: &PresentationConfig,
    path: &[&str],
    value: Value,
) -> Result<PresentationConfig, ConfigError> {
    let Some((last, parents)) = path.split_last() else {
        return Err(ConfigError::EmptyPath);
    };
    let joined = path.join(".");

    let mut tree =
        serde_json::to_value(config).map_err(|e| ConfigError::Serialization(e.to_string()))?;

    let mut current = &mut tree;
    for key in parents {
        current = child_mut(current, key).ok_or_else(|| ConfigError::InvalidPath(joined.clone()))?;
    }
    let slot = child_mut(current, last).ok_or_else(|| ConfigError::InvalidPath(joined.clone()))?;
    *slot = value;

    serde_json::from_value(tree).map_err(|e| ConfigError::TypeMismatch {
        path: joined,
        reason: e.to_string(),
    })
}

fn child_mut<'a>(node: &'a mut Value, key: &str) -> Option<&'a mut Value> {
    match node {
        Value::Object(map) => map.get_mut(key),
        Value::Array(items) => key.parse::<usize>().ok().and_then(|i| items.get_mut(i)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use strum::IntoEnumIterator;

    #[test]
    fn every_text_field_path_resolves_to_the_same_leaf() {
        let config = PresentationConfig::default();
        let tree = serde_json::to_value(&config).unwrap();
        for field in TextField::iter() {
            let mut node = &tree;
            for key in field.path() {
                node = &node[*key];
            }
            assert_eq!(node.as_str(), Some(field.get(&config)), "{:?}", field);
        }
    }

    #[test]
    fn set_text_then_path_update_agree() {
        let mut typed = PresentationConfig::default();
        assert!(ConfigEdit::SetText(TextField::ClosingLine2, "Bye".into()).apply_to(&mut typed));

        let by_path = apply_path(
            &PresentationConfig::default(),
            TextField::ClosingLine2.path(),
            json!("Bye"),
        )
        .unwrap();

        assert_eq!(typed, by_path);
    }

    #[test]
    fn out_of_range_edits_are_rejected_without_change() {
        let mut config = PresentationConfig::default();
        let before = config.clone();

        assert!(!ConfigEdit::SetThought(9, "x".into()).apply_to(&mut config));
        assert!(!ConfigEdit::RemoveThought(9).apply_to(&mut config));
        assert!(!ConfigEdit::SetPhotoLabel(3, "x".into()).apply_to(&mut config));
        assert!(!ConfigEdit::SetMediaUrl(MediaList::Videos, 1, "x".into()).apply_to(&mut config));
        assert!(!ConfigEdit::RemoveEntry(MediaList::Photos, 3).apply_to(&mut config));

        assert_eq!(config, before);
    }

    #[test]
    fn thoughts_can_be_added_edited_and_removed() {
        let mut config = PresentationConfig::default();
        assert!(ConfigEdit::AddThought.apply_to(&mut config));
        assert_eq!(config.messages.thoughts.last().map(String::as_str), Some(NEW_THOUGHT_TEXT));

        assert!(ConfigEdit::SetThought(2, "Third".into()).apply_to(&mut config));
        assert!(ConfigEdit::RemoveThought(0).apply_to(&mut config));
        assert_eq!(
            config.messages.thoughts,
            vec!["You’re definitely one of them.".to_string(), "Third".to_string()]
        );
    }

    #[test]
    fn path_into_missing_key_fails_fast() {
        let config = PresentationConfig::default();
        assert_eq!(
            apply_path(&config, &["messages", "outro", "line1"], json!("x")),
            Err(ConfigError::InvalidPath("messages.outro.line1".into()))
        );
        assert_eq!(
            apply_path(&config, &["photos", "7", "url"], json!("x")),
            Err(ConfigError::InvalidPath("photos.7.url".into()))
        );
        assert_eq!(apply_path(&config, &[], json!("x")), Err(ConfigError::EmptyPath));
    }

    #[test]
    fn path_update_with_wrong_shape_is_a_type_mismatch() {
        let config = PresentationConfig::default();
        let result = apply_path(&config, &["photos"], json!("not a list"));
        assert!(matches!(result, Err(ConfigError::TypeMismatch { .. })));
    }

    #[test]
    fn path_update_can_replace_a_whole_list() {
        let config = PresentationConfig::default();
        let updated = apply_path(
            &config,
            &["messages", "thoughts"],
            json!(["only one"]),
        )
        .unwrap();
        assert_eq!(updated.messages.thoughts, vec!["only one".to_string()]);
        assert_eq!(updated.photos, config.photos);
    }
}
