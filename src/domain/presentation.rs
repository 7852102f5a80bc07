//! The editable content tree behind every slide.
//!
//! Field names serialize in camelCase so snapshots written by the web build
//! (`slideSound`, `galleryTitle`, ...) load unchanged. Every struct carries
//! `#[serde(default)]`: a snapshot written before a field existed is merged
//! into the built-in default instead of being rejected.

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PresentationConfig {
    pub audio: AudioConfig,
    pub messages: Messages,
    pub photos: Vec<Photo>,
    pub videos: Vec<Video>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AudioConfig {
    pub slide_sound: String,
    pub bg_music: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Messages {
    pub intro: Intro,
    pub appreciation: Appreciation,
    pub gallery_title: String,
    pub video_title: String,
    pub thoughts: Vec<String>,
    pub hidden: HiddenMessage,
    pub closing: Closing,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Intro {
    pub heading: String,
    pub subtext: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Appreciation {
    pub p1: String,
    pub p2: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HiddenMessage {
    pub prompt: String,
    pub message: String,
    #[serde(rename = "final")]
    pub final_line: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Closing {
    pub line1: String,
    pub line2: String,
}

/// One gallery entry. `url` may be a remote link or an inline data URL.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Photo {
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub label: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Video {
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub title: String,
}

/// Text used for a thought line added from the editor
pub const NEW_THOUGHT_TEXT: &str = "New thought line";

impl Photo {
    pub fn new(url: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            label: label.into(),
        }
    }

    /// Entry appended by "Add New Moment"
    pub fn placeholder() -> Self {
        Self::new("", "New Memory")
    }
}

impl Video {
    pub fn new(url: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            title: title.into(),
        }
    }

    /// Entry appended by "Add New Fragment"
    pub fn placeholder() -> Self {
        Self::new("", "New Fragment")
    }
}

impl Default for PresentationConfig {
    fn default() -> Self {
        Self {
            audio: AudioConfig::default(),
            messages: Messages::default(),
            photos: vec![
                Photo::new(
                    "https://images.unsplash.com/photo-1516726817505-f5ed825624d8?q=80&w=800&auto=format&fit=crop",
                    "A quiet morning",
                ),
                Photo::new(
                    "https://images.unsplash.com/photo-1544717305-2782549b5136?q=80&w=800&auto=format&fit=crop",
                    "Soft light",
                ),
                Photo::new(
                    "https://images.unsplash.com/photo-1509631179647-0177331693ae?q=80&w=800&auto=format&fit=crop",
                    "Shared laughter",
                ),
            ],
            videos: vec![Video::new(
                "https://assets.mixkit.co/videos/preview/mixkit-sun-shining-through-tree-leaves-2311-large.mp4",
                "Peaceful trees",
            )],
        }
    }
}

impl Default for AudioConfig {
    fn default() -> Self {
        Self {
            slide_sound: "https://assets.mixkit.co/active_storage/sfx/2568/2568-preview.mp3"
                .to_string(),
            bg_music: "https://cdn.pixabay.com/audio/2022/05/27/audio_180873747b.mp3".to_string(),
        }
    }
}

impl Default for Messages {
    fn default() -> Self {
        Self {
            intro: Intro::default(),
            appreciation: Appreciation::default(),
            gallery_title: "Gathered Moments".to_string(),
            video_title: "Living Fragments".to_string(),
            thoughts: vec![
                "Some people make things lighter.".to_string(),
                "You’re definitely one of them.".to_string(),
            ],
            hidden: HiddenMessage::default(),
            closing: Closing::default(),
        }
    }
}

impl Default for Intro {
    fn default() -> Self {
        Self {
            heading: "I wanted to say a few things.".to_string(),
            subtext: "So I made this.".to_string(),
        }
    }
}

impl Default for Appreciation {
    fn default() -> Self {
        Self {
            p1: "In a world that often feels too loud and too fast, you have this rare gift of making life feel quiet, meaningful, and soft.".to_string(),
            p2: "I built this space specifically for you. Not because I had to, but because I wanted you to have a small, permanent reminder of how much your presence matters.".to_string(),
        }
    }
}

impl Default for HiddenMessage {
    fn default() -> Self {
        Self {
            prompt: "One more thing...".to_string(),
            message: "You are more than the sum of your days. You are a light that matters to the people lucky enough to see it.".to_string(),
            final_line: "— You are enough.".to_string(),
        }
    }
}

impl Default for Closing {
    fn default() -> Self {
        Self {
            line1: "This isn’t everything.".to_string(),
            line2: "It’s just something I wanted you to have.".to_string(),
        }
    }
}

impl PresentationConfig {
    /// Parses a persisted snapshot. Missing fields take their default values.
    pub fn from_snapshot(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    pub fn to_snapshot(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_serializes_with_camel_case_names() {
        let value = serde_json::to_value(PresentationConfig::default()).unwrap();

        assert!(value["audio"]["slideSound"].is_string());
        assert!(value["audio"]["bgMusic"].is_string());
        assert_eq!(value["messages"]["galleryTitle"], "Gathered Moments");
        assert_eq!(value["messages"]["hidden"]["final"], "— You are enough.");
        assert_eq!(value["messages"]["thoughts"].as_array().unwrap().len(), 2);
        assert_eq!(value["photos"][1]["label"], "Soft light");
        assert_eq!(value["videos"][0]["title"], "Peaceful trees");
    }

    #[test]
    fn partial_snapshot_is_merged_into_defaults() {
        let snapshot = r#"{"messages":{"intro":{"heading":"Hello"}},"photos":[]}"#;
        let config = PresentationConfig::from_snapshot(snapshot).unwrap();

        assert_eq!(config.messages.intro.heading, "Hello");
        assert_eq!(config.messages.intro.subtext, Intro::default().subtext);
        assert_eq!(config.audio, AudioConfig::default());
        assert!(config.photos.is_empty());
        assert_eq!(config.videos, PresentationConfig::default().videos);
    }

    #[test]
    fn wrong_field_type_is_rejected() {
        let snapshot = r#"{"photos":"not a list"}"#;
        assert!(PresentationConfig::from_snapshot(snapshot).is_err());
    }

    #[test]
    fn snapshot_round_trips() {
        let mut config = PresentationConfig::default();
        config.messages.thoughts.push("Third".to_string());
        let text = config.to_snapshot().unwrap();
        assert_eq!(PresentationConfig::from_snapshot(&text).unwrap(), config);
    }
}
