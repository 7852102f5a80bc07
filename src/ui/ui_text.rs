//! User-facing strings that are not part of the editable content.

pub struct UiText {
    pub window_title: &'static str,
    pub begin_button: &'static str,
    pub begin_hint: &'static str,
    pub hidden_click_hint: &'static str,
    pub editor_heading: &'static str,
    pub editor_toggle: &'static str,
    pub section_audio: &'static str,
    pub section_photos: &'static str,
    pub section_videos: &'static str,
    pub section_intro: &'static str,
    pub section_appreciation: &'static str,
    pub section_titles: &'static str,
    pub section_thoughts: &'static str,
    pub section_hidden: &'static str,
    pub section_closing: &'static str,
    pub add_photo: &'static str,
    pub add_video: &'static str,
    pub add_thought: &'static str,
    pub upload: &'static str,
    pub upload_armed: &'static str,
    pub drop_hint: &'static str,
    pub reset_button: &'static str,
    pub reset_confirm: &'static str,
    pub reset_yes: &'static str,
    pub reset_no: &'static str,
    pub empty_photo: &'static str,
    pub empty_video: &'static str,
    pub persist_failed: &'static str,
    pub mute: &'static str,
    pub unmute: &'static str,
}

pub static UI_TEXT: UiText = UiText {
    window_title: "Quiet Gratitude",
    begin_button: "Begin",
    begin_hint: "Something small, made for you.",
    hidden_click_hint: "Tap to open",
    editor_heading: "Customize",
    editor_toggle: "✏ Customize",
    section_audio: "Audio",
    section_photos: "Moments",
    section_videos: "Fragments",
    section_intro: "Intro",
    section_appreciation: "Appreciation",
    section_titles: "Titles",
    section_thoughts: "Thoughts",
    section_hidden: "Hidden message",
    section_closing: "Closing",
    add_photo: "Add New Moment",
    add_video: "Add New Fragment",
    add_thought: "Add Line",
    upload: "Upload",
    upload_armed: "Drop a file…",
    drop_hint: "Drop a file anywhere on the window to use it here",
    reset_button: "Reset Space",
    reset_confirm: "Erase all changes?",
    reset_yes: "Erase",
    reset_no: "Keep",
    empty_photo: "No photo yet",
    empty_video: "No video yet",
    persist_failed: "Changes could not be saved",
    mute: "🔊",
    unmute: "🔇",
};
