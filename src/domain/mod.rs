// Domain types: the content tree, the slide sequence and edits to the tree
pub mod edit;
pub mod media;
pub mod presentation;
pub mod slide;

// Re-export commonly used types
pub use edit::{ConfigEdit, ConfigError, MediaList, TextField, apply_path};
pub use presentation::{PresentationConfig, Photo, Video};
pub use slide::Slide;
