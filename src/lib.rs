#![allow(clippy::collapsible_if)]
#![allow(clippy::collapsible_else_if)]
#![allow(clippy::type_complexity)]

// Core modules
pub mod config;
pub mod domain;
pub mod ui;
pub mod utils;

// Navigation state machine, config store and snapshot storage
pub mod engine;

// Re-export commonly used types
pub use domain::{ConfigEdit, PresentationConfig, Slide};
pub use engine::{ConfigStore, Navigator, SnapshotStorage};
pub use ui::{LaunchOptions, QuietGratitudeApp};
pub use utils::app_time;

// CLI argument parsing
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Directory holding the persisted presentation snapshot
    #[arg(long, default_value = config::persistence::DEFAULT_DATA_DIR)]
    pub data_dir: PathBuf,

    /// Discard the saved presentation before launching
    #[arg(long, default_value_t = false)]
    pub reset: bool,

    /// Start with the slide sound muted
    #[arg(long, default_value_t = false)]
    pub muted: bool,
}

impl Cli {
    pub fn launch_options(&self) -> LaunchOptions {
        LaunchOptions { muted: self.muted }
    }
}

/// Main application entry point - creates the GUI app
/// This is the public API for the binary to call
pub fn run_app(
    cc: &eframe::CreationContext,
    storage: Box<dyn SnapshotStorage>,
    launch: LaunchOptions,
) -> Box<dyn eframe::App> {
    Box::new(QuietGratitudeApp::new(cc, storage, launch))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_defaults() {
        let cli = Cli::parse_from(["quiet-gratitude"]);
        assert_eq!(cli.data_dir, PathBuf::from("."));
        assert!(!cli.reset);
        assert!(!cli.launch_options().muted);
    }

    #[test]
    fn cli_flags() {
        let cli = Cli::parse_from(["quiet-gratitude", "--data-dir", "/tmp/qg", "--reset", "--muted"]);
        assert_eq!(cli.data_dir, PathBuf::from("/tmp/qg"));
        assert!(cli.reset);
        assert!(cli.launch_options().muted);
    }
}
