//! Prints the presentation content the app would load, as pretty JSON.
//!
//! `dump_config --data-dir ./state` shows the persisted snapshot merged into
//! the built-in defaults; `dump_config --default` shows the defaults alone.

#[cfg(target_arch = "wasm32")]
fn main() {}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> anyhow::Result<()> {
    native::dump()
}

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use anyhow::{Context, Result};
    use clap::Parser;
    use std::path::PathBuf;

    use quiet_gratitude::config::persistence::DEFAULT_DATA_DIR;
    use quiet_gratitude::config::CONFIG_STORAGE_KEY;
    use quiet_gratitude::domain::PresentationConfig;
    use quiet_gratitude::engine::{ConfigStore, FileStorage, SnapshotStorage};

    #[derive(Parser, Debug)]
    #[command(author, version, about = "Print the effective presentation content", long_about = None)]
    struct Args {
        /// Directory holding the persisted snapshot
        #[arg(long, default_value = DEFAULT_DATA_DIR)]
        data_dir: PathBuf,

        /// Ignore any snapshot and print the built-in content
        #[arg(long, default_value_t = false)]
        default: bool,
    }

    pub fn dump() -> Result<()> {
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Warn)
            .init();

        let args = Args::parse();
        let config = if args.default {
            PresentationConfig::default()
        } else {
            let storage = FileStorage::new(&args.data_dir);
            if storage.read(CONFIG_STORAGE_KEY).is_none() {
                eprintln!(
                    "No snapshot at {:?}; showing built-in content.",
                    storage.path_for(CONFIG_STORAGE_KEY)
                );
            }
            ConfigStore::load(storage).config().clone()
        };

        let text = serde_json::to_string_pretty(&config)
            .context("Failed to serialize presentation content")?;
        println!("{}", text);
        Ok(())
    }
}
