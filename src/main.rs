#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")] // hide console window on Windows in release

use quiet_gratitude::run_app; // The function from lib.rs
#[cfg(not(target_arch = "wasm32"))]
use quiet_gratitude::Cli; // The struct from lib.rs

// --- WASM SPECIFIC CODE ---
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

// This keeps the WASM memory allocator from being stripped
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
pub fn _keep_alive() {}

// The compiler still wants a main() for the binary target even though we use 'start'
#[cfg(target_arch = "wasm32")]
fn main() {}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn start() -> Result<(), wasm_bindgen::JsValue> {
    use quiet_gratitude::LaunchOptions;
    use quiet_gratitude::engine::LocalStorage;

    // A. Init Logging
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);

    log::info!("Quiet Gratitude starting in WASM mode...");

    let web_options = eframe::WebOptions::default();

    // Find the canvas element by ID
    let window = web_sys::window().ok_or("no global `window` exists")?;
    let document = window.document().ok_or("should have a document on window")?;
    let canvas = document
        .get_element_by_id("the_canvas_id")
        .ok_or("Failed to find canvas with id 'the_canvas_id'")?
        .dyn_into::<web_sys::HtmlCanvasElement>()
        .map_err(|_| "the_canvas_id was not a valid HtmlCanvasElement")?;

    eframe::WebRunner::new()
        .start(
            canvas,
            web_options,
            Box::new(|cc| Ok(run_app(cc, Box::new(LocalStorage), LaunchOptions::default()))),
        )
        .await
}

// --- NATIVE SPECIFIC CODE ---
#[cfg(not(target_arch = "wasm32"))]
fn main() -> eframe::Result {
    use clap::Parser;
    use eframe::NativeOptions;
    use quiet_gratitude::config::CONFIG_STORAGE_KEY;
    use quiet_gratitude::config::persistence::APP_STATE_PATH;
    use quiet_gratitude::engine::{FileStorage, SnapshotStorage};
    use quiet_gratitude::ui::config::UI_TEXT;

    // A. Init Logging
    std::panic::set_hook(Box::new(|panic_info| {
        eprintln!("Application panicked: {:?}", panic_info);
    }));
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    // B. Parse Args
    let args = Cli::parse();
    #[cfg(debug_assertions)]
    log::info!("Parsed arguments: {:?}", args);

    // C. Snapshot storage
    let mut storage = FileStorage::new(&args.data_dir);
    if args.reset {
        match storage.remove(CONFIG_STORAGE_KEY) {
            Ok(()) => log::info!("Discarded saved presentation in {:?}", storage.dir()),
            Err(e) => log::warn!("Could not discard saved presentation: {}", e),
        }
    }

    // D. Run Native App
    let options = NativeOptions {
        persistence_path: Some(args.data_dir.join(APP_STATE_PATH)),
        ..Default::default()
    };
    let launch = args.launch_options();

    eframe::run_native(
        UI_TEXT.window_title,
        options,
        Box::new(move |cc| Ok(run_app(cc, Box::new(storage), launch))),
    )
}
