//! Application entry point — Line Reader.
//!
//! # Startup sequence
//!
//! 1. Initialise logging.
//! 2. Load [`AppConfig`] from disk (returns default on first run).
//! 3. Create the [`tokio`] runtime (one worker for document loads).
//! 4. Create load channels (`request`, `outcome`) and spawn the load worker.
//! 5. Build the speech backend and the position store, then the reader.
//! 6. Run [`eframe::run_native`] — blocks the main thread until the window
//!    is closed.
//!
//! An optional first argument pre-selects a document:
//! `line-reader scene.pdf`.

use std::path::PathBuf;
use std::sync::Arc;

use tokio::sync::mpsc;
use line_reader::{
    app::LineReaderApp,
    config::AppConfig,
    extract::{DocumentExtractor, FileExtractor},
    loader::{LoadOutcome, LoadRequest, LoadWorker},
    reader::LineReader,
    speech,
    store::FilePositionStore,
};

use eframe::egui;

// ---------------------------------------------------------------------------
// Native options builder
// ---------------------------------------------------------------------------

fn native_options(config: &AppConfig) -> eframe::NativeOptions {
    let (width, height) = config.ui.window_size;
    let mut vp = egui::ViewportBuilder::default()
        .with_inner_size([width, height])
        .with_min_inner_size([360.0, 260.0]);

    if config.ui.always_on_top {
        vp = vp.with_always_on_top();
    }

    eframe::NativeOptions {
        viewport: vp,
        ..Default::default()
    }
}

// ---------------------------------------------------------------------------
// main
// ---------------------------------------------------------------------------

fn main() -> eframe::Result<()> {
    // 1. Logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("Line Reader starting up");

    // 2. Configuration
    let config = AppConfig::load().unwrap_or_else(|e| {
        log::warn!("Failed to load config ({e}); using defaults");
        AppConfig::default()
    });

    let initial_document = std::env::args_os().nth(1).map(PathBuf::from);

    // 3. Tokio runtime (document extraction only)
    let rt = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(1)
        .enable_all()
        .build()
        .expect("failed to create tokio runtime");

    // 4. Load worker
    let (request_tx, request_rx) = mpsc::channel::<LoadRequest>(4);
    let (outcome_tx, outcome_rx) = mpsc::channel::<LoadOutcome>(4);

    let extractor: Arc<dyn DocumentExtractor> = Arc::new(FileExtractor::new());
    rt.spawn(LoadWorker::new(extractor).run(request_rx, outcome_tx));

    // 5. Reader with speech + persisted position
    let store = FilePositionStore::new();
    log::info!("Reading position file: {}", store.path().display());

    let reader = LineReader::new(
        speech::from_config(&config.speech),
        Box::new(store),
        config.reader.resume_on_load,
    );

    // 6. Run the egui app (blocks until the window is closed)
    let app = LineReaderApp::new(reader, request_tx, outcome_rx, config.clone(), initial_document);
    let options = native_options(&config);

    eframe::run_native(
        "Line Reader",
        options,
        Box::new(move |_cc| Ok(Box::new(app))),
    )
}
