//! Line reader window — egui/eframe application.
//!
//! # Architecture
//!
//! [`LineReaderApp`] is the top-level [`eframe::App`].  It owns the
//! [`LineReader`] (script, position, speech, store) and two channel
//! endpoints to the load worker:
//!
//! * `request_tx` — sends [`LoadRequest`] for document loads.
//! * `outcome_rx` — receives [`LoadOutcome`] once extraction finishes.
//!
//! Navigation buttons and key bindings both become [`ReaderCommand`]s and go
//! through [`LineReaderApp::handle_command`].
//!
//! # Layout
//!
//! | Region | Content |
//! |--------|---------|
//! | Top | Document path + Choose… picker, script text area, Load button |
//! | Centre | `(N/total)` counter, highlighted speaker, line body; Previous / Next |
//! | Bottom | Status line (lines loaded, load errors) |

use std::path::PathBuf;
use std::time::Duration;

use eframe::egui;
use tokio::sync::mpsc;

use crate::config::AppConfig;
use crate::extract::{PDF_EXTENSIONS, PLAIN_TEXT_EXTENSIONS};
use crate::loader::{LoadOutcome, LoadRequest, LoadSource};
use crate::reader::{Display, KeyBindings, LineReader, ReaderCommand, RenderedView};
use crate::script::{load_from_text, Script};

// ---------------------------------------------------------------------------
// Status
// ---------------------------------------------------------------------------

/// Message shown in the status line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Status {
    Info(String),
    Error(String),
}

// ---------------------------------------------------------------------------
// LineReaderApp
// ---------------------------------------------------------------------------

/// eframe application — the line reader window.
pub struct LineReaderApp {
    // ── Reader ───────────────────────────────────────────────────────────
    reader: LineReader,
    /// Result of the most recent render.
    view: RenderedView,
    keys: KeyBindings,

    // ── Input fields ─────────────────────────────────────────────────────
    /// Path of the selected document; blank means "use the text area".
    pub document_path: String,
    /// Script typed or pasted by the user.
    pub script_text: String,

    // ── Loading ──────────────────────────────────────────────────────────
    /// Id of the document load in flight, if any.
    pending: Option<u64>,
    next_request_id: u64,
    status: Option<Status>,

    // ── Channels ─────────────────────────────────────────────────────────
    request_tx: mpsc::Sender<LoadRequest>,
    outcome_rx: mpsc::Receiver<LoadOutcome>,

    // ── Configuration ────────────────────────────────────────────────────
    config: AppConfig,
}

impl LineReaderApp {
    /// Create a new [`LineReaderApp`].
    ///
    /// * `reader`           — reader with speech and store already attached.
    /// * `request_tx`       — sender end of the load request channel.
    /// * `outcome_rx`       — receiver end of the load outcome channel.
    /// * `config`           — loaded application configuration.
    /// * `initial_document` — document pre-selected on the command line.
    pub fn new(
        reader: LineReader,
        request_tx: mpsc::Sender<LoadRequest>,
        outcome_rx: mpsc::Receiver<LoadOutcome>,
        config: AppConfig,
        initial_document: Option<PathBuf>,
    ) -> Self {
        Self {
            reader,
            view: RenderedView::no_script(),
            keys: KeyBindings::from_config(&config.keys),
            document_path: initial_document
                .map(|p| p.display().to_string())
                .unwrap_or_default(),
            script_text: String::new(),
            pending: None,
            next_request_id: 1,
            status: None,
            request_tx,
            outcome_rx,
            config,
        }
    }

    pub fn view(&self) -> &RenderedView {
        &self.view
    }

    pub fn status(&self) -> Option<&Status> {
        self.status.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.pending.is_some()
    }

    // ── Commands ─────────────────────────────────────────────────────────

    /// Use `path` as the selected document for the next load.
    pub fn select_document(&mut self, path: PathBuf) {
        log::info!("app: selected document {}", path.display());
        self.document_path = path.display().to_string();
        self.status = Some(Status::Info(format!(
            "Selected {}",
            LoadSource::Document(path).label()
        )));
    }

    /// Open the native file picker, filtered to the supported formats.
    ///
    /// Blocks the UI thread while the dialog is open; cancelling leaves the
    /// current selection untouched.
    fn choose_document(&mut self) {
        let all: Vec<&str> = PDF_EXTENSIONS
            .iter()
            .chain(PLAIN_TEXT_EXTENSIONS)
            .copied()
            .collect();

        let mut dialog = rfd::FileDialog::new()
            .add_filter("Scripts", &all)
            .add_filter("PDF documents", PDF_EXTENSIONS)
            .add_filter("Text files", PLAIN_TEXT_EXTENSIONS)
            .set_title("Choose Script");

        let current = PathBuf::from(self.document_path.trim());
        if let Some(dir) = current.parent().filter(|d| d.is_dir()) {
            dialog = dialog.set_directory(dir);
        }

        match dialog.pick_file() {
            Some(path) => self.select_document(path),
            None => log::debug!("app: document picker cancelled"),
        }
    }

    /// Navigate; shared by the buttons and the key bindings.
    pub fn handle_command(&mut self, command: ReaderCommand) {
        if let Some(view) = self.reader.dispatch(command) {
            self.view = view;
        }
    }

    /// Start a load from the selected source.
    ///
    /// Text loads complete immediately.  Document loads are handed to the
    /// worker; only one may be in flight.
    pub fn request_load(&mut self) {
        if self.pending.is_some() {
            return;
        }

        let source = LoadSource::select(&self.document_path, &self.script_text);
        if let LoadSource::Text(raw) = &source {
            let script = load_from_text(raw);
            self.apply_script(script, &source);
            return;
        }

        let id = self.next_request_id;
        self.next_request_id += 1;
        let label = source.label();

        match self.request_tx.try_send(LoadRequest { id, source }) {
            Ok(()) => {
                self.pending = Some(id);
                self.status = Some(Status::Info(format!("Loading {label}…")));
            }
            Err(e) => {
                log::error!("app: cannot queue load of {label}: {e}");
                self.status = Some(Status::Error(format!("Could not start loading {label}")));
            }
        }
    }

    /// Drain finished loads (non-blocking).
    pub fn poll_outcomes(&mut self) {
        while let Ok(outcome) = self.outcome_rx.try_recv() {
            if self.pending != Some(outcome.id) {
                log::debug!("app: ignoring stale load outcome #{}", outcome.id);
                continue;
            }
            self.pending = None;

            match outcome.result {
                Ok(script) => self.apply_script(script, &outcome.source),
                Err(e) => {
                    self.status = Some(Status::Error(format!(
                        "Could not load {}: {e}",
                        outcome.source.label()
                    )));
                }
            }
        }
    }

    fn apply_script(&mut self, script: Script, source: &LoadSource) {
        let count = script.len();
        self.view = self.reader.load_script(script);
        self.status = Some(Status::Info(format!(
            "Loaded {count} line(s) from {}",
            source.label()
        )));
    }

    /// Translate pressed keys into commands, unless a text field has focus.
    fn poll_keys(&mut self, ctx: &egui::Context) {
        if ctx.memory(|m| m.focused().is_some()) {
            return;
        }

        let keys = self.keys;
        let commands: Vec<ReaderCommand> = ctx.input(|i| {
            i.events
                .iter()
                .filter_map(|event| match event {
                    egui::Event::Key {
                        key, pressed: true, ..
                    } => keys.command_for(*key),
                    _ => None,
                })
                .collect()
        });

        for command in commands {
            self.handle_command(command);
        }
    }

    // ── Panels ───────────────────────────────────────────────────────────

    /// Document path, text area and Load button.
    fn draw_source_panel(&mut self, ui: &mut egui::Ui) {
        ui.add_space(4.0);
        let mut choose = false;
        ui.horizontal(|ui| {
            ui.label("Document:");
            choose = ui
                .add_enabled(self.pending.is_none(), egui::Button::new("Choose…"))
                .clicked();
            ui.add(
                egui::TextEdit::singleline(&mut self.document_path)
                    .hint_text("path to .pdf or .txt (optional)")
                    .desired_width(f32::INFINITY),
            );
        });
        if choose {
            self.choose_document();
        }

        ui.add_space(4.0);
        ui.add(
            egui::TextEdit::multiline(&mut self.script_text)
                .hint_text("Or paste your script here, one line per cue…")
                .desired_rows(6)
                .desired_width(f32::INFINITY),
        );

        ui.add_space(4.0);
        let load_label = if self.pending.is_some() { "Loading…" } else { "Load" };
        if ui
            .add_enabled(self.pending.is_none(), egui::Button::new(load_label))
            .clicked()
        {
            self.request_load();
        }
        ui.add_space(4.0);
    }

    /// Current line with the speaker label highlighted.
    fn draw_line(&self, ui: &mut egui::Ui) {
        let size = self.config.ui.line_font_size;

        ui.add_space(12.0);
        match &self.view.display {
            Display::NoScript => {
                ui.label(
                    egui::RichText::new(self.view.display_text())
                        .color(egui::Color32::from_rgb(120, 120, 120))
                        .size(size),
                );
            }
            Display::Line(line) => {
                ui.horizontal_wrapped(|ui| {
                    ui.label(
                        egui::RichText::new(line.counter())
                            .color(egui::Color32::from_rgb(140, 140, 140))
                            .size(size),
                    );
                    if let Some(label) = line.speaker_label() {
                        ui.label(
                            egui::RichText::new(label)
                                .strong()
                                .color(egui::Color32::from_rgb(68, 136, 255))
                                .size(size),
                        );
                    }
                    ui.label(egui::RichText::new(line.body.as_str()).size(size));
                });
            }
        }
        ui.add_space(12.0);
    }

    /// Previous / Next buttons, enabled per the last render.
    fn draw_navigation(&mut self, ui: &mut egui::Ui) {
        let mut command = None;
        ui.horizontal(|ui| {
            if ui
                .add_enabled(self.view.previous_enabled, egui::Button::new("< Previous"))
                .clicked()
            {
                command = Some(ReaderCommand::Previous);
            }
            if ui
                .add_enabled(self.view.next_enabled, egui::Button::new("Next >"))
                .clicked()
            {
                command = Some(ReaderCommand::Next);
            }
        });

        if let Some(command) = command {
            self.handle_command(command);
        }
    }

    fn draw_status(&self, ui: &mut egui::Ui) {
        let (text, color) = match &self.status {
            Some(Status::Info(msg)) => (msg.as_str(), egui::Color32::from_rgb(140, 140, 140)),
            Some(Status::Error(msg)) => (msg.as_str(), egui::Color32::from_rgb(255, 136, 68)),
            None => ("", egui::Color32::from_rgb(140, 140, 140)),
        };
        ui.label(egui::RichText::new(text).color(color).size(12.0));
    }
}

// ---------------------------------------------------------------------------
// eframe::App impl
// ---------------------------------------------------------------------------

impl eframe::App for LineReaderApp {
    /// Called every frame by eframe.  Polls the worker and keys, then draws.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_outcomes();
        self.poll_keys(ctx);

        if self.pending.is_some() {
            // Keep polling for the outcome while a load is in flight.
            ctx.request_repaint_after(Duration::from_millis(100));
        }

        egui::TopBottomPanel::top("source").show(ctx, |ui| {
            self.draw_source_panel(ui);
        });

        egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
            self.draw_status(ui);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            self.draw_line(ui);
            ui.separator();
            self.draw_navigation(ui);
        });
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        log::info!("line reader closing at line {}", self.reader.position() + 1);
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
