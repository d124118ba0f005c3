//! Line reader — step through a script one line at a time, hear each line
//! spoken, and pick up where you left off.
//!
//! Modules:
//!
//! * [`script`]  — the [`Script`](script::Script) model and text splitting.
//! * [`extract`] — document text extraction (PDF, plain text).
//! * [`loader`]  — source selection and the background load worker.
//! * [`reader`]  — the [`LineReader`](reader::LineReader) state machine.
//! * [`speech`]  — text-to-speech seam.
//! * [`store`]   — reading-position persistence.
//! * [`config`]  — settings and platform paths.
//! * [`app`]     — the egui window.

pub mod app;
pub mod config;
pub mod extract;
pub mod loader;
pub mod reader;
pub mod script;
pub mod speech;
pub mod store;
