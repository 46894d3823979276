//! Core state and use-cases for the Inkpad editor.
//! Front ends (FFI, CLI) only translate events into calls on this crate.

pub mod autosave;
pub mod config;
pub mod format;
pub mod logging;
pub mod model;
pub mod service;
pub mod store;

pub use autosave::{AutosaveTimer, Clock, ManualClock, SystemClock};
pub use config::{ConfigError, EditorConfig};
pub use format::{wrap, wrap_selection, Marker, MarkerParseError, Selection};
pub use logging::{
    default_log_level, init_logging, init_logging_with, logging_status, LogSettings,
};
pub use model::document::{Document, DocumentKey, TextStats};
pub use model::session::SessionState;
pub use service::editor_service::{
    DocumentListItem, EditorService, EditorStatus, EditorView, LoginError, Notice, ToolbarAction,
};
pub use store::document_store::DocumentStore;

/// Minimal health-check API for front-end wiring.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
