//! Editor use-case service.
//!
//! # Responsibility
//! - Translate front-end events (edit, select, toolbar, login, timer) into
//!   store/session mutations.
//! - Own the view-level status and produce render snapshots.
//!
//! # Invariants
//! - One service instance per editor window; it is passed by handle, never global.
//! - Logs carry metadata only, never document content or email addresses.

use crate::autosave::AutosaveTimer;
use crate::config::EditorConfig;
use crate::format::{wrap_selection, Marker, Selection};
use crate::model::document::{DocumentKey, TextStats};
use crate::model::session::SessionState;
use crate::store::document_store::DocumentStore;
use chrono::{DateTime, Local, Utc};
use log::{debug, info};
use serde::Serialize;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Window title shown before the user names the document.
pub const DEFAULT_WINDOW_TITLE: &str = "Document Editor";

/// Shown when a timestamp cannot be rendered as a local time.
const UNKNOWN_CLOCK_TIME: &str = "--:--";

/// Status line shown under the editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EditorStatus {
    Ready,
    UnsavedChanges,
    Saved,
}

impl EditorStatus {
    pub fn label(self) -> &'static str {
        match self {
            Self::Ready => "Ready",
            Self::UnsavedChanges => "Unsaved changes",
            Self::Saved => "Saved",
        }
    }
}

/// Toolbar buttons handled by [`EditorService::apply_toolbar`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolbarAction {
    Format(Marker),
    Save,
    Share,
}

impl ToolbarAction {
    /// Parses a button name (`bold|italic|underline|save|share`).
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "save" => Some(Self::Save),
            "share" => Some(Self::Share),
            other => Marker::parse(other).ok().map(Self::Format),
        }
    }
}

/// One-shot message a front end shows to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Notice {
    DocumentSaved,
    ShareLink,
}

impl Notice {
    pub fn message(self) -> &'static str {
        match self {
            Self::DocumentSaved => "Document saved!",
            Self::ShareLink => "Share feature: Copy link to share this document",
        }
    }
}

/// Login form validation failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginError {
    /// Input does not contain `@`.
    MissingAtSign,
}

impl Display for LoginError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingAtSign => f.write_str("Please enter a valid email"),
        }
    }
}

impl Error for LoginError {}

/// Document list entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DocumentListItem {
    pub key: DocumentKey,
    pub active: bool,
}

/// Render snapshot of the whole editor window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EditorView {
    pub documents: Vec<DocumentListItem>,
    pub active: DocumentKey,
    pub content: String,
    pub stats: TextStats,
    pub word_count_label: String,
    pub char_count_label: String,
    pub status: EditorStatus,
    pub status_label: String,
    pub last_saved_label: String,
    pub user_name: String,
    pub window_title: String,
    pub login_prompt_visible: bool,
}

/// Editor facade over the document store and session.
pub struct EditorService {
    store: DocumentStore,
    session: SessionState,
    autosave: AutosaveTimer,
    status: EditorStatus,
    window_title: String,
    config: EditorConfig,
}

impl EditorService {
    /// Builds a service from pre-constructed state and starts autosave at `now_ms`.
    pub fn new(
        store: DocumentStore,
        session: SessionState,
        config: EditorConfig,
        now_ms: i64,
    ) -> Self {
        let mut autosave = AutosaveTimer::new(config.autosave_interval_ms);
        autosave.start(now_ms);
        info!(
            "event=editor_start module=service status=ok documents={} autosave_ms={}",
            store.len(),
            autosave.interval_ms()
        );
        Self {
            store,
            session,
            autosave,
            status: EditorStatus::Ready,
            window_title: DEFAULT_WINDOW_TITLE.to_string(),
            config,
        }
    }

    /// Builds a fresh store/session pair from `config`.
    pub fn from_config(config: EditorConfig, now_ms: i64) -> Self {
        let store = DocumentStore::with_seed_count(config.seed_documents, now_ms);
        Self::new(store, SessionState::new(), config, now_ms)
    }

    /// Editor input: replaces the active content.
    pub fn edit(&mut self, text: impl Into<String>) {
        self.store.set_active_content(text);
        self.status = EditorStatus::UnsavedChanges;
    }

    /// Selects a document from the list and returns the content now shown.
    pub fn select_document(&mut self, key: &DocumentKey) -> String {
        self.store.switch_to(key).to_string()
    }

    /// Creates and activates the next numbered document.
    pub fn new_document(&mut self) -> DocumentKey {
        self.store.create_document()
    }

    /// Validates the login form input, then signs in.
    pub fn submit_login(&mut self, email: &str) -> Result<(), LoginError> {
        if !email.contains('@') {
            debug!("event=login module=service status=rejected reason=missing_at");
            return Err(LoginError::MissingAtSign);
        }
        self.session.login(email);
        info!("event=login module=service status=ok");
        Ok(())
    }

    pub fn logout(&mut self) {
        self.session.logout();
        info!("event=logout module=service status=ok");
    }

    /// The login prompt is shown whenever nobody is signed in.
    pub fn login_prompt_visible(&self) -> bool {
        !self.session.is_authenticated()
    }

    /// Handles a toolbar button.
    ///
    /// Formatting with an empty selection changes nothing.
    pub fn apply_toolbar(
        &mut self,
        action: ToolbarAction,
        selection: Selection,
        now_ms: i64,
    ) -> Option<Notice> {
        match action {
            ToolbarAction::Format(marker) => {
                let current = self.store.active_content();
                let normalized = selection.normalized(current.chars().count());
                if normalized.is_empty() {
                    return None;
                }
                let next = wrap_selection(current, normalized, marker);
                self.store.set_active_content(next);
                debug!(
                    "event=format module=service status=ok marker={}",
                    marker.name()
                );
                None
            }
            ToolbarAction::Save => {
                self.mark_saved(now_ms);
                Some(Notice::DocumentSaved)
            }
            ToolbarAction::Share => Some(Notice::ShareLink),
        }
    }

    /// Runs the autosave tick due at `now_ms`, if any; returns whether it saved.
    ///
    /// Missed periods collapse into one save stamped at the latest slot.
    pub fn tick(&mut self, now_ms: i64) -> bool {
        let Some(at) = self.autosave.poll(now_ms) else {
            return false;
        };
        if self.store.active_content().is_empty() {
            return false;
        }
        self.mark_saved(at);
        debug!("event=autosave module=service status=ok");
        true
    }

    pub fn start_autosave(&mut self, now_ms: i64) {
        self.autosave.start(now_ms);
    }

    pub fn stop_autosave(&mut self) {
        self.autosave.stop();
        info!("event=autosave_stop module=service status=ok");
    }

    /// Applies a user-entered title; blank input keeps the current title.
    ///
    /// The title is cosmetic and never renames a document.
    pub fn set_window_title(&mut self, title: &str) -> &str {
        let trimmed = title.trim();
        if !trimmed.is_empty() {
            self.window_title = format!("{title}{}", self.config.window_title_suffix);
        }
        &self.window_title
    }

    /// Whether leaving now would lose recent edits.
    ///
    /// Pure query; callers decide whether a positive answer is worth logging.
    pub fn has_unsaved_warning(&self, now_ms: i64) -> bool {
        let threshold = now_ms.saturating_sub(self.config.unsaved_warning_window_ms);
        !self.store.active_content().is_empty() && self.store.last_saved_at() < threshold
    }

    pub fn status(&self) -> EditorStatus {
        self.status
    }

    pub fn store(&self) -> &DocumentStore {
        &self.store
    }

    pub fn session(&self) -> &SessionState {
        &self.session
    }

    pub fn autosave(&self) -> &AutosaveTimer {
        &self.autosave
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    pub fn window_title(&self) -> &str {
        &self.window_title
    }

    /// Snapshot of everything a front end renders.
    pub fn view(&self) -> EditorView {
        let active = self.store.active_key().clone();
        let stats = self.store.stats();
        let documents = self
            .store
            .documents()
            .map(|doc| DocumentListItem {
                key: doc.key.clone(),
                active: doc.key == active,
            })
            .collect();

        EditorView {
            documents,
            content: self.store.active_content().to_string(),
            active,
            stats,
            word_count_label: format!("Words: {}", stats.words),
            char_count_label: format!("Characters: {}", stats.chars),
            status: self.status,
            status_label: self.status.label().to_string(),
            last_saved_label: format!(
                "Last saved: {}",
                format_clock_time(self.store.last_saved_at())
            ),
            user_name: self.session.display_name().to_string(),
            window_title: self.window_title.clone(),
            login_prompt_visible: self.login_prompt_visible(),
        }
    }

    fn mark_saved(&mut self, now_ms: i64) {
        self.store.mark_saved(now_ms);
        self.status = EditorStatus::Saved;
    }
}

/// Formats an epoch-millisecond timestamp as local `HH:MM`.
///
/// Timestamps outside chrono's range render as `--:--`.
pub fn format_clock_time(epoch_ms: i64) -> String {
    match DateTime::<Utc>::from_timestamp_millis(epoch_ms) {
        Some(utc) => utc.with_timezone(&Local).format("%H:%M").to_string(),
        None => UNKNOWN_CLOCK_TIME.to_string(),
    }
}
