//! FFI editor API for Flutter-facing calls.
//!
//! # Responsibility
//! - Expose editor events and render snapshots to Dart via FRB.
//! - Hold the single editor instance that backs one app window.
//!
//! # Invariants
//! - Exported functions must not panic across the FFI boundary.
//! - Every mutating call returns a fresh, flat view the UI can render as-is.

use inkpad_core::{
    core_version as core_version_inner, init_logging as init_logging_inner, ping as ping_inner,
    Clock, DocumentKey, EditorConfig, EditorService, EditorView, Selection, SystemClock,
    ToolbarAction,
};
use log::warn;
use once_cell::sync::Lazy;
use std::sync::{Mutex, MutexGuard};

static EDITOR: Lazy<Mutex<EditorService>> = Lazy::new(|| {
    Mutex::new(EditorService::from_config(
        EditorConfig::default(),
        SystemClock.now_ms(),
    ))
});

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// # FFI contract
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory for rolling logs.
/// - Returns empty string on success and the error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// Document list row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentItemDto {
    pub name: String,
    pub active: bool,
}

/// Flat editor snapshot for the Dart side.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorViewDto {
    pub documents: Vec<DocumentItemDto>,
    pub active_name: String,
    pub content: String,
    pub word_count_label: String,
    pub char_count_label: String,
    pub status_label: String,
    pub last_saved_label: String,
    pub user_name: String,
    pub window_title: String,
    pub login_prompt_visible: bool,
}

/// Result envelope for user actions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorActionResponse {
    /// Whether the action was accepted.
    pub ok: bool,
    /// Message to surface to the user; empty when there is nothing to show.
    pub message: String,
    pub view: EditorViewDto,
}

impl EditorActionResponse {
    fn done(service: &EditorService, message: impl Into<String>) -> Self {
        Self {
            ok: true,
            message: message.into(),
            view: to_view_dto(service.view()),
        }
    }

    fn rejected(service: &EditorService, message: impl Into<String>) -> Self {
        Self {
            ok: false,
            message: message.into(),
            view: to_view_dto(service.view()),
        }
    }
}

/// Current editor snapshot.
#[flutter_rust_bridge::frb(sync)]
pub fn editor_view() -> EditorViewDto {
    to_view_dto(lock_editor().view())
}

/// Editor input event with the full new text.
#[flutter_rust_bridge::frb(sync)]
pub fn editor_edit(content: String) -> EditorViewDto {
    let mut editor = lock_editor();
    editor.edit(content);
    to_view_dto(editor.view())
}

/// Document list click.
#[flutter_rust_bridge::frb(sync)]
pub fn editor_select_document(name: String) -> EditorViewDto {
    let mut editor = lock_editor();
    editor.select_document(&DocumentKey::new(name));
    to_view_dto(editor.view())
}

/// "New document" button.
#[flutter_rust_bridge::frb(sync)]
pub fn editor_new_document() -> EditorViewDto {
    let mut editor = lock_editor();
    editor.new_document();
    to_view_dto(editor.view())
}

/// Login form submit. Rejected input keeps the prompt open.
#[flutter_rust_bridge::frb(sync)]
pub fn editor_login(email: String) -> EditorActionResponse {
    let mut editor = lock_editor();
    match editor.submit_login(email.trim()) {
        Ok(()) => EditorActionResponse::done(&editor, ""),
        Err(err) => EditorActionResponse::rejected(&editor, err.to_string()),
    }
}

#[flutter_rust_bridge::frb(sync)]
pub fn editor_logout() -> EditorViewDto {
    let mut editor = lock_editor();
    editor.logout();
    to_view_dto(editor.view())
}

/// Toolbar click with the textarea selection in character offsets.
///
/// `action` is one of `bold|italic|underline|save|share`.
#[flutter_rust_bridge::frb(sync)]
pub fn editor_toolbar(
    action: String,
    selection_start: u32,
    selection_end: u32,
) -> EditorActionResponse {
    let mut editor = lock_editor();
    let Some(action) = ToolbarAction::parse(&action) else {
        return EditorActionResponse::rejected(
            &editor,
            format!("unknown toolbar action `{action}`"),
        );
    };
    let selection = Selection::new(selection_start as usize, selection_end as usize);
    let notice = editor.apply_toolbar(action, selection, SystemClock.now_ms());
    let message = notice.map(|notice| notice.message()).unwrap_or_default();
    EditorActionResponse::done(&editor, message)
}

/// Periodic timer callback; runs due autosave ticks.
#[flutter_rust_bridge::frb(sync)]
pub fn editor_tick() -> EditorViewDto {
    let mut editor = lock_editor();
    editor.tick(SystemClock.now_ms());
    to_view_dto(editor.view())
}

/// Title field blur.
#[flutter_rust_bridge::frb(sync)]
pub fn editor_set_title(title: String) -> String {
    lock_editor().set_window_title(&title).to_string()
}

/// Page/window close guard.
#[flutter_rust_bridge::frb(sync)]
pub fn editor_has_unsaved_warning() -> bool {
    lock_editor().has_unsaved_warning(SystemClock.now_ms())
}

fn lock_editor() -> MutexGuard<'static, EditorService> {
    EDITOR.lock().unwrap_or_else(|poisoned| {
        warn!("event=editor_lock module=ffi status=recovered reason=poisoned");
        poisoned.into_inner()
    })
}

fn to_view_dto(view: EditorView) -> EditorViewDto {
    EditorViewDto {
        documents: view
            .documents
            .into_iter()
            .map(|item| DocumentItemDto {
                name: item.key.to_string(),
                active: item.active,
            })
            .collect(),
        active_name: view.active.to_string(),
        content: view.content,
        word_count_label: view.word_count_label,
        char_count_label: view.char_count_label,
        status_label: view.status_label,
        last_saved_label: view.last_saved_label,
        user_name: view.user_name,
        window_title: view.window_title,
        login_prompt_visible: view.login_prompt_visible,
    }
}

#[cfg(test)]
mod tests {
    use super::{
        core_version, editor_edit, editor_login, editor_logout, editor_new_document,
        editor_select_document, editor_set_title, editor_toolbar, editor_view, init_logging, ping,
    };

    // One shared editor backs every call, so all flows run in one test.
    #[test]
    fn editor_flow_through_ffi() {
        let rejected = editor_login("nobody".to_string());
        assert!(!rejected.ok);
        assert_eq!(rejected.message, "Please enter a valid email");
        assert!(rejected.view.login_prompt_visible);

        let accepted = editor_login("alice@example.com".to_string());
        assert!(accepted.ok);
        assert_eq!(accepted.view.user_name, "alice");

        let view = editor_edit("hello world".to_string());
        assert_eq!(view.word_count_label, "Words: 2");
        assert_eq!(view.status_label, "Unsaved changes");

        let bold = editor_toolbar("bold".to_string(), 0, 5);
        assert!(bold.ok);
        assert_eq!(bold.view.content, "**hello** world");

        let saved = editor_toolbar("save".to_string(), 0, 0);
        assert_eq!(saved.message, "Document saved!");
        assert_eq!(saved.view.status_label, "Saved");

        let unknown = editor_toolbar("strike".to_string(), 0, 1);
        assert!(!unknown.ok);

        let created = editor_new_document();
        assert_eq!(created.active_name, "Document 3");
        assert_eq!(created.content, "");

        let back = editor_select_document("Document 1".to_string());
        assert_eq!(back.content, "**hello** world");

        assert_eq!(
            editor_set_title("Plans".to_string()),
            "Plans - Document Editor"
        );
        assert_eq!(editor_view().window_title, "Plans - Document Editor");

        let logged_out = editor_logout();
        assert_eq!(logged_out.user_name, "User");
        assert!(logged_out.login_prompt_visible);
    }

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }

    #[test]
    fn init_logging_rejects_relative_dir() {
        let error = init_logging("info".to_string(), "tmp/logs".to_string());
        assert!(error.contains("absolute"));
    }
}
