use chrono::{Local, TimeZone};
use inkpad_core::{
    Clock, DocumentKey, DocumentStore, EditorConfig, EditorService, EditorStatus, LoginError,
    ManualClock, Marker, Notice, Selection, SessionState, ToolbarAction,
};

fn service_at(now_ms: i64) -> EditorService {
    EditorService::from_config(EditorConfig::default(), now_ms)
}

fn local_label(epoch_ms: i64) -> String {
    let local = Local.timestamp_millis_opt(epoch_ms).single().unwrap();
    format!("Last saved: {}", local.format("%H:%M"))
}

#[test]
fn fresh_editor_shows_login_prompt_and_ready_status() {
    let service = service_at(0);
    let view = service.view();
    assert!(view.login_prompt_visible);
    assert_eq!(view.user_name, "User");
    assert_eq!(view.status_label, "Ready");
    assert_eq!(view.word_count_label, "Words: 0");
    assert_eq!(view.char_count_label, "Characters: 0");
    assert_eq!(view.last_saved_label, local_label(0));
    assert_eq!(view.window_title, "Document Editor");
    assert_eq!(view.documents.len(), 2);
    assert!(view.documents[0].active);
    assert!(!view.documents[1].active);
}

#[test]
fn editing_updates_counts_and_marks_unsaved() {
    let mut service = service_at(0);
    service.edit("hello brave world");
    let view = service.view();
    assert_eq!(view.status, EditorStatus::UnsavedChanges);
    assert_eq!(view.status_label, "Unsaved changes");
    assert_eq!(view.word_count_label, "Words: 3");
    assert_eq!(view.char_count_label, "Characters: 17");
}

#[test]
fn login_requires_at_sign() {
    let mut service = service_at(0);
    let err = service.submit_login("alice.example.com").unwrap_err();
    assert_eq!(err, LoginError::MissingAtSign);
    assert!(service.login_prompt_visible());

    service.submit_login("alice@example.com").unwrap();
    assert!(!service.login_prompt_visible());
    assert_eq!(service.view().user_name, "alice");

    service.logout();
    assert!(service.login_prompt_visible());
    assert_eq!(service.session().display_name(), "User");
}

#[test]
fn new_document_becomes_active_and_listed_last() {
    let mut service = service_at(0);
    service.edit("kept");
    let key = service.new_document();
    let view = service.view();
    assert_eq!(key.as_str(), "Document 3");
    assert_eq!(view.active, key);
    assert_eq!(view.content, "");
    assert_eq!(view.documents.last().map(|item| item.active), Some(true));
    assert_eq!(service.store().content_of(&DocumentKey::from("Document 1")), "kept");
}

#[test]
fn selecting_a_document_shows_its_content() {
    let mut service = service_at(0);
    service.edit("first");
    assert_eq!(service.select_document(&DocumentKey::from("Document 2")), "");
    service.edit("second");
    assert_eq!(service.select_document(&DocumentKey::from("Document 1")), "first");
    assert_eq!(service.select_document(&DocumentKey::from("Nope")), "");
    assert_eq!(service.store().active_key().as_str(), "Document 1");
}

#[test]
fn format_buttons_wrap_selection_in_active_document() {
    let mut service = service_at(0);
    service.edit("hello world");

    let notice = service.apply_toolbar(
        ToolbarAction::Format(Marker::Bold),
        Selection::new(0, 5),
        0,
    );
    assert_eq!(notice, None);
    assert_eq!(service.store().active_content(), "**hello** world");

    service.apply_toolbar(
        ToolbarAction::Format(Marker::Underline),
        Selection::new(10, 15),
        0,
    );
    assert_eq!(service.store().active_content(), "**hello** __world__");
}

#[test]
fn format_with_empty_selection_changes_nothing() {
    let mut service = service_at(0);
    service.edit("hello world");
    service.apply_toolbar(ToolbarAction::Format(Marker::Italic), Selection::new(3, 3), 0);
    assert_eq!(service.store().active_content(), "hello world");
    assert_eq!(service.status(), EditorStatus::UnsavedChanges);
}

#[test]
fn save_and_share_return_notices() {
    let mut service = service_at(0);
    service.edit("text");
    let saved = service.apply_toolbar(ToolbarAction::Save, Selection::default(), 90_000);
    assert_eq!(saved, Some(Notice::DocumentSaved));
    assert_eq!(saved.unwrap().message(), "Document saved!");
    assert_eq!(service.status(), EditorStatus::Saved);
    assert_eq!(service.store().last_saved_at(), 90_000);
    assert_eq!(service.view().last_saved_label, local_label(90_000));

    let shared = service.apply_toolbar(ToolbarAction::Share, Selection::default(), 0);
    assert_eq!(shared, Some(Notice::ShareLink));
    assert_eq!(service.store().last_saved_at(), 90_000);
}

#[test]
fn autosave_ticks_only_save_non_empty_content() {
    let clock = ManualClock::new(0);
    let mut service = service_at(clock.now_ms());

    assert!(!service.tick(clock.advance(5_000)));
    assert_eq!(service.store().last_saved_at(), 0);

    service.edit("draft");
    assert!(service.tick(clock.advance(12_000)));
    assert_eq!(service.store().last_saved_at(), 15_000);
    assert_eq!(service.status(), EditorStatus::Saved);
}

#[test]
fn long_idle_gap_saves_once_at_latest_slot() {
    let mut service = service_at(0);
    service.edit("draft");

    assert!(service.tick(86_400_000));
    assert_eq!(service.store().last_saved_at(), 86_400_000);
    assert_eq!(service.autosave().next_due(), Some(86_405_000));
    assert!(!service.tick(86_400_000));
}

#[test]
fn autosave_near_end_of_time_terminates() {
    let mut service = service_at(i64::MAX - 10_000);
    service.edit("draft");
    assert!(service.tick(i64::MAX));
    assert!(!service.tick(i64::MAX));
}

#[test]
fn stopped_autosave_never_saves() {
    let mut service = service_at(0);
    service.edit("draft");
    service.stop_autosave();
    assert!(!service.tick(60_000));
    assert_eq!(service.status(), EditorStatus::UnsavedChanges);

    service.start_autosave(60_000);
    assert!(service.tick(65_000));
}

#[test]
fn autosave_interval_comes_from_config() {
    let config = EditorConfig {
        autosave_interval_ms: 1_000,
        ..EditorConfig::default()
    };
    let mut service = EditorService::from_config(config, 0);
    service.edit("x");
    assert!(service.tick(3_000));
    assert_eq!(service.store().last_saved_at(), 3_000);
}

#[test]
fn unsaved_warning_needs_content_older_than_window() {
    let mut service = service_at(0);
    assert!(!service.has_unsaved_warning(60_000));

    service.edit("draft");
    assert!(!service.has_unsaved_warning(5_000));
    assert!(service.has_unsaved_warning(5_001));
    let before = service.view();
    assert!(service.has_unsaved_warning(5_001));
    assert_eq!(service.view(), before);

    service.apply_toolbar(ToolbarAction::Save, Selection::default(), 10_000);
    assert!(!service.has_unsaved_warning(14_000));
}

#[test]
fn window_title_ignores_blank_input_and_never_renames_documents() {
    let mut service = service_at(0);
    assert_eq!(service.set_window_title("   "), "Document Editor");
    assert_eq!(service.set_window_title("Plans"), "Plans - Document Editor");
    assert_eq!(service.view().active.as_str(), "Document 1");
}

#[test]
fn injected_state_is_used_as_is() {
    let mut store = DocumentStore::with_seed_count(3, 0);
    store.set_active_content("preloaded");
    let mut session = SessionState::new();
    session.login("dana@example.com");

    let service = EditorService::new(store, session, EditorConfig::default(), 0);
    let view = service.view();
    assert_eq!(view.documents.len(), 3);
    assert_eq!(view.content, "preloaded");
    assert_eq!(view.user_name, "dana");
    assert!(!view.login_prompt_visible);
}

#[test]
fn view_serializes_for_front_ends() {
    let service = service_at(0);
    let json = serde_json::to_value(service.view()).unwrap();
    assert_eq!(json["active"], "Document 1");
    assert_eq!(json["status"], "ready");
    assert_eq!(json["documents"][1]["key"], "Document 2");
}
