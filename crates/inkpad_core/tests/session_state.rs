use inkpad_core::SessionState;

#[test]
fn login_uses_local_part_and_logout_restores_defaults() {
    let mut session = SessionState::new();

    session.login("alice@example.com");
    assert!(session.is_authenticated());
    assert_eq!(session.display_name(), "alice");

    session.logout();
    assert!(!session.is_authenticated());
    assert_eq!(session.display_name(), "User");
}

#[test]
fn relogin_replaces_display_name() {
    let mut session = SessionState::new();
    session.login("alice@example.com");
    session.login("bob@example.org");
    assert_eq!(session.display_name(), "bob");
}

#[test]
fn session_serializes_flag_and_name() {
    let mut session = SessionState::new();
    session.login("carol@example.com");
    let json = serde_json::to_value(&session).unwrap();
    assert_eq!(json["is_authenticated"], true);
    assert_eq!(json["display_name"], "carol");
}
