use bhub_core::{CoreError, SessionContext, SessionStore};
use bhub_domain::{UserRole, UserSession};
use bhub_storage_json::JsonSessionStore;
use std::fs;
use tempfile::tempdir;

fn client() -> UserSession {
    UserSession::new("2", "Client User", "client@example.com", UserRole::Client)
}

#[test]
fn empty_directory_has_no_session() {
    let dir = tempdir().expect("tempdir");
    let store = JsonSessionStore::new(dir.path().join("session")).expect("create store");

    assert_eq!(store.load().expect("load"), None);
}

#[test]
fn saved_session_survives_a_new_store() {
    let dir = tempdir().expect("tempdir");
    let store = JsonSessionStore::new(dir.path().to_path_buf()).expect("create store");
    store.save(&client()).expect("save session");

    let reopened = JsonSessionStore::new(dir.path().to_path_buf()).expect("reopen store");
    assert_eq!(reopened.load().expect("load"), Some(client()));

    let raw = fs::read_to_string(reopened.path()).expect("read file");
    assert!(raw.contains("\"role\": \"client\""));
    assert!(!reopened.path().with_extension("json.tmp").exists());
}

#[test]
fn clear_removes_the_file() {
    let dir = tempdir().expect("tempdir");
    let store = JsonSessionStore::new(dir.path().to_path_buf()).expect("create store");
    store.save(&client()).expect("save session");

    store.clear().expect("clear");
    assert!(!store.path().exists());
    store.clear().expect("clearing twice is fine");
}

#[test]
fn corrupt_file_reports_serde_error() {
    let dir = tempdir().expect("tempdir");
    let store = JsonSessionStore::new(dir.path().to_path_buf()).expect("create store");
    fs::write(store.path(), "{ not json").expect("write garbage");

    assert!(matches!(store.load(), Err(CoreError::Serde(_))));
}

#[test]
fn session_context_round_trips_through_disk() {
    let dir = tempdir().expect("tempdir");
    let store = JsonSessionStore::new(dir.path().to_path_buf()).expect("create store");
    let mut context = SessionContext::new(store);
    context.sign_in(client()).expect("sign in");

    let store = JsonSessionStore::new(dir.path().to_path_buf()).expect("reopen store");
    let mut restored = SessionContext::load(store).expect("load context");
    assert_eq!(restored.user().map(|user| user.role), Some(UserRole::Client));

    restored.sign_out().expect("sign out");
    let store = JsonSessionStore::new(dir.path().to_path_buf()).expect("reopen store");
    assert!(!SessionContext::load(store).expect("load").is_authenticated());
}
