use bdaybot_core::{RecordStore, DEFAULT_STORE_FILE};
use std::path::Path;

fn temp_store(dir: &tempfile::TempDir) -> RecordStore {
    let store = RecordStore::new(dir.path().join(DEFAULT_STORE_FILE));
    store.initialize().unwrap();
    store
}

#[test]
fn user_lifecycle_survives_per_operation_connections() {
    let dir = tempfile::tempdir().unwrap();
    let store = temp_store(&dir);

    store.set_user(42, 100, "03/14").unwrap();
    store.set_user(42, "200", "12/01").unwrap();

    let record = store.query_user(42).unwrap().unwrap();
    assert_eq!(record.id, 42);
    assert_eq!(record.birthdate, "12/01");
    assert_eq!(record.servers.to_delimited(), "100,200");

    store.remove_user(42).unwrap();
    assert!(store.query_user(42).unwrap().is_none());
}

#[test]
fn repeated_user_registration_is_idempotent_per_server() {
    let dir = tempfile::tempdir().unwrap();
    let store = temp_store(&dir);

    store.set_user(7, 100, "01/01").unwrap();
    store.set_user(7, 100, "01/01").unwrap();

    let record = store.query_user(7).unwrap().unwrap();
    assert_eq!(record.servers.len(), 1);
    assert_eq!(record.servers.to_delimited(), "100");
}

#[test]
fn server_channel_upsert_overwrites() {
    let dir = tempfile::tempdir().unwrap();
    let store = temp_store(&dir);

    store.set_server(500, 900).unwrap();
    store.set_server(500, 901).unwrap();

    let record = store.query_server(500).unwrap().unwrap();
    assert_eq!(record.id, 500);
    assert_eq!(record.channel, 901);
}

#[test]
fn queries_on_unknown_ids_return_absence() {
    let dir = tempfile::tempdir().unwrap();
    let store = temp_store(&dir);

    assert!(store.query_user(1).unwrap().is_none());
    assert!(store.query_server(1).unwrap().is_none());
}

#[test]
fn removing_unknown_user_is_silent() {
    let dir = tempfile::tempdir().unwrap();
    let store = temp_store(&dir);

    store.remove_user(12345).unwrap();
}

#[test]
fn default_store_points_at_store_db() {
    let store = RecordStore::default();
    assert_eq!(store.path(), Path::new(DEFAULT_STORE_FILE));
}

#[test]
fn clones_share_the_same_store_file() {
    let dir = tempfile::tempdir().unwrap();
    let store = temp_store(&dir);
    let other = store.clone();

    other.set_user(42, 100, "03/14").unwrap();

    let record = store.query_user(42).unwrap().unwrap();
    assert!(record.servers.contains("100"));
}
