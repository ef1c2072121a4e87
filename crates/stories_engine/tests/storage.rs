use std::fs;

use stories_engine::{KeyValueStore, MemoryStore, RonFileStore, StorageState, STORE_FILENAME};
use tempfile::TempDir;

fn init_logging() {
    stories_logging::initialize_for_tests();
}

#[test]
fn memory_store_falls_back_until_set() {
    init_logging();
    let storage = StorageState::new(MemoryStore::new());

    assert_eq!(storage.get("search", "React"), "React");
    storage.set("search", "Redux");
    assert_eq!(storage.get("search", "React"), "Redux");
}

#[test]
fn empty_value_reads_as_fallback() {
    init_logging();
    let store = MemoryStore::new();
    store.write("search", "").unwrap();
    assert_eq!(store.read("search").unwrap(), Some(String::new()));

    let storage = StorageState::new(store);
    assert_eq!(storage.get("search", "React"), "React");
    storage.set("search", "");
    assert_eq!(storage.get("search", "React"), "React");
}

#[test]
fn keys_are_independent() {
    let storage = StorageState::new(MemoryStore::new());

    storage.set("search", "Rust");
    assert_eq!(storage.get("other", "fallback"), "fallback");
}

#[test]
fn file_store_survives_reopen() {
    init_logging();
    let temp = TempDir::new().unwrap();

    let storage = StorageState::new(RonFileStore::new(temp.path()));
    assert_eq!(storage.get("search", "React"), "React");
    storage.set("search", "Redux");
    assert_eq!(storage.get("search", "React"), "Redux");
    drop(storage);

    let reopened = StorageState::new(RonFileStore::new(temp.path()));
    assert_eq!(reopened.get("search", "React"), "Redux");
    assert!(temp.path().join(STORE_FILENAME).is_file());
}

#[test]
fn file_store_keeps_other_keys_on_write() {
    let temp = TempDir::new().unwrap();
    let store = RonFileStore::new(temp.path());

    store.write("search", "Rust").unwrap();
    store.write("theme", "dark").unwrap();
    store.write("search", "Tokio").unwrap();

    assert_eq!(store.read("search").unwrap(), Some("Tokio".to_string()));
    assert_eq!(store.read("theme").unwrap(), Some("dark".to_string()));
}

#[test]
fn malformed_file_reads_as_fallback_and_is_replaced_on_write() {
    init_logging();
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join(STORE_FILENAME), "not ron at all {{{").unwrap();

    let storage = StorageState::new(RonFileStore::new(temp.path()));
    assert_eq!(storage.get("search", "React"), "React");

    storage.set("search", "Serde");
    assert_eq!(storage.get("search", "React"), "Serde");
}

#[test]
fn unwritable_location_is_swallowed() {
    init_logging();
    let temp = TempDir::new().unwrap();
    let blocker = temp.path().join("blocked");
    fs::write(&blocker, "x").unwrap();

    let storage = StorageState::new(RonFileStore::new(&blocker));
    storage.set("search", "Redux");
    assert_eq!(storage.get("search", "React"), "React");
}
