//! Preference store tests.

use std::fs;

use card_dragon::core::PrefsError;
use card_dragon::prefs::{JsonFileStore, MemoryStore, PreferenceStore, TutorialFlag};

/// Test the flag defaults to unseen.
#[test]
fn test_fresh_flag_is_unseen() {
    let flag = TutorialFlag::new(MemoryStore::default());
    assert!(!flag.has_seen().unwrap());
}

/// Test the file store persists across reopen.
#[test]
fn test_file_store_persists() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("prefs.json");

    let mut flag = TutorialFlag::new(JsonFileStore::open(&path).unwrap());
    assert!(!flag.has_seen().unwrap());
    assert!(!path.exists());
    flag.mark_seen().unwrap();
    assert!(path.exists());

    let reopened = TutorialFlag::new(JsonFileStore::open(&path).unwrap());
    assert!(reopened.has_seen().unwrap());

    let content = fs::read_to_string(&path).unwrap();
    assert!(content.contains("\"hasSeenTutorial\": true"));
}

/// Test reset removes the key from disk.
#[test]
fn test_file_store_reset() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("prefs.json");

    let mut flag = TutorialFlag::new(JsonFileStore::open(&path).unwrap());
    flag.mark_seen().unwrap();
    flag.reset().unwrap();

    let store = JsonFileStore::open(&path).unwrap();
    assert_eq!(store.get_bool(TutorialFlag::<JsonFileStore>::KEY).unwrap(), None);
}

/// Test unrelated keys survive.
#[test]
fn test_other_keys_kept() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("prefs.json");
    fs::write(&path, r#"{"muted": true}"#).unwrap();

    let mut flag = TutorialFlag::new(JsonFileStore::open(&path).unwrap());
    flag.mark_seen().unwrap();

    let store = flag.into_inner();
    assert_eq!(store.get_bool("muted").unwrap(), Some(true));
    assert_eq!(store.path(), path.as_path());
}

/// Test a corrupt file is reported as a JSON error.
#[test]
fn test_corrupt_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("prefs.json");
    fs::write(&path, "not json").unwrap();

    assert!(matches!(JsonFileStore::open(&path), Err(PrefsError::Json(_))));
}

/// Test an unreadable path is reported as an I/O error.
#[test]
fn test_directory_path_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    assert!(matches!(JsonFileStore::open(dir.path()), Err(PrefsError::Io(_))));
}

/// Test a failed write leaves memory matching the disk.
#[test]
fn test_failed_write_keeps_memory_in_sync() {
    let dir = tempfile::tempdir().unwrap();
    let sub = dir.path().join("profile");
    fs::create_dir(&sub).unwrap();

    let mut store = JsonFileStore::open(sub.join("prefs.json")).unwrap();
    store.set_bool("muted", true).unwrap();
    fs::remove_dir_all(&sub).unwrap();

    assert!(matches!(store.set_bool("hasSeenTutorial", true), Err(PrefsError::Io(_))));
    assert_eq!(store.get_bool("hasSeenTutorial").unwrap(), None);

    assert!(matches!(store.set_bool("muted", false), Err(PrefsError::Io(_))));
    assert_eq!(store.get_bool("muted").unwrap(), Some(true));

    assert!(matches!(store.remove("muted"), Err(PrefsError::Io(_))));
    assert_eq!(store.get_bool("muted").unwrap(), Some(true));
}
