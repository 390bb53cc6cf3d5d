use super::*;

#[test]
fn missing_file_reads_as_none() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileStore::new(dir.path());
    assert_eq!(store.get("ss_feed").unwrap(), None);
}

#[test]
fn set_creates_root_and_round_trips() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path().join("nested").join("data");
    let store = FileStore::new(&root);
    store.set("ss_feed", r#"[{"a":1}]"#).unwrap();
    assert!(root.join("ss_feed.json").exists());
    assert_eq!(store.get("ss_feed").unwrap().as_deref(), Some(r#"[{"a":1}]"#));
}

#[test]
fn set_leaves_no_temp_file() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileStore::new(dir.path());
    store.set("ss_mood", "[]").unwrap();
    let names: Vec<String> = std::fs::read_dir(dir.path())
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    assert_eq!(names, vec!["ss_mood.json".to_owned()]);
}

#[test]
fn remove_deletes_file_and_tolerates_missing() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileStore::new(dir.path());
    store.set("ss_badges", "[]").unwrap();
    store.remove("ss_badges").unwrap();
    store.remove("ss_badges").unwrap();
    assert_eq!(store.get("ss_badges").unwrap(), None);
}

#[test]
fn rejects_path_like_keys() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileStore::new(dir.path());
    assert!(matches!(store.get("../etc/passwd"), Err(StoreError::InvalidKey(_))));
    assert!(matches!(store.set("a/b", "x"), Err(StoreError::InvalidKey(_))));
    assert!(matches!(store.remove(""), Err(StoreError::InvalidKey(_))));
}

#[test]
fn is_valid_key_accepts_word_characters() {
    assert!(is_valid_key("ss_diary"));
    assert!(is_valid_key("a-b_C9"));
    assert!(!is_valid_key("a.b"));
    assert!(!is_valid_key("a b"));
}
