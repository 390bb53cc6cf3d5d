use super::*;
use crate::store::MemoryStore;

fn editor() -> ProfileEditor {
    ProfileEditor::open(Arc::new(MemoryStore::new()))
}

#[test]
fn fresh_editor_shows_default_profile() {
    let editor = editor();
    assert_eq!(editor.saved(), &Profile::default());
    assert_eq!(editor.draft(), editor.saved());
    assert!(!editor.is_dirty());
    assert_eq!(editor.saved().interests, vec!["Toán", "Lập trình"]);
}

#[test]
fn draft_edits_do_not_touch_saved_until_save() {
    let store = Arc::new(MemoryStore::new());
    let mut editor = ProfileEditor::open(store.clone());
    editor.set_name("Minh");
    editor.set_grade("Lớp 11");
    assert!(editor.is_dirty());
    assert_eq!(editor.saved().name, "Học sinh ẩn danh");
    assert_eq!(ProfileEditor::open(store.clone()).saved().name, "Học sinh ẩn danh");

    editor.save();
    assert!(!editor.is_dirty());
    let reloaded = ProfileEditor::open(store);
    assert_eq!(reloaded.saved().name, "Minh");
    assert_eq!(reloaded.saved().grade, "Lớp 11");
}

#[test]
fn discard_resets_draft() {
    let mut editor = editor();
    editor.set_bio("khác");
    editor.add_interest("Vẽ").unwrap();
    editor.discard();
    assert_eq!(editor.draft(), &Profile::default());
}

#[test]
fn interests_append_trimmed() {
    let mut editor = editor();
    editor.add_interest("  Bóng rổ ").unwrap();
    assert_eq!(editor.draft().interests.last().map(String::as_str), Some("Bóng rổ"));
    assert_eq!(editor.add_interest("   "), Err(ServiceError::Empty { field: "interest" }));
    assert_eq!(editor.draft().interests.len(), 3);
}

#[test]
fn remove_interest_by_index() {
    let mut editor = editor();
    assert_eq!(editor.remove_interest(0), Ok("Toán".to_owned()));
    assert_eq!(editor.draft().interests, vec!["Lập trình"]);
    assert_eq!(
        editor.remove_interest(5),
        Err(ServiceError::OutOfRange { field: "interests", index: 5, len: 1 })
    );
}

#[test]
fn achievements_append_and_remove() {
    let mut editor = editor();
    editor.add_achievement(" Học sinh giỏi ").unwrap();
    assert_eq!(editor.draft().achievements, vec!["Giải Nhì HSG Tin tỉnh", "Học sinh giỏi"]);
    assert_eq!(editor.remove_achievement(0), Ok("Giải Nhì HSG Tin tỉnh".to_owned()));
    assert!(editor.remove_achievement(1).is_err());
}

#[test]
fn projects_prepend_and_require_title() {
    let mut editor = editor();
    let project = editor.add_project(" App hẹn giờ ", " https://example.com ", " nhỏ ").unwrap();
    assert_eq!(project, Project {
        title: "App hẹn giờ".to_owned(),
        link: "https://example.com".to_owned(),
        desc: "nhỏ".to_owned(),
    });
    assert_eq!(editor.draft().projects[0], project);
    assert_eq!(editor.draft().projects.len(), 2);

    assert_eq!(
        editor.add_project(" ", "link", "desc"),
        Err(ServiceError::Empty { field: "title" })
    );
    assert_eq!(editor.draft().projects.len(), 2);

    let removed = editor.remove_project(1).unwrap();
    assert_eq!(removed.title, "Web flashcard Hóa 11");
}

#[test]
fn reads_partial_stored_profile() {
    let store = Arc::new(MemoryStore::new());
    store.set("ss_profile", r#"{"name":"Lan","grade":"Lớp 10"}"#).unwrap();
    let editor = ProfileEditor::open(store);
    assert_eq!(editor.saved().name, "Lan");
    assert!(editor.saved().interests.is_empty());
}
