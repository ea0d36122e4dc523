use std::fs;

use fake_drawer::{WordEntry, WordSet, WordStoreError};
use tempfile::tempdir;

#[test]
fn save_then_load_keeps_order() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("words.json");
    let words: WordSet = [
        WordEntry::new("Pizza", "food"),
        WordEntry::new("aardvark", "animal"),
    ]
    .into_iter()
    .collect();

    words.save(&path).unwrap();
    assert_eq!(WordSet::load(&path).unwrap(), words);

    let raw: serde_json::Value = serde_json::from_slice(&fs::read(&path).unwrap()).unwrap();
    assert_eq!(raw[0]["text"], "Pizza");
    assert_eq!(raw[0]["category"], "food");
}

#[test]
fn missing_file_is_a_read_error() {
    let dir = tempdir().unwrap();
    let err = WordSet::load(dir.path().join("nope.json")).unwrap_err();
    assert!(matches!(err, WordStoreError::Read { .. }));
}

#[test]
fn malformed_json_is_a_parse_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("words.json");
    fs::write(&path, "[{\"text\": \"aardvark\",").unwrap();

    let err = WordSet::load(&path).unwrap_err();
    assert!(matches!(err, WordStoreError::Parse { .. }));
}

#[test]
fn empty_array_loads_as_empty_set() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("words.json");
    fs::write(&path, "[]").unwrap();
    assert!(WordSet::load(&path).unwrap().is_empty());
}

#[test]
fn retiring_and_saving_shrinks_the_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("words.json");
    fs::write(
        &path,
        r#"[{"text":"Pizza","category":"food"},{"text":"Croissant","category":"food"}]"#,
    )
    .unwrap();

    let mut words = WordSet::load(&path).unwrap();
    assert!(words.retire("Pizza", "food"));
    words.save(&path).unwrap();

    let reloaded = WordSet::load(&path).unwrap();
    assert_eq!(reloaded.len(), 1);
    assert_eq!(reloaded.get(0), Some(&WordEntry::new("Croissant", "food")));
}

#[test]
fn appended_entries_are_persisted() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("words.json");
    fs::write(&path, r#"[{"text":"Pizza","category":"food"}]"#).unwrap();

    let mut words = WordSet::load(&path).unwrap();
    words.push(WordEntry::from_input(" aardvark ", "animal").unwrap());
    words.save(&path).unwrap();

    let reloaded = WordSet::load(&path).unwrap();
    assert_eq!(reloaded.categories(), vec!["animal", "food"]);
    assert_eq!(reloaded.get(1).and_then(WordEntry::word), Some("aardvark"));
}
