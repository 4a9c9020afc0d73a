use std::fs;

use postgen::output::{write_outputs, COLLECTION_FILE, ENVIRONMENT_FILE};

#[test]
fn writes_both_documents_into_fresh_directory() {
    let dir = tempfile::tempdir().expect("tempdir");
    let target = dir.path().join("exports");
    let written = write_outputs(&target).expect("generation succeeds");

    assert_eq!(written.collection, target.join(COLLECTION_FILE));
    assert_eq!(written.environment, target.join(ENVIRONMENT_FILE));

    for path in [&written.collection, &written.environment] {
        let text = fs::read_to_string(path).expect("readable output");
        let value: serde_json::Value = serde_json::from_str(&text).expect("valid JSON");
        assert!(value.is_object());
        assert!(text.contains("\n  "), "expected pretty-printed output");
    }
}

#[test]
fn collection_bytes_are_identical_across_runs() {
    let dir = tempfile::tempdir().expect("tempdir");
    let first_dir = dir.path().join("a");
    let second_dir = dir.path().join("b");
    let first = write_outputs(&first_dir).expect("first run");
    let second = write_outputs(&second_dir).expect("second run");

    let a = fs::read(first.collection).expect("first collection");
    let b = fs::read(second.collection).expect("second collection");
    assert_eq!(a, b);
}

#[test]
fn rerun_overwrites_existing_files() {
    let dir = tempfile::tempdir().expect("tempdir");
    let target = dir.path().to_path_buf();
    let written = write_outputs(&target).expect("first run");
    fs::write(&written.collection, "stale").expect("clobber");

    write_outputs(&target).expect("second run");
    let text = fs::read_to_string(&written.collection).expect("readable");
    serde_json::from_str::<serde_json::Value>(&text).expect("regenerated JSON");
}

#[test]
fn collection_document_root_keys() {
    let dir = tempfile::tempdir().expect("tempdir");
    let written = write_outputs(dir.path()).expect("generation succeeds");
    let text = fs::read_to_string(written.collection).expect("readable");
    let value: serde_json::Value = serde_json::from_str(&text).expect("valid JSON");
    let keys: Vec<_> = value
        .as_object()
        .expect("object root")
        .keys()
        .cloned()
        .collect();
    assert_eq!(keys, ["info", "item"]);
    assert_eq!(value["item"].as_array().map(Vec::len), Some(4));
}
