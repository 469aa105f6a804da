use ottawa_cli::config::{load_content, read_content, write_default_content};
use ottawa_core::ReferenceContent;

#[test]
fn explicit_path_is_loaded() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("content.json");
    std::fs::write(&path, r#"{ "content_version": 1, "step_target": 6 }"#).unwrap();

    let content = load_content(Some(path.as_path())).unwrap();
    assert_eq!(content.step_target, 6);
}

#[test]
fn written_defaults_load_back() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("content.json");

    write_default_content(&path).unwrap();
    assert_eq!(read_content(&path).unwrap(), ReferenceContent::default());
}

#[test]
fn missing_explicit_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = read_content(&dir.path().join("absent.json")).unwrap_err();
    assert!(err.to_string().contains("failed to read content"));
}

#[test]
fn invalid_content_names_the_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("content.json");
    std::fs::write(&path, r#"{ "content_version": 7 }"#).unwrap();

    let err = read_content(&path).unwrap_err();
    assert!(err.to_string().contains("invalid content"));
}
