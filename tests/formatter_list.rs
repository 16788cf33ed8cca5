use iconsift::formatters::ListFormatter;
use std::fs;

#[test]
fn list_formatter_writes_one_name_per_line_with_trailing_newline() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("icon_list.txt");

    let icons = vec!["fa-code".to_string(), "fa-github".to_string()];
    ListFormatter::new().format_to_file(&icons, &path).unwrap();

    let content = fs::read_to_string(&path).unwrap();
    assert_eq!(content, "fa-code\nfa-github\n");
}

#[test]
fn list_formatter_writes_single_newline_for_empty_list() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("empty.txt");

    ListFormatter::new().format_to_file(&[], &path).unwrap();

    let content = fs::read_to_string(&path).unwrap();
    assert_eq!(content, "\n");
}
