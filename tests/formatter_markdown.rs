use iconsift::formatters::MarkdownFormatter;
use std::fs;

#[test]
fn markdown_formatter_emits_fixed_header_and_one_row_per_icon() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("table.md");

    let icons = vec!["fa-code".to_string(), "fa-github".to_string()];
    MarkdownFormatter::new()
        .format_to_file(&icons, &path)
        .unwrap();

    let content = fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = content.lines().collect();

    assert_eq!(lines[0], "| Icon Class | Preview |");
    assert_eq!(lines[1], "|-----------|---------|");
    assert_eq!(
        lines[2],
        "| `fa-code` | `<span class=\"icon fa-code\"></span>` |"
    );
    assert_eq!(lines.len(), 4);
    assert!(content.ends_with('\n'));
}

#[test]
fn markdown_formatter_with_no_icons_keeps_the_header() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("empty.md");

    MarkdownFormatter::new().format_to_file(&[], &path).unwrap();

    let content = fs::read_to_string(&path).unwrap();
    assert_eq!(content, "| Icon Class | Preview |\n|-----------|---------|\n");
}
