use iconsift::core::IconInventory;
use iconsift::formatters::CsvReportFormatter;
use std::collections::HashSet;
use std::fs;

fn inventory(classes: &[&str]) -> IconInventory {
    let raw: HashSet<String> = classes.iter().map(|c| c.to_string()).collect();
    IconInventory::from_raw_classes(&raw)
}

#[test]
fn csv_formatter_emits_header_and_brand_flags() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("icons.csv");

    let inv = inventory(&["fa-yin-yang", "fab-github"]);
    CsvReportFormatter::new().format_to_file(&inv, &path).unwrap();

    let content = fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = content.lines().collect();

    assert_eq!(lines[0], "icon_class,is_brand");
    assert_eq!(lines[1], "fa-github,yes");
    assert_eq!(lines[2], "fa-yin-yang,no");
    assert_eq!(lines.len(), 3);
    assert!(content.ends_with('\n'));
}

#[test]
fn csv_formatter_with_no_icons_still_writes_the_header() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("empty.csv");

    let inv = inventory(&[]);
    CsvReportFormatter::new().format_to_file(&inv, &path).unwrap();

    let content = fs::read_to_string(&path).unwrap();
    assert_eq!(content, "icon_class,is_brand\n");
}
