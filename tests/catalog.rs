//! Candidate discovery and picker input parsing.

use pdfsec::services::catalog::{human_size, list_candidates, parse_selection, Selection};
use std::fs;
use tempfile::TempDir;

#[test]
fn human_size_units() {
    assert_eq!(human_size(512), "512.0 B");
    assert_eq!(human_size(2048), "2.0 KB");
    assert_eq!(human_size(5 * 1024 * 1024), "5.0 MB");
    assert_eq!(human_size(3 * 1024 * 1024 * 1024), "3.0 GB");
    assert_eq!(human_size(2 * 1024 * 1024 * 1024 * 1024), "2.0 TB");
}

#[test]
fn selection_parsing() {
    assert_eq!(parse_selection("q", 3), Selection::Cancel);
    assert_eq!(parse_selection(" Q ", 3), Selection::Cancel);
    assert_eq!(parse_selection("1", 3), Selection::Pick(0));
    assert_eq!(parse_selection("3", 3), Selection::Pick(2));
    assert_eq!(parse_selection("0", 3), Selection::Invalid);
    assert_eq!(parse_selection("4", 3), Selection::Invalid);
    assert_eq!(parse_selection("abc", 3), Selection::Invalid);
    assert_eq!(parse_selection("", 3), Selection::Invalid);
    assert_eq!(parse_selection("-1", 3), Selection::Invalid);
}

#[test]
fn listing_filters_sorts_and_merges() {
    let tmp = TempDir::new().unwrap();
    let downloads = tmp.path().join("downloads");
    let sanitized = tmp.path().join("sanitized");
    fs::create_dir_all(&downloads).unwrap();
    fs::create_dir_all(&sanitized).unwrap();

    fs::write(downloads.join("b.pdf"), b"x").unwrap();
    fs::write(downloads.join("a.PDF"), b"xy").unwrap();
    fs::write(downloads.join("notes.txt"), b"x").unwrap();
    fs::write(sanitized.join("sanitized_a.pdf"), b"x").unwrap();

    let names: Vec<String> = list_candidates(&downloads, &sanitized)
        .unwrap()
        .into_iter()
        .map(|c| c.name)
        .collect();
    // Downloads first (sorted), then sanitized outputs; non-PDFs excluded.
    assert_eq!(names, vec!["a.PDF", "b.pdf", "sanitized_a.pdf"]);
}

#[test]
fn listing_tolerates_missing_directories() {
    let tmp = TempDir::new().unwrap();
    let downloads = tmp.path().join("gone");
    let sanitized = tmp.path().join("also-gone");
    assert!(list_candidates(&downloads, &sanitized).unwrap().is_empty());
}
