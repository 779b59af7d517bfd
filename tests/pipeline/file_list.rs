// Integration tests for util/file_list.rs: wildcard expansion.

use std::fs;

use image_convert::util::expand_pattern;
use tempfile::TempDir;

fn tree() -> TempDir {
    let dir = TempDir::new().unwrap();
    for name in ["img1.png", "img2.png", "img10.png", "photo.jpg"] {
        fs::write(dir.path().join(name), b"x").unwrap();
    }
    fs::create_dir(dir.path().join("folder.png")).unwrap();
    dir
}

fn names(dir: &TempDir, tail: &str) -> Vec<String> {
    let pattern = dir.path().join(tail).to_string_lossy().into_owned();
    expand_pattern(&pattern)
        .unwrap()
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
        .collect()
}

#[test]
fn star_skips_directories() {
    let dir = tree();
    assert_eq!(names(&dir, "*.png"), vec!["img1.png", "img10.png", "img2.png"]);
}

#[test]
fn question_mark_matches_one_char() {
    let dir = tree();
    assert_eq!(names(&dir, "img?.png"), vec!["img1.png", "img2.png"]);
}

#[test]
fn character_class() {
    let dir = tree();
    assert_eq!(names(&dir, "img[2-9].png"), vec!["img2.png"]);
}

#[test]
fn missing_literal_is_empty() {
    let dir = tree();
    assert!(names(&dir, "absent.png").is_empty());
}
