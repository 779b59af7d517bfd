// e2e/error_handling.rs - exit codes and skip behaviour of the binary.
//
// A rejected directive ends the run with a status that names the problem;
// files that cannot be converted are skipped without changing the status.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use image::{ImageFormat, RgbImage};
use tempfile::TempDir;

fn bin() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_image_convert"))
}

fn run_in(dir: &Path, args: &[&str]) -> Output {
    Command::new(bin())
        .current_dir(dir)
        .env_remove("IMAGE_CONVERT_DISPLAY_LEVEL")
        .env_remove("IMAGE_CONVERT_INVERT_POLICY")
        .env_remove("IMAGE_CONVERT_VIEWER")
        .args(args)
        .output()
        .expect("failed to run image_convert")
}

fn exit_code(args: &[&str]) -> Option<i32> {
    let dir = TempDir::new().unwrap();
    run_in(dir.path(), args).status.code()
}

fn write_png(dir: &Path, name: &str) -> PathBuf {
    let path = dir.join(name);
    RgbImage::from_pixel(2, 2, image::Rgb([10, 10, 10]))
        .save_with_format(&path, ImageFormat::Png)
        .unwrap();
    path
}

fn bak(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_owned();
    name.push(".bak");
    PathBuf::from(name)
}

// ── 1. Directive exit codes ──────────────────────────────────────────────────

#[test]
fn test_exit_invert_with_argument() {
    assert_eq!(exit_code(&["-i2"]), Some(1));
}

#[test]
fn test_exit_threshold_out_of_range() {
    assert_eq!(exit_code(&["-t256"]), Some(2));
}

#[test]
fn test_exit_threshold_not_integer() {
    assert_eq!(exit_code(&["-tfoo"]), Some(3));
}

#[test]
fn test_exit_unknown_command() {
    assert_eq!(exit_code(&["-x"]), Some(4));
    assert_eq!(exit_code(&["-bxyz"]), Some(4));
}

#[test]
fn test_exit_bad_quit_argument() {
    assert_eq!(exit_code(&["-qz"]), Some(5));
}

#[test]
fn test_exit_resize_not_positive() {
    assert_eq!(exit_code(&["-r0"]), Some(6));
}

#[test]
fn test_exit_resize_not_integer() {
    assert_eq!(exit_code(&["-r1.5"]), Some(7));
}

#[test]
fn test_error_message_on_stderr() {
    let dir = TempDir::new().unwrap();
    let out = run_in(dir.path(), &["-t300"]);
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("Threshold argument must be between 0 and 255"), "{}", stderr);
}

#[test]
fn test_bad_directive_stops_before_later_files() {
    let dir = TempDir::new().unwrap();
    let a = write_png(dir.path(), "a.png");
    let b = write_png(dir.path(), "b.png");

    let out = run_in(dir.path(), &["-i", "a.png", "-t", "b.png"]);
    assert_eq!(out.status.code(), Some(3));
    assert!(bak(&a).exists(), "earlier file was converted");
    assert!(!bak(&b).exists(), "later file never reached");
}

// ── 2. Skipped files ─────────────────────────────────────────────────────────

#[test]
fn test_missing_file_is_skipped() {
    let dir = TempDir::new().unwrap();
    let b = write_png(dir.path(), "b.png");

    let out = run_in(dir.path(), &["-i", "nope.png", "b.png"]);
    assert_eq!(out.status.code(), Some(0));
    assert!(String::from_utf8_lossy(&out.stderr).contains("nope.png"));
    assert!(bak(&b).exists());
}

#[test]
fn test_grayscale_is_skipped() {
    let dir = TempDir::new().unwrap();
    let gray = dir.path().join("g.png");
    image::GrayImage::new(2, 2).save_with_format(&gray, ImageFormat::Png).unwrap();
    let before = fs::read(&gray).unwrap();

    let out = run_in(dir.path(), &["-i", "g.png"]);
    assert_eq!(out.status.code(), Some(0));
    assert_eq!(fs::read(&gray).unwrap(), before);
    assert!(!bak(&gray).exists());
}

#[test]
fn test_garbage_file_is_skipped() {
    let dir = TempDir::new().unwrap();
    let junk = dir.path().join("junk.png");
    fs::write(&junk, b"garbage").unwrap();

    let out = run_in(dir.path(), &["-i", "junk.png"]);
    assert_eq!(out.status.code(), Some(0));
    assert_eq!(fs::read(&junk).unwrap(), b"garbage");
    assert!(!bak(&junk).exists());
}

#[test]
fn test_oversized_resize_is_skipped() {
    let dir = TempDir::new().unwrap();
    let a = write_png(dir.path(), "a.png");
    let b = write_png(dir.path(), "b.png");

    let out = run_in(dir.path(), &["-r100000000", "a.png", "-i", "b.png"]);
    assert_eq!(out.status.code(), Some(0));
    assert!(String::from_utf8_lossy(&out.stderr).contains("a.png"));
    assert!(!bak(&a).exists());
    assert!(bak(&b).exists(), "batch continues after the skipped file");
}

#[test]
fn test_file_before_directive_is_ignored() {
    let dir = TempDir::new().unwrap();
    let a = write_png(dir.path(), "a.png");

    let out = run_in(dir.path(), &["a.png"]);
    assert_eq!(out.status.code(), Some(0));
    assert!(!bak(&a).exists());
}

#[cfg(unix)]
#[test]
fn test_unwritable_directory_exits_8() {
    use std::os::unix::fs::PermissionsExt;

    let dir = TempDir::new().unwrap();
    let sub = dir.path().join("ro");
    fs::create_dir(&sub).unwrap();
    let img = write_png(&sub, "a.png");
    fs::set_permissions(&sub, fs::Permissions::from_mode(0o555)).unwrap();

    // Root ignores directory permissions; nothing to check in that case.
    if fs::write(sub.join("probe"), b"").is_ok() {
        let _ = fs::remove_file(sub.join("probe"));
        fs::set_permissions(&sub, fs::Permissions::from_mode(0o755)).unwrap();
        return;
    }

    let out = run_in(dir.path(), &["-i", "ro/a.png"]);
    fs::set_permissions(&sub, fs::Permissions::from_mode(0o755)).unwrap();
    assert_eq!(out.status.code(), Some(8));
    assert!(img.exists());
    assert!(!bak(&img).exists());
}
