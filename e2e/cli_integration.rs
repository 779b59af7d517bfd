// e2e/cli_integration.rs - black-box tests of the `image_convert` binary.
//
// Each test builds a few small images in a TempDir, runs the binary on them
// with std::process::Command and inspects the files left behind.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use image::{ImageFormat, RgbImage, RgbaImage};
use tempfile::TempDir;

/// Locate the binary produced by Cargo.
fn bin() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_image_convert"))
}

/// A command with the tool's environment variables cleared.
fn command(dir: &Path) -> Command {
    let mut cmd = Command::new(bin());
    cmd.current_dir(dir)
        .env_remove("IMAGE_CONVERT_DISPLAY_LEVEL")
        .env_remove("IMAGE_CONVERT_INVERT_POLICY")
        .env_remove("IMAGE_CONVERT_VIEWER");
    cmd
}

fn run_in(dir: &Path, args: &[&str]) -> Output {
    command(dir).args(args).output().expect("failed to run image_convert")
}

fn write_png(dir: &Path, name: &str, px: [u8; 3]) -> PathBuf {
    let path = dir.join(name);
    RgbImage::from_pixel(4, 4, image::Rgb(px))
        .save_with_format(&path, ImageFormat::Png)
        .unwrap();
    path
}

fn first_pixel(path: &Path) -> [u8; 3] {
    image::open(path).unwrap().to_rgb8().get_pixel(0, 0).0
}

fn bak(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_owned();
    name.push(".bak");
    PathBuf::from(name)
}

// ── 1. Basic conversions ─────────────────────────────────────────────────────

#[test]
fn test_cli_invert() {
    let dir = TempDir::new().unwrap();
    let img = write_png(dir.path(), "a.png", [10, 20, 30]);
    let original = fs::read(&img).unwrap();

    let out = run_in(dir.path(), &["-i", "a.png"]);
    assert_eq!(out.status.code(), Some(0));
    assert_eq!(first_pixel(&img), [245, 235, 225]);
    assert_eq!(fs::read(bak(&img)).unwrap(), original, "backup holds the original bytes");
}

#[test]
fn test_cli_success_message_on_stdout() {
    let dir = TempDir::new().unwrap();
    write_png(dir.path(), "a.png", [0, 0, 0]);

    let out = run_in(dir.path(), &["-I,T32", "a.png"]);
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(
        stdout.contains("File 'a.png' has been converted with command 'i,t32'"),
        "stdout was: {}",
        stdout
    );
}

#[test]
fn test_cli_threshold() {
    let dir = TempDir::new().unwrap();
    let dark = write_png(dir.path(), "dark.png", [20, 20, 20]);
    let light = write_png(dir.path(), "light.png", [200, 200, 200]);

    let out = run_in(dir.path(), &["-t32", "dark.png", "light.png"]);
    assert!(out.status.success());
    assert_eq!(first_pixel(&dark), [0, 0, 0]);
    assert_eq!(first_pixel(&light), [200, 200, 200]);
}

#[test]
fn test_cli_light_to_white() {
    let dir = TempDir::new().unwrap();
    let img = write_png(dir.path(), "a.png", [230, 100, 230]);

    assert!(run_in(dir.path(), &["-i,t32,i", "a.png"]).status.success());
    assert_eq!(first_pixel(&img), [255, 100, 255]);
}

#[test]
fn test_cli_resize() {
    let dir = TempDir::new().unwrap();
    let img = write_png(dir.path(), "a.png", [1, 2, 3]);

    assert!(run_in(dir.path(), &["-r200", "a.png"]).status.success());
    let resized = image::open(&img).unwrap();
    assert_eq!((resized.width(), resized.height()), (8, 8));
}

#[test]
fn test_cli_two_directives() {
    let dir = TempDir::new().unwrap();
    let a = write_png(dir.path(), "a.png", [10, 10, 10]);
    let b = write_png(dir.path(), "b.png", [10, 10, 10]);

    let out = run_in(dir.path(), &["-i", "a.png", "-t32", "b.png"]);
    assert!(out.status.success());
    assert_eq!(first_pixel(&a), [245, 245, 245]);
    assert_eq!(first_pixel(&b), [0, 0, 0]);
}

#[test]
fn test_cli_glob_expansion() {
    let dir = TempDir::new().unwrap();
    let a = write_png(dir.path(), "a.png", [0, 0, 0]);
    let b = write_png(dir.path(), "b.png", [0, 0, 0]);
    let c = dir.path().join("c.bmp");
    RgbImage::new(2, 2).save_with_format(&c, ImageFormat::Bmp).unwrap();

    let out = run_in(dir.path(), &["-i", "*.png"]);
    assert!(out.status.success());
    assert_eq!(first_pixel(&a), [255, 255, 255]);
    assert_eq!(first_pixel(&b), [255, 255, 255]);
    assert!(!bak(&c).exists(), "non-matching file untouched");
}

#[test]
fn test_cli_flatten_policy_from_env() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("a.png");
    RgbaImage::from_pixel(2, 2, image::Rgba([100, 100, 100, 0]))
        .save_with_format(&path, ImageFormat::Png)
        .unwrap();

    let out = command(dir.path())
        .env("IMAGE_CONVERT_INVERT_POLICY", "flatten")
        .args(["-b000000,i", "a.png"])
        .output()
        .unwrap();
    assert!(out.status.success());
    let img = image::open(&path).unwrap();
    assert!(img.as_rgb8().is_some(), "alpha channel dropped");
    assert_eq!(img.to_rgb8().get_pixel(0, 0).0, [255, 255, 255]);
}

#[test]
fn test_cli_view_without_terminal_still_saves() {
    let dir = TempDir::new().unwrap();
    let img = write_png(dir.path(), "a.png", [0, 0, 0]);

    let out = run_in(dir.path(), &["-v,i,v", "a.png"]);
    assert!(out.status.success());
    assert_eq!(first_pixel(&img), [255, 255, 255]);
}

// ── 2. Quit ──────────────────────────────────────────────────────────────────

#[test]
fn test_cli_quit_all_touches_nothing() {
    let dir = TempDir::new().unwrap();
    let a = write_png(dir.path(), "a.png", [5, 5, 5]);
    let b = write_png(dir.path(), "b.png", [5, 5, 5]);
    let before = fs::read(&a).unwrap();

    let out = run_in(dir.path(), &["-i,qq", "a.png", "b.png"]);
    assert_eq!(out.status.code(), Some(0));
    assert_eq!(fs::read(&a).unwrap(), before);
    assert!(!bak(&a).exists());
    assert!(!bak(&b).exists());
}

#[test]
fn test_cli_quit_file_leaves_file_unchanged() {
    let dir = TempDir::new().unwrap();
    let a = write_png(dir.path(), "a.png", [5, 5, 5]);
    let before = fs::read(&a).unwrap();

    let out = run_in(dir.path(), &["-i,q", "a.png"]);
    assert_eq!(out.status.code(), Some(0));
    assert_eq!(fs::read(&a).unwrap(), before);
    assert!(!bak(&a).exists());
}

// ── 3. Help and usage ────────────────────────────────────────────────────────

#[test]
fn test_cli_no_args_prints_usage() {
    let dir = TempDir::new().unwrap();
    let out = run_in(dir.path(), &[]);
    assert_eq!(out.status.code(), Some(0));
    assert!(String::from_utf8_lossy(&out.stderr).contains("Usage"));
}

#[test]
fn test_cli_help() {
    let dir = TempDir::new().unwrap();
    for flag in ["-h", "-?", "-H"] {
        let out = run_in(dir.path(), &[flag]);
        assert_eq!(out.status.code(), Some(0), "{}", flag);
        let stdout = String::from_utf8_lossy(&out.stdout);
        assert!(stdout.contains("tNNN"), "{}: {}", flag, stdout);
        assert!(stdout.contains("qq"), "{}: {}", flag, stdout);
    }
}

#[test]
fn test_cli_help_then_convert() {
    let dir = TempDir::new().unwrap();
    let img = write_png(dir.path(), "a.png", [0, 0, 0]);

    let out = run_in(dir.path(), &["-h,i", "a.png"]);
    assert!(out.status.success());
    assert_eq!(first_pixel(&img), [255, 255, 255]);
}

#[test]
fn test_cli_silent_display_level() {
    let dir = TempDir::new().unwrap();
    let out = command(dir.path())
        .env("IMAGE_CONVERT_DISPLAY_LEVEL", "0")
        .args(["-i", "missing.png"])
        .output()
        .unwrap();
    assert!(out.status.success());
    assert!(out.stderr.is_empty(), "stderr: {}", String::from_utf8_lossy(&out.stderr));
}

#[cfg(unix)]
#[test]
fn test_cli_view_runs_configured_viewer() {
    let dir = TempDir::new().unwrap();
    let img = write_png(dir.path(), "a.png", [0, 0, 0]);

    // `test -s <preview>` succeeds only if a non-empty preview file was written.
    let out = command(dir.path())
        .env("IMAGE_CONVERT_VIEWER", "test -s")
        .args(["-v,i", "a.png"])
        .output()
        .unwrap();
    assert!(out.status.success());
    assert!(!String::from_utf8_lossy(&out.stderr).contains("preview failed"));
    assert_eq!(first_pixel(&img), [255, 255, 255]);
}

#[test]
fn test_cli_silent_level_hides_bad_policy_warning() {
    let dir = TempDir::new().unwrap();
    let img = write_png(dir.path(), "a.png", [0, 0, 0]);

    let out = command(dir.path())
        .env("IMAGE_CONVERT_DISPLAY_LEVEL", "0")
        .env("IMAGE_CONVERT_INVERT_POLICY", "sideways")
        .args(["-i", "a.png"])
        .output()
        .unwrap();
    assert!(out.status.success());
    assert!(out.stderr.is_empty(), "stderr: {}", String::from_utf8_lossy(&out.stderr));
    assert_eq!(first_pixel(&img), [255, 255, 255]);
}

#[test]
fn test_cli_debug_level_names_invert_policy() {
    let dir = TempDir::new().unwrap();
    write_png(dir.path(), "a.png", [0, 0, 0]);

    let out = command(dir.path())
        .env("IMAGE_CONVERT_DISPLAY_LEVEL", "4")
        .env("IMAGE_CONVERT_INVERT_POLICY", "flatten")
        .args(["-i", "a.png"])
        .output()
        .unwrap();
    assert!(out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("invert policy: flatten"));
}
