// Integration tests for the per-file executor: format preservation, backups
// and skip rules on real files.

use std::fs;
use std::path::{Path, PathBuf};

use image::{ImageFormat, RgbImage, RgbaImage};
use image_convert::file::{backup_path, open_image};
use image_convert::pipeline::{HeadlessPreview, SkipReason};
use image_convert::{execute, ExecError, InvertPolicy, Operation, Outcome, PipelineState, QuitScope};
use tempfile::TempDir;

fn run(path: &Path, ops: &[Operation]) -> Result<Outcome, ExecError> {
    let mut state = PipelineState::default();
    execute(path, ops, &mut state, &mut HeadlessPreview, InvertPolicy::default())
}

fn solid_rgb(dir: &TempDir, name: &str, format: ImageFormat, px: [u8; 3]) -> PathBuf {
    let path = dir.path().join(name);
    RgbImage::from_pixel(6, 4, image::Rgb(px))
        .save_with_format(&path, format)
        .unwrap();
    path
}

#[test]
fn bmp_stays_bmp() {
    let dir = TempDir::new().unwrap();
    let path = solid_rgb(&dir, "pic.bmp", ImageFormat::Bmp, [1, 2, 3]);

    let outcome = run(&path, &[Operation::Invert]).unwrap();
    assert_eq!(outcome, Outcome::Saved { backup: backup_path(&path) });

    let reopened = open_image(&path).unwrap();
    assert_eq!(reopened.format, ImageFormat::Bmp);
    assert_eq!(reopened.image.to_rgb8().get_pixel(0, 0).0, [254, 253, 252]);
}

#[test]
fn jpeg_stays_jpeg() {
    let dir = TempDir::new().unwrap();
    let path = solid_rgb(&dir, "pic.jpg", ImageFormat::Jpeg, [128, 128, 128]);

    run(&path, &[Operation::Threshold(10)]).unwrap();
    assert_eq!(open_image(&path).unwrap().format, ImageFormat::Jpeg);
    assert_eq!(open_image(&backup_path(&path)).unwrap().format, ImageFormat::Jpeg);
}

#[test]
fn format_comes_from_content_not_extension() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("mislabelled.jpg");
    RgbImage::new(2, 2).save_with_format(&path, ImageFormat::Png).unwrap();

    run(&path, &[Operation::Invert]).unwrap();
    assert_eq!(open_image(&path).unwrap().format, ImageFormat::Png);
}

#[test]
fn resize_changes_file_dimensions() {
    let dir = TempDir::new().unwrap();
    let path = solid_rgb(&dir, "pic.png", ImageFormat::Png, [9, 9, 9]);

    run(&path, &[Operation::Resize(0.5)]).unwrap();
    let img = image::open(&path).unwrap();
    assert_eq!((img.width(), img.height()), (3, 2));
}

#[test]
fn rgba_png_keeps_alpha_by_default() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("alpha.png");
    RgbaImage::from_pixel(2, 2, image::Rgba([10, 20, 30, 40]))
        .save_with_format(&path, ImageFormat::Png)
        .unwrap();

    run(&path, &[Operation::Invert]).unwrap();
    let img = image::open(&path).unwrap();
    assert_eq!(img.as_rgba8().unwrap().get_pixel(0, 0).0, [245, 235, 225, 40]);
}

#[test]
fn empty_operation_list_still_rewrites_with_backup() {
    let dir = TempDir::new().unwrap();
    let path = solid_rgb(&dir, "pic.png", ImageFormat::Png, [7, 7, 7]);

    run(&path, &[]).unwrap();
    assert!(backup_path(&path).exists());
    assert_eq!(image::open(&path).unwrap().to_rgb8().get_pixel(0, 0).0, [7, 7, 7]);
}

#[test]
fn second_run_overwrites_backup() {
    let dir = TempDir::new().unwrap();
    let path = solid_rgb(&dir, "pic.png", ImageFormat::Png, [0, 0, 0]);

    run(&path, &[Operation::Invert]).unwrap();
    let after_first = fs::read(&path).unwrap();
    run(&path, &[Operation::Invert]).unwrap();

    assert_eq!(fs::read(backup_path(&path)).unwrap(), after_first);
    assert_eq!(image::open(&path).unwrap().to_rgb8().get_pixel(0, 0).0, [0, 0, 0]);
}

#[test]
fn quit_all_reported_and_nothing_written() {
    let dir = TempDir::new().unwrap();
    let path = solid_rgb(&dir, "pic.png", ImageFormat::Png, [0, 0, 0]);
    let before = fs::read(&path).unwrap();

    let outcome = run(&path, &[Operation::Invert, Operation::Quit(QuitScope::All)]).unwrap();
    assert_eq!(outcome, Outcome::QuitAll);
    assert_eq!(fs::read(&path).unwrap(), before);
    assert!(!backup_path(&path).exists());
}

#[test]
fn gray_alpha_is_skipped() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("la.png");
    image::GrayAlphaImage::new(2, 2).save_with_format(&path, ImageFormat::Png).unwrap();

    match run(&path, &[Operation::Invert]).unwrap() {
        Outcome::Skipped(SkipReason::UnsupportedMode(mode)) => assert!(mode.contains("La8"), "{}", mode),
        other => panic!("unexpected outcome {:?}", other),
    }
}

#[test]
fn missing_file_is_open_error() {
    let dir = TempDir::new().unwrap();
    let err = run(&dir.path().join("nope.png"), &[Operation::Invert]).unwrap_err();
    assert!(matches!(err, ExecError::Open { .. }));
    assert!(!err.is_fatal());
}

#[test]
fn garbage_without_extension_is_unknown_format() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("blob");
    fs::write(&path, b"\x00\x01\x02 nothing to see").unwrap();
    let err = run(&path, &[Operation::Invert]).unwrap_err();
    assert!(matches!(err, ExecError::UnknownFormat { .. }));
}

#[test]
fn garbage_with_image_extension_is_decode_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("broken.png");
    fs::write(&path, b"not really a png").unwrap();
    let err = run(&path, &[Operation::Invert]).unwrap_err();
    assert!(matches!(err, ExecError::Decode { .. }));
    assert!(!backup_path(&path).exists());
}

#[test]
fn oversized_resize_skips_file_untouched() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("small.png");
    RgbImage::from_pixel(100, 100, image::Rgb([3, 3, 3]))
        .save_with_format(&path, ImageFormat::Png)
        .unwrap();
    let before = fs::read(&path).unwrap();

    let ops = image_convert::parse_directive("r100000").unwrap();
    let err = run(&path, &ops).unwrap_err();

    assert!(matches!(err, ExecError::TooLarge { .. }), "{err}");
    assert!(!err.is_fatal());
    assert_eq!(fs::read(&path).unwrap(), before);
    assert!(!backup_path(&path).exists());
}
