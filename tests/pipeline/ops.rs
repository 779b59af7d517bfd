// Integration tests for pipeline/ops.rs: pixel operations through the public
// API.

use image::{DynamicImage, RgbImage, RgbaImage};
use image_convert::pipeline::ops::{
    flatten, invert, is_supported, resize, scaled_dimensions, threshold,
};
use image_convert::{InvertPolicy, Rgb};

fn gray_strip(values: &[u8]) -> DynamicImage {
    DynamicImage::ImageRgb8(RgbImage::from_fn(values.len() as u32, 1, |x, _| {
        let v = values[x as usize];
        image::Rgb([v, v, v])
    }))
}

fn strip_values(img: &DynamicImage) -> Vec<u8> {
    img.to_rgb8().pixels().map(|p| p.0[0]).collect()
}

#[test]
fn light_to_white_recipe() {
    // i,t32,i: everything at or above 223 becomes 255.
    let img = gray_strip(&[0, 100, 222, 223, 240, 255]);
    let img = invert(img, InvertPolicy::default(), Rgb::WHITE);
    let img = threshold(img, 32);
    let img = invert(img, InvertPolicy::default(), Rgb::WHITE);
    assert_eq!(strip_values(&img), vec![0, 100, 222, 255, 255, 255]);
}

#[test]
fn threshold_zero_only_clears_zero() {
    let img = threshold(gray_strip(&[0, 1, 2]), 0);
    assert_eq!(strip_values(&img), vec![0, 1, 2]);
}

#[test]
fn threshold_max_clears_everything() {
    let img = threshold(gray_strip(&[0, 128, 255]), 255);
    assert_eq!(strip_values(&img), vec![0, 0, 0]);
}

#[test]
fn preserve_alpha_keeps_transparency() {
    let img = DynamicImage::ImageRgba8(RgbaImage::from_pixel(1, 1, image::Rgba([0, 64, 255, 77])));
    let out = invert(img, InvertPolicy::PreserveAlpha, Rgb::BLACK);
    assert_eq!(out.as_rgba8().unwrap().get_pixel(0, 0).0, [255, 191, 0, 77]);
}

#[test]
fn flatten_policy_drops_alpha() {
    let img = DynamicImage::ImageRgba8(RgbaImage::from_pixel(1, 1, image::Rgba([200, 200, 200, 255])));
    let out = invert(img, InvertPolicy::Flatten, Rgb::BLACK);
    assert_eq!(out.as_rgb8().unwrap().get_pixel(0, 0).0, [55, 55, 55]);
}

#[test]
fn flatten_half_transparent_on_white() {
    let src = RgbaImage::from_pixel(1, 1, image::Rgba([0, 0, 0, 128]));
    // (0 * 128 + 255 * 127 + 127) / 255 = 127
    assert_eq!(flatten(&src, Rgb::WHITE).get_pixel(0, 0).0, [127, 127, 127]);
}

#[test]
fn only_rgb8_and_rgba8_are_supported() {
    assert!(is_supported(&DynamicImage::new_rgb8(1, 1)));
    assert!(is_supported(&DynamicImage::new_rgba8(1, 1)));
    assert!(!is_supported(&DynamicImage::new_luma8(1, 1)));
    assert!(!is_supported(&DynamicImage::new_luma_a8(1, 1)));
    assert!(!is_supported(&DynamicImage::new_rgb16(1, 1)));
}

#[test]
fn scaled_dimension_table() {
    let cases: &[(u32, u32, f64, (u32, u32))] = &[
        (100, 50, 0.5, (50, 25)),
        (100, 50, 2.0, (200, 100)),
        (3, 3, 0.5, (2, 2)),
        (10, 10, 0.01, (1, 1)),
        (640, 480, 1.0, (640, 480)),
        (7, 5, 1.5, (11, 8)),
    ];
    for &(w, h, ratio, expected) in cases {
        assert_eq!(scaled_dimensions(w, h, ratio), expected, "{}x{} * {}", w, h, ratio);
    }
}

#[test]
fn resize_keeps_colour_mode() {
    let rgba = resize(DynamicImage::new_rgba8(8, 6), 0.5).unwrap();
    assert_eq!((rgba.width(), rgba.height()), (4, 3));
    assert!(rgba.as_rgba8().is_some());

    let rgb = resize(DynamicImage::new_rgb8(8, 6), 1.25).unwrap();
    assert_eq!((rgb.width(), rgb.height()), (10, 8));
    assert!(rgb.as_rgb8().is_some());
}

#[test]
fn resize_of_solid_colour_stays_solid() {
    let img = DynamicImage::ImageRgb8(RgbImage::from_pixel(10, 10, image::Rgb([40, 80, 120])));
    let out = resize(img, 0.3).unwrap().to_rgb8();
    assert_eq!(out.dimensions(), (3, 3));
    for px in out.pixels() {
        assert_eq!(px.0, [40, 80, 120]);
    }
}

#[test]
fn resize_within_budget_succeeds_and_beyond_fails() {
    let img = DynamicImage::new_rgb8(100, 100);
    assert!(resize(img.clone(), 10.0).is_ok());
    assert!(resize(img, 1000.0).is_err());
}
