//! Pixel-level operations on a decoded image.
//!
//! Each helper takes the image by value and returns the replacement, so the
//! executor holds exactly one live image per file. Only 8-bit RGB and RGBA
//! images reach these helpers; the executor skips every other colour mode.

use image::imageops::{self, FilterType};
use image::{ColorType, DynamicImage, ImageResult, Limits, RgbImage, RgbaImage};

use crate::config::{MIN_DIMENSION, RESIZE_ALLOC_LIMIT};
use crate::directive::Rgb;

/// What `i` does to an RGBA image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InvertPolicy {
    /// Invert R, G and B; keep alpha as it was.
    #[default]
    PreserveAlpha,
    /// Composite onto the background colour, drop alpha, then invert.
    Flatten,
}

impl InvertPolicy {
    /// Parse the names accepted in `IMAGE_CONVERT_INVERT_POLICY`.
    pub fn from_name(name: &str) -> Option<InvertPolicy> {
        match name.trim().to_ascii_lowercase().as_str() {
            "preserve-alpha" | "preserve" => Some(InvertPolicy::PreserveAlpha),
            "flatten" => Some(InvertPolicy::Flatten),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            InvertPolicy::PreserveAlpha => "preserve-alpha",
            InvertPolicy::Flatten => "flatten",
        }
    }
}

/// `true` for the colour modes the pipeline knows how to transform.
pub fn is_supported(img: &DynamicImage) -> bool {
    matches!(img, DynamicImage::ImageRgb8(_) | DynamicImage::ImageRgba8(_))
}

/// Invert every colour channel (`v -> 255 - v`).
///
/// RGB images are inverted in full. RGBA images follow `policy`; under
/// [`InvertPolicy::Flatten`] the result is an opaque RGB image.
pub fn invert(img: DynamicImage, policy: InvertPolicy, background: Rgb) -> DynamicImage {
    match img {
        DynamicImage::ImageRgb8(mut buf) => {
            imageops::invert(&mut buf);
            DynamicImage::ImageRgb8(buf)
        }
        DynamicImage::ImageRgba8(mut buf) => match policy {
            InvertPolicy::PreserveAlpha => {
                for px in buf.pixels_mut() {
                    for c in &mut px.0[..3] {
                        *c = 255 - *c;
                    }
                }
                DynamicImage::ImageRgba8(buf)
            }
            InvertPolicy::Flatten => {
                let mut flat = flatten(&buf, background);
                imageops::invert(&mut flat);
                DynamicImage::ImageRgb8(flat)
            }
        },
        mut other => {
            other.invert();
            other
        }
    }
}

/// Alpha-composite `src` onto a solid `background`, producing an opaque image.
///
/// Each channel becomes `(c * a + bg * (255 - a)) / 255`, rounded to nearest.
pub fn flatten(src: &RgbaImage, background: Rgb) -> RgbImage {
    let bg = background.0;
    RgbImage::from_fn(src.width(), src.height(), |x, y| {
        let p = src.get_pixel(x, y).0;
        let a = p[3] as u32;
        let mix = |c: u8, b: u8| ((c as u32 * a + b as u32 * (255 - a) + 127) / 255) as u8;
        image::Rgb([mix(p[0], bg[0]), mix(p[1], bg[1]), mix(p[2], bg[2])])
    })
}

/// Zero every channel value at or below `level`, alpha included.
pub fn threshold(img: DynamicImage, level: u8) -> DynamicImage {
    remap_channels(img, |v| if v <= level { 0 } else { v })
}

/// Apply `f` to every channel of every pixel.
pub fn remap_channels(mut img: DynamicImage, f: impl Fn(u8) -> u8) -> DynamicImage {
    match &mut img {
        DynamicImage::ImageRgb8(buf) => {
            for v in buf.iter_mut() {
                *v = f(*v);
            }
        }
        DynamicImage::ImageRgba8(buf) => {
            for v in buf.iter_mut() {
                *v = f(*v);
            }
        }
        // Other modes are filtered out by `is_supported` before any step runs.
        _ => {}
    }
    img
}

/// Target size for scaling `width` x `height` by `ratio`.
///
/// Each side is rounded independently and never drops below one pixel.
pub fn scaled_dimensions(width: u32, height: u32, ratio: f64) -> (u32, u32) {
    (scale_side(width, ratio), scale_side(height, ratio))
}

fn scale_side(side: u32, ratio: f64) -> u32 {
    let scaled = (side as f64 * ratio).round();
    if scaled <= MIN_DIMENSION as f64 {
        MIN_DIMENSION
    } else if scaled >= u32::MAX as f64 {
        u32::MAX
    } else {
        scaled as u32
    }
}

/// Lanczos3 resample to `ratio` times the current size.
///
/// Fails with [`image::ImageError::Limits`] when the buffers for the target
/// size would exceed [`RESIZE_ALLOC_LIMIT`]; nothing is allocated in that case.
pub fn resize(img: DynamicImage, ratio: f64) -> ImageResult<DynamicImage> {
    let (w, h) = scaled_dimensions(img.width(), img.height(), ratio);
    if (w, h) == (img.width(), img.height()) {
        return Ok(img);
    }
    reserve_resize(img.width(), img.color(), w, h)?;
    Ok(img.resize_exact(w, h, FilterType::Lanczos3))
}

/// Account for the buffers a resize to `w` x `h` allocates.
fn reserve_resize(src_width: u32, color: ColorType, w: u32, h: u32) -> ImageResult<()> {
    let mut limits = Limits::default();
    limits.max_alloc = Some(RESIZE_ALLOC_LIMIT);
    limits.reserve_buffer(w, h, color)?;
    // The vertical pass goes through an RGBA f32 buffer of source width.
    limits.reserve_buffer(src_width, h, ColorType::Rgba32F)
}
