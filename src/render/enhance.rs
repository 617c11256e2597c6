/// Enhancement steps and the per-style recipe table
///
/// Each style maps to a short, ordered list of steps. A step takes a whole
/// image and returns a new one; steps never look at each other's parameters,
/// they only see the output of the step before.
///
/// Steps are chained: each baseline (mean gray, per-pixel gray) is computed
/// from the previous step's output, not from the original photo.

use image::{imageops, Rgb, RgbImage};

use crate::color::{luma, to_channel};
use crate::state::params::StyleTag;

/// Parameters of an unsharp mask
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UnsharpMask {
    /// Gaussian sigma of the blurred copy
    pub radius: f32,
    /// Strength in percent of the (original - blurred) difference added back
    pub percent: u32,
    /// Differences smaller than this are left alone
    pub threshold: u8,
}

/// One whole-image adjustment
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EnhanceStep {
    /// Scale the deviation from the image's mean gray
    Contrast(f32),
    /// Scale every channel
    Brightness(f32),
    /// Scale the deviation from each pixel's own gray
    Saturation(f32),
    Sharpen(UnsharpMask),
    /// Gaussian blur with the given sigma
    Blur(f32),
}

static MODERN: [EnhanceStep; 4] = [
    EnhanceStep::Contrast(1.20),
    EnhanceStep::Brightness(1.05),
    EnhanceStep::Saturation(1.05),
    EnhanceStep::Sharpen(UnsharpMask {
        radius: 2.0,
        percent: 120,
        threshold: 3,
    }),
];

static MINIMALIST: [EnhanceStep; 3] = [
    EnhanceStep::Contrast(1.10),
    EnhanceStep::Saturation(0.90),
    EnhanceStep::Blur(0.2),
];

static TRADITIONAL: [EnhanceStep; 3] = [
    EnhanceStep::Contrast(1.08),
    EnhanceStep::Brightness(1.03),
    EnhanceStep::Saturation(1.05),
];

static LUXURY: [EnhanceStep; 3] = [
    EnhanceStep::Contrast(1.15),
    EnhanceStep::Brightness(1.08),
    EnhanceStep::Saturation(1.12),
];

static INDUSTRIAL: [EnhanceStep; 2] = [
    EnhanceStep::Contrast(1.25),
    EnhanceStep::Saturation(0.85),
];

static SCANDINAVIAN: [EnhanceStep; 3] = [
    EnhanceStep::Contrast(1.08),
    EnhanceStep::Brightness(1.10),
    EnhanceStep::Saturation(1.00),
];

/// Ordered steps for a style. Unrecognized styles get an empty recipe.
pub fn recipe(style: &StyleTag) -> &'static [EnhanceStep] {
    match style {
        StyleTag::Modern => &MODERN,
        StyleTag::Minimalist => &MINIMALIST,
        StyleTag::Traditional => &TRADITIONAL,
        StyleTag::Luxury => &LUXURY,
        StyleTag::Industrial => &INDUSTRIAL,
        StyleTag::Scandinavian => &SCANDINAVIAN,
        StyleTag::Unrecognized(_) => &[],
    }
}

impl EnhanceStep {
    /// Apply this step, returning a new image of the same size
    pub fn apply(&self, image: &RgbImage) -> RgbImage {
        match *self {
            EnhanceStep::Contrast(factor) => contrast(image, factor),
            EnhanceStep::Brightness(factor) => brightness(image, factor),
            EnhanceStep::Saturation(factor) => saturation(image, factor),
            EnhanceStep::Sharpen(mask) => unsharp_mask(image, mask),
            EnhanceStep::Blur(sigma) => imageops::blur(image, sigma),
        }
    }
}

/// Mean luma of the whole image, rounded to an integer gray level
pub fn mean_gray(image: &RgbImage) -> u8 {
    let count = u64::from(image.width()) * u64::from(image.height());
    if count == 0 {
        return 0;
    }
    let sum: u64 = image.pixels().map(|p| u64::from(luma(p))).sum();
    ((sum + count / 2) / count) as u8
}

fn contrast(image: &RgbImage, factor: f32) -> RgbImage {
    let gray = f32::from(mean_gray(image));
    map_channels(image, |_, c| gray + factor * (c - gray))
}

fn brightness(image: &RgbImage, factor: f32) -> RgbImage {
    map_channels(image, |_, c| factor * c)
}

fn saturation(image: &RgbImage, factor: f32) -> RgbImage {
    map_channels(image, |pixel, c| {
        let gray = f32::from(luma(pixel));
        gray + factor * (c - gray)
    })
}

fn unsharp_mask(image: &RgbImage, mask: UnsharpMask) -> RgbImage {
    let blurred = imageops::blur(image, mask.radius);
    let amount = mask.percent as f32 / 100.0;
    let threshold = i16::from(mask.threshold);

    let mut out = image.clone();
    for (pixel, soft) in out.pixels_mut().zip(blurred.pixels()) {
        for c in 0..3 {
            let diff = i16::from(pixel.0[c]) - i16::from(soft.0[c]);
            if diff.abs() >= threshold {
                pixel.0[c] = to_channel(f32::from(pixel.0[c]) + amount * f32::from(diff));
            }
        }
    }
    out
}

/// Run `f(pixel, channel_value)` over every channel, rounding and clamping the result
fn map_channels<F>(image: &RgbImage, f: F) -> RgbImage
where
    F: Fn(&Rgb<u8>, f32) -> f32,
{
    let mut out = image.clone();
    for pixel in out.pixels_mut() {
        let source = *pixel;
        for c in 0..3 {
            pixel.0[c] = to_channel(f(&source, f32::from(source.0[c])));
        }
    }
    out
}
