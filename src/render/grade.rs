/// Color grading
///
/// Runs the style's recipe, then blends the result 6% toward the accent
/// color. The tint is applied for every style, including unrecognized ones.

use image::RgbImage;

use super::enhance::recipe;
use crate::color::{tint, AccentColor, TINT_OPACITY};
use crate::state::params::StyleTag;

/// Grade an image for a style and accent color
///
/// Returns a new image with the same dimensions as the input.
pub fn grade(image: &RgbImage, style: &StyleTag, accent: AccentColor) -> RgbImage {
    let enhanced = enhance(image, style);
    tint(&enhanced, accent, TINT_OPACITY)
}

/// Apply only the style recipe, without the accent tint
///
/// Images without pixels are returned as-is; the blur kernels cannot run
/// on them.
pub fn enhance(image: &RgbImage, style: &StyleTag) -> RgbImage {
    if image.width() == 0 || image.height() == 0 {
        return image.clone();
    }

    let steps = recipe(style);
    if steps.is_empty() {
        tracing::debug!(%style, "no recipe for style, tint only");
        return image.clone();
    }

    steps.iter().fold(image.clone(), |current, step| {
        tracing::trace!(?step, "applying enhancement");
        step.apply(&current)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;

    fn gradient() -> RgbImage {
        RgbImage::from_fn(16, 12, |x, y| Rgb([(x * 15) as u8, (y * 20) as u8, ((x + y) * 9) as u8]))
    }

    #[test]
    fn test_unknown_style_is_tint_only() {
        let image = gradient();
        let accent = AccentColor::new(0xc0, 0xa2, 0x7a);
        let graded = grade(&image, &StyleTag::from("Unknown"), accent);

        assert_eq!(graded, tint(&image, accent, 0.06));
    }

    #[test]
    fn test_dimensions_preserved_for_every_style() {
        let image = gradient();
        let mut styles = StyleTag::ALL.to_vec();
        styles.push(StyleTag::from("Unknown"));

        for style in &styles {
            let graded = grade(&image, style, AccentColor::default());
            assert_eq!(graded.dimensions(), image.dimensions(), "{style}");
        }
    }

    #[test]
    fn test_tint_pulls_toward_accent() {
        let image = gradient();
        let accent = AccentColor::new(10, 240, 128);
        let target = accent.to_rgb();

        for style in StyleTag::ALL {
            let enhanced = enhance(&image, &style);
            let graded = grade(&image, &style, accent);

            for (before, after) in enhanced.pixels().zip(graded.pixels()) {
                for c in 0..3 {
                    let a = i32::from(target.0[c]);
                    let e = i32::from(before.0[c]);
                    let o = i32::from(after.0[c]);
                    assert!((o - a).abs() <= (e - a).abs(), "{style}: {e} -> {o} (accent {a})");
                    let expected = f64::from(e) + 0.06 * f64::from(a - e);
                    assert!((f64::from(o) - expected).abs() <= 0.5 + 1e-3, "{style}: {o} vs {expected}");
                }
            }
        }
    }

    #[test]
    fn test_grading_is_deterministic() {
        let image = gradient();
        let first = grade(&image, &StyleTag::Modern, AccentColor::default());
        let second = grade(&image, &StyleTag::Modern, AccentColor::default());
        assert_eq!(first, second);
    }

    #[test]
    fn test_styles_differ() {
        let image = gradient();
        let modern = grade(&image, &StyleTag::Modern, AccentColor::default());
        let industrial = grade(&image, &StyleTag::Industrial, AccentColor::default());
        assert_ne!(modern, industrial);
    }

    #[test]
    fn test_empty_images_grade_without_panicking() {
        let mut styles = StyleTag::ALL.to_vec();
        styles.push(StyleTag::from("Unknown"));

        for (width, height) in [(0, 0), (0, 5), (5, 0)] {
            let image = RgbImage::new(width, height);
            for style in &styles {
                let graded = grade(&image, style, AccentColor::default());
                assert_eq!(graded.dimensions(), (width, height), "{style} {width}x{height}");
            }
        }
    }

    #[test]
    fn test_input_not_mutated() {
        let image = gradient();
        let copy = image.clone();
        let _ = grade(&image, &StyleTag::Luxury, AccentColor::new(255, 0, 0));
        assert_eq!(image, copy);
    }
}
