/// Local redesign pipeline
///
/// grade (style recipe + accent tint) → floor overlay. Pure: the input is
/// never modified and identical inputs give identical output.

use image::RgbImage;

use super::floor::overlay;
use super::grade::grade;
use super::textures::TextureSource;
use crate::color::AccentColor;
use crate::error::RedesignError;
use crate::state::params::{FlooringTag, RedesignParams, StyleTag};

/// Run grade then overlay
///
/// # Errors
/// - `EmptyImage` if the photo has no pixels
/// - `AssetUnavailable` if the flooring texture cannot be loaded
pub fn redesign(
    image: &RgbImage,
    style: &StyleTag,
    accent: AccentColor,
    flooring: FlooringTag,
    textures: &dyn TextureSource,
) -> Result<RgbImage, RedesignError> {
    let (width, height) = image.dimensions();
    if width == 0 || height == 0 {
        return Err(RedesignError::EmptyImage { width, height });
    }

    let graded = grade(image, style, accent);
    let result = overlay(&graded, flooring, textures)?;

    tracing::info!(%style, %accent, %flooring, width, height, "rendered redesign");
    Ok(result)
}

/// Same as [`redesign`], taking the choices from a params record
pub fn redesign_with(
    image: &RgbImage,
    params: &RedesignParams,
    textures: &dyn TextureSource,
) -> Result<RgbImage, RedesignError> {
    redesign(image, &params.style, params.accent, params.flooring, textures)
}

/// Like [`redesign_with`], but a missing texture keeps the original floor
/// instead of failing. Other errors still propagate. The grade runs once
/// either way.
pub fn redesign_or_keep_floor(
    image: &RgbImage,
    params: &RedesignParams,
    textures: &dyn TextureSource,
) -> Result<RgbImage, RedesignError> {
    let (width, height) = image.dimensions();
    if width == 0 || height == 0 {
        return Err(RedesignError::EmptyImage { width, height });
    }

    let graded = grade(image, &params.style, params.accent);
    match overlay(&graded, params.flooring, textures) {
        Ok(result) => Ok(result),
        Err(err) if err.is_asset_unavailable() => {
            tracing::warn!(error = %err, "flooring texture unavailable, keeping original floor");
            overlay(&graded, FlooringTag::KeepOriginal, textures)
        }
        Err(err) => Err(err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::tint;
    use crate::render::floor::{blend_floor, floor_row};
    use crate::render::grade::enhance;
    use crate::render::textures::TextureSet;
    use image::Rgb;

    fn wood_texture() -> RgbImage {
        RgbImage::from_fn(64, 64, |x, y| {
            let grain = ((x * 7 + y * 3) % 40) as u8;
            Rgb([140 + grain, 90 + grain / 2, 50])
        })
    }

    fn textures() -> TextureSet {
        TextureSet::new().with(FlooringTag::Wood, wood_texture())
    }

    #[test]
    fn test_gray_room_modern_wood() {
        let image = RgbImage::from_pixel(100, 100, Rgb([128, 128, 128]));
        let accent = AccentColor::from_hex("#c0a27a").unwrap();

        let out = redesign(&image, &StyleTag::Modern, accent, FlooringTag::Wood, &textures()).unwrap();
        assert_eq!(out.dimensions(), (100, 100));

        // Solid gray: contrast and saturation are no-ops, brightness gives
        // round(1.05 * 128) = 134, sharpen sees no edges, then the tint.
        let graded = tint(&RgbImage::from_pixel(100, 100, Rgb([134, 134, 134])), accent, 0.06);
        assert_eq!(enhance(&image, &StyleTag::Modern).get_pixel(0, 0).0, [134, 134, 134]);

        for y in 0..60 {
            for x in 0..100 {
                assert_eq!(out.get_pixel(x, y), graded.get_pixel(x, y));
            }
        }

        let expected = blend_floor(&graded, &wood_texture());
        assert_eq!(out, expected);
        assert_ne!(out.get_pixel(50, 80), graded.get_pixel(50, 80));
    }

    #[test]
    fn test_unknown_style_keep_original_is_pure_tint() {
        let image = RgbImage::from_fn(20, 10, |x, y| Rgb([(x * 12) as u8, (y * 25) as u8, 77]));
        let accent = AccentColor::new(0xc0, 0xa2, 0x7a);

        let out = redesign(
            &image,
            &StyleTag::from("Unknown"),
            accent,
            FlooringTag::KeepOriginal,
            &TextureSet::new(),
        )
        .unwrap();

        assert_eq!(out, tint(&image, accent, 0.06));
    }

    #[test]
    fn test_redesign_is_deterministic() {
        let image = RgbImage::from_fn(37, 23, |x, y| Rgb([(x * 6) as u8, (y * 11) as u8, ((x * y) % 256) as u8]));
        let params = RedesignParams {
            style: StyleTag::Minimalist,
            flooring: FlooringTag::Wood,
            ..RedesignParams::default()
        };

        let first = redesign_with(&image, &params, &textures()).unwrap();
        let second = redesign_with(&image, &params, &textures()).unwrap();
        assert_eq!(first.as_raw(), second.as_raw());
    }

    #[test]
    fn test_region_isolation_after_grading() {
        let image = RgbImage::from_fn(30, 41, |x, y| Rgb([(x * 8) as u8, (y * 6) as u8, 200]));
        let params = RedesignParams {
            style: StyleTag::Luxury,
            flooring: FlooringTag::Wood,
            ..RedesignParams::default()
        };

        let graded = grade(&image, &params.style, params.accent);
        let out = redesign_with(&image, &params, &textures()).unwrap();
        let start = floor_row(41);

        for y in 0..start {
            for x in 0..30 {
                assert_eq!(out.get_pixel(x, y), graded.get_pixel(x, y));
            }
        }
    }

    #[test]
    fn test_missing_texture_strict_and_lenient() {
        let image = RgbImage::from_pixel(10, 10, Rgb([90, 90, 90]));
        let params = RedesignParams {
            style: StyleTag::Traditional,
            flooring: FlooringTag::Marble,
            ..RedesignParams::default()
        };

        let err = redesign_with(&image, &params, &textures()).unwrap_err();
        assert!(err.is_asset_unavailable());

        let kept = redesign_or_keep_floor(&image, &params, &textures()).unwrap();
        assert_eq!(kept, grade(&image, &params.style, params.accent));
    }

    /// Counts texture requests so tests can see how often overlay ran
    struct CountingTextures {
        inner: TextureSet,
        requests: std::cell::Cell<usize>,
    }

    impl TextureSource for CountingTextures {
        fn texture(&self, flooring: FlooringTag) -> Result<RgbImage, RedesignError> {
            self.requests.set(self.requests.get() + 1);
            self.inner.texture(flooring)
        }
    }

    #[test]
    fn test_missing_texture_asks_once() {
        let image = RgbImage::from_fn(12, 9, |x, y| Rgb([(x * 20) as u8, (y * 25) as u8, 60]));
        let params = RedesignParams {
            style: StyleTag::Modern,
            flooring: FlooringTag::Tile,
            ..RedesignParams::default()
        };
        let textures = CountingTextures {
            inner: TextureSet::new(),
            requests: std::cell::Cell::new(0),
        };

        let kept = redesign_or_keep_floor(&image, &params, &textures).unwrap();
        assert_eq!(kept, grade(&image, &params.style, params.accent));
        assert_eq!(textures.requests.get(), 1);
    }

    #[test]
    fn test_lenient_matches_strict_when_texture_present() {
        let image = RgbImage::from_fn(20, 20, |x, y| Rgb([(x * 10) as u8, (y * 10) as u8, 128]));
        let params = RedesignParams {
            style: StyleTag::Industrial,
            flooring: FlooringTag::Wood,
            ..RedesignParams::default()
        };

        assert_eq!(
            redesign_or_keep_floor(&image, &params, &textures()).unwrap(),
            redesign_with(&image, &params, &textures()).unwrap()
        );
        assert!(redesign_or_keep_floor(&RgbImage::new(0, 3), &params, &textures()).is_err());
    }

    #[test]
    fn test_empty_image_rejected() {
        let err = redesign_with(&RgbImage::new(0, 4), &RedesignParams::default(), &textures()).unwrap_err();
        assert!(matches!(err, RedesignError::EmptyImage { width: 0, height: 4 }));
    }
}
