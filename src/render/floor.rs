/// Floor overlay
///
/// The "floor" is the bottom 40% of the photo. The flooring texture is
/// stretched to the photo's exact size and blended into that band at 45%
/// opacity. Rows above the band are copied through unchanged.

use image::{imageops, imageops::FilterType, RgbImage};

use super::textures::TextureSource;
use crate::color::mix;
use crate::error::RedesignError;
use crate::state::params::FlooringTag;

/// Fraction of the height where the floor band starts
pub const FLOOR_START: f32 = 0.6;

/// Opacity of the texture inside the floor band
pub const TEXTURE_OPACITY: f32 = 0.45;

/// Filter used to stretch textures (bicubic)
const TEXTURE_FILTER: FilterType = FilterType::CatmullRom;

/// First row of the floor band: round(0.6 × height)
pub fn floor_row(height: u32) -> u32 {
    ((height as f32 * FLOOR_START).round() as u32).min(height)
}

/// Blend the flooring texture into the bottom of the image
///
/// `KeepOriginal` returns an identical copy without touching the texture
/// source. Any other choice fails with `AssetUnavailable` if the source
/// has no texture for it.
pub fn overlay(
    image: &RgbImage,
    flooring: FlooringTag,
    textures: &dyn TextureSource,
) -> Result<RgbImage, RedesignError> {
    if flooring == FlooringTag::KeepOriginal {
        return Ok(image.clone());
    }

    let texture = textures.texture(flooring)?;
    Ok(blend_floor(image, &texture))
}

/// Blend an already-loaded texture into the floor band
pub fn blend_floor(image: &RgbImage, texture: &RgbImage) -> RgbImage {
    let (width, height) = image.dimensions();
    let mut out = image.clone();
    if width == 0 || height == 0 {
        return out;
    }

    let stretched;
    let texture = if texture.dimensions() == (width, height) {
        texture
    } else {
        stretched = imageops::resize(texture, width, height, TEXTURE_FILTER);
        &stretched
    };

    let start = floor_row(height);
    tracing::debug!(width, height, floor_row = start, "blending floor texture");

    for y in start..height {
        for x in 0..width {
            let tex = texture.get_pixel(x, y);
            let pixel = out.get_pixel_mut(x, y);
            for c in 0..3 {
                pixel.0[c] = mix(pixel.0[c], tex.0[c], TEXTURE_OPACITY);
            }
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::textures::TextureSet;
    use image::Rgb;

    fn photo(width: u32, height: u32) -> RgbImage {
        RgbImage::from_fn(width, height, |x, y| Rgb([(x % 256) as u8, (y % 256) as u8, 90]))
    }

    fn wood() -> TextureSet {
        TextureSet::new().with(FlooringTag::Wood, RgbImage::from_pixel(32, 32, Rgb([160, 110, 60])))
    }

    #[test]
    fn test_floor_row() {
        assert_eq!(floor_row(100), 60);
        assert_eq!(floor_row(10), 6);
        assert_eq!(floor_row(3), 2);
        assert_eq!(floor_row(1), 1);
        assert_eq!(floor_row(0), 0);
    }

    #[test]
    fn test_keep_original_is_identity() {
        let image = photo(20, 15);
        // Empty set: keep-original must not ask for a texture
        let out = overlay(&image, FlooringTag::KeepOriginal, &TextureSet::new()).unwrap();
        assert_eq!(out, image);
    }

    #[test]
    fn test_rows_above_floor_untouched() {
        let image = photo(40, 50);
        let out = overlay(&image, FlooringTag::Wood, &wood()).unwrap();
        let start = floor_row(50);

        assert_eq!(out.dimensions(), image.dimensions());
        for y in 0..start {
            for x in 0..40 {
                assert_eq!(out.get_pixel(x, y), image.get_pixel(x, y));
            }
        }
    }

    #[test]
    fn test_floor_band_blended_at_45_percent() {
        let image = RgbImage::from_pixel(10, 10, Rgb([100, 100, 100]));
        let textures =
            TextureSet::new().with(FlooringTag::Wood, RgbImage::from_pixel(10, 10, Rgb([160, 120, 60])));
        let out = overlay(&image, FlooringTag::Wood, &textures).unwrap();

        // 0.55 * 100 + 0.45 * (160, 120, 60) = (127, 109, 82)
        for y in 6..10 {
            for x in 0..10 {
                assert_eq!(out.get_pixel(x, y).0, [127, 109, 82]);
            }
        }
        assert_eq!(out.get_pixel(0, 5).0, [100, 100, 100]);
    }

    #[test]
    fn test_texture_is_stretched_not_tiled() {
        // Top half red, bottom half blue: after stretching to the photo size,
        // the floor band (bottom 40%) only sees blue.
        let texture = RgbImage::from_fn(4, 4, |_, y| if y < 2 { Rgb([255, 0, 0]) } else { Rgb([0, 0, 255]) });
        let textures = TextureSet::new().with(FlooringTag::Tile, texture);
        let image = RgbImage::from_pixel(30, 100, Rgb([0, 0, 0]));

        let out = overlay(&image, FlooringTag::Tile, &textures).unwrap();
        let bottom = out.get_pixel(15, 99).0;
        assert_eq!(bottom[0], 0);
        assert!(bottom[2] > 100);
    }

    #[test]
    fn test_missing_texture_fails() {
        let image = photo(8, 8);
        let err = overlay(&image, FlooringTag::Marble, &wood()).unwrap_err();
        assert!(err.is_asset_unavailable());
    }

    #[test]
    fn test_single_row_image_unchanged() {
        // round(0.6) = 1, so a one-row image has no floor band
        let image = photo(5, 1);
        assert_eq!(overlay(&image, FlooringTag::Wood, &wood()).unwrap(), image);
    }
}
