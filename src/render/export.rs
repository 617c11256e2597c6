/// Photo loading and result export
///
/// Photos arrive in any format the `image` crate can decode and are
/// converted to 8-bit RGB. Results leave as JPEG.

use image::codecs::jpeg::JpegEncoder;
use image::RgbImage;
use std::fs;
use std::path::Path;

use crate::error::RedesignError;

/// File extensions picked up when scanning a folder for photos
pub const PHOTO_EXTENSIONS: [&str; 3] = ["jpg", "jpeg", "png"];

/// True if the path has one of [`PHOTO_EXTENSIONS`] (case-insensitive)
pub fn is_photo(path: &Path) -> bool {
    path.extension()
        .map(|ext| ext.to_string_lossy().to_lowercase())
        .is_some_and(|ext| PHOTO_EXTENSIONS.contains(&ext.as_str()))
}

/// Open a photo from disk as RGB
pub fn load_photo(path: &Path) -> Result<RgbImage, RedesignError> {
    let img = image::open(path).map_err(|source| RedesignError::Decode {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::debug!(path = %path.display(), width = img.width(), height = img.height(), "loaded photo");
    Ok(img.to_rgb8())
}

/// Decode an in-memory photo as RGB
pub fn decode_photo(bytes: &[u8]) -> Result<RgbImage, RedesignError> {
    let img = image::load_from_memory(bytes).map_err(|source| RedesignError::Decode {
        path: "<memory>".into(),
        source,
    })?;
    Ok(img.to_rgb8())
}

/// Encode as JPEG with the given quality (1-100)
pub fn encode_jpeg(image: &RgbImage, quality: u8) -> Result<Vec<u8>, RedesignError> {
    let mut buffer = Vec::new();
    let encoder = JpegEncoder::new_with_quality(&mut buffer, quality.clamp(1, 100));
    image.write_with_encoder(encoder).map_err(RedesignError::Encode)?;
    Ok(buffer)
}

/// Encode as JPEG and write to `path`, creating parent directories
pub fn save_jpeg(path: &Path, image: &RgbImage, quality: u8) -> Result<(), RedesignError> {
    let bytes = encode_jpeg(image, quality)?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, &bytes)?;

    tracing::info!(path = %path.display(), kb = bytes.len() / 1024, "saved result");
    Ok(())
}
