/// Optional image generation with local fallback
///
/// A generator is any service that turns a photo plus a text prompt into a
/// new photo. It reports failure as a typed reason; the caller decides what
/// to do about it. `generate_or_fallback` implements the usual policy: try
/// the generator once, and render locally if it fails or none is configured.

use image::RgbImage;
use thiserror::Error;

use crate::error::RedesignError;
use crate::render::pipeline::redesign_with;
use crate::render::textures::TextureSource;
use crate::state::params::RedesignParams;

/// Why a generator did not produce an image
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerationError {
    #[error("no credential configured")]
    MissingCredential,

    #[error("service answered with status {0}")]
    Status(u16),

    #[error("response did not contain an image: {0}")]
    MalformedResponse(String),

    #[error("request failed: {0}")]
    Transport(String),

    #[error("no answer within {0} seconds")]
    Timeout(u64),
}

/// A service that produces a redesigned photo from a prompt
pub trait ImageGenerator {
    fn generate(&self, photo: &RgbImage, prompt: &str) -> Result<RgbImage, GenerationError>;
}

/// Where a result came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderSource {
    Generated,
    /// Rendered by the local pipeline. `reason` is set when a generator was
    /// tried and failed.
    Local { reason: Option<GenerationError> },
}

/// A finished result and its origin
#[derive(Debug, Clone)]
pub struct Rendered {
    pub image: RgbImage,
    pub source: RenderSource,
}

/// Prompt describing the requested redesign
///
/// e.g. "Redesign this Living Room in Modern style with Paint – Matte,
/// primary color #c0a27a, flooring Keep Original."
pub fn prompt(params: &RedesignParams) -> String {
    format!(
        "Redesign this {} in {} style with {}, primary color {}, flooring {}.",
        params.room, params.style, params.wall_finish, params.accent, params.flooring
    )
}

/// Try the generator, fall back to the local pipeline
///
/// # Errors
/// Only local pipeline errors are returned; generator failures end up in
/// `RenderSource::Local { reason }`.
pub fn generate_or_fallback(
    generator: Option<&dyn ImageGenerator>,
    photo: &RgbImage,
    params: &RedesignParams,
    textures: &dyn TextureSource,
) -> Result<Rendered, RedesignError> {
    let reason = match generator {
        Some(generator) => match generator.generate(photo, &prompt(params)) {
            Ok(image) => {
                tracing::info!("using generated image");
                return Ok(Rendered {
                    image,
                    source: RenderSource::Generated,
                });
            }
            Err(err) => {
                tracing::warn!(error = %err, "image generation failed, using local render");
                Some(err)
            }
        },
        None => None,
    };

    let image = redesign_with(photo, params, textures)?;
    Ok(Rendered {
        image,
        source: RenderSource::Local { reason },
    })
}
