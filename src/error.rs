/// Error types for the redesign pipeline
///
/// Parse failures come from user input (hex colors, flooring names).
/// Everything else is raised while loading assets or photos, or while
/// writing the result.

use std::path::PathBuf;
use thiserror::Error;

use crate::state::params::FlooringTag;

/// Invalid user input
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Accent color is not exactly 6 hex digits (optionally prefixed with '#')
    #[error("invalid accent color {0:?}: expected 6 hex digits like #c0a27a")]
    AccentColor(String),

    #[error("unknown flooring {0:?}: expected Keep Original, Wood, Marble or Tile")]
    Flooring(String),

    #[error("unknown wall finish {0:?}")]
    WallFinish(String),

    #[error("unknown room type {0:?}")]
    RoomType(String),
}

/// Errors raised by the pipeline and its file-backed collaborators
#[derive(Debug, Error)]
pub enum RedesignError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// The texture for a flooring choice could not be read.
    /// Callers usually fall back to keeping the original floor.
    #[error("texture for {flooring} unavailable at {}: {reason}", .path.display())]
    AssetUnavailable {
        flooring: FlooringTag,
        path: PathBuf,
        reason: String,
    },

    #[error("input image is empty ({width}x{height})")]
    EmptyImage { width: u32, height: u32 },

    #[error("failed to decode {}: {source}", .path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("failed to encode result: {0}")]
    Encode(#[source] image::ImageError),

    #[error("config error: {0}")]
    Config(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl RedesignError {
    /// True when the error is a missing flooring texture
    pub fn is_asset_unavailable(&self) -> bool {
        matches!(self, RedesignError::AssetUnavailable { .. })
    }
}
