/// Flooring texture lookup
///
/// Textures are read-only reference images. The overlay asks for one per
/// flooring choice and resizes its own copy, so the same source can serve
/// any number of renders.

use image::RgbImage;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::error::RedesignError;
use crate::state::params::FlooringTag;

/// Something that can hand out a texture for a flooring choice
pub trait TextureSource {
    /// Texture for `flooring`. Fails with `AssetUnavailable` when missing.
    fn texture(&self, flooring: FlooringTag) -> Result<RgbImage, RedesignError>;
}

/// Textures stored as JPEG files in one directory:
/// `floor_wood.jpg`, `floor_marble.jpg`, `floor_tile.jpg`
#[derive(Debug, Clone)]
pub struct TextureDir {
    root: PathBuf,
}

impl TextureDir {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Expected path of the texture for `flooring`, None for `KeepOriginal`
    pub fn path_for(&self, flooring: FlooringTag) -> Option<PathBuf> {
        flooring.texture_file().map(|name| self.root.join(name))
    }

    /// Flooring choices whose texture file is missing
    pub fn missing(&self) -> Vec<FlooringTag> {
        FlooringTag::ALL
            .into_iter()
            .filter(|tag| matches!(self.path_for(*tag), Some(path) if !path.is_file()))
            .collect()
    }
}

impl TextureSource for TextureDir {
    fn texture(&self, flooring: FlooringTag) -> Result<RgbImage, RedesignError> {
        let path = self.path_for(flooring).ok_or_else(|| RedesignError::AssetUnavailable {
            flooring,
            path: self.root.clone(),
            reason: "no texture for this flooring".to_string(),
        })?;

        let texture = image::open(&path).map_err(|e| RedesignError::AssetUnavailable {
            flooring,
            path: path.clone(),
            reason: e.to_string(),
        })?;

        tracing::debug!(%flooring, path = %path.display(), "loaded texture");
        Ok(texture.to_rgb8())
    }
}

/// Textures held in memory
#[derive(Debug, Clone, Default)]
pub struct TextureSet {
    textures: HashMap<FlooringTag, RgbImage>,
}

impl TextureSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, flooring: FlooringTag, texture: RgbImage) -> Self {
        self.insert(flooring, texture);
        self
    }

    pub fn insert(&mut self, flooring: FlooringTag, texture: RgbImage) {
        self.textures.insert(flooring, texture);
    }
}

impl TextureSource for TextureSet {
    fn texture(&self, flooring: FlooringTag) -> Result<RgbImage, RedesignError> {
        self.textures
            .get(&flooring)
            .cloned()
            .ok_or_else(|| RedesignError::AssetUnavailable {
                flooring,
                path: PathBuf::from("<memory>"),
                reason: "texture not registered".to_string(),
            })
    }
}
