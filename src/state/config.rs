/// Application configuration
///
/// Loaded from an optional JSON file. Every field has a default, so an
/// empty object (or no file at all) is a valid configuration.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::RedesignError;

/// JPEG quality used for the downloadable result
pub const DEFAULT_EXPORT_QUALITY: u8 = 92;

/// File name of the result when no output path is given
pub const DEFAULT_OUTPUT_NAME: &str = "ai_redesign.jpg";

/// Photo used when the user does not supply one
pub const SAMPLE_PHOTO_NAME: &str = "sample_room.jpg";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    /// Directory holding the flooring textures and the sample photo
    pub asset_dir: PathBuf,
    /// JPEG quality (1-100) of exported results
    pub export_quality: u8,
    /// File name used when no output path is given
    pub output_name: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            asset_dir: Self::default_asset_dir(),
            export_quality: DEFAULT_EXPORT_QUALITY,
            output_name: DEFAULT_OUTPUT_NAME.to_string(),
        }
    }
}

impl AppConfig {
    /// Where textures live unless configured otherwise:
    /// - Linux: ~/.local/share/room-redesign/assets
    /// - macOS: ~/Library/Application Support/room-redesign/assets
    /// - Windows: %APPDATA%\room-redesign\assets
    ///
    /// Falls back to `./assets` when no data directory is known.
    pub fn default_asset_dir() -> PathBuf {
        match dirs::data_dir().or_else(dirs::home_dir) {
            Some(mut path) => {
                path.push("room-redesign");
                path.push("assets");
                path
            }
            None => PathBuf::from("assets"),
        }
    }

    /// Read a config file
    pub fn load(path: &Path) -> Result<Self, RedesignError> {
        let json = fs::read_to_string(path)?;
        let config = Self::from_json(&json)?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Read a config file if given, otherwise use defaults
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, RedesignError> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let mut config: Self = serde_json::from_str(json)?;
        config.export_quality = config.export_quality.clamp(1, 100);
        Ok(config)
    }

    /// Path of the bundled sample room photo
    pub fn sample_photo(&self) -> PathBuf {
        self.asset_dir.join(SAMPLE_PHOTO_NAME)
    }
}
