/// Redesign parameters chosen by the user
///
/// This struct replaces the widget values of the web form: every render
/// receives its inputs explicitly. It round-trips through JSON so a set of
/// choices can be saved next to a photo and replayed.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::color::AccentColor;
use crate::error::ParseError;

/// Lowercase and strip separators so "Keep Original", "keep-original" and
/// "keep_original" compare equal.
fn normalize(name: &str) -> String {
    name.chars()
        .filter(|c| c.is_alphanumeric())
        .flat_map(char::to_lowercase)
        .collect()
}

/// Design style, selecting the grading recipe
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum StyleTag {
    #[default]
    Modern,
    Minimalist,
    Traditional,
    Luxury,
    Industrial,
    Scandinavian,
    /// Any other name. Grades with the accent tint only.
    Unrecognized(String),
}

impl StyleTag {
    pub const ALL: [StyleTag; 6] = [
        StyleTag::Modern,
        StyleTag::Minimalist,
        StyleTag::Traditional,
        StyleTag::Luxury,
        StyleTag::Industrial,
        StyleTag::Scandinavian,
    ];

    pub fn name(&self) -> &str {
        match self {
            StyleTag::Modern => "Modern",
            StyleTag::Minimalist => "Minimalist",
            StyleTag::Traditional => "Traditional",
            StyleTag::Luxury => "Luxury",
            StyleTag::Industrial => "Industrial",
            StyleTag::Scandinavian => "Scandinavian",
            StyleTag::Unrecognized(name) => name,
        }
    }

    pub fn is_recognized(&self) -> bool {
        !matches!(self, StyleTag::Unrecognized(_))
    }
}

impl From<&str> for StyleTag {
    fn from(name: &str) -> Self {
        let key = normalize(name);
        StyleTag::ALL
            .into_iter()
            .find(|style| normalize(style.name()) == key)
            .unwrap_or_else(|| StyleTag::Unrecognized(name.to_string()))
    }
}

impl From<String> for StyleTag {
    fn from(name: String) -> Self {
        StyleTag::from(name.as_str())
    }
}

impl From<StyleTag> for String {
    fn from(style: StyleTag) -> Self {
        style.name().to_string()
    }
}

impl FromStr for StyleTag {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(StyleTag::from(s))
    }
}

impl fmt::Display for StyleTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Flooring choice. `KeepOriginal` leaves the floor untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum FlooringTag {
    #[default]
    KeepOriginal,
    Wood,
    Marble,
    Tile,
}

impl FlooringTag {
    pub const ALL: [FlooringTag; 4] = [
        FlooringTag::KeepOriginal,
        FlooringTag::Wood,
        FlooringTag::Marble,
        FlooringTag::Tile,
    ];

    pub fn name(self) -> &'static str {
        match self {
            FlooringTag::KeepOriginal => "Keep Original",
            FlooringTag::Wood => "Wood",
            FlooringTag::Marble => "Marble",
            FlooringTag::Tile => "Tile",
        }
    }

    /// File name of the texture asset, None for `KeepOriginal`
    pub fn texture_file(self) -> Option<&'static str> {
        match self {
            FlooringTag::KeepOriginal => None,
            FlooringTag::Wood => Some("floor_wood.jpg"),
            FlooringTag::Marble => Some("floor_marble.jpg"),
            FlooringTag::Tile => Some("floor_tile.jpg"),
        }
    }
}

impl FromStr for FlooringTag {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = normalize(s);
        FlooringTag::ALL
            .into_iter()
            .find(|tag| normalize(tag.name()) == key)
            .ok_or_else(|| ParseError::Flooring(s.to_string()))
    }
}

impl TryFrom<String> for FlooringTag {
    type Error = ParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<FlooringTag> for String {
    fn from(tag: FlooringTag) -> Self {
        tag.name().to_string()
    }
}

impl fmt::Display for FlooringTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Wall finish. Only used to word the generation prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum WallFinish {
    #[default]
    PaintMatte,
    PaintSatin,
    Textured,
    Wallpaper,
}

impl WallFinish {
    pub const ALL: [WallFinish; 4] = [
        WallFinish::PaintMatte,
        WallFinish::PaintSatin,
        WallFinish::Textured,
        WallFinish::Wallpaper,
    ];

    pub fn name(self) -> &'static str {
        match self {
            WallFinish::PaintMatte => "Paint – Matte",
            WallFinish::PaintSatin => "Paint – Satin",
            WallFinish::Textured => "Textured",
            WallFinish::Wallpaper => "Wallpaper",
        }
    }
}

impl FromStr for WallFinish {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = normalize(s);
        WallFinish::ALL
            .into_iter()
            .find(|finish| normalize(finish.name()) == key)
            .ok_or_else(|| ParseError::WallFinish(s.to_string()))
    }
}

impl TryFrom<String> for WallFinish {
    type Error = ParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<WallFinish> for String {
    fn from(finish: WallFinish) -> Self {
        finish.name().to_string()
    }
}

impl fmt::Display for WallFinish {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Kind of room in the photo. Only used to word the generation prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum RoomType {
    #[default]
    LivingRoom,
    Bedroom,
    Kitchen,
    Bathroom,
}

impl RoomType {
    pub const ALL: [RoomType; 4] = [
        RoomType::LivingRoom,
        RoomType::Bedroom,
        RoomType::Kitchen,
        RoomType::Bathroom,
    ];

    pub fn name(self) -> &'static str {
        match self {
            RoomType::LivingRoom => "Living Room",
            RoomType::Bedroom => "Bedroom",
            RoomType::Kitchen => "Kitchen",
            RoomType::Bathroom => "Bathroom",
        }
    }
}

impl FromStr for RoomType {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = normalize(s);
        RoomType::ALL
            .into_iter()
            .find(|room| normalize(room.name()) == key)
            .ok_or_else(|| ParseError::RoomType(s.to_string()))
    }
}

impl TryFrom<String> for RoomType {
    type Error = ParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<RoomType> for String {
    fn from(room: RoomType) -> Self {
        room.name().to_string()
    }
}

impl fmt::Display for RoomType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// All inputs of one redesign
///
/// Missing fields fall back to the form defaults (Modern, #c0a27a,
/// Keep Original, Paint – Matte, Living Room).
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(default)]
pub struct RedesignParams {
    // ========== Used by the local pipeline ==========

    /// Grading recipe
    pub style: StyleTag,

    /// Color the image is tinted toward
    pub accent: AccentColor,

    /// Texture blended into the floor band
    pub flooring: FlooringTag,

    // ========== Prompt only ==========

    pub wall_finish: WallFinish,

    pub room: RoomType,
}

impl RedesignParams {
    /// Create default parameters
    pub fn new() -> Self {
        Self::default()
    }

    /// Convert to JSON string
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Parse from JSON string
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
