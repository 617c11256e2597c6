/// Color utilities
///
/// This module handles:
/// - Parsing the accent color from a hex string
/// - Rec.601 luma (the gray baseline used by contrast and saturation)
/// - Per-channel weighted blends between images and solid colors

use image::{Rgb, RgbImage};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ParseError;

/// Opacity of the accent tint applied after every style recipe
pub const TINT_OPACITY: f32 = 0.06;

/// An RGB accent color, parsed from `#rrggbb`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct AccentColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl AccentColor {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a 6-digit hex color. The leading '#' is optional.
    ///
    /// Surrounding whitespace is ignored (pasted values often carry it);
    /// inside the trimmed value exactly 6 hex digits are required.
    ///
    /// # Examples
    /// `#c0a27a` → (192, 162, 122)
    pub fn from_hex(hex: &str) -> Result<Self, ParseError> {
        let trimmed = hex.trim();
        let digits = trimmed.strip_prefix('#').unwrap_or(trimmed);

        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ParseError::AccentColor(hex.to_string()));
        }

        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16)
                .map_err(|_| ParseError::AccentColor(hex.to_string()))
        };

        Ok(Self {
            r: channel(0..2)?,
            g: channel(2..4)?,
            b: channel(4..6)?,
        })
    }

    /// Render as lowercase `#rrggbb`
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    pub fn to_rgb(self) -> Rgb<u8> {
        Rgb([self.r, self.g, self.b])
    }
}

impl Default for AccentColor {
    /// The warm beige the color picker starts on
    fn default() -> Self {
        Self::new(0xc0, 0xa2, 0x7a)
    }
}

impl FromStr for AccentColor {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl TryFrom<String> for AccentColor {
    type Error = ParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_hex(&value)
    }
}

impl From<AccentColor> for String {
    fn from(color: AccentColor) -> Self {
        color.to_hex()
    }
}

impl fmt::Display for AccentColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// Rec.601 luma in fixed point, rounded: L = 0.299 R + 0.587 G + 0.114 B
pub fn luma(pixel: &Rgb<u8>) -> u8 {
    let [r, g, b] = pixel.0;
    let weighted = u32::from(r) * 19_595 + u32::from(g) * 38_470 + u32::from(b) * 7_471;
    ((weighted + 0x8000) >> 16) as u8
}

/// Round and clamp a channel value into 0..=255
pub fn to_channel(value: f32) -> u8 {
    value.round().clamp(0.0, 255.0) as u8
}

/// Move `from` toward `to` by `alpha` (0.0 keeps `from`, 1.0 gives `to`)
pub fn mix(from: u8, to: u8, alpha: f32) -> u8 {
    let from = f32::from(from);
    to_channel(from + alpha * (f32::from(to) - from))
}

/// Blend every pixel toward a solid color.
///
/// result = (1 - opacity) × image + opacity × color, per channel.
pub fn tint(image: &RgbImage, color: AccentColor, opacity: f32) -> RgbImage {
    let target = color.to_rgb();
    let mut out = image.clone();
    for pixel in out.pixels_mut() {
        for c in 0..3 {
            pixel.0[c] = mix(pixel.0[c], target.0[c], opacity);
        }
    }
    out
}
