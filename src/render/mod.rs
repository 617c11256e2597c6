/// Local image transforms
///
/// This module handles:
/// - Style recipes and their enhancement steps
/// - Color grading with the accent tint
/// - Flooring textures and the floor overlay
/// - The grade → overlay pipeline
/// - Loading photos and exporting results

pub mod enhance;
pub mod export;
pub mod floor;
pub mod grade;
pub mod pipeline;
pub mod textures;

pub use pipeline::{redesign, redesign_or_keep_floor, redesign_with};
