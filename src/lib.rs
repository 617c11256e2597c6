/// Room redesign preview
///
/// Takes a room photo and a few choices (style, accent color, flooring) and
/// produces a cosmetically altered "after" image:
/// - `render` - grading, floor overlay, the pipeline, photo I/O
/// - `state` - the user's choices and app configuration
/// - `generator` - optional external generation with local fallback

pub mod color;
pub mod error;
pub mod generator;
pub mod render;
pub mod state;

pub use color::AccentColor;
pub use error::{ParseError, RedesignError};
pub use state::params::{FlooringTag, RedesignParams, RoomType, StyleTag, WallFinish};
