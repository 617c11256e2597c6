/// State module
///
/// This module holds everything a render needs as plain data:
/// - The user's choices for one redesign (params.rs)
/// - Application configuration (config.rs)

pub mod config;
pub mod params;
