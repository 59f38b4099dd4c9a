//! Text measurement.
//!
//! Owns loaded fonts and computes label bounds for layout. Rasterization is
//! the renderer's job; this module never touches pixels.

mod font_system;

pub use font_system::{FontId, FontLoadError, FontSystem};
