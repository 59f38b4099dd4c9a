//! Paint model shared between UI and renderers.
//!
//! Scope:
//! - color representation (linear premultiplied alpha)
//! - paint sources (solid, gradients)
//!
//! Geometry types remain in `coords`.

mod color;
mod gradient;
mod paint;

pub use color::Color;
pub use gradient::{ColorStop, LinearGradient, SpreadMode};
pub use paint::Paint;
