//! Animation timing utilities.
//!
//! Pure helpers for transition interpolation, kept free of any frame loop or
//! runtime coupling so visuals can compute their blend state on demand.

mod interpolate;

pub use interpolate::{is_complete, lerp, progress};
