//! Ribbon engine crate.
//!
//! Renderer-agnostic primitives shared by the widget layer: geometry, the
//! paint model, the recorded draw stream, text measurement, animation timing,
//! and logging bootstrap. The GPU/window runtime that turns the draw stream
//! into pixels lives outside this crate and consumes [`scene::DrawList`].

pub mod coords;
pub mod logging;
pub mod paint;
pub mod scene;
pub mod text;
pub mod time;
