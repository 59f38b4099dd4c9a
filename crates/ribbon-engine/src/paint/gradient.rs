use crate::coords::Vec2;

use super::Color;

/// Gradient spread behavior outside [0, 1] range.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum SpreadMode {
    /// Clamp to edge stops.
    Pad,
    /// Repeat the gradient pattern.
    Repeat,
    /// Mirror-repeat the gradient pattern.
    Reflect,
}

/// A single gradient stop.
///
/// `t` is expected in [0, 1] in typical usage, but is not strictly enforced.
/// Renderers may clamp/sort stops at build time.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ColorStop {
    pub t: f32,
    pub color: Color,
}

impl ColorStop {
    #[inline]
    pub const fn new(t: f32, color: Color) -> Self {
        Self { t, color }
    }
}

/// Linear gradient definition in logical pixel space.
///
/// Semantics:
/// - `start` and `end` are positions in the same coordinate space as geometry.
/// - Stops define premultiplied linear colors.
/// - `spread` defines out-of-range behavior.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearGradient {
    pub start: Vec2,
    pub end: Vec2,
    pub stops: Vec<ColorStop>,
    pub spread: SpreadMode,
}

impl LinearGradient {
    pub fn new(start: Vec2, end: Vec2, stops: Vec<ColorStop>, spread: SpreadMode) -> Self {
        Self { start, end, stops, spread }
    }

    /// Returns true when the gradient definition is structurally usable.
    ///
    /// Renderers may still impose additional constraints (minimum number of
    /// stops, sorting, etc.).
    pub fn is_valid(&self) -> bool {
        self.start.is_finite()
            && self.end.is_finite()
            && self.stops.iter().all(|s| s.t.is_finite() && s.color.is_finite())
            && self.stops.len() >= 2
            && (self.end.x != self.start.x || self.end.y != self.start.y)
    }

    /// Returns the gradient with every stop modulated by `opacity`.
    #[must_use]
    pub fn with_opacity(mut self, opacity: f32) -> Self {
        for stop in &mut self.stops {
            stop.color = stop.color.with_opacity(opacity);
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_stop() -> LinearGradient {
        LinearGradient::new(
            Vec2::zero(),
            Vec2::new(0.0, 10.0),
            vec![
                ColorStop::new(0.0, Color::from_straight(1.0, 0.0, 0.0, 1.0)),
                ColorStop::new(1.0, Color::from_straight(0.0, 0.0, 1.0, 1.0)),
            ],
            SpreadMode::Pad,
        )
    }

    #[test]
    fn two_stops_along_an_axis_is_valid() {
        assert!(two_stop().is_valid());
    }

    #[test]
    fn degenerate_axis_is_invalid() {
        let mut g = two_stop();
        g.end = g.start;
        assert!(!g.is_valid());
    }

    #[test]
    fn single_stop_is_invalid() {
        let mut g = two_stop();
        g.stops.truncate(1);
        assert!(!g.is_valid());
    }

    #[test]
    fn with_opacity_scales_every_stop() {
        let g = two_stop().with_opacity(0.5);
        assert_eq!(g.stops[0].color.a, 0.5);
        assert_eq!(g.stops[1].color.a, 0.5);
    }
}
