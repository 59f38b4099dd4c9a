use super::Color;
use super::gradient::LinearGradient;

/// Paint source for filling geometry.
///
/// This is intentionally a small enum. Extend by adding variants
/// (`RadialGradient`, `Image`, `Pattern`) while keeping the enum stable for
/// renderer dispatch.
#[derive(Debug, Clone, PartialEq)]
pub enum Paint {
    Solid(Color),
    LinearGradient(LinearGradient),
}

impl Paint {
    #[inline]
    pub fn solid(color: Color) -> Self {
        Paint::Solid(color)
    }

    #[inline]
    pub fn is_opaque(&self) -> bool {
        match self {
            Paint::Solid(c) => c.a >= 1.0,
            // Conservative: every stop must be fully opaque.
            Paint::LinearGradient(g) => g.stops.iter().all(|s| s.color.a >= 1.0),
        }
    }

    /// Returns the paint modulated by `opacity` in `[0, 1]`.
    #[must_use]
    pub fn with_opacity(self, opacity: f32) -> Self {
        match self {
            Paint::Solid(c) => Paint::Solid(c.with_opacity(opacity)),
            Paint::LinearGradient(g) => Paint::LinearGradient(g.with_opacity(opacity)),
        }
    }
}

impl From<Color> for Paint {
    #[inline]
    fn from(color: Color) -> Self {
        Paint::Solid(color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn solid_opacity_modulates_color() {
        let p = Paint::solid(Color::from_straight(1.0, 1.0, 1.0, 1.0)).with_opacity(0.5);
        match p {
            Paint::Solid(c) => assert_eq!(c.a, 0.5),
            other => panic!("expected solid paint, got {other:?}"),
        }
    }

    #[test]
    fn opaque_solid_reports_opaque() {
        assert!(Paint::solid(Color::from_straight(0.1, 0.2, 0.3, 1.0)).is_opaque());
        assert!(!Paint::solid(Color::from_straight(0.1, 0.2, 0.3, 0.9)).is_opaque());
    }
}
