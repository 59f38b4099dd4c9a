/// Per-corner radii for a rounded rectangle (logical pixels).
///
/// Corners follow CSS convention: top-left, top-right, bottom-right, bottom-left.
/// Negative values are treated as zero by renderers.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct CornerRadii {
    pub top_left: f32,
    pub top_right: f32,
    pub bottom_right: f32,
    pub bottom_left: f32,
}

impl CornerRadii {
    #[inline]
    pub const fn new(top_left: f32, top_right: f32, bottom_right: f32, bottom_left: f32) -> Self {
        Self { top_left, top_right, bottom_right, bottom_left }
    }

    /// Uniform radius on all four corners.
    #[inline]
    pub const fn all(r: f32) -> Self {
        Self { top_left: r, top_right: r, bottom_right: r, bottom_left: r }
    }

    /// No rounding.
    #[inline]
    pub const fn zero() -> Self {
        Self::all(0.0)
    }

    /// Rounds only the two left-edge corners; the right-edge corners get `rest`.
    ///
    /// The profile used by the leftmost item of a joined horizontal group.
    #[inline]
    pub const fn outer_left(r: f32, rest: f32) -> Self {
        Self { top_left: r, top_right: rest, bottom_right: rest, bottom_left: r }
    }

    /// Mirror of [`outer_left`](Self::outer_left): rounds only the right-edge corners.
    #[inline]
    pub const fn outer_right(r: f32, rest: f32) -> Self {
        Self { top_left: rest, top_right: r, bottom_right: r, bottom_left: rest }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outer_left_rounds_left_corners_only() {
        let radii = CornerRadii::outer_left(8.0, 0.1);
        assert_eq!(radii.top_left, 8.0);
        assert_eq!(radii.bottom_left, 8.0);
        assert_eq!(radii.top_right, 0.1);
        assert_eq!(radii.bottom_right, 0.1);
    }

    #[test]
    fn outer_right_mirrors_outer_left() {
        let l = CornerRadii::outer_left(8.0, 0.1);
        let r = CornerRadii::outer_right(8.0, 0.1);
        assert_eq!(l.top_left, r.top_right);
        assert_eq!(l.bottom_left, r.bottom_right);
        assert_eq!(l.top_right, r.top_left);
        assert_eq!(l.bottom_right, r.bottom_left);
    }
}
