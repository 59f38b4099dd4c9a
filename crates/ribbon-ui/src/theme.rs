use ribbon_engine::paint::Color;

/// Style defaults for segmented controls.
///
/// The analog of a platform theme resource: every construction-time style
/// value falls back to the matching field here when the caller sets nothing.
/// Values are not validated anywhere downstream — a zero or negative stroke
/// width degrades to a borderless fill, a zero or negative radius to square
/// corners.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Theme {
    /// Border stroke width in logical pixels. Default `2.0`.
    pub stroke_width: f32,
    /// Outer corner radius in logical pixels. Default `8.0`.
    pub corner_radius: f32,
    /// Fill of the checked segment (also the stroke color of every segment).
    /// Default a saturated blue.
    pub checked_tint: Color,
    /// Fill of unchecked segments. Default a dark slate.
    pub unchecked_tint: Color,
    /// Label text color. Default near-white.
    pub label_color: Color,
    /// Label font size in logical pixels. Default `13.0`.
    pub font_size: f32,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            stroke_width: 2.0,
            corner_radius: 8.0,
            checked_tint: Color::from_straight(0.2, 0.65, 1.0, 1.0),
            unchecked_tint: Color::from_straight(0.2, 0.25, 0.35, 1.0),
            label_color: Color::from_straight(0.85, 0.85, 0.9, 1.0),
            font_size: 13.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn documented_defaults() {
        let theme = Theme::default();
        assert_eq!(theme.stroke_width, 2.0);
        assert_eq!(theme.corner_radius, 8.0);
        assert_eq!(theme.font_size, 13.0);
        assert!(theme.checked_tint != theme.unchecked_tint);
    }
}
