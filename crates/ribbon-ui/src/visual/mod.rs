//! Stateful background visuals for selectable segments.
//!
//! A segment's background is not painted ad hoc: it is a small visual graph
//! generated once per configuration pass — two rounded-rect fills joined by a
//! [`CrossfadeVisual`], fronted by a [`StateListVisual`] that picks the
//! surface for the current interaction state. The group owns one
//! [`VisualState`] per segment in an explicit map keyed by segment value.

mod crossfade;
mod fill;
mod state_list;

pub use crossfade::{CrossfadeFrame, CrossfadeVisual};
pub use fill::{FillVisual, LayerVisual};
pub use state_list::{Interaction, StateListVisual, StateSelector, SurfaceRef};

use ribbon_engine::coords::{CornerRadii, Rect};
use ribbon_engine::paint::{Color, Paint};
use ribbon_engine::scene::Border;

use crate::painter::Painter;

/// Straight alpha of the reserved pressed-mask overlay (50/255).
const PRESSED_MASK_ALPHA: f32 = 50.0 / 255.0;

/// Style inputs shared by every fill a segment generates.
#[derive(Debug, Clone, Copy)]
pub struct FillStyle {
    pub stroke_width: f32,
    pub checked_tint: Color,
    pub unchecked_tint: Color,
}

/// Generated visual bundle for one segment.
pub struct VisualState {
    /// Two-frame crossfade: frame 0 unchecked fill, frame 1 checked fill.
    pub transition: CrossfadeVisual,
    /// State table fronting the transition; its single wildcard entry makes
    /// the crossfade the sole visible surface in every interaction state.
    pub surface: StateListVisual,
    /// Unchecked fill with a translucent checked-tint overlay. Generated but
    /// not referenced by the active state table — reserved for a future
    /// pressed-state treatment.
    pub pressed_mask: LayerVisual,
}

impl VisualState {
    /// Builds the visual bundle for one segment.
    ///
    /// All three fills share `radii` and a stroke in the checked tint — the
    /// stroke deliberately never changes color, so it stays stable while the
    /// fill crossfades underneath it. A segment that is already checked gets
    /// its crossfade initialized at the checked frame, with no visible flash.
    pub fn generate(style: FillStyle, checked: bool, radii: CornerRadii) -> Self {
        let border = (style.stroke_width > 0.0)
            .then(|| Border::new(style.stroke_width, style.checked_tint));

        let unchecked_fill =
            FillVisual::new(radii, Paint::Solid(style.unchecked_tint), border.clone());
        let checked_fill =
            FillVisual::new(radii, Paint::Solid(style.checked_tint), border.clone());

        let (r, g, b, _) = style.checked_tint.to_straight();
        let mask_fill = FillVisual::new(
            radii,
            Paint::Solid(Color::from_straight(r, g, b, PRESSED_MASK_ALPHA)),
            border,
        );
        let pressed_mask = LayerVisual::new(vec![unchecked_fill.clone(), mask_fill]);

        let mut transition = CrossfadeVisual::new(unchecked_fill, checked_fill);
        if checked {
            transition.snap_to(CrossfadeFrame::End);
        }

        let mut surface = StateListVisual::new();
        surface.add_state(StateSelector::WILDCARD, SurfaceRef::Transition);

        Self { transition, surface, pressed_mask }
    }

    /// Paints whichever surface the state table selects for `interaction`.
    pub fn paint_into(&self, painter: &mut Painter, rect: Rect, interaction: Interaction) {
        match self.surface.resolve(interaction) {
            Some(SurfaceRef::Transition) => self.transition.paint_into(painter, rect),
            Some(SurfaceRef::PressedMask) => self.pressed_mask.paint_into(painter, rect),
            None => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn style() -> FillStyle {
        FillStyle {
            stroke_width: 2.0,
            checked_tint: Color::from_straight(0.2, 0.65, 1.0, 1.0),
            unchecked_tint: Color::from_straight(0.2, 0.25, 0.35, 1.0),
        }
    }

    #[test]
    fn generated_frames_share_radii_and_checked_tint_stroke() {
        let radii = CornerRadii::outer_left(8.0, 0.1);
        let vs = VisualState::generate(style(), false, radii);
        assert_eq!(vs.transition.start_frame().radii, radii);
        assert_eq!(vs.transition.end_frame().radii, radii);
        let stroke = vs.transition.start_frame().border.as_ref().unwrap();
        assert_eq!(stroke.color, style().checked_tint);
        assert_eq!(stroke.width, 2.0);
        assert_eq!(vs.transition.end_frame().border, vs.transition.start_frame().border);
    }

    #[test]
    fn checked_segment_starts_at_end_frame_without_animating() {
        let vs = VisualState::generate(style(), true, CornerRadii::all(0.1));
        assert_eq!(vs.transition.frame(), CrossfadeFrame::End);
        assert!(!vs.transition.is_animating());
    }

    #[test]
    fn zero_stroke_width_generates_borderless_fills() {
        let mut s = style();
        s.stroke_width = 0.0;
        let vs = VisualState::generate(s, false, CornerRadii::all(0.1));
        assert!(vs.transition.start_frame().border.is_none());
    }

    #[test]
    fn wildcard_surface_resolves_to_transition_in_every_state() {
        let vs = VisualState::generate(style(), false, CornerRadii::all(0.1));
        for pressed in [false, true] {
            for checked in [false, true] {
                let i = Interaction { pressed, checked };
                assert_eq!(vs.surface.resolve(i), Some(SurfaceRef::Transition));
            }
        }
    }

    #[test]
    fn pressed_mask_layers_unchecked_fill_under_translucent_tint() {
        let vs = VisualState::generate(style(), false, CornerRadii::all(0.1));
        let layers = vs.pressed_mask.layers();
        assert_eq!(layers.len(), 2);
        assert_eq!(layers[0].paint, Paint::Solid(style().unchecked_tint));
        match &layers[1].paint {
            Paint::Solid(c) => {
                let (_, _, _, a) = c.to_straight();
                assert!((a - 50.0 / 255.0).abs() < 1e-6);
            }
            other => panic!("expected solid mask paint, got {other:?}"),
        }
    }
}
