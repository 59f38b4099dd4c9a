use ribbon_engine::coords::{CornerRadii, Rect};
use ribbon_engine::paint::Paint;
use ribbon_engine::scene::Border;

use crate::painter::Painter;

/// A filled rounded rectangle with an optional stroke.
///
/// The leaf of the segment visual graph: crossfades and layers compose these.
#[derive(Debug, Clone, PartialEq)]
pub struct FillVisual {
    pub radii: CornerRadii,
    pub paint: Paint,
    pub border: Option<Border>,
}

impl FillVisual {
    pub fn new(radii: CornerRadii, paint: impl Into<Paint>, border: Option<Border>) -> Self {
        Self { radii, paint: paint.into(), border }
    }

    /// Paints the fill at full opacity.
    pub fn paint_into(&self, painter: &mut Painter, rect: Rect) {
        painter.fill_rounded_rect_corners(rect, self.radii, self.paint.clone(), self.border.clone());
    }

    /// Paints the fill modulated by `opacity`; fully transparent calls emit
    /// nothing. The stroke is modulated together with the fill, which is what
    /// lets two overlapping crossfade frames sum back to a solid stroke.
    pub fn paint_with_opacity(&self, painter: &mut Painter, rect: Rect, opacity: f32) {
        if opacity <= 0.0 {
            return;
        }
        if opacity >= 1.0 {
            self.paint_into(painter, rect);
            return;
        }
        let paint = self.paint.clone().with_opacity(opacity);
        let border = self
            .border
            .as_ref()
            .map(|b| Border::new(b.width, b.color.with_opacity(opacity)));
        painter.fill_rounded_rect_corners(rect, self.radii, paint, border);
    }
}

/// An ordered stack of fills painted back-to-front.
pub struct LayerVisual {
    layers: Vec<FillVisual>,
}

impl LayerVisual {
    pub fn new(layers: Vec<FillVisual>) -> Self {
        Self { layers }
    }

    pub fn layers(&self) -> &[FillVisual] {
        &self.layers
    }

    pub fn paint_into(&self, painter: &mut Painter, rect: Rect) {
        for layer in &self.layers {
            layer.paint_into(painter, rect);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ribbon_engine::coords::Vec2;
    use ribbon_engine::paint::Color;
    use ribbon_engine::scene::{DrawCmd, DrawList};
    use ribbon_engine::text::FontSystem;

    fn fill() -> FillVisual {
        FillVisual::new(
            CornerRadii::all(4.0),
            Color::from_straight(1.0, 0.0, 0.0, 1.0),
            Some(Border::new(2.0, Color::from_straight(0.0, 0.0, 1.0, 1.0))),
        )
    }

    fn record(f: impl FnOnce(&mut Painter)) -> DrawList {
        let mut list = DrawList::new();
        let fonts = FontSystem::new();
        let mut painter = Painter::new(&mut list, &fonts, Vec2::zero(), false);
        f(&mut painter);
        list
    }

    #[test]
    fn zero_opacity_emits_nothing() {
        let list = record(|p| fill().paint_with_opacity(p, Rect::new(0.0, 0.0, 10.0, 10.0), 0.0));
        assert!(list.items().is_empty());
    }

    #[test]
    fn full_opacity_emits_unmodulated_command() {
        let list = record(|p| fill().paint_with_opacity(p, Rect::new(0.0, 0.0, 10.0, 10.0), 1.0));
        match &list.items()[0].cmd {
            DrawCmd::RoundedRect(cmd) => {
                assert_eq!(cmd.paint, Paint::Solid(Color::from_straight(1.0, 0.0, 0.0, 1.0)));
                assert_eq!(cmd.border.as_ref().unwrap().width, 2.0);
            }
            other => panic!("expected rounded rect, got {other:?}"),
        }
    }

    #[test]
    fn partial_opacity_modulates_fill_and_stroke() {
        let list = record(|p| fill().paint_with_opacity(p, Rect::new(0.0, 0.0, 10.0, 10.0), 0.5));
        match &list.items()[0].cmd {
            DrawCmd::RoundedRect(cmd) => {
                match &cmd.paint {
                    Paint::Solid(c) => assert_eq!(c.a, 0.5),
                    other => panic!("expected solid paint, got {other:?}"),
                }
                assert_eq!(cmd.border.as_ref().unwrap().color.a, 0.5);
            }
            other => panic!("expected rounded rect, got {other:?}"),
        }
    }

    #[test]
    fn layer_visual_paints_back_to_front() {
        let base = fill();
        let overlay = FillVisual::new(
            CornerRadii::all(4.0),
            Color::from_straight(0.0, 1.0, 0.0, 0.2),
            None,
        );
        let layered = LayerVisual::new(vec![base, overlay]);
        let mut list = record(|p| layered.paint_into(p, Rect::new(0.0, 0.0, 10.0, 10.0)));
        let count = list.items().len();
        assert_eq!(count, 2);
        // Back-to-front: the overlay is recorded after (on top of) the base.
        let zs: Vec<i32> = list.iter_in_paint_order().map(|i| i.key.z.0).collect();
        assert_eq!(zs, vec![0, 1]);
    }
}
