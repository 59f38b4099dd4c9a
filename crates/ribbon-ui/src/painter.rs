use ribbon_engine::coords::{CornerRadii, Rect, Vec2};
use ribbon_engine::paint::{Color, Paint};
use ribbon_engine::scene::{Border, DrawList, ZIndex};
use ribbon_engine::text::{FontId, FontSystem};

/// Drawing surface passed to [`Widget::paint`].
///
/// Wraps the engine's `DrawList` with a high-level API and exposes
/// per-frame input state so widgets can express hover / pressed visuals
/// directly in their paint implementations.
///
/// [`Widget::paint`]: crate::widget::Widget::paint
pub struct Painter<'a> {
    pub(crate) draw_list: &'a mut DrawList,
    pub(crate) font_system: &'a FontSystem,
    z: i32,
    /// Current mouse position in logical pixels.
    pub mouse_pos: Vec2,
    /// True while the primary button is held down.
    pub mouse_pressed: bool,
}

impl<'a> Painter<'a> {
    pub(crate) fn new(
        draw_list: &'a mut DrawList,
        font_system: &'a FontSystem,
        mouse_pos: Vec2,
        mouse_pressed: bool,
    ) -> Self {
        Self { draw_list, font_system, z: 0, mouse_pos, mouse_pressed }
    }

    // ── input queries ─────────────────────────────────────────────────────

    /// Returns `true` if the mouse cursor is inside `rect`.
    #[inline]
    pub fn is_hovered(&self, rect: Rect) -> bool {
        rect.contains(self.mouse_pos)
    }

    /// Returns `true` if the primary button is held and the cursor is over `rect`.
    #[inline]
    pub fn is_pressed(&self, rect: Rect) -> bool {
        self.mouse_pressed && rect.contains(self.mouse_pos)
    }

    // ── text measurement ──────────────────────────────────────────────────

    /// Measures `text` with the scene's font system.
    pub fn measure_text(
        &self,
        text: &str,
        font: FontId,
        size: f32,
        max_width: Option<f32>,
    ) -> Vec2 {
        self.font_system.measure_text(text, font, size, max_width)
    }

    // ── drawing ───────────────────────────────────────────────────────────

    /// Solid axis-aligned rectangle.
    pub fn fill_rect(&mut self, rect: Rect, color: Color) {
        let z = self.next_z();
        self.draw_list.push_solid_rect(z, rect, color);
    }

    /// Rounded rectangle with optional border.
    ///
    /// Pass `radius = 0.0` for sharp corners. Pass `border = None` for no stroke.
    pub fn fill_rounded_rect(
        &mut self,
        rect: Rect,
        radius: f32,
        paint: impl Into<Paint>,
        border: Option<Border>,
    ) {
        let z = self.next_z();
        self.draw_list.push_rounded_rect(z, rect, CornerRadii::all(radius), paint.into(), border);
    }

    /// Rounded rectangle with per-corner radii and optional border.
    pub fn fill_rounded_rect_corners(
        &mut self,
        rect: Rect,
        radii: CornerRadii,
        paint: impl Into<Paint>,
        border: Option<Border>,
    ) {
        let z = self.next_z();
        self.draw_list.push_rounded_rect(z, rect, radii, paint.into(), border);
    }

    /// Text at `origin` (top-left of the first line), clipped to `max_width`.
    pub fn text(
        &mut self,
        text: impl Into<String>,
        font: FontId,
        size: f32,
        color: Color,
        origin: Vec2,
        max_width: Option<f32>,
    ) {
        let z = self.next_z();
        self.draw_list.push_text(z, text, font, size, color, origin, max_width);
    }

    // ── internal ──────────────────────────────────────────────────────────

    #[inline]
    fn next_z(&mut self) -> ZIndex {
        let z = ZIndex::new(self.z);
        self.z += 1;
        z
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ribbon_engine::scene::DrawCmd;

    #[test]
    fn draw_calls_get_increasing_z() {
        let mut list = DrawList::new();
        let fonts = FontSystem::new();
        let mut painter = Painter::new(&mut list, &fonts, Vec2::zero(), false);
        painter.fill_rect(Rect::new(0.0, 0.0, 1.0, 1.0), Color::transparent());
        painter.fill_rounded_rect(Rect::new(0.0, 0.0, 1.0, 1.0), 2.0, Color::transparent(), None);
        let zs: Vec<i32> = list.items().iter().map(|i| i.key.z.0).collect();
        assert_eq!(zs, vec![0, 1]);
        assert!(matches!(list.items()[1].cmd, DrawCmd::RoundedRect(_)));
    }

    #[test]
    fn pressed_requires_cursor_inside() {
        let mut list = DrawList::new();
        let fonts = FontSystem::new();
        let painter = Painter::new(&mut list, &fonts, Vec2::new(50.0, 5.0), true);
        assert!(!painter.is_pressed(Rect::new(0.0, 0.0, 10.0, 10.0)));
        assert!(painter.is_pressed(Rect::new(45.0, 0.0, 10.0, 10.0)));
    }
}
