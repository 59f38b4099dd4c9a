use ribbon_engine::coords::{Rect, Vec2};
use ribbon_engine::scene::DrawList;
use ribbon_engine::text::{FontId, FontLoadError, FontSystem};

use crate::constraints::{Constraints, LayoutCtx};
use crate::event::UiEvent;
use crate::painter::Painter;
use crate::widget::Element;

// ── UiInput ───────────────────────────────────────────────────────────────

/// Snapshot of input state for one UI frame.
#[derive(Debug, Clone, Default)]
pub struct UiInput {
    /// Current cursor position in logical pixels.
    pub mouse_pos: Vec2,
    /// `true` while the primary button is held down.
    pub mouse_pressed: bool,
    /// `true` for exactly one frame when the primary button is released.
    pub mouse_clicked: bool,
}

// ── UiScene ───────────────────────────────────────────────────────────────

/// Top-level coordinator that owns shared resources across frames.
///
/// Owns the `FontSystem` and the `DrawList` that is populated each frame by
/// [`frame_ref`](Self::frame_ref). The renderers consuming the draw stream
/// live in the application.
pub struct UiScene {
    /// Fonts are public so the application can pass `&ui.font_system` to its
    /// text renderer.
    pub font_system: FontSystem,
    /// Draw list populated by the most recent [`frame_ref`](Self::frame_ref) call.
    pub draw_list: DrawList,
}

impl UiScene {
    pub fn new() -> Self {
        Self { font_system: FontSystem::new(), draw_list: DrawList::new() }
    }

    /// Load a TrueType / OpenType font from raw bytes.
    pub fn load_font(&mut self, data: &[u8]) -> Result<FontId, FontLoadError> {
        self.font_system.load_font(data)
    }

    /// Build, layout, paint, and route events for one frame.
    ///
    /// Borrows the root widget instead of consuming it: stateful widgets
    /// (selection, animation positions) persist in the caller across frames
    /// and are updated through `on_event`.
    #[must_use]
    pub fn frame_ref(
        &mut self,
        root: &mut Element,
        viewport: Vec2,
        input: &UiInput,
    ) -> &mut DrawList {
        self.draw_list.clear();

        // ── measure ───────────────────────────────────────────────────────
        let ctx = LayoutCtx { fonts: &self.font_system };
        // Pre-pass: let children compute their natural sizes. The root itself
        // always occupies the full viewport, so its measured size is unused.
        let _ = root.measure(Constraints::loose(viewport), &ctx);
        let rect = Rect::new(0.0, 0.0, viewport.x, viewport.y);

        // ── paint ─────────────────────────────────────────────────────────
        {
            let mut painter = Painter::new(
                &mut self.draw_list,
                &self.font_system,
                input.mouse_pos,
                input.mouse_pressed,
            );
            root.paint(&mut painter, rect);
        }

        // ── events ────────────────────────────────────────────────────────
        {
            let ctx = LayoutCtx { fonts: &self.font_system };
            root.on_event(&UiEvent::Hover { pos: input.mouse_pos }, rect, &ctx);
            if input.mouse_clicked {
                root.on_event(&UiEvent::Click { pos: input.mouse_pos }, rect, &ctx);
            }
        }

        &mut self.draw_list
    }
}

impl Default for UiScene {
    fn default() -> Self {
        Self::new()
    }
}
