use std::collections::HashMap;
use std::time::Duration;

use ribbon_engine::coords::{CornerRadii, Rect, Vec2};
use ribbon_engine::paint::Color;
use ribbon_engine::text::FontId;

use crate::constraints::{Constraints, Edges, LayoutCtx};
use crate::event::{EventResult, UiEvent};
use crate::painter::Painter;
use crate::theme::Theme;
use crate::visual::{CrossfadeFrame, FillStyle, Interaction, VisualState};
use crate::widget::Widget;

/// Radius applied to the squared corners of a profile. Exactly zero produces
/// hairline artifacts on some renderers, so "no rounding" is near-zero.
const CORNER_EPSILON: f32 = 0.1;

/// One selectable option within a [`SegmentedControl`].
#[derive(Debug, Clone)]
pub struct Segment {
    /// Display text.
    pub label: String,
    /// Logical value identifying this segment. Must be unique in the group.
    pub value: String,
    checked: bool,
}

impl Segment {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self { label: label.into(), value: value.into(), checked: false }
    }

    pub fn is_checked(&self) -> bool {
        self.checked
    }
}

/// A horizontal row of mutually exclusive segments.
///
/// Segments share equal width and stretch to fill the control. The leftmost
/// and rightmost segments get rounded outer corners; adjacent segments
/// overlap by the stroke width so their borders coincide into a single line.
/// Checked/unchecked changes crossfade each affected segment's background.
///
/// Call [`configure`](Self::configure) once after the segment list and style
/// are final (and again after either changes) — it generates the per-segment
/// background visuals. Selection then flows from clicks, or programmatically
/// through [`select`](Self::select).
///
/// # Example
/// ```rust,ignore
/// let mut control = SegmentedControl::new()
///     .segment("Daily",   "daily")
///     .segment("Weekly",  "weekly")
///     .segment("Monthly", "monthly")
///     .selected("daily")
///     .font(body_font)
///     .on_change(|value| println!("selected: {value}"));
/// control.configure();
/// ```
pub struct SegmentedControl {
    segments: Vec<Segment>,

    stroke_width: f32,
    corner_radius: f32,
    checked_tint: Color,
    unchecked_tint: Color,
    label_color: Color,
    font: Option<FontId>,
    font_size: f32,
    padding: Edges,
    /// Crossfade length for selection changes. The default is zero — the
    /// transition machinery runs but completes instantly.
    transition_duration: Duration,

    /// Background visuals keyed by segment value, regenerated wholesale by
    /// [`configure`](Self::configure).
    visuals: HashMap<String, VisualState>,
    last_checked: Option<String>,
    on_change: Option<Box<dyn FnMut(&str)>>,
}

impl SegmentedControl {
    pub fn new() -> Self {
        let theme = Theme::default();
        Self {
            segments: Vec::new(),
            stroke_width: theme.stroke_width,
            corner_radius: theme.corner_radius,
            checked_tint: theme.checked_tint,
            unchecked_tint: theme.unchecked_tint,
            label_color: theme.label_color,
            font: None,
            font_size: theme.font_size,
            padding: Edges::symmetric(8.0, 12.0),
            transition_duration: Duration::ZERO,
            visuals: HashMap::new(),
            last_checked: None,
            on_change: None,
        }
    }

    // ── builders ──────────────────────────────────────────────────────────

    pub fn segment(mut self, label: impl Into<String>, value: impl Into<String>) -> Self {
        self.segments.push(Segment::new(label, value));
        self
    }

    pub fn segments(mut self, iter: impl IntoIterator<Item = Segment>) -> Self {
        self.segments.extend(iter);
        self
    }

    /// Marks `value` as the initially checked segment (exclusive).
    pub fn selected(mut self, value: impl AsRef<str>) -> Self {
        let value = value.as_ref();
        for seg in &mut self.segments {
            seg.checked = seg.value == value;
        }
        self
    }

    /// Applies every style field of `theme` at once.
    pub fn theme(mut self, theme: &Theme) -> Self {
        self.stroke_width = theme.stroke_width;
        self.corner_radius = theme.corner_radius;
        self.checked_tint = theme.checked_tint;
        self.unchecked_tint = theme.unchecked_tint;
        self.label_color = theme.label_color;
        self.font_size = theme.font_size;
        self
    }

    pub fn stroke_width(mut self, v: f32) -> Self { self.stroke_width = v; self }
    pub fn corner_radius(mut self, v: f32) -> Self { self.corner_radius = v; self }
    pub fn checked_tint(mut self, v: Color) -> Self { self.checked_tint = v; self }
    pub fn unchecked_tint(mut self, v: Color) -> Self { self.unchecked_tint = v; self }
    pub fn label_color(mut self, v: Color) -> Self { self.label_color = v; self }
    pub fn font(mut self, v: FontId) -> Self { self.font = Some(v); self }
    pub fn font_size(mut self, v: f32) -> Self { self.font_size = v; self }
    pub fn padding(mut self, v: Edges) -> Self { self.padding = v; self }
    pub fn transition_duration(mut self, v: Duration) -> Self { self.transition_duration = v; self }

    /// Registers the selection listener. At most one listener exists;
    /// registering again replaces the previous one. The listener runs after
    /// the control's own visual bookkeeping for every completed selection
    /// change and receives the newly checked segment's value.
    pub fn on_change(mut self, f: impl FnMut(&str) + 'static) -> Self {
        self.on_change = Some(Box::new(f));
        self
    }

    // ── segment list mutation ─────────────────────────────────────────────

    /// Appends a segment after construction. [`configure`](Self::configure)
    /// must run again before the control is painted or selected.
    pub fn add_segment(&mut self, segment: Segment) {
        self.segments.push(segment);
    }

    // ── configuration ─────────────────────────────────────────────────────

    /// Generates the background visual for every segment from its position
    /// and checked state.
    ///
    /// Corner profiles are positional: the first segment rounds its outer
    /// left corners, the last its outer right corners, interior segments get
    /// near-zero rounding everywhere. Re-running with unchanged segments and
    /// style is idempotent — checked segments come back pre-snapped to their
    /// checked frame, with no visible flash.
    pub fn configure(&mut self) {
        let r = self.corner_radius;
        let left = CornerRadii::outer_left(r, CORNER_EPSILON);
        let right = CornerRadii::outer_right(r, CORNER_EPSILON);
        let middle = CornerRadii::all(CORNER_EPSILON);

        let style = FillStyle {
            stroke_width: self.stroke_width,
            checked_tint: self.checked_tint,
            unchecked_tint: self.unchecked_tint,
        };

        self.visuals.clear();
        let n = self.segments.len();
        for (i, seg) in self.segments.iter().enumerate() {
            let radii = if i == 0 {
                left
            } else if i == n - 1 {
                right
            } else {
                middle
            };
            let replaced = self
                .visuals
                .insert(seg.value.clone(), VisualState::generate(style, seg.checked, radii));
            debug_assert!(replaced.is_none(), "duplicate segment value {:?}", seg.value);
        }

        self.last_checked = self.segments.iter().find(|s| s.checked).map(|s| s.value.clone());

        log::debug!("configured {n} segments, checked: {:?}", self.last_checked);
    }

    // ── selection ─────────────────────────────────────────────────────────

    /// Value of the currently checked segment, if any.
    pub fn checked_value(&self) -> Option<&str> {
        self.segments.iter().find(|s| s.checked).map(|s| s.value.as_str())
    }

    /// Most recently checked value (equals [`checked_value`](Self::checked_value)
    /// once selection handling has completed).
    pub fn last_checked_value(&self) -> Option<&str> {
        self.last_checked.as_deref()
    }

    /// Programmatically checks `value`.
    ///
    /// Both paths run the full selection pipeline and notify the listener —
    /// even when `value` is already checked. `animate` only chooses between
    /// the configured transition duration and an instant snap.
    ///
    /// # Panics
    /// Panics if `value` names no segment, or if [`configure`](Self::configure)
    /// has not run since the segment was added.
    pub fn select(&mut self, value: &str, animate: bool) {
        assert!(
            self.segments.iter().any(|s| s.value == value),
            "select: unknown segment value {value:?}"
        );
        let duration = if animate { self.transition_duration } else { Duration::ZERO };
        self.handle_checked_changed(value.to_owned(), duration);
    }

    /// Internal stage of the selection pipeline. Always runs before the
    /// external listener, so visual bookkeeping can never be skipped.
    fn handle_checked_changed(&mut self, value: String, duration: Duration) {
        log::debug!("checked changed: {value:?} (last: {:?})", self.last_checked);

        // Bring the newly checked segment to its checked frame...
        self.visual_mut(&value).transition.transition_to(CrossfadeFrame::End, duration);

        // ...and return the previously checked one to its unchecked frame.
        if let Some(prev) = self.last_checked.take() {
            if prev != value {
                self.visual_mut(&prev).transition.transition_to(CrossfadeFrame::Start, duration);
            }
        }

        for seg in &mut self.segments {
            seg.checked = seg.value == value;
        }
        self.last_checked = Some(value.clone());

        if let Some(listener) = self.on_change.as_mut() {
            listener(&value);
        }
    }

    fn visual_mut(&mut self, value: &str) -> &mut VisualState {
        self.visuals.get_mut(value).unwrap_or_else(|| {
            panic!("no visual state for segment {value:?}; call configure() after adding or restyling segments")
        })
    }

    fn visual(&self, value: &str) -> &VisualState {
        self.visuals.get(value).unwrap_or_else(|| {
            panic!("no visual state for segment {value:?}; call configure() after adding or restyling segments")
        })
    }

    // ── layout ────────────────────────────────────────────────────────────

    /// Equal-width slot rects for the given bounds. Every slot except the
    /// last overlaps the next by exactly the stroke width, so the shared
    /// border renders as a single line instead of doubling.
    pub fn segment_rects(&self, rect: Rect) -> Vec<Rect> {
        let n = self.segments.len();
        if n == 0 {
            return Vec::new();
        }
        let overlap = self.stroke_width.max(0.0);
        let slot_w = (rect.size.x + (n as f32 - 1.0) * overlap) / n as f32;
        (0..n)
            .map(|i| {
                Rect::new(
                    rect.origin.x + i as f32 * (slot_w - overlap),
                    rect.origin.y,
                    slot_w,
                    rect.size.y,
                )
            })
            .collect()
    }
}

impl Default for SegmentedControl {
    fn default() -> Self {
        Self::new()
    }
}

impl Widget for SegmentedControl {
    fn measure(&self, constraints: Constraints, ctx: &LayoutCtx) -> Vec2 {
        let max_label_w = self.segments.iter().fold(0.0f32, |acc, seg| {
            let w = self
                .font
                .map(|f| ctx.fonts.measure_text(&seg.label, f, self.font_size, None).x)
                .unwrap_or(0.0);
            acc.max(w)
        });

        let n = self.segments.len() as f32;
        let overlap = (n - 1.0).max(0.0) * self.stroke_width.max(0.0);
        let natural_w = n * (max_label_w + self.padding.h()) - overlap;

        // Equal-weight segments stretch to fill bounded widths.
        let w = if constraints.max.x.is_finite() { constraints.max.x } else { natural_w };
        let h = self.font_size * 1.2 + self.padding.v();
        constraints.constrain(Vec2::new(w, h))
    }

    fn paint(&self, painter: &mut Painter, rect: Rect) {
        let rects = self.segment_rects(rect);

        for (seg, &slot) in self.segments.iter().zip(rects.iter()) {
            let interaction = Interaction {
                pressed: painter.is_pressed(slot),
                checked: seg.checked,
            };
            self.visual(&seg.value).paint_into(painter, slot, interaction);
        }

        // Labels go on top of every background so the overlap strip of the
        // next segment never covers text.
        if let Some(font) = self.font {
            for (seg, &slot) in self.segments.iter().zip(rects.iter()) {
                let size = painter.measure_text(&seg.label, font, self.font_size, None);
                let center = slot.center();
                painter.text(
                    &seg.label,
                    font,
                    self.font_size,
                    self.label_color,
                    Vec2::new(center.x - size.x * 0.5, center.y - self.font_size * 0.5),
                    None,
                );
            }
        }
    }

    fn on_event(&mut self, event: &UiEvent, rect: Rect, _ctx: &LayoutCtx<'_>) -> EventResult {
        if let UiEvent::Click { pos } = event {
            if !rect.contains(*pos) {
                return EventResult::Ignored;
            }

            let rects = self.segment_rects(rect);
            // Later segments draw on top of the shared border strip, so hit
            // test back-to-front.
            let hit = self
                .segments
                .iter()
                .zip(rects.iter())
                .rev()
                .find(|(_, slot)| slot.contains(*pos))
                .map(|(seg, _)| seg.value.clone());

            if let Some(value) = hit {
                // Pointer re-selection of the checked segment does not
                // re-notify; programmatic select() does.
                if self.checked_value() != Some(value.as_str()) {
                    let duration = self.transition_duration;
                    self.handle_checked_changed(value, duration);
                }
                return EventResult::Consumed;
            }
        }
        EventResult::Ignored
    }
}
