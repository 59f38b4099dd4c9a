use std::time::{Duration, Instant};

use ribbon_engine::coords::Rect;
use ribbon_engine::time;

use crate::painter::Painter;

use super::fill::FillVisual;

/// The two resting positions of a [`CrossfadeVisual`].
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum CrossfadeFrame {
    /// Frame 0 — the unchecked appearance.
    Start,
    /// Frame 1 — the checked appearance.
    End,
}

impl CrossfadeFrame {
    #[inline]
    fn blend_value(self) -> f32 {
        match self {
            CrossfadeFrame::Start => 0.0,
            CrossfadeFrame::End => 1.0,
        }
    }
}

/// An in-flight transition toward the current target frame.
#[derive(Debug, Clone)]
struct ActiveTransition {
    started: Instant,
    duration: Duration,
    /// Blend value the transition departed from (mid-flight retargets depart
    /// from wherever the previous transition currently was).
    from: f32,
}

/// A two-frame visual that blends between an unchecked and a checked fill.
///
/// Transitions are *snap-to-target*: [`transition_to`](Self::transition_to)
/// names the destination frame rather than toggling a direction, so
/// re-requesting the current target is a no-op and the visual can never be
/// driven past its end frames.
///
/// Painting at blend `t` emits frame 0 at opacity `1 - t` and frame 1 at
/// opacity `t`; at either resting position exactly one frame is emitted.
pub struct CrossfadeVisual {
    start_frame: FillVisual,
    end_frame: FillVisual,
    target: CrossfadeFrame,
    anim: Option<ActiveTransition>,
}

impl CrossfadeVisual {
    /// A crossfade resting at its [`Start`](CrossfadeFrame::Start) frame.
    pub fn new(start_frame: FillVisual, end_frame: FillVisual) -> Self {
        Self { start_frame, end_frame, target: CrossfadeFrame::Start, anim: None }
    }

    pub fn start_frame(&self) -> &FillVisual {
        &self.start_frame
    }

    pub fn end_frame(&self) -> &FillVisual {
        &self.end_frame
    }

    /// The frame this crossfade is at, or moving toward.
    pub fn frame(&self) -> CrossfadeFrame {
        self.target
    }

    /// Starts a timed blend toward `target`.
    ///
    /// A zero `duration` snaps instantly. Re-requesting the resting target is
    /// a no-op; retargeting mid-flight departs from the current blend value,
    /// so the fill never jumps.
    pub fn transition_to(&mut self, target: CrossfadeFrame, duration: Duration) {
        if target == self.target && !self.is_animating() {
            return;
        }
        let from = self.blend();
        self.target = target;
        self.anim = if duration.is_zero() {
            None
        } else {
            Some(ActiveTransition { started: Instant::now(), duration, from })
        };
    }

    /// Moves to `target` instantly.
    pub fn snap_to(&mut self, target: CrossfadeFrame) {
        self.transition_to(target, Duration::ZERO);
    }

    /// Whether a timed transition is still in flight.
    pub fn is_animating(&self) -> bool {
        self.anim
            .as_ref()
            .is_some_and(|a| !time::is_complete(a.started, a.duration))
    }

    /// Current blend value: 0 shows only the start frame, 1 only the end frame.
    pub fn blend(&self) -> f32 {
        match &self.anim {
            None => self.target.blend_value(),
            Some(a) => time::lerp(
                a.from,
                self.target.blend_value(),
                time::progress(a.started, a.duration),
            ),
        }
    }

    /// Paints both frames with complementary opacity for the current blend.
    pub fn paint_into(&self, painter: &mut Painter, rect: Rect) {
        let t = self.blend();
        self.start_frame.paint_with_opacity(painter, rect, 1.0 - t);
        self.end_frame.paint_with_opacity(painter, rect, t);
    }
}
