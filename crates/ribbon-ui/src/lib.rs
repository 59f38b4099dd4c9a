//! Ribbon UI — retained widget tree on top of `ribbon-engine`.
//!
//! The centerpiece is [`widgets::segmented::SegmentedControl`], a horizontal
//! row of mutually exclusive segments with rounded outer corners and
//! crossfading checked/unchecked backgrounds.
//!
//! # Quick start
//!
//! ```rust,ignore
//! use ribbon_ui::prelude::*;
//!
//! let mut scene = UiScene::new();
//! let mut control = SegmentedControl::new()
//!     .segment("Daily", "daily")
//!     .segment("Weekly", "weekly")
//!     .segment("Monthly", "monthly")
//!     .selected("daily")
//!     .on_change(|value| println!("selected: {value}"));
//! control.configure();
//! let mut root = Element::new(control);
//!
//! // In your frame callback:
//! let input = UiInput { mouse_pos, mouse_pressed, mouse_clicked };
//! let draw_list = scene.frame_ref(&mut root, viewport, &input);
//! // Pass draw_list to your renderers.
//! ```
//!
//! # Extending with custom widgets
//!
//! Implement [`widget::Widget`] for any type, then use it anywhere an
//! [`widget::Element`] is accepted.

pub mod constraints;
pub mod event;
pub mod painter;
pub mod scene;
pub mod theme;
pub mod visual;
pub mod widget;
pub mod widgets;

/// Everything you need to build and extend UI — import this in your component files.
pub mod prelude {
    pub use crate::constraints::{Constraints, Edges, LayoutCtx};
    pub use crate::event::{EventResult, UiEvent};
    pub use crate::painter::Painter;
    pub use crate::scene::{UiInput, UiScene};
    pub use crate::theme::Theme;
    pub use crate::visual::{
        CrossfadeFrame, CrossfadeVisual, FillStyle, FillVisual, Interaction, LayerVisual,
        StateListVisual, StateSelector, SurfaceRef, VisualState,
    };
    pub use crate::widget::{Element, Widget};
    pub use crate::widgets::{
        container::Container,
        segmented::{Segment, SegmentedControl},
    };

    // Re-export the engine primitives everyone needs.
    pub use ribbon_engine::coords::{CornerRadii, Rect, Vec2};
    pub use ribbon_engine::paint::{Color, ColorStop, LinearGradient, Paint, SpreadMode};
    pub use ribbon_engine::scene::Border;
    pub use ribbon_engine::text::FontId;
}
