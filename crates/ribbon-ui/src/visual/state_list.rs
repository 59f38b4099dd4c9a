/// Interaction state sampled for a segment at paint time.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct Interaction {
    /// Primary button held with the cursor over the segment.
    pub pressed: bool,
    /// The segment is the group's checked member.
    pub checked: bool,
}

/// Matcher over interaction flags. `None` means "don't care".
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct StateSelector {
    pub pressed: Option<bool>,
    pub checked: Option<bool>,
}

impl StateSelector {
    /// Matches every interaction state.
    pub const WILDCARD: StateSelector = StateSelector { pressed: None, checked: None };

    pub fn matches(self, state: Interaction) -> bool {
        self.pressed.is_none_or(|p| p == state.pressed)
            && self.checked.is_none_or(|c| c == state.checked)
    }
}

/// Which surface owned by a [`VisualState`](super::VisualState) a state entry displays.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SurfaceRef {
    /// The two-frame crossfade.
    Transition,
    /// The reserved pressed-feedback layer stack.
    PressedMask,
}

/// An ordered state table resolved first-match against the interaction state.
///
/// Entries added earlier win. The active configuration installs a single
/// wildcard entry pointing at the transition, so every interaction state
/// renders the crossfade.
#[derive(Debug, Default)]
pub struct StateListVisual {
    entries: Vec<(StateSelector, SurfaceRef)>,
}

impl StateListVisual {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a state entry. Order is match priority.
    pub fn add_state(&mut self, selector: StateSelector, surface: SurfaceRef) {
        self.entries.push((selector, surface));
    }

    /// First entry whose selector matches `state`, or `None` for an empty table.
    pub fn resolve(&self, state: Interaction) -> Option<SurfaceRef> {
        self.entries
            .iter()
            .find(|(selector, _)| selector.matches(state))
            .map(|&(_, surface)| surface)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ANY: [Interaction; 4] = [
        Interaction { pressed: false, checked: false },
        Interaction { pressed: false, checked: true },
        Interaction { pressed: true, checked: false },
        Interaction { pressed: true, checked: true },
    ];

    #[test]
    fn wildcard_matches_every_state() {
        for state in ANY {
            assert!(StateSelector::WILDCARD.matches(state));
        }
    }

    #[test]
    fn selector_constrains_named_flags_only() {
        let pressed_only = StateSelector { pressed: Some(true), checked: None };
        assert!(pressed_only.matches(Interaction { pressed: true, checked: false }));
        assert!(pressed_only.matches(Interaction { pressed: true, checked: true }));
        assert!(!pressed_only.matches(Interaction { pressed: false, checked: true }));
    }

    #[test]
    fn resolve_returns_first_match() {
        let mut table = StateListVisual::new();
        table.add_state(
            StateSelector { pressed: Some(true), checked: Some(false) },
            SurfaceRef::PressedMask,
        );
        table.add_state(StateSelector::WILDCARD, SurfaceRef::Transition);

        let pressed = Interaction { pressed: true, checked: false };
        assert_eq!(table.resolve(pressed), Some(SurfaceRef::PressedMask));
        let idle = Interaction { pressed: false, checked: false };
        assert_eq!(table.resolve(idle), Some(SurfaceRef::Transition));
    }

    #[test]
    fn empty_table_resolves_nothing() {
        assert_eq!(StateListVisual::new().resolve(ANY[0]), None);
    }
}
