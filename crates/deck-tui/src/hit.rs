//! Click targets.
//!
//! The draw pass records where the buttons and dots landed; the reducer maps
//! mouse positions back to a target with [`HitMap::target_at`].

use deck_core::NavRequest;
use deck_core::input::{Dot, NavButton};
use ratatui::layout::{Position, Rect};

/// Something a click can land on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitTarget {
    Button(NavButton),
    Dot(usize),
}

impl HitTarget {
    /// Translates a completed click into a request via the matching adapter.
    ///
    /// A dot index missing from `dots` yields nothing.
    pub fn request(self, dots: &[Dot]) -> Option<NavRequest> {
        match self {
            HitTarget::Button(button) => Some(button.request()),
            HitTarget::Dot(index) => dots.get(index).map(Dot::request),
        }
    }
}

/// Screen regions of all click targets from the last draw.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HitMap {
    pub previous: Option<Rect>,
    pub next: Option<Rect>,
    pub dots: Vec<(usize, Rect)>,
}

impl HitMap {
    pub fn target_at(&self, column: u16, row: u16) -> Option<HitTarget> {
        let pos = Position::new(column, row);
        if self.previous.is_some_and(|r| r.contains(pos)) {
            return Some(HitTarget::Button(NavButton::Previous));
        }
        if self.next.is_some_and(|r| r.contains(pos)) {
            return Some(HitTarget::Button(NavButton::Next));
        }
        self.dots
            .iter()
            .find(|(_, r)| r.contains(pos))
            .map(|(index, _)| HitTarget::Dot(*index))
    }
}
