//! Keyboard adapter.
//!
//! Hosts map their native key events onto [`NavKey`]; keys without a mapping
//! are not handled and stay available to other bindings. Mapped keys are
//! always consumed, even when the resulting request is rejected at a bound.

use crate::nav::NavRequest;

/// Keys that drive navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavKey {
    Left,
    Right,
    Up,
    Down,
    Space,
    Home,
    End,
}

impl NavKey {
    /// Request for this key in a deck of `total` slides.
    ///
    /// `End` targets `total - 1`, which is `-1` (rejected) for an empty deck.
    pub fn request(self, total: usize) -> NavRequest {
        match self {
            NavKey::Left | NavKey::Up => NavRequest::Previous,
            NavKey::Right | NavKey::Down | NavKey::Space => NavRequest::Next,
            NavKey::Home => NavRequest::GoTo(0),
            NavKey::End => NavRequest::GoTo(total as i64 - 1),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nav::NavigationController;
    use crate::render::RenderState;

    #[test]
    fn test_direction_keys() {
        assert_eq!(NavKey::Left.request(5), NavRequest::Previous);
        assert_eq!(NavKey::Up.request(5), NavRequest::Previous);
        assert_eq!(NavKey::Right.request(5), NavRequest::Next);
        assert_eq!(NavKey::Down.request(5), NavRequest::Next);
        assert_eq!(NavKey::Space.request(5), NavRequest::Next);
    }

    #[test]
    fn test_home_and_end() {
        assert_eq!(NavKey::Home.request(5), NavRequest::GoTo(0));
        assert_eq!(NavKey::End.request(5), NavRequest::GoTo(4));
    }

    #[test]
    fn test_end_on_empty_deck_is_rejected() {
        let mut nav = NavigationController::new(0, RenderState::default());
        let request = NavKey::End.request(nav.total());
        assert_eq!(request, NavRequest::GoTo(-1));
        assert!(!nav.apply(request));
    }

    #[test]
    fn test_end_then_home() {
        let mut nav = NavigationController::new(6, RenderState::default());
        nav.apply(NavKey::End.request(nav.total()));
        assert_eq!(nav.current_index(), 5);
        nav.apply(NavKey::Home.request(nav.total()));
        assert_eq!(nav.current_index(), 0);
    }
}
