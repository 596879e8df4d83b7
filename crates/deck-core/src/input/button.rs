//! Previous/next button adapter.

use crate::nav::NavRequest;

/// The two navigation buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavButton {
    Previous,
    Next,
}

impl NavButton {
    pub fn request(self) -> NavRequest {
        match self {
            NavButton::Previous => NavRequest::Previous,
            NavButton::Next => NavRequest::Next,
        }
    }

    /// Text drawn on the button.
    pub fn label(self) -> &'static str {
        match self {
            NavButton::Previous => "◀ Prev",
            NavButton::Next => "Next ▶",
        }
    }
}
