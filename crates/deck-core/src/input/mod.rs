//! Input adapters.
//!
//! Each adapter translates one raw input into zero or one [`NavRequest`].
//! Adapters never move the cursor themselves; the host hands the request to
//! [`NavigationController::apply`](crate::nav::NavigationController::apply).
//!
//! Touch and mouse gestures each own a separate [`GestureTracker`]. Overlapping
//! touch and mouse sequences are not reconciled.
//!
//! [`NavRequest`]: crate::nav::NavRequest

mod button;
mod dots;
mod gesture;
mod keyboard;

pub use button::NavButton;
pub use dots::{Dot, dots};
pub use gesture::{GestureKind, GestureTracker, resolve_swipe};
pub use keyboard::NavKey;
