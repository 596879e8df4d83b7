//! UI event types.
//!
//! All external inputs are converted to `UiEvent` before reaching the
//! reducer. The runtime processes one event to completion before the next.

use crossterm::event::Event as CrosstermEvent;

#[derive(Debug, Clone)]
pub enum UiEvent {
    /// Poll interval elapsed with no input.
    Tick,
    /// Raw terminal input (key, mouse, resize).
    Terminal(CrosstermEvent),
}
