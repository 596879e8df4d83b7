//! UI effect types.
//!
//! Effects are commands returned by the reducer that the runtime executes.
//! The reducer only mutates state; drawing and exiting happen in the runtime.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiEffect {
    /// Leave the event loop and restore the terminal.
    Quit,
    /// Display fragments changed; draw on the next frame.
    Redraw,
}
