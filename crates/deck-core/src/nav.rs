//! Slide navigation state machine.
//!
//! [`NavigationController`] owns the cursor over a fixed number of slides.
//! Every transition goes through [`NavigationController::go_to`], which either
//! applies fully (cursor + render fan-out) or is rejected before touching
//! anything. Out-of-range requests are ordinary input here (key repeat, rapid
//! clicks at a boundary), so rejection is silent and repeatable.

use tracing::{debug, trace};

use crate::render::{ButtonStates, RenderSink, progress_percent};

/// A transition requested by an input adapter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavRequest {
    /// Advance one slide.
    Next,
    /// Go back one slide.
    Previous,
    /// Jump to an absolute index. May be negative or past the end.
    GoTo(i64),
}

/// Bounded slide cursor with a render fan-out on every accepted transition.
#[derive(Debug)]
pub struct NavigationController<S> {
    current: usize,
    total: usize,
    sink: S,
}

impl<S: RenderSink> NavigationController<S> {
    /// Creates a controller at slide 0.
    ///
    /// `total` is fixed for the controller's lifetime. With zero slides every
    /// transition is rejected.
    pub fn new(total: usize, sink: S) -> Self {
        Self {
            current: 0,
            total,
            sink,
        }
    }

    /// Moves the cursor to `index` if `0 <= index < total`.
    ///
    /// Returns whether the transition was accepted. A rejected request leaves
    /// the cursor unchanged and renders nothing.
    pub fn go_to(&mut self, index: i64) -> bool {
        let Some(index) = self.validate(index) else {
            trace!(requested = index, total = self.total, "transition rejected");
            return false;
        };

        let from = self.current;
        self.current = index;
        debug!(from, to = index, total = self.total, "slide transition");
        self.render();
        true
    }

    /// Advances one slide; no-op on the last slide.
    pub fn next(&mut self) -> bool {
        self.go_to(self.current as i64 + 1)
    }

    /// Goes back one slide; no-op on the first slide.
    pub fn previous(&mut self) -> bool {
        self.go_to(self.current as i64 - 1)
    }

    /// Dispatches an adapter request to the matching transition.
    pub fn apply(&mut self, request: NavRequest) -> bool {
        match request {
            NavRequest::Next => self.next(),
            NavRequest::Previous => self.previous(),
            NavRequest::GoTo(index) => self.go_to(index),
        }
    }

    /// Renders the current position without a transition.
    ///
    /// Used once at startup so dependent fragments start in sync. Does nothing
    /// for an empty deck.
    pub fn sync(&mut self) {
        if self.total == 0 {
            return;
        }
        self.render();
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn total(&self) -> usize {
        self.total
    }

    /// Read access to the render sink (for hosts that draw from it).
    pub fn sink(&self) -> &S {
        &self.sink
    }

    fn validate(&self, index: i64) -> Option<usize> {
        usize::try_from(index).ok().filter(|i| *i < self.total)
    }

    fn render(&mut self) {
        let (current, total) = (self.current, self.total);
        self.sink.show_slide(current, total);
        self.sink.highlight_dot(current, total);
        self.sink.update_counter(current + 1, total);
        self.sink.update_progress(progress_percent(current, total));
        self.sink
            .update_buttons(ButtonStates::for_position(current, total));
    }
}
