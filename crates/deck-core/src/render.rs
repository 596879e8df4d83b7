//! Render fan-out.
//!
//! Every accepted transition re-derives all dependent display fragments from
//! `(current, total)`. Hosts implement [`RenderSink`] to receive them; the
//! controller always calls every step, in declaration order.
//!
//! [`RenderState`] is the same derivation as a plain value. It also implements
//! `RenderSink`, so it can serve as a retained-mode sink.

use std::cmp::Ordering;

/// Per-slide marker used for directional transition styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SlideMarker {
    /// The slide under the cursor.
    Active,
    /// A slide before the cursor.
    Prior,
    /// A slide after the cursor.
    #[default]
    Upcoming,
}

/// Enablement of the two navigation buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ButtonStates {
    pub previous_enabled: bool,
    pub next_enabled: bool,
}

impl ButtonStates {
    /// Previous is disabled on the first slide, next on the last.
    pub fn for_position(current: usize, total: usize) -> Self {
        Self {
            previous_enabled: current != 0,
            next_enabled: current + 1 != total,
        }
    }
}

/// Marker for slide `index` when the cursor is at `current`.
pub fn slide_marker(index: usize, current: usize) -> SlideMarker {
    match index.cmp(&current) {
        Ordering::Equal => SlideMarker::Active,
        Ordering::Less => SlideMarker::Prior,
        Ordering::Greater => SlideMarker::Upcoming,
    }
}

/// Progress through the deck in percent, `((current + 1) / total) * 100`.
///
/// Returns 0 for an empty deck.
pub fn progress_percent(current: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    ((current + 1) as f64 / total as f64) * 100.0
}

/// Receiver of the render fan-out.
///
/// Each method is one display step. Steps never read each other's output.
pub trait RenderSink {
    /// Step 1: mark slide `current` active and earlier slides prior.
    fn show_slide(&mut self, current: usize, total: usize);

    /// Step 2: highlight dot `current` only.
    fn highlight_dot(&mut self, current: usize, total: usize);

    /// Step 3: counter text, `position` is 1-based.
    fn update_counter(&mut self, position: usize, total: usize);

    /// Step 4: progress indicator extent in percent.
    fn update_progress(&mut self, percent: f64);

    /// Step 5: previous/next enablement.
    fn update_buttons(&mut self, buttons: ButtonStates);
}

/// Display fragments derived from a cursor position.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RenderState {
    pub slides: Vec<SlideMarker>,
    pub dots: Vec<bool>,
    pub counter: String,
    pub progress: f64,
    pub buttons: ButtonStates,
}

impl RenderState {
    /// Derives the full display state for `current` of `total`.
    pub fn derive(current: usize, total: usize) -> Self {
        let mut state = Self::default();
        state.show_slide(current, total);
        state.highlight_dot(current, total);
        state.update_counter(current + 1, total);
        state.update_progress(progress_percent(current, total));
        state.update_buttons(ButtonStates::for_position(current, total));
        state
    }

    /// Index of the single active slide, if any.
    pub fn active_slide(&self) -> Option<usize> {
        self.slides.iter().position(|m| *m == SlideMarker::Active)
    }

    /// Index of the single active dot, if any.
    pub fn active_dot(&self) -> Option<usize> {
        self.dots.iter().position(|active| *active)
    }
}

impl RenderSink for RenderState {
    fn show_slide(&mut self, current: usize, total: usize) {
        self.slides = (0..total).map(|i| slide_marker(i, current)).collect();
    }

    fn highlight_dot(&mut self, current: usize, total: usize) {
        self.dots = (0..total).map(|i| i == current).collect();
    }

    fn update_counter(&mut self, position: usize, total: usize) {
        self.counter = format!("{position} / {total}");
    }

    fn update_progress(&mut self, percent: f64) {
        self.progress = percent;
    }

    fn update_buttons(&mut self, buttons: ButtonStates) {
        self.buttons = buttons;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_markers_split_around_cursor() {
        let state = RenderState::derive(2, 5);
        assert_eq!(
            state.slides,
            vec![
                SlideMarker::Prior,
                SlideMarker::Prior,
                SlideMarker::Active,
                SlideMarker::Upcoming,
                SlideMarker::Upcoming,
            ]
        );
    }

    #[test]
    fn test_exactly_one_active_dot() {
        let state = RenderState::derive(3, 5);
        assert_eq!(state.dots.iter().filter(|d| **d).count(), 1);
        assert_eq!(state.active_dot(), Some(3));
        assert_eq!(state.active_slide(), Some(3));
    }

    #[test]
    fn test_counter_and_progress() {
        let state = RenderState::derive(0, 5);
        assert_eq!(state.counter, "1 / 5");
        assert!((state.progress - 20.0).abs() < 1e-9);

        let state = RenderState::derive(4, 5);
        assert_eq!(state.counter, "5 / 5");
        assert!((state.progress - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_buttons_at_bounds() {
        assert_eq!(
            ButtonStates::for_position(0, 5),
            ButtonStates {
                previous_enabled: false,
                next_enabled: true
            }
        );
        assert_eq!(
            ButtonStates::for_position(4, 5),
            ButtonStates {
                previous_enabled: true,
                next_enabled: false
            }
        );
    }

    #[test]
    fn test_single_slide_disables_both_buttons() {
        let buttons = ButtonStates::for_position(0, 1);
        assert!(!buttons.previous_enabled);
        assert!(!buttons.next_enabled);
    }

    #[test]
    fn test_progress_empty_deck() {
        assert!(progress_percent(0, 0).abs() < 1e-9);
    }
}
