//! Swipe/drag gesture adapter.
//!
//! Touch swipes and mouse drags share one rule: `diff = start - end`, and a
//! gesture longer than the threshold moves one slide. With the default
//! mapping, content dragged left (`diff > 0`) advances.
//!
//! A tracker holds at most one in-flight gesture. Its start coordinate is
//! cleared when the gesture ends, whatever the outcome.

use tracing::trace;

use crate::config::GestureConfig;
use crate::nav::NavRequest;

/// Source of a gesture. Each kind gets its own tracker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureKind {
    Touch,
    Mouse,
}

/// Resolves a completed gesture into a request.
///
/// Distances at or below `threshold` produce nothing. `invert` flips the
/// direction mapping.
pub fn resolve_swipe(start: f64, end: f64, threshold: f64, invert: bool) -> Option<NavRequest> {
    let diff = start - end;
    if diff.abs() <= threshold {
        return None;
    }
    let forward = (diff > 0.0) != invert;
    Some(if forward {
        NavRequest::Next
    } else {
        NavRequest::Previous
    })
}

/// Transient state for one gesture kind.
#[derive(Debug, Clone)]
pub struct GestureTracker {
    kind: GestureKind,
    threshold: f64,
    invert: bool,
    start: Option<f64>,
}

impl GestureTracker {
    pub fn new(kind: GestureKind, config: &GestureConfig) -> Self {
        Self {
            kind,
            threshold: config.threshold,
            invert: config.invert,
            start: None,
        }
    }

    pub fn touch(config: &GestureConfig) -> Self {
        Self::new(GestureKind::Touch, config)
    }

    pub fn mouse(config: &GestureConfig) -> Self {
        Self::new(GestureKind::Mouse, config)
    }

    /// Whether a gesture is in flight.
    pub fn is_active(&self) -> bool {
        self.start.is_some()
    }

    /// Records the start coordinate (touch-start / mouse-down).
    ///
    /// A second begin without an end restarts the gesture.
    pub fn begin(&mut self, x: f64) {
        self.start = Some(x);
    }

    /// Finishes the gesture (touch-end / mouse-up).
    ///
    /// Returns nothing if no gesture was started or the distance is within
    /// the threshold.
    pub fn end(&mut self, x: f64) -> Option<NavRequest> {
        let start = self.start.take()?;
        let request = resolve_swipe(start, x, self.threshold, self.invert);
        trace!(kind = ?self.kind, start, end = x, ?request, "gesture resolved");
        request
    }

    /// Drops an in-flight gesture without resolving it.
    pub fn cancel(&mut self) {
        self.start = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> GestureConfig {
        GestureConfig::default()
    }

    #[test]
    fn test_long_swipe_left_advances() {
        let mut touch = GestureTracker::touch(&config());
        touch.begin(300.0);
        assert_eq!(touch.end(100.0), Some(NavRequest::Next));
    }

    #[test]
    fn test_short_swipe_is_ignored() {
        let mut touch = GestureTracker::touch(&config());
        touch.begin(300.0);
        assert_eq!(touch.end(280.0), None);
    }

    #[test]
    fn test_long_swipe_right_goes_back() {
        let mut mouse = GestureTracker::mouse(&config());
        mouse.begin(100.0);
        assert_eq!(mouse.end(300.0), Some(NavRequest::Previous));
    }

    #[test]
    fn test_threshold_is_exclusive() {
        assert_eq!(resolve_swipe(150.0, 100.0, 50.0, false), None);
        assert_eq!(
            resolve_swipe(150.5, 100.0, 50.0, false),
            Some(NavRequest::Next)
        );
    }

    #[test]
    fn test_invert_flips_direction() {
        assert_eq!(
            resolve_swipe(300.0, 100.0, 50.0, true),
            Some(NavRequest::Previous)
        );
        assert_eq!(
            resolve_swipe(100.0, 300.0, 50.0, true),
            Some(NavRequest::Next)
        );
    }

    #[test]
    fn test_custom_threshold() {
        let mut mouse = GestureTracker::mouse(&GestureConfig {
            threshold: 5.0,
            invert: false,
        });
        mouse.begin(20.0);
        assert_eq!(mouse.end(10.0), Some(NavRequest::Next));
    }

    #[test]
    fn test_state_resets_after_each_gesture() {
        let mut mouse = GestureTracker::mouse(&config());
        mouse.begin(300.0);
        assert!(mouse.is_active());
        assert_eq!(mouse.end(290.0), None);
        assert!(!mouse.is_active());

        // A release without a fresh press does not reuse the old start.
        assert_eq!(mouse.end(0.0), None);
    }

    #[test]
    fn test_cancel_drops_gesture() {
        let mut touch = GestureTracker::touch(&config());
        touch.begin(300.0);
        touch.cancel();
        assert_eq!(touch.end(0.0), None);
    }

    #[test]
    fn test_trackers_are_independent() {
        let mut touch = GestureTracker::touch(&config());
        let mut mouse = GestureTracker::mouse(&config());
        touch.begin(300.0);
        mouse.begin(0.0);
        assert_eq!(mouse.end(200.0), Some(NavRequest::Previous));
        assert_eq!(touch.end(100.0), Some(NavRequest::Next));
    }
}
