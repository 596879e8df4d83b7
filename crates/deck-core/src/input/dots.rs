//! Dot navigation adapter.

use crate::nav::NavRequest;

/// One dot per slide, created when the deck is loaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dot {
    pub index: usize,
    /// Accessibility label.
    pub label: String,
}

impl Dot {
    pub fn new(index: usize) -> Self {
        Self {
            index,
            label: format!("Go to slide {}", index + 1),
        }
    }

    /// A click on this dot jumps straight to its slide.
    pub fn request(&self) -> NavRequest {
        NavRequest::GoTo(self.index as i64)
    }
}

/// Builds the dot row for a deck of `total` slides.
pub fn dots(total: usize) -> Vec<Dot> {
    (0..total).map(Dot::new).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_dot_per_slide() {
        let row = dots(4);
        assert_eq!(row.len(), 4);
        assert_eq!(row[3].request(), NavRequest::GoTo(3));
    }

    #[test]
    fn test_dot_labels_are_one_based() {
        assert_eq!(Dot::new(0).label, "Go to slide 1");
        assert_eq!(Dot::new(9).label, "Go to slide 10");
    }

    #[test]
    fn test_empty_deck_has_no_dots() {
        assert!(dots(0).is_empty());
    }
}
