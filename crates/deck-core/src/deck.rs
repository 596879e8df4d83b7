//! Slide discovery.
//!
//! A deck is a Markdown file with slides separated by `---` lines. The slide
//! list is read once and fixes the slide count for the session. Slide content
//! is kept as-is; nothing here interprets or validates it.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

/// Separator line between slides (surrounding whitespace ignored).
const SLIDE_SEPARATOR: &str = "---";

/// One slide of the deck.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slide {
    /// First heading, or first non-empty line.
    pub title: String,
    /// Raw Markdown body with surrounding blank lines trimmed.
    pub body: String,
}

impl Slide {
    fn from_lines(lines: &[&str]) -> Option<Self> {
        let start = lines.iter().position(|l| !l.trim().is_empty())?;
        let end = lines.iter().rposition(|l| !l.trim().is_empty())?;
        let body = lines[start..=end].join("\n");
        let title = slide_title(&lines[start..=end]);
        Some(Self { title, body })
    }
}

fn slide_title(lines: &[&str]) -> String {
    let heading = lines.iter().find_map(|line| {
        let trimmed = line.trim_start();
        let text = trimmed.trim_start_matches('#');
        let level = trimmed.len() - text.len();
        ((1..=6).contains(&level) && (text.is_empty() || text.starts_with(' ')))
            .then(|| text.trim().trim_end_matches('#').trim().to_string())
    });

    heading
        .filter(|title| !title.is_empty())
        .or_else(|| {
            lines
                .iter()
                .map(|l| l.trim())
                .find(|l| !l.is_empty())
                .map(str::to_string)
        })
        .unwrap_or_default()
}

/// Ordered slides of a presentation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Deck {
    slides: Vec<Slide>,
}

impl Deck {
    /// Splits Markdown text into slides.
    ///
    /// Slides that are blank after trimming are dropped, so an empty or
    /// separator-only file yields an empty deck.
    pub fn parse(text: &str) -> Self {
        let mut slides = Vec::new();
        let mut current: Vec<&str> = Vec::new();

        for line in text.lines() {
            if line.trim() == SLIDE_SEPARATOR {
                slides.extend(Slide::from_lines(&current));
                current.clear();
            } else {
                current.push(line);
            }
        }
        slides.extend(Slide::from_lines(&current));

        Self { slides }
    }

    /// Reads and parses a deck file.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read as UTF-8 text.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read deck from {}", path.display()))?;
        let deck = Self::parse(&text);
        info!(path = %path.display(), slides = deck.len(), "deck loaded");
        Ok(deck)
    }

    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }

    pub fn get(&self, index: usize) -> Option<&Slide> {
        self.slides.get(index)
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn test_parse_splits_on_separator() {
        let deck = Deck::parse("# One\nbody\n---\n# Two\n---\n# Three\n");
        assert_eq!(deck.len(), 3);
        assert_eq!(deck.slides()[0].title, "One");
        assert_eq!(deck.slides()[0].body, "# One\nbody");
        assert_eq!(deck.slides()[2].title, "Three");
    }

    #[test]
    fn test_separator_allows_surrounding_whitespace() {
        let deck = Deck::parse("a\n  ---  \nb");
        assert_eq!(deck.len(), 2);
    }

    #[test]
    fn test_longer_rules_are_content() {
        let deck = Deck::parse("a\n----\nb");
        assert_eq!(deck.len(), 1);
        assert_eq!(deck.slides()[0].body, "a\n----\nb");
    }

    #[test]
    fn test_blank_slides_are_dropped() {
        let deck = Deck::parse("---\n\n---\n# Only\n---\n   \n");
        assert_eq!(deck.len(), 1);
        assert_eq!(deck.slides()[0].title, "Only");
    }

    #[test]
    fn test_empty_text_is_empty_deck() {
        assert!(Deck::parse("").is_empty());
        assert!(Deck::parse("\n\n").is_empty());
    }

    #[test]
    fn test_title_falls_back_to_first_line() {
        let deck = Deck::parse("\n  plain text first\n## Later heading\n");
        assert_eq!(deck.slides()[0].title, "Later heading");

        let deck = Deck::parse("just words\nmore words");
        assert_eq!(deck.slides()[0].title, "just words");
    }

    #[test]
    fn test_hashtag_is_not_heading() {
        let deck = Deck::parse("#hashtag\nbody");
        assert_eq!(deck.slides()[0].title, "#hashtag");
    }

    #[test]
    fn test_closing_hashes_are_stripped() {
        let deck = Deck::parse("## Title ##");
        assert_eq!(deck.slides()[0].title, "Title");
    }

    #[test]
    fn test_load_reads_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "# A\n---\n# B\n").unwrap();

        let deck = Deck::load(file.path()).unwrap();
        assert_eq!(deck.len(), 2);
        assert_eq!(deck.get(1).map(|s| s.title.as_str()), Some("B"));
    }

    #[test]
    fn test_load_missing_file_errors() {
        let dir = tempfile::tempdir().unwrap();
        let err = Deck::load(&dir.path().join("missing.md")).unwrap_err();
        assert!(err.to_string().contains("Failed to read deck"));
    }
}
