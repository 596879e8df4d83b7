//! `deck present`: the full-screen presenter.

use std::path::Path;

use anyhow::Result;
use deck_core::Deck;
use deck_core::config::Config;

pub fn run(file: &Path, start: Option<usize>, config: &Config) -> Result<()> {
    let deck = Deck::load(file)?;
    deck_tui::run_presentation(config, &display_title(file), deck, start)
}

/// File name shown in the header, falling back to the full path.
fn display_title(file: &Path) -> String {
    file.file_name().map_or_else(
        || file.display().to_string(),
        |name| name.to_string_lossy().into_owned(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_title_uses_file_name() {
        assert_eq!(display_title(Path::new("talks/rust.md")), "rust.md");
        assert_eq!(display_title(Path::new("..")), "..");
    }
}
