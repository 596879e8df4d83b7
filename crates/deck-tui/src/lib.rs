//! Full-screen terminal presenter for deck.

pub mod effects;
pub mod events;
pub mod hit;
pub mod render;
pub mod runtime;
pub mod state;
pub mod terminal;
pub mod text;
pub mod update;

use std::io::{IsTerminal, Write, stderr, stdout};

use anyhow::Result;
use deck_core::Deck;
use deck_core::config::Config;
pub use runtime::TuiRuntime;
use state::AppState;
use tracing::info;

/// Runs the presenter until the user quits.
///
/// `start` is a 1-based slide number; it goes through the same validation as
/// any other jump, so an out-of-range value leaves the first slide showing.
///
/// # Errors
/// Returns an error if stdout/stderr is not a terminal or the terminal fails.
pub fn run_presentation(
    config: &Config,
    title: &str,
    deck: Deck,
    start: Option<usize>,
) -> Result<()> {
    if !stdout().is_terminal() || !stderr().is_terminal() {
        anyhow::bail!(
            "Presenting requires a terminal.\n\
             Use `deck outline <FILE>` for non-interactive output."
        );
    }

    let mut state = AppState::new(title, deck, config);
    if let Some(number) = start {
        let index = i64::try_from(number).unwrap_or(i64::MAX) - 1;
        if !state.nav.go_to(index) {
            writeln!(
                stderr(),
                "Warning: slide {number} does not exist; starting at slide 1"
            )?;
        }
    }

    // Print pre-TUI info to stderr (will be replaced by alternate screen)
    let mut err = stderr();
    writeln!(err, "deck")?;
    writeln!(err, "Presenting: {title} ({} slides)", state.nav.total())?;
    err.flush()?;

    info!(title, slides = state.nav.total(), "presentation started");

    {
        let mut runtime = TuiRuntime::new(state)?;
        runtime.run()?;
    }

    // Print goodbye after TUI exits (terminal restored)
    writeln!(stderr(), "Goodbye!")?;

    Ok(())
}
