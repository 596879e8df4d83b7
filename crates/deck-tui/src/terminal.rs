//! Presenter screen lifecycle.
//!
//! The presenter takes over the whole terminal: raw mode so single keys reach
//! the reducer, the alternate screen so the shell scrollback survives a talk,
//! and mouse plus focus reporting for clicks, drags and abandoned drags.
//! `restore_terminal` undoes all of it and runs from `Drop` and the panic hook.

use std::io::{self, Stdout};
use std::panic;

use anyhow::{Context, Result};
use crossterm::event::{
    DisableFocusChange, DisableMouseCapture, EnableFocusChange, EnableMouseCapture,
};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

/// Switches to raw mode on the alternate screen and wraps stdout for ratatui.
///
/// Install the panic hook first, or a panic here leaves the shell in raw mode.
///
/// # Errors
/// Returns an error if raw mode, the alternate screen or the backend fails.
pub fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;
    Terminal::new(CrosstermBackend::new(stdout)).context("Failed to create terminal")
}

/// Starts mouse and focus reporting for the presentation.
///
/// # Errors
/// Returns an error if the escape sequences cannot be written.
pub fn enable_input_features() -> Result<()> {
    execute!(io::stdout(), EnableMouseCapture, EnableFocusChange)
        .context("Failed to enable mouse and focus reporting")
}

/// Stops the reporting started by [`enable_input_features`].
///
/// # Errors
/// Returns an error if the escape sequences cannot be written.
pub fn disable_input_features() -> Result<()> {
    execute!(io::stdout(), DisableFocusChange, DisableMouseCapture)
        .context("Failed to disable mouse and focus reporting")
}

/// Hands the terminal back to the shell. Safe to call more than once.
///
/// # Errors
/// Returns an error if the alternate screen or raw mode cannot be left.
pub fn restore_terminal() -> Result<()> {
    // Reporting off first, so a late mouse event is not echoed to the shell.
    let _ = disable_input_features();

    execute!(io::stdout(), LeaveAlternateScreen).context("Failed to leave alternate screen")?;
    disable_raw_mode().context("Failed to disable raw mode")
}

/// Chains a hook that restores the shell before the default panic report.
pub fn install_panic_hook() {
    let previous = panic::take_hook();
    panic::set_hook(Box::new(move |info| {
        let _ = restore_terminal();
        previous(info);
    }));
}
