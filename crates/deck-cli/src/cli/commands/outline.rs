//! `deck outline`: print slide titles without a terminal UI.

use std::io::{Write, stdout};
use std::path::Path;

use anyhow::Result;
use deck_core::Deck;

pub fn run(file: &Path) -> Result<()> {
    let deck = Deck::load(file)?;
    let mut out = stdout().lock();
    write_outline(&deck, &mut out)?;
    Ok(())
}

fn write_outline(deck: &Deck, out: &mut impl Write) -> Result<()> {
    if deck.is_empty() {
        writeln!(out, "(no slides)")?;
        return Ok(());
    }
    for (i, slide) in deck.slides().iter().enumerate() {
        writeln!(out, "{}. {}", i + 1, slide.title)?;
    }
    Ok(())
}
