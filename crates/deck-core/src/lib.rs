//! Core slide deck navigation for deck.
//!
//! - `nav`: the bounded slide cursor and its transition rule
//! - `render`: the render fan-out trait and derived display state
//! - `input`: adapters that turn raw input into navigation requests
//! - `deck`: slide discovery from Markdown files
//! - `config` / `logging`: ambient setup shared by the TUI and CLI

pub mod config;
pub mod deck;
pub mod input;
pub mod logging;
pub mod nav;
pub mod render;

pub use deck::{Deck, Slide};
pub use nav::{NavRequest, NavigationController};
pub use render::{ButtonStates, RenderSink, RenderState, SlideMarker};
