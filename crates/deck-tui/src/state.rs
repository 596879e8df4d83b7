//! Application state composition.
//!
//! ```text
//! AppState
//! ├── deck: Deck                             (slides, fixed for the session)
//! ├── nav: NavigationController<RenderState> (cursor + retained fragments)
//! ├── dots: Vec<Dot>                         (one per slide, built once)
//! ├── mouse: GestureTracker                  (in-flight drag, if any)
//! ├── pressed / hovered: Option<HitTarget>   (click target under the pointer)
//! ├── hit_map: RefCell<HitMap>               (written by render)
//! └── ui: UiConfig
//! ```

use std::cell::RefCell;

use deck_core::config::{Config, UiConfig};
use deck_core::input::{Dot, GestureTracker, dots};
use deck_core::{Deck, NavRequest, NavigationController, RenderState};

use crate::hit::{HitMap, HitTarget};

pub struct AppState {
    /// Display name of the deck (usually the file name).
    pub title: String,
    pub deck: Deck,
    pub nav: NavigationController<RenderState>,
    pub dots: Vec<Dot>,
    /// Mouse drag state. Terminals deliver no touch input, so the touch
    /// tracker is not wired here.
    pub mouse: GestureTracker,
    /// Target under the last left-button press, resolved on release.
    pub pressed: Option<HitTarget>,
    /// Target under the pointer while no button is held.
    pub hovered: Option<HitTarget>,
    /// Click regions from the last draw (interior mutability: render takes `&self`).
    pub hit_map: RefCell<HitMap>,
    pub ui: UiConfig,
    pub should_quit: bool,
}

impl AppState {
    /// Builds the state and renders the initial position.
    pub fn new(title: impl Into<String>, deck: Deck, config: &Config) -> Self {
        let mut nav = NavigationController::new(deck.len(), RenderState::default());
        nav.sync();

        Self {
            title: title.into(),
            dots: dots(deck.len()),
            deck,
            nav,
            mouse: GestureTracker::mouse(&config.gesture),
            pressed: None,
            hovered: None,
            hit_map: RefCell::new(HitMap::default()),
            ui: config.ui.clone(),
            should_quit: false,
        }
    }

    pub fn view(&self) -> &RenderState {
        self.nav.sink()
    }

    /// Request for a completed click on `target`.
    pub fn request_for(&self, target: HitTarget) -> Option<NavRequest> {
        target.request(&self.dots)
    }

    /// Label of the dot being pressed, else the one under the pointer.
    pub fn dot_label(&self) -> Option<&str> {
        match self.pressed.or(self.hovered)? {
            HitTarget::Dot(index) => self.dots.get(index).map(|dot| dot.label.as_str()),
            HitTarget::Button(_) => None,
        }
    }
}
