//! TUI reducer (update function).
//!
//! All state mutations happen here. The runtime calls `update(app, event)`
//! and executes the returned effects. Navigation input is translated by the
//! `deck_core::input` adapters and applied through the controller; nothing
//! here touches the cursor directly.

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use deck_core::NavRequest;
use deck_core::input::NavKey;
use tracing::debug;

use crate::effects::UiEffect;
use crate::events::UiEvent;
use crate::hit::HitTarget;
use crate::state::AppState;

/// The main reducer function.
pub fn update(app: &mut AppState, event: UiEvent) -> Vec<UiEffect> {
    match event {
        UiEvent::Tick => vec![],
        UiEvent::Terminal(event) => handle_terminal_event(app, event),
    }
}

fn handle_terminal_event(app: &mut AppState, event: Event) -> Vec<UiEffect> {
    match event {
        Event::Key(key) => handle_key(app, key),
        Event::Mouse(mouse) => handle_mouse(app, mouse),
        Event::Resize(_, _) => vec![UiEffect::Redraw],
        // A release outside the window never arrives; drop the half-finished drag.
        Event::FocusLost => {
            app.mouse.cancel();
            app.pressed = None;
            app.hovered = None;
            vec![UiEffect::Redraw]
        }
        _ => vec![],
    }
}

/// Maps a terminal key onto a navigation key.
pub fn nav_key(key: &KeyEvent) -> Option<NavKey> {
    match key.code {
        KeyCode::Left => Some(NavKey::Left),
        KeyCode::Right => Some(NavKey::Right),
        KeyCode::Up => Some(NavKey::Up),
        KeyCode::Down => Some(NavKey::Down),
        KeyCode::Char(' ') => Some(NavKey::Space),
        KeyCode::Home => Some(NavKey::Home),
        KeyCode::End => Some(NavKey::End),
        _ => None,
    }
}

fn is_quit_key(key: &KeyEvent) -> bool {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => true,
        KeyCode::Char('c') => key.modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}

fn handle_key(app: &mut AppState, key: KeyEvent) -> Vec<UiEffect> {
    // Some platforms report releases too; navigation fires on press and repeat.
    if key.kind == KeyEventKind::Release {
        return vec![];
    }

    // Navigation keys are consumed here even when the move is rejected.
    if let Some(nav_key) = nav_key(&key) {
        let request = nav_key.request(app.nav.total());
        return navigate(app, request);
    }

    if is_quit_key(&key) {
        app.should_quit = true;
        return vec![UiEffect::Quit];
    }

    vec![]
}

fn handle_mouse(app: &mut AppState, mouse: MouseEvent) -> Vec<UiEffect> {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            app.mouse.begin(f64::from(mouse.column));
            app.pressed = app.hit_map.borrow().target_at(mouse.column, mouse.row);
            redraw_if(matches!(app.pressed, Some(HitTarget::Dot(_))))
        }
        MouseEventKind::Up(MouseButton::Left) => {
            let pressed = app.pressed.take();
            let label_shown = matches!(pressed, Some(HitTarget::Dot(_)));
            if let Some(request) = app.mouse.end(f64::from(mouse.column)) {
                return navigate(app, request);
            }

            // Short drag: a click if it was released over the target it started on.
            let released = app.hit_map.borrow().target_at(mouse.column, mouse.row);
            let effects = match pressed {
                Some(target) if released == Some(target) => app
                    .request_for(target)
                    .map_or_else(Vec::new, |request| navigate(app, request)),
                _ => vec![],
            };
            if effects.is_empty() {
                redraw_if(label_shown)
            } else {
                effects
            }
        }
        MouseEventKind::Moved => {
            let target = app.hit_map.borrow().target_at(mouse.column, mouse.row);
            let changed = target != app.hovered;
            app.hovered = target;
            redraw_if(changed)
        }
        _ => vec![],
    }
}

fn redraw_if(changed: bool) -> Vec<UiEffect> {
    if changed {
        vec![UiEffect::Redraw]
    } else {
        vec![]
    }
}

fn navigate(app: &mut AppState, request: NavRequest) -> Vec<UiEffect> {
    if app.nav.apply(request) {
        vec![UiEffect::Redraw]
    } else {
        debug!(?request, current = app.nav.current_index(), "navigation ignored");
        vec![]
    }
}
