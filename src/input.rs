//! Keyboard input handling
//!
//! Routes key events to controller operations. The controller gates timer
//! calls by the current phase, so every key is safe in every phase.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::app::App;

/// Handle a key event
pub fn handle_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    // Only process key press events (not release/repeat)
    if key.kind != KeyEventKind::Press {
        return Ok(());
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.state.should_quit = true;
        return Ok(());
    }

    match key.code {
        KeyCode::Char(' ') => app.toggle_timer(),
        KeyCode::Char('r') => app.reset_timer(),
        KeyCode::Char('d') => app.toggle_theme(),
        KeyCode::Char('q') | KeyCode::Esc => {
            app.state.should_quit = true;
        }
        _ => {}
    }

    Ok(())
}
