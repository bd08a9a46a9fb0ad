//! Keystroke acquisition: one blocking read per menu iteration.

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers};

use script_shelf_core::error::Result;

use super::types::MenuEvent;

/// Blocks until a key event arrives and maps it to a [`MenuEvent`].
///
/// Non-key events (resize, focus, mouse) are swallowed; the caller redraws
/// on its next iteration anyway.
pub fn read_menu_event() -> Result<MenuEvent> {
    loop {
        if let Event::Key(key_event) = event::read()? {
            return Ok(map_key_event(key_event));
        }
    }
}

/// Pure key-to-event mapping: arrows move, letters jump, Enter confirms,
/// Escape/Space/Ctrl-C cancel, everything else is unrecognized.
#[must_use]
pub fn map_key_event(key_event: KeyEvent) -> MenuEvent {
    match key_event.code {
        KeyCode::Up => MenuEvent::MovePrevious,
        KeyCode::Down => MenuEvent::MoveNext,
        KeyCode::Enter => MenuEvent::Confirm,
        KeyCode::Esc => MenuEvent::Cancel,
        KeyCode::Char(' ') => MenuEvent::Cancel,
        KeyCode::Char('c') if key_event.modifiers.contains(KeyModifiers::CONTROL) => {
            MenuEvent::Cancel
        }
        KeyCode::Char(letter) if letter.is_ascii_alphabetic() => MenuEvent::JumpTo(letter),
        _ => MenuEvent::Unknown,
    }
}
