use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::frontend::InputEvent;
use crate::snake::Heading;

/// Maps a key press to a game input, or `None` for keys the game ignores.
pub fn map_key(key: KeyEvent) -> Option<InputEvent> {
    if is_ctrl_c(&key) {
        return Some(InputEvent::Quit);
    }

    match key.code {
        KeyCode::Char('w') | KeyCode::Char('W') | KeyCode::Up => Some(InputEvent::Direction(Heading::Up)),
        KeyCode::Char('a') | KeyCode::Char('A') | KeyCode::Left => Some(InputEvent::Direction(Heading::Left)),
        KeyCode::Char('s') | KeyCode::Char('S') | KeyCode::Down => Some(InputEvent::Direction(Heading::Down)),
        KeyCode::Char('d') | KeyCode::Char('D') | KeyCode::Right => Some(InputEvent::Direction(Heading::Right)),
        KeyCode::Enter => Some(InputEvent::Confirm),
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => Some(InputEvent::Quit),
        _ => None,
    }
}

fn is_ctrl_c(ev: &KeyEvent) -> bool {
    ev.modifiers.contains(KeyModifiers::CONTROL) && ev.code == KeyCode::Char('c')
}
