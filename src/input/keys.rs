//! Key mapping from terminal events to game commands.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::game::Direction;

/// What a key press asks the game to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputCommand {
    Steer(Direction),
    Restart,
    Quit,
}

/// Map a key event to a command. Unbound keys map to `None` and are
/// ignored by the loop.
pub fn map_key(key: KeyEvent) -> Option<InputCommand> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(InputCommand::Quit);
    }

    match key.code {
        // Arrow keys and WASD steer
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => {
            Some(InputCommand::Steer(Direction::Up))
        }
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => {
            Some(InputCommand::Steer(Direction::Down))
        }
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => {
            Some(InputCommand::Steer(Direction::Left))
        }
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => {
            Some(InputCommand::Steer(Direction::Right))
        }

        KeyCode::Char('r') | KeyCode::Char('R') => Some(InputCommand::Restart),
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Some(InputCommand::Quit),

        _ => None,
    }
}
