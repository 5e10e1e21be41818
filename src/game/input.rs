//! Player input actions and the terminal key mapping.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// UI-agnostic input actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameInput {
    /// Kick the avatar upward.
    Impulse,
    /// Start a new session. Only meaningful once the game is over.
    Restart,
    /// Leave the game. Handled by the driver, never changes game state.
    Quit,
}

/// Map a key press to an action.
///
/// The flap keys double as restart once the game is over, so the game can
/// be played with a single button.
pub fn map_key(key: KeyEvent, is_over: bool) -> Option<GameInput> {
    if key.kind == KeyEventKind::Release {
        return None;
    }
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(GameInput::Quit)
        }
        KeyCode::Char(' ') | KeyCode::Up | KeyCode::Enter | KeyCode::Char('k') => {
            if is_over {
                Some(GameInput::Restart)
            } else {
                Some(GameInput::Impulse)
            }
        }
        KeyCode::Char('r') | KeyCode::Char('R') => Some(GameInput::Restart),
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Some(GameInput::Quit),
        _ => None,
    }
}
