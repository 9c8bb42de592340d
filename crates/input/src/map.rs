//! Key mapping from terminal events to reducer actions.

use crate::types::{Action, Change};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map keyboard input to reducer actions.
///
/// Restart maps to `Move(None)`; the reducer ignores it while a game is in
/// progress.
pub fn handle_key_event(key: KeyEvent) -> Option<Action> {
    let change = match key.code {
        // Movement
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') | KeyCode::Char('h') => {
            Change::left()
        }
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') | KeyCode::Char('l') => {
            Change::right()
        }
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') | KeyCode::Char('j') => {
            Change::down()
        }

        // Rotation
        KeyCode::Up | KeyCode::Char('e') | KeyCode::Char('E') | KeyCode::Char('k') => {
            Change::rotate_cw()
        }
        KeyCode::Char('w') | KeyCode::Char('W') | KeyCode::Char('z') | KeyCode::Char('Z') => {
            Change::rotate_ccw()
        }

        // Restart
        KeyCode::Char('r') | KeyCode::Char('R') => return Some(Action::restart()),

        _ => return None,
    };
    Some(Action::Move(Some(change)))
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    fn mapped(code: KeyCode) -> Option<Action> {
        handle_key_event(KeyEvent::from(code))
    }

    #[test]
    fn test_movement_keys() {
        let left = Some(Action::Move(Some(Change::left())));
        let right = Some(Action::Move(Some(Change::right())));
        let down = Some(Action::Move(Some(Change::down())));

        assert_eq!(mapped(KeyCode::Left), left);
        assert_eq!(mapped(KeyCode::Char('A')), left);
        assert_eq!(mapped(KeyCode::Char('h')), left);
        assert_eq!(mapped(KeyCode::Right), right);
        assert_eq!(mapped(KeyCode::Char('d')), right);
        assert_eq!(mapped(KeyCode::Down), down);
        assert_eq!(mapped(KeyCode::Char('S')), down);
    }

    #[test]
    fn test_rotation_keys() {
        let cw = Some(Action::Move(Some(Change::rotate_cw())));
        let ccw = Some(Action::Move(Some(Change::rotate_ccw())));

        assert_eq!(mapped(KeyCode::Char('e')), cw);
        assert_eq!(mapped(KeyCode::Up), cw);
        assert_eq!(mapped(KeyCode::Char('W')), ccw);
        assert_eq!(mapped(KeyCode::Char('z')), ccw);
    }

    #[test]
    fn test_restart_and_unmapped_keys() {
        assert_eq!(mapped(KeyCode::Char('r')), Some(Action::restart()));
        assert_eq!(mapped(KeyCode::Char(' ')), None);
        assert_eq!(mapped(KeyCode::Char('p')), None);
    }

    #[test]
    fn test_quit_keys() {
        assert!(should_quit(KeyEvent::from(KeyCode::Char('q'))));
        assert!(should_quit(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('x'))));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('c'))));
    }
}
