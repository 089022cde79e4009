//! Key mapping from terminal events to game actions.

use crate::types::{Axis, GameAction};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

fn rotate(axis: Axis, clockwise: bool) -> Option<GameAction> {
    Some(GameAction::Rotate { axis, clockwise })
}

/// Map keyboard input to game actions.
///
/// Letter bindings are case-insensitive. Key releases are ignored on
/// terminals that report them.
pub fn map_key(key: KeyEvent) -> Option<GameAction> {
    if key.kind == KeyEventKind::Release {
        return None;
    }

    match key.code {
        // Movement
        KeyCode::Left => Some(GameAction::MoveX(-1)),
        KeyCode::Right => Some(GameAction::MoveX(1)),
        KeyCode::Up => Some(GameAction::MoveZ(-1)),
        KeyCode::Down => Some(GameAction::MoveZ(1)),

        // Rotation: pitch, yaw, roll
        KeyCode::Char('w') | KeyCode::Char('W') => rotate(Axis::X, true),
        KeyCode::Char('s') | KeyCode::Char('S') => rotate(Axis::X, false),
        KeyCode::Char('d') | KeyCode::Char('D') => rotate(Axis::Y, true),
        KeyCode::Char('a') | KeyCode::Char('A') => rotate(Axis::Y, false),
        KeyCode::Char('e') | KeyCode::Char('E') => rotate(Axis::Z, true),
        KeyCode::Char('q') | KeyCode::Char('Q') => rotate(Axis::Z, false),

        // Actions
        KeyCode::Char(' ') => Some(GameAction::HardDrop),
        KeyCode::Char('c') | KeyCode::Char('C') if !is_ctrl(key) => Some(GameAction::Hold),

        // Lifecycle
        KeyCode::Enter => Some(GameAction::Start),
        KeyCode::Char('p') | KeyCode::Char('P') | KeyCode::Esc => Some(GameAction::TogglePause),
        KeyCode::Char('m') | KeyCode::Char('M') => Some(GameAction::ToggleMute),
        KeyCode::Char('b') | KeyCode::Char('B') => Some(GameAction::Menu),

        _ => None,
    }
}

fn is_ctrl(key: KeyEvent) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL)
}

/// Check if key should quit the game.
///
/// Only Ctrl-C: `q` is bound to a rotation.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('c') | KeyCode::Char('C')) && is_ctrl(key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyEventState, KeyModifiers};

    #[test]
    fn test_movement_keys() {
        assert_eq!(
            map_key(KeyEvent::from(KeyCode::Left)),
            Some(GameAction::MoveX(-1))
        );
        assert_eq!(
            map_key(KeyEvent::from(KeyCode::Right)),
            Some(GameAction::MoveX(1))
        );
        assert_eq!(
            map_key(KeyEvent::from(KeyCode::Up)),
            Some(GameAction::MoveZ(-1))
        );
        assert_eq!(
            map_key(KeyEvent::from(KeyCode::Down)),
            Some(GameAction::MoveZ(1))
        );
    }

    #[test]
    fn test_rotation_keys() {
        let cases = [
            ('w', Axis::X, true),
            ('s', Axis::X, false),
            ('d', Axis::Y, true),
            ('a', Axis::Y, false),
            ('e', Axis::Z, true),
            ('q', Axis::Z, false),
        ];
        for (ch, axis, clockwise) in cases {
            let expected = Some(GameAction::Rotate { axis, clockwise });
            assert_eq!(map_key(KeyEvent::from(KeyCode::Char(ch))), expected);
            assert_eq!(
                map_key(KeyEvent::from(KeyCode::Char(ch.to_ascii_uppercase()))),
                expected
            );
        }
    }

    #[test]
    fn test_action_keys() {
        assert_eq!(
            map_key(KeyEvent::from(KeyCode::Char(' '))),
            Some(GameAction::HardDrop)
        );
        assert_eq!(
            map_key(KeyEvent::from(KeyCode::Char('c'))),
            Some(GameAction::Hold)
        );
        assert_eq!(
            map_key(KeyEvent::from(KeyCode::Char('p'))),
            Some(GameAction::TogglePause)
        );
        assert_eq!(
            map_key(KeyEvent::from(KeyCode::Esc)),
            Some(GameAction::TogglePause)
        );
        assert_eq!(
            map_key(KeyEvent::from(KeyCode::Enter)),
            Some(GameAction::Start)
        );
        assert_eq!(
            map_key(KeyEvent::from(KeyCode::Char('m'))),
            Some(GameAction::ToggleMute)
        );
        assert_eq!(
            map_key(KeyEvent::from(KeyCode::Char('b'))),
            Some(GameAction::Menu)
        );
        assert_eq!(map_key(KeyEvent::from(KeyCode::Char('x'))), None);
    }

    #[test]
    fn test_release_is_ignored() {
        let release = KeyEvent {
            code: KeyCode::Left,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        assert_eq!(map_key(release), None);
    }

    #[test]
    fn test_quit_keys() {
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert!(should_quit(ctrl_c));
        assert_eq!(map_key(ctrl_c), None);
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('q'))));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('c'))));
    }
}
