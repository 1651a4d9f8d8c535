use super::command::Command;
use crate::editing::Motion;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

pub struct KeyHandler;

impl KeyHandler {
    pub fn parse_key(key_event: &KeyEvent) -> Option<Command> {
        let key = key_event.code;
        let modifiers = key_event.modifiers;

        // Cmd on macOS, Ctrl elsewhere
        if modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::SUPER) {
            return Self::parse_shortcut(key, modifiers);
        }

        let extend = modifiers.contains(KeyModifiers::SHIFT);
        match key {
            KeyCode::Enter => Some(Command::Enter),
            KeyCode::Backspace => Some(Command::DeleteBackward),
            KeyCode::Delete => Some(Command::DeleteForward),
            KeyCode::Tab if extend => Some(Command::Outdent),
            KeyCode::Tab => Some(Command::Indent),
            KeyCode::BackTab => Some(Command::Outdent),
            KeyCode::Char(c) => Some(Command::InsertChar(c)),
            _ => Self::parse_motion(key).map(|motion| {
                if extend {
                    Command::Extend(motion)
                } else {
                    Command::Move(motion)
                }
            }),
        }
    }

    fn parse_shortcut(key: KeyCode, modifiers: KeyModifiers) -> Option<Command> {
        let KeyCode::Char(c) = key else {
            return None;
        };
        let shift = modifiers.contains(KeyModifiers::SHIFT) || c.is_ascii_uppercase();

        match c.to_ascii_lowercase() {
            'b' => Some(Command::ToggleBold),
            'c' => Some(Command::Copy),
            'x' => Some(Command::Cut),
            'v' => Some(Command::Paste),
            'a' => Some(Command::SelectAll),
            'z' if shift => Some(Command::Redo),
            'z' => Some(Command::Undo),
            'y' => Some(Command::Redo),
            _ => None,
        }
    }

    fn parse_motion(key: KeyCode) -> Option<Motion> {
        match key {
            KeyCode::Left => Some(Motion::Left),
            KeyCode::Right => Some(Motion::Right),
            KeyCode::Up => Some(Motion::Up),
            KeyCode::Down => Some(Motion::Down),
            KeyCode::Home => Some(Motion::LineStart),
            KeyCode::End => Some(Motion::LineEnd),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode, modifiers: KeyModifiers) -> Option<Command> {
        KeyHandler::parse_key(&KeyEvent::new(code, modifiers))
    }

    #[test]
    fn test_plain_keys() {
        assert_eq!(key(KeyCode::Char('a'), KeyModifiers::NONE), Some(Command::InsertChar('a')));
        assert_eq!(key(KeyCode::Char('A'), KeyModifiers::SHIFT), Some(Command::InsertChar('A')));
        assert_eq!(key(KeyCode::Enter, KeyModifiers::NONE), Some(Command::Enter));
        assert_eq!(key(KeyCode::Backspace, KeyModifiers::NONE), Some(Command::DeleteBackward));
        assert_eq!(key(KeyCode::Delete, KeyModifiers::NONE), Some(Command::DeleteForward));
        assert_eq!(key(KeyCode::Esc, KeyModifiers::NONE), None);
    }

    #[test]
    fn test_tab_and_shift_tab() {
        assert_eq!(key(KeyCode::Tab, KeyModifiers::NONE), Some(Command::Indent));
        assert_eq!(key(KeyCode::Tab, KeyModifiers::SHIFT), Some(Command::Outdent));
        assert_eq!(key(KeyCode::BackTab, KeyModifiers::SHIFT), Some(Command::Outdent));
    }

    #[test]
    fn test_shortcuts_with_ctrl_or_cmd() {
        for modifier in [KeyModifiers::CONTROL, KeyModifiers::SUPER] {
            assert_eq!(key(KeyCode::Char('b'), modifier), Some(Command::ToggleBold));
            assert_eq!(key(KeyCode::Char('c'), modifier), Some(Command::Copy));
            assert_eq!(key(KeyCode::Char('x'), modifier), Some(Command::Cut));
            assert_eq!(key(KeyCode::Char('v'), modifier), Some(Command::Paste));
            assert_eq!(key(KeyCode::Char('a'), modifier), Some(Command::SelectAll));
            assert_eq!(key(KeyCode::Char('z'), modifier), Some(Command::Undo));
            assert_eq!(key(KeyCode::Char('q'), modifier), None);
        }
    }

    #[test]
    fn test_redo_bindings() {
        let ctrl_shift = KeyModifiers::CONTROL | KeyModifiers::SHIFT;
        assert_eq!(key(KeyCode::Char('Z'), ctrl_shift), Some(Command::Redo));
        assert_eq!(key(KeyCode::Char('z'), ctrl_shift), Some(Command::Redo));
        assert_eq!(key(KeyCode::Char('y'), KeyModifiers::CONTROL), Some(Command::Redo));
    }

    #[test]
    fn test_arrows_move_or_extend() {
        assert_eq!(key(KeyCode::Left, KeyModifiers::NONE), Some(Command::Move(Motion::Left)));
        assert_eq!(key(KeyCode::Down, KeyModifiers::SHIFT), Some(Command::Extend(Motion::Down)));
        assert_eq!(key(KeyCode::Home, KeyModifiers::NONE), Some(Command::Move(Motion::LineStart)));
        assert_eq!(key(KeyCode::End, KeyModifiers::SHIFT), Some(Command::Extend(Motion::LineEnd)));
    }
}
