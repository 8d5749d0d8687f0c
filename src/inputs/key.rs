// inputs/key.rs

use std::fmt::{self, Display, Formatter};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Represents a key, independently of the terminal backend.
#[derive(PartialEq, Eq, Clone, Copy, Hash, Debug)]
pub enum Key {
    Char(char),
    Ctrl(char),
    Down,
    Enter,
    Esc,
    Left,
    Right,
    Tab,
    Unknown,
    Up,
}

impl Display for Key {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match *self {
            Key::Char(' ') => write!(f, "<Space>"),
            Key::Char(c) => write!(f, "<{}>", c),
            Key::Ctrl(c) => write!(f, "<Ctrl+{}>", c),
            _ => write!(f, "<{:?}>", self),
        }
    }
}

// convert backend KeyEvent to this crate's Key
impl From<KeyEvent> for Key {
    fn from(key_event: KeyEvent) -> Self {
        match key_event.code {
            KeyCode::Down => Key::Down,
            KeyCode::Enter => Key::Enter,
            KeyCode::Esc => Key::Esc,
            KeyCode::Left => Key::Left,
            KeyCode::Right => Key::Right,
            KeyCode::Tab => Key::Tab,
            KeyCode::Up => Key::Up,
            KeyCode::Char(c) if key_event.modifiers.contains(KeyModifiers::CONTROL) => Key::Ctrl(c),
            KeyCode::Char(c) => Key::Char(c),
            _ => Key::Unknown,
        }
    }
}
