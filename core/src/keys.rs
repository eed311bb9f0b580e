//! Physical keys and modifier state as delivered by the host.

use serde::{Deserialize, Serialize};

/// Physical key identity. Letters are stored lowercase; case comes from
/// `Modifiers::shift`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Key {
    /// A-Z, by physical position on a QWERTY board.
    Letter(char),
    Semicolon,
    Backspace,
    Enter,
    Escape,
    Tab,
    Space,
    Left,
    Right,
    Up,
    Down,
    Home,
    End,
    Delete,
    Shift,
    CapsLock,
    /// Dedicated Hangul/English key on Korean keyboards.
    Hangul,
    RightAlt,
    /// Any other key, by host virtual-key code.
    Other(u32),
}

impl Key {
    /// Letter key for an ASCII letter, either case.
    pub fn letter(ch: char) -> Option<Key> {
        ch.is_ascii_alphabetic()
            .then(|| Key::Letter(ch.to_ascii_lowercase()))
    }

    /// Arrows, Home/End, Tab and Delete: keys that move the caret away from
    /// an open composition.
    pub fn is_navigation(self) -> bool {
        matches!(
            self,
            Key::Left
                | Key::Right
                | Key::Up
                | Key::Down
                | Key::Home
                | Key::End
                | Key::Tab
                | Key::Delete
        )
    }
}

/// Modifier keys held while a key is pressed, not counting the key itself.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
    pub meta: bool,
}

impl Modifiers {
    pub const NONE: Modifiers = Modifiers {
        shift: false,
        ctrl: false,
        alt: false,
        meta: false,
    };

    pub const SHIFT: Modifiers = Modifiers {
        shift: true,
        ..Modifiers::NONE
    };

    pub const CTRL: Modifiers = Modifiers {
        ctrl: true,
        ..Modifiers::NONE
    };

    /// Ctrl, Alt or Meta held: the key is a shortcut, not text.
    pub fn is_shortcut(&self) -> bool {
        self.ctrl || self.alt || self.meta
    }
}

/// One key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct KeyEvent {
    pub key: Key,
    #[serde(default)]
    pub modifiers: Modifiers,
}

impl KeyEvent {
    pub fn new(key: Key) -> Self {
        Self {
            key,
            modifiers: Modifiers::NONE,
        }
    }

    pub fn with_modifiers(key: Key, modifiers: Modifiers) -> Self {
        Self { key, modifiers }
    }

    pub fn shifted(key: Key) -> Self {
        Self::with_modifiers(key, Modifiers::SHIFT)
    }

    /// Event for typing `ch` on a QWERTY board: uppercase implies Shift.
    pub fn from_char(ch: char) -> Option<Self> {
        match ch {
            ';' => Some(Self::new(Key::Semicolon)),
            ':' => Some(Self::shifted(Key::Semicolon)),
            ' ' => Some(Self::new(Key::Space)),
            c if c.is_ascii_uppercase() => Key::letter(c).map(Self::shifted),
            c => Key::letter(c).map(Self::new),
        }
    }

    pub fn shift(&self) -> bool {
        self.modifiers.shift
    }
}

/// A key plus the exact modifiers that must be held, for configurable toggles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct KeyBinding {
    pub key: Key,
    #[serde(flatten)]
    pub modifiers: Modifiers,
}

impl KeyBinding {
    pub fn new(key: Key, modifiers: Modifiers) -> Self {
        Self { key, modifiers }
    }

    pub fn matches(&self, event: &KeyEvent) -> bool {
        self.key == event.key && self.modifiers == event.modifiers
    }
}
