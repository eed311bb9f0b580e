//! Colemak remap for the Latin path.
//!
//! Maps a QWERTY physical key to the character Colemak puts there. Keys not
//! listed type themselves.

use hangeul_core::Key;
use phf::phf_map;

/// QWERTY key → Colemak character, lowercase.
pub static COLEMAK: phf::Map<char, char> = phf_map! {
    'e' => 'f',
    'r' => 'p',
    't' => 'g',
    'y' => 'j',
    'u' => 'l',
    'i' => 'u',
    'o' => 'y',
    'p' => ';',
    's' => 'r',
    'd' => 's',
    'f' => 't',
    'g' => 'd',
    'j' => 'n',
    'k' => 'e',
    'l' => 'i',
    ';' => 'o',
    'n' => 'k',
};

fn qwerty_char(key: Key) -> Option<char> {
    match key {
        Key::Letter(c) => Some(c),
        Key::Semicolon => Some(';'),
        _ => None,
    }
}

fn shifted(c: char) -> char {
    match c {
        ';' => ':',
        c => c.to_ascii_uppercase(),
    }
}

/// Character typed by `key` under Colemak.
pub fn remap_char(key: Key, shift: bool) -> Option<char> {
    let qwerty = qwerty_char(key)?;
    let colemak = COLEMAK.get(&qwerty).copied().unwrap_or(qwerty);
    Some(if shift { shifted(colemak) } else { colemak })
}

/// Key identity for shortcuts: physical E with Ctrl is Ctrl+F under Colemak.
pub fn remap_key(key: Key) -> Key {
    match qwerty_char(key).and_then(|c| COLEMAK.get(&c).copied()) {
        Some(';') => Key::Semicolon,
        Some(c) => Key::Letter(c),
        None => key,
    }
}
