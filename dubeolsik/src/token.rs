//! Key tokens for the typing driver.
//!
//! A token names one key press: a letter (`r`, uppercase `R` means Shift+r),
//! `;`/`:`, a named key (`bs`, `enter`, `esc`, `space`, `tab`, `left`, ...),
//! optionally prefixed by modifiers (`ctrl+e`, `ctrl+shift+space`). `toggle`
//! and `layout` are shorthands for the default toggle keys.

use anyhow::{bail, Context};
use hangeul_core::{Key, KeyEvent, Modifiers};

fn named_key(name: &str) -> Option<Key> {
    let key = match name {
        "bs" | "backspace" => Key::Backspace,
        "enter" | "ret" => Key::Enter,
        "esc" | "escape" => Key::Escape,
        "space" => Key::Space,
        "tab" => Key::Tab,
        "left" => Key::Left,
        "right" => Key::Right,
        "up" => Key::Up,
        "down" => Key::Down,
        "home" => Key::Home,
        "end" => Key::End,
        "del" | "delete" => Key::Delete,
        "shift" => Key::Shift,
        "caps" | "capslock" => Key::CapsLock,
        "hangul" => Key::Hangul,
        "ralt" | "rightalt" => Key::RightAlt,
        _ => return None,
    };
    Some(key)
}

fn base_event(token: &str) -> anyhow::Result<KeyEvent> {
    let mut chars = token.chars();
    if let (Some(ch), None) = (chars.next(), chars.next()) {
        return match ch {
            ':' => Ok(KeyEvent::shifted(Key::Semicolon)),
            ch => KeyEvent::from_char(ch).with_context(|| format!("no key types {ch:?}")),
        };
    }
    match token {
        "toggle" => Ok(KeyEvent::new(Key::Hangul)),
        "layout" => Ok(KeyEvent::with_modifiers(
            Key::Space,
            Modifiers {
                ctrl: true,
                shift: true,
                ..Modifiers::NONE
            },
        )),
        name => named_key(&name.to_ascii_lowercase())
            .map(KeyEvent::new)
            .with_context(|| format!("unknown key name {name:?}")),
    }
}

/// Parse one token into a key event.
pub fn parse_key_token(token: &str) -> anyhow::Result<KeyEvent> {
    let mut parts: Vec<&str> = token.split('+').collect();
    // "ctrl++" style tokens are not supported; a trailing '+' is an error.
    let last = match parts.pop() {
        Some(last) if !last.is_empty() => last,
        _ => bail!("empty key in token {token:?}"),
    };

    let mut event = base_event(last)?;
    for modifier in parts {
        match modifier.to_ascii_lowercase().as_str() {
            "ctrl" | "control" => event.modifiers.ctrl = true,
            "alt" => event.modifiers.alt = true,
            "shift" => event.modifiers.shift = true,
            "meta" | "super" | "win" => event.modifiers.meta = true,
            other => bail!("unknown modifier {other:?} in token {token:?}"),
        }
    }
    Ok(event)
}

/// Parse a whitespace-separated line of tokens.
pub fn parse_key_line(line: &str) -> anyhow::Result<Vec<KeyEvent>> {
    line.split_whitespace().map(parse_key_token).collect()
}
