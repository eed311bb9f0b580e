//! Key routing policy.
//!
//! Decides, per key press, whether this input method claims the key and what
//! it does with it. The decision depends only on the mode flags, the layout
//! and the event; the engine carries the action out.

use crate::keys::{Key, KeyEvent};
use crate::layout::KeyLayout;
use crate::Config;
use tracing::debug;

/// What to do with one key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Not claimed; the host handles the key.
    Ignore,
    /// Classify into a jamo (Korean) or remap (Latin).
    Classify,
    /// Undo the last jamo.
    Backspace,
    /// Commit the composition. With `reinject` the original key is delivered
    /// to the host afterwards; without it the key is swallowed.
    FlushOnControlKey { reinject: bool },
    ToggleLanguageMode,
    ToggleLayoutMode,
    /// Flip the internal caps state used on the Latin remap path.
    ToggleCapsLock,
    /// Swallow the key and deliver the remapped shortcut key instead.
    RemapShortcut(Key),
    /// Swallow the key with no other effect.
    Absorb,
}

/// Mode flags the routing decision depends on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RouteState {
    pub korean: bool,
    pub layout_remap: bool,
    pub composing: bool,
    /// A remapped shortcut key was re-delivered and must not be remapped again.
    pub pending_remap: Option<Key>,
}

pub fn route_key<L: KeyLayout + ?Sized>(
    state: &RouteState,
    config: &Config,
    layout: &L,
    event: &KeyEvent,
) -> KeyAction {
    let action = decide(state, config, layout, event);
    debug!(layout = layout.name(), ?event, ?action, "route");
    action
}

fn decide<L: KeyLayout + ?Sized>(
    state: &RouteState,
    config: &Config,
    layout: &L,
    event: &KeyEvent,
) -> KeyAction {
    let key = event.key;

    if config.language_toggle.iter().any(|b| b.matches(event)) {
        return KeyAction::ToggleLanguageMode;
    }
    if config.layout_toggle.iter().any(|b| b.matches(event)) {
        return KeyAction::ToggleLayoutMode;
    }

    if event.modifiers.is_shortcut() {
        if state.pending_remap == Some(key) || !state.layout_remap {
            return KeyAction::Ignore;
        }
        let remapped = layout.remap_key(key);
        return if remapped != key {
            KeyAction::RemapShortcut(remapped)
        } else {
            KeyAction::Ignore
        };
    }

    if !state.korean && !state.layout_remap {
        return KeyAction::Ignore;
    }

    if key == Key::CapsLock && config.caps_lock_as_backspace {
        return if event.shift() {
            KeyAction::ToggleCapsLock
        } else {
            KeyAction::Backspace
        };
    }

    if layout.is_letter_key(key, state.korean, state.layout_remap) {
        return KeyAction::Classify;
    }

    if !state.composing {
        return KeyAction::Ignore;
    }

    match key {
        Key::Backspace => KeyAction::Backspace,
        Key::Shift => KeyAction::Absorb,
        Key::Escape => KeyAction::FlushOnControlKey { reinject: false },
        Key::Enter => KeyAction::FlushOnControlKey { reinject: true },
        k if k.is_navigation() => KeyAction::FlushOnControlKey { reinject: true },
        _ => KeyAction::Ignore,
    }
}
