//! Input method engine: key routing, mode flags and one input session.
//!
//! `ImeEngine` is what a host talks to. It receives raw key events, asks the
//! routing policy what to do, drives the `InputSession`, and returns the edit
//! commands plus whether the key was eaten. Concrete layouts plug in through
//! the `KeyLayout` type parameter.

use crate::composition::EditCommand;
use crate::keys::{Key, KeyEvent};
use crate::layout::KeyLayout;
use crate::routing::{route_key, KeyAction, RouteState};
use crate::session::InputSession;
use crate::Config;
use tracing::{debug, info};

/// Result of processing a key event.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyOutcome {
    /// The host must not handle the key itself.
    pub eaten: bool,
    /// Commands to apply to the focused surface, in order.
    pub commands: Vec<EditCommand>,
    /// A key the host should deliver as if typed, after the commands.
    pub reinject: Option<KeyEvent>,
}

impl KeyOutcome {
    fn eaten(commands: Vec<EditCommand>) -> Self {
        Self {
            eaten: true,
            commands,
            reinject: None,
        }
    }

    fn passed(commands: Vec<EditCommand>) -> Self {
        Self {
            eaten: false,
            commands,
            reinject: None,
        }
    }
}

/// Input method engine for one focused text field.
pub struct ImeEngine<L: KeyLayout> {
    config: Config,
    layout: L,
    session: InputSession,
    korean: bool,
    layout_remap: bool,
    caps_lock: bool,
    pending_remap: Option<Key>,
}

impl<L: KeyLayout> ImeEngine<L> {
    pub fn new(layout: L, config: Config) -> Self {
        let korean = config.start_in_korean;
        let layout_remap = config.layout_remap;
        Self {
            config,
            layout,
            session: InputSession::new(),
            korean,
            layout_remap,
            caps_lock: false,
            pending_remap: None,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn layout(&self) -> &L {
        &self.layout
    }

    pub fn session(&self) -> &InputSession {
        &self.session
    }

    pub fn is_korean(&self) -> bool {
        self.korean
    }

    pub fn is_layout_remap(&self) -> bool {
        self.layout_remap
    }

    pub fn is_caps_lock(&self) -> bool {
        self.caps_lock
    }

    fn route_state(&self) -> RouteState {
        RouteState {
            korean: self.korean,
            layout_remap: self.layout_remap,
            composing: self.session.is_composing(),
            pending_remap: self.pending_remap,
        }
    }

    /// Process one key press.
    pub fn process_key(&mut self, event: KeyEvent) -> KeyOutcome {
        let action = route_key(&self.route_state(), &self.config, &self.layout, &event);
        if self.pending_remap == Some(event.key) {
            self.pending_remap = None;
        }

        match action {
            KeyAction::Ignore => KeyOutcome::passed(self.session.flush().commands),
            KeyAction::Absorb => KeyOutcome::eaten(Vec::new()),
            KeyAction::Classify => self.classify(event),
            KeyAction::Backspace => {
                if self.session.is_composing() {
                    KeyOutcome::eaten(self.session.backspace().commands)
                } else if event.key == Key::CapsLock {
                    KeyOutcome {
                        eaten: true,
                        commands: Vec::new(),
                        reinject: Some(KeyEvent::new(Key::Backspace)),
                    }
                } else {
                    KeyOutcome::passed(Vec::new())
                }
            }
            KeyAction::FlushOnControlKey { reinject } => KeyOutcome {
                eaten: true,
                commands: self.session.flush().commands,
                reinject: reinject.then_some(event),
            },
            KeyAction::ToggleLanguageMode => KeyOutcome::eaten(self.toggle_language()),
            KeyAction::ToggleLayoutMode => KeyOutcome::eaten(self.toggle_layout()),
            KeyAction::ToggleCapsLock => {
                self.caps_lock = !self.caps_lock;
                debug!(caps_lock = self.caps_lock, "caps state");
                KeyOutcome::eaten(Vec::new())
            }
            KeyAction::RemapShortcut(remapped) => {
                self.pending_remap = Some(remapped);
                KeyOutcome {
                    eaten: true,
                    commands: self.session.flush().commands,
                    reinject: Some(KeyEvent::with_modifiers(remapped, event.modifiers)),
                }
            }
        }
    }

    fn classify(&mut self, event: KeyEvent) -> KeyOutcome {
        if self.korean {
            if let Some(jamo) = self
                .layout
                .classify(event.key, event.shift(), self.layout_remap)
            {
                return KeyOutcome::eaten(self.session.process(jamo).commands);
            }
        }

        // Only letters fall back to the Latin remap from Korean mode.
        if !self.layout_remap || (self.korean && !matches!(event.key, Key::Letter(_))) {
            return KeyOutcome::passed(self.session.flush().commands);
        }

        let shift = match event.key {
            Key::Letter(_) | Key::Semicolon => event.shift() ^ self.caps_lock,
            _ => event.shift(),
        };
        match self.layout.remap_char(event.key, shift) {
            Some(ch) => KeyOutcome::eaten(self.session.insert(ch).commands),
            None => KeyOutcome::passed(self.session.flush().commands),
        }
    }

    /// Switch between Korean and Latin input, committing any composition.
    pub fn toggle_language(&mut self) -> Vec<EditCommand> {
        let commands = self.session.flush().commands;
        self.korean = !self.korean;
        info!(korean = self.korean, "language mode");
        commands
    }

    /// Switch the Latin layout remap on or off, committing any composition.
    pub fn toggle_layout(&mut self) -> Vec<EditCommand> {
        let commands = self.session.flush().commands;
        self.layout_remap = !self.layout_remap;
        info!(layout = self.layout.name(), remap = self.layout_remap, "layout mode");
        commands
    }

    /// Commit whatever is composing.
    pub fn flush(&mut self) -> Vec<EditCommand> {
        self.session.flush().commands
    }

    /// Drop the composition and remove its text from the surface.
    pub fn cancel(&mut self) -> Vec<EditCommand> {
        self.session.cancel().commands
    }

    /// The field lost focus; the host owns whatever was composed.
    pub fn focus_lost(&mut self) {
        self.session.composition_terminated();
        self.pending_remap = None;
    }

    /// The host ended the composition region on its own.
    pub fn composition_terminated(&mut self) {
        self.session.composition_terminated();
    }
}
