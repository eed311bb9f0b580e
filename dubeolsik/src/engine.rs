//! Dubeolsik engine construction and an in-memory typing driver.
//!
//! `Typist` plays the host: it feeds key events to the engine, applies the
//! returned commands to a `TextBuffer`, performs the default action for keys
//! the engine does not eat, and re-delivers reinjected keys.

use crate::config::DubeolsikConfig;
use crate::layout::DubeolsikLayout;
use hangeul_core::{EditCommand, ImeEngine, Key, KeyEvent, TextBuffer, TextSurface};
use tracing::{trace, warn};

pub type DubeolsikEngine = ImeEngine<DubeolsikLayout>;

/// Build an engine for the Dubeolsik layout from its config.
pub fn create_ime_engine(config: &DubeolsikConfig) -> DubeolsikEngine {
    ImeEngine::new(
        DubeolsikLayout::new(config.semicolon_swap),
        config.base().clone(),
    )
}

// A reinjected key is re-delivered at most this many times per press.
const MAX_REINJECT: usize = 4;

/// Host-side default action for a key nobody claimed.
fn host_key(buffer: &mut TextBuffer, event: &KeyEvent) {
    if event.modifiers.is_shortcut() {
        return;
    }
    match event.key {
        Key::Letter(c) if event.shift() => buffer.insert_char(c.to_ascii_uppercase()),
        Key::Letter(c) => buffer.insert_char(c),
        Key::Semicolon => buffer.insert_char(if event.shift() { ':' } else { ';' }),
        Key::Space => buffer.insert_char(' '),
        Key::Enter => buffer.insert_char('\n'),
        Key::Tab => buffer.insert_char('\t'),
        Key::Backspace => {
            buffer.delete_before();
        }
        Key::Left => {
            buffer.move_left();
        }
        Key::Right => {
            buffer.move_right();
        }
        Key::Home | Key::Up => buffer.move_to_start(),
        Key::End | Key::Down => buffer.move_to_end(),
        _ => {}
    }
}

/// Engine plus the text buffer it types into.
pub struct Typist {
    engine: DubeolsikEngine,
    buffer: TextBuffer,
}

impl Typist {
    pub fn new(config: &DubeolsikConfig) -> Self {
        Self {
            engine: create_ime_engine(config),
            buffer: TextBuffer::new(),
        }
    }

    pub fn engine(&self) -> &DubeolsikEngine {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut DubeolsikEngine {
        &mut self.engine
    }

    pub fn buffer(&self) -> &TextBuffer {
        &self.buffer
    }

    pub fn text(&self) -> &str {
        self.buffer.text()
    }

    /// Deliver one key press, returning every command applied for it.
    pub fn press(&mut self, event: KeyEvent) -> Vec<EditCommand> {
        let mut applied = Vec::new();
        let mut next = Some(event);
        let mut deliveries = 0;

        while let Some(event) = next.take() {
            if deliveries > MAX_REINJECT {
                warn!(?event, "dropping reinjected key");
                break;
            }
            deliveries += 1;

            let outcome = self.engine.process_key(event);
            trace!(?event, eaten = outcome.eaten, "key");
            self.buffer.apply_all(&outcome.commands);
            applied.extend(outcome.commands);
            if !outcome.eaten {
                host_key(&mut self.buffer, &event);
            }
            next = outcome.reinject;
        }
        applied
    }

    pub fn press_all<I: IntoIterator<Item = KeyEvent>>(&mut self, events: I) -> Vec<EditCommand> {
        events.into_iter().flat_map(|event| self.press(event)).collect()
    }

    /// Type an ASCII string key by key on a QWERTY board.
    pub fn type_str(&mut self, keys: &str) -> Vec<EditCommand> {
        let events: Vec<KeyEvent> = keys.chars().filter_map(KeyEvent::from_char).collect();
        self.press_all(events)
    }

    /// The field lost focus: the host finalises its composition region and
    /// the engine forgets its syllable.
    pub fn focus_lost(&mut self) {
        self.engine.focus_lost();
        if self.buffer.is_composing() {
            self.buffer.apply(&EditCommand::EndComposition);
        }
    }

    /// Commit any composition through the engine.
    pub fn finish(&mut self) -> Vec<EditCommand> {
        let commands = self.engine.flush();
        self.buffer.apply_all(&commands);
        commands
    }
}
