//! Text surfaces that receive edit commands.
//!
//! `TextSurface` is the seam to the host editor. `TextBuffer` is an in-memory
//! implementation used by the command-line driver and the tests: it holds the
//! document text, a caret, and at most one composition range.

use crate::composition::EditCommand;
use std::ops::Range;
use tracing::warn;

/// Anything that can apply edit commands in order.
pub trait TextSurface {
    fn apply(&mut self, command: &EditCommand);

    fn apply_all(&mut self, commands: &[EditCommand]) {
        for command in commands {
            self.apply(command);
        }
    }
}

/// In-memory document with caret and composition tracking.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextBuffer {
    text: String,
    caret: usize, // Byte offset
    composition: Option<Range<usize>>,
}

impl TextBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Buffer pre-filled with `text`, caret at the end.
    pub fn with_text(text: &str) -> Self {
        Self {
            text: text.to_string(),
            caret: text.len(),
            composition: None,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Caret position (byte offset).
    pub fn caret(&self) -> usize {
        self.caret
    }

    pub fn is_composing(&self) -> bool {
        self.composition.is_some()
    }

    /// Text inside the open composition region, if any.
    pub fn composing_text(&self) -> Option<&str> {
        self.composition.clone().map(|range| &self.text[range])
    }

    /// Insert a character typed while no composition is open.
    pub fn insert_char(&mut self, ch: char) {
        self.finish_composition();
        self.text.insert(self.caret, ch);
        self.caret += ch.len_utf8();
    }

    /// Delete the character before the caret. Returns true if one was deleted.
    pub fn delete_before(&mut self) -> bool {
        self.finish_composition();
        match self.text[..self.caret].chars().next_back() {
            Some(ch) => {
                self.caret -= ch.len_utf8();
                self.text.remove(self.caret);
                true
            }
            None => false,
        }
    }

    /// Move the caret one character left.
    pub fn move_left(&mut self) -> bool {
        self.finish_composition();
        match self.text[..self.caret].chars().next_back() {
            Some(ch) => {
                self.caret -= ch.len_utf8();
                true
            }
            None => false,
        }
    }

    /// Move the caret one character right.
    pub fn move_right(&mut self) -> bool {
        self.finish_composition();
        match self.text[self.caret..].chars().next() {
            Some(ch) => {
                self.caret += ch.len_utf8();
                true
            }
            None => false,
        }
    }

    pub fn move_to_start(&mut self) {
        self.finish_composition();
        self.caret = 0;
    }

    pub fn move_to_end(&mut self) {
        self.finish_composition();
        self.caret = self.text.len();
    }

    // Host-side edits finalise whatever is composing, as a real editor would.
    fn finish_composition(&mut self) {
        if self.composition.take().is_some() {
            warn!("host edit while composing; finalising composition");
        }
    }
}

impl TextSurface for TextBuffer {
    fn apply(&mut self, command: &EditCommand) {
        match command {
            EditCommand::BeginComposition => {
                if self.composition.is_some() {
                    warn!("begin_composition while a composition is open; ignored");
                } else {
                    self.composition = Some(self.caret..self.caret);
                }
            }
            EditCommand::SetComposingText(text) => match self.composition.clone() {
                Some(range) => {
                    let start = range.start;
                    self.text.replace_range(range, text);
                    let end = start + text.len();
                    self.composition = Some(start..end);
                    self.caret = end;
                }
                None => warn!(%text, "set_composing_text without an open composition; ignored"),
            },
            EditCommand::MoveCursorToCompositionEnd => match &self.composition {
                Some(range) => self.caret = range.end,
                None => warn!("move_cursor_to_composition_end without an open composition; ignored"),
            },
            EditCommand::EndComposition => {
                if self.composition.take().is_none() {
                    warn!("end_composition without an open composition; ignored");
                }
            }
            EditCommand::InsertCommittedText(text) => {
                self.finish_composition();
                self.text.insert_str(self.caret, text);
                self.caret += text.len();
            }
        }
    }
}

/// Surface that only records what it receives.
#[derive(Debug, Clone, Default)]
pub struct CommandLog {
    pub commands: Vec<EditCommand>,
}

impl TextSurface for CommandLog {
    fn apply(&mut self, command: &EditCommand) {
        self.commands.push(command.clone());
    }
}
