//! Translation of composer results into text-surface edit commands.
//!
//! The text surface knows nothing about jamo: it only sees an ordered list of
//! `EditCommand`s per key. The translator is a pure function of a result and
//! whether a composition is currently open; `CompositionTracker` keeps that
//! flag in step with the commands actually emitted, so at most one composition
//! is ever open on a surface.

use crate::result::{Committed, CompositionResult};
use serde::Serialize;
use tracing::trace;

/// The whole command vocabulary understood by a text surface.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "command", content = "text", rename_all = "snake_case")]
pub enum EditCommand {
    /// Open a composition region at the caret.
    BeginComposition,
    /// Replace the entire open composition region.
    SetComposingText(String),
    /// Move the caret to the end of the open composition region.
    MoveCursorToCompositionEnd,
    /// Finalise the open composition region into ordinary text.
    EndComposition,
    /// Insert finished text at the caret, outside any composition.
    InsertCommittedText(String),
}

fn commit_commands(committed: &Committed, open: bool, out: &mut Vec<EditCommand>) {
    if open {
        out.push(EditCommand::SetComposingText(committed.to_string()));
        if !committed.is_empty() {
            out.push(EditCommand::MoveCursorToCompositionEnd);
        }
        out.push(EditCommand::EndComposition);
    } else if !committed.is_empty() {
        out.push(EditCommand::InsertCommittedText(committed.to_string()));
    }
}

/// Commands that apply `result` to a surface where a composition is `open`
/// (or not).
pub fn translate(result: &CompositionResult, open: bool) -> Vec<EditCommand> {
    let mut out = Vec::with_capacity(5);
    match result {
        CompositionResult::Composing(display) => {
            if !open {
                out.push(EditCommand::BeginComposition);
            }
            out.push(EditCommand::SetComposingText(display.to_string()));
        }
        CompositionResult::Commit { committed, display } => {
            commit_commands(committed, open, &mut out);
            out.push(EditCommand::BeginComposition);
            out.push(EditCommand::SetComposingText(display.to_string()));
        }
        CompositionResult::CommitFlush(committed) => commit_commands(committed, open, &mut out),
        CompositionResult::Pass => {}
    }
    out
}

/// Commands that insert a character produced outside the composer (the
/// Latin remap path). Any open composition is closed first.
pub fn translate_insert(ch: char, open: bool) -> Vec<EditCommand> {
    let mut out = Vec::with_capacity(2);
    if open {
        out.push(EditCommand::EndComposition);
    }
    out.push(EditCommand::InsertCommittedText(ch.to_string()));
    out
}

/// Tracks whether a composition is open on the surface, updated from the
/// commands each batch actually contains.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CompositionTracker {
    open: bool,
}

impl CompositionTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    fn record(&mut self, commands: &[EditCommand]) {
        for command in commands {
            match command {
                EditCommand::BeginComposition => self.open = true,
                EditCommand::EndComposition => self.open = false,
                _ => {}
            }
        }
        trace!(?commands, open = self.open, "edit commands");
    }

    /// Translate a composer result and advance the open flag.
    pub fn apply_result(&mut self, result: &CompositionResult) -> Vec<EditCommand> {
        let commands = translate(result, self.open);
        self.record(&commands);
        commands
    }

    /// Translate a direct insertion and advance the open flag.
    pub fn apply_insert(&mut self, ch: char) -> Vec<EditCommand> {
        let commands = translate_insert(ch, self.open);
        self.record(&commands);
        commands
    }

    /// The host ended the composition on its own (focus change, click).
    /// No commands are emitted: the region is already gone.
    pub fn terminated(&mut self) {
        self.open = false;
    }
}
