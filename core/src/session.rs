//! Per-field input session.
//!
//! An `InputSession` owns one `HangulComposer` and the `CompositionTracker` for
//! the text surface it writes to. Each operation runs the composer, translates
//! the result and returns both, so the host only has to apply the commands in
//! order. One session per focused editable field; sessions are never shared.

use crate::composer::{CompositionState, HangulComposer};
use crate::composition::{CompositionTracker, EditCommand};
use crate::jamo::JamoInput;
use crate::result::{Committed, CompositionResult};

/// What one session operation produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionStep {
    pub result: CompositionResult,
    pub commands: Vec<EditCommand>,
}

impl SessionStep {
    fn idle() -> Self {
        Self {
            result: CompositionResult::Pass,
            commands: Vec::new(),
        }
    }

    /// True when the composer consumed the input.
    pub fn consumed(&self) -> bool {
        !self.result.is_pass()
    }
}

/// Composer plus surface tracking for one text field.
#[derive(Debug, Clone, Default)]
pub struct InputSession {
    composer: HangulComposer,
    tracker: CompositionTracker,
}

impl InputSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn composer(&self) -> &HangulComposer {
        &self.composer
    }

    pub fn state(&self) -> CompositionState {
        self.composer.state()
    }

    /// A syllable is being composed.
    pub fn is_composing(&self) -> bool {
        !self.composer.is_empty()
    }

    /// A composition region is open on the surface.
    pub fn composition_open(&self) -> bool {
        self.tracker.is_open()
    }

    fn step(&mut self, result: CompositionResult) -> SessionStep {
        let commands = self.tracker.apply_result(&result);
        SessionStep { result, commands }
    }

    pub fn process(&mut self, input: JamoInput) -> SessionStep {
        let result = self.composer.process(input);
        self.step(result)
    }

    pub fn process_indices(&mut self, cho: i32, jung: i32) -> SessionStep {
        let result = self.composer.process_indices(cho, jung);
        self.step(result)
    }

    pub fn backspace(&mut self) -> SessionStep {
        let result = self.composer.backspace();
        self.step(result)
    }

    pub fn flush(&mut self) -> SessionStep {
        let result = self.composer.flush();
        self.step(result)
    }

    /// Insert a character that bypasses the composer, flushing first.
    pub fn insert(&mut self, ch: char) -> SessionStep {
        let mut step = self.flush();
        step.commands.extend(self.tracker.apply_insert(ch));
        step
    }

    /// Drop the composition and remove its text from the surface.
    pub fn cancel(&mut self) -> SessionStep {
        if !self.composition_open() {
            self.composer.reset();
            return SessionStep::idle();
        }
        self.composer.reset();
        self.step(CompositionResult::CommitFlush(Committed::empty()))
    }

    /// Forget the composition without touching the surface.
    pub fn reset(&mut self) {
        self.composer.reset();
    }

    /// The host closed the composition region itself (click, focus change).
    /// Whatever it held is already final text; nothing is emitted.
    pub fn composition_terminated(&mut self) {
        self.composer.reset();
        self.tracker.terminated();
    }
}
